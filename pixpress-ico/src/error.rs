//! Error types for encoding and reading icon containers

use std::io;

/// Errors that can occur while encoding an icon container
#[derive(Debug, thiserror::Error)]
pub enum IcoError {
    #[error("failed to encode PNG for ICO: {0}")]
    Encode(#[source] image::ImageError),

    #[error("embedded PNG is {0} bytes, larger than an ICO entry can describe")]
    ResourceTooLarge(usize),

    #[error("failed to write ICO {part}: {source}")]
    Write {
        part: &'static str,
        #[source]
        source: io::Error,
    },
}

impl IcoError {
    pub(crate) fn write(part: &'static str) -> impl FnOnce(io::Error) -> Self {
        move |source| IcoError::Write { part, source }
    }
}

/// Errors that can occur while reading an icon container
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("file too small for ICO header and directory entry ({0} bytes)")]
    TooShort(usize),

    #[error("reserved header field is not zero")]
    BadReserved,

    #[error("not an icon container (type {0})")]
    NotAnIcon(u16),

    #[error("unsupported image count {0} (only single-image containers are read)")]
    UnsupportedCount(u16),

    #[error("resource at offset {offset} with size {size} exceeds file length {len}")]
    ResourceOutOfBounds { offset: u32, size: u32, len: usize },
}
