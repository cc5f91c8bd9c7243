//! pixpress library
//!
//! Resize, recompress or ICO-convert a single image. The binary is a thin
//! clap front end over [`pipeline::run`].

pub mod encode;
pub mod options;
pub mod output;
pub mod pipeline;
pub mod resize;

pub use options::{Options, OptionsError};
pub use output::OutputCategory;
pub use pipeline::run;

// Re-export the container encoder for callers that already hold a decoded image
pub use pixpress_ico::{EncodeOptions, IcoSummary, encode_ico};
