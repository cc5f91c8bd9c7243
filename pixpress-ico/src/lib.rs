//! pixpress-ico: single-image ICO container encoder
//!
//! Writes a Windows icon container holding exactly one PNG-compressed RGBA
//! image. Modern icon readers (Windows Vista and later, browsers, most image
//! viewers) accept PNG payloads directly, so no BMP/AND-mask encoding is needed.
//!
//! **This is a container encoder only** - decoding, resampling and PNG
//! compression are delegated to the `image` crate.
//!
//! # Layout
//!
//! ```text
//! Header (6 bytes):
//!   0x00: reserved (u16 LE, 0)
//!   0x02: type (u16 LE, 1 = icon)
//!   0x04: count (u16 LE, 1)
//!
//! Directory entry (16 bytes):
//!   0x06: width (u8, 0 = 256)
//!   0x07: height (u8, 0 = 256)
//!   0x08: palette_count (u8, 0)
//!   0x09: reserved (u8, 0)
//!   0x0A: color_planes (u16 LE, 1)
//!   0x0C: bits_per_pixel (u16 LE, 32)
//!   0x0E: resource_size (u32 LE)
//!   0x12: resource_offset (u32 LE, 22)
//!
//! 0x16: PNG bytes (resource_size bytes)
//! ```
//!
//! # Usage
//!
//! ```
//! use image::{DynamicImage, RgbaImage};
//! use pixpress_ico::{encode_ico_to_vec, EncodeOptions, IconContainer};
//!
//! let img = DynamicImage::ImageRgba8(RgbaImage::new(16, 16));
//! let bytes = encode_ico_to_vec(&img, EncodeOptions::default()).unwrap();
//!
//! let ico = IconContainer::parse(&bytes).unwrap();
//! assert_eq!(ico.entry.width, 16);
//! assert_eq!(bytes.len(), 22 + ico.resource.len());
//! ```

mod container;
mod encode;
mod error;
mod resample;

pub use container::{IconContainer, IconDirEntry, IconDirHeader, directory_dimension};
pub use encode::{EncodeOptions, IcoSummary, encode_ico, encode_ico_to_vec};
pub use error::{IcoError, ParseError};
pub use resample::{downscale_dimensions, fit_within};

// =============================================================================
// Constants
// =============================================================================

/// Largest dimension a directory entry can describe (stored as 0)
pub const ICO_MAX_DIMENSION: u32 = 256;

/// Header size (reserved + type + count)
pub const ICO_HEADER_SIZE: usize = 6;

/// Directory entry size
pub const ICO_ENTRY_SIZE: usize = 16;

/// Offset of the first resource byte when a single entry is written
pub const ICO_RESOURCE_OFFSET: u32 = (ICO_HEADER_SIZE + ICO_ENTRY_SIZE) as u32;

/// Resource type discriminant for icons (cursors use 2)
pub const ICO_TYPE_ICON: u16 = 1;

/// Bits per pixel advertised for RGBA payloads
pub const ICO_BITS_PER_PIXEL: u16 = 32;
