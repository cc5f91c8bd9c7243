//! Icon container layout: header, directory entry and a single-entry reader

use crate::{
    ICO_BITS_PER_PIXEL, ICO_ENTRY_SIZE, ICO_HEADER_SIZE, ICO_MAX_DIMENSION, ICO_RESOURCE_OFFSET,
    ICO_TYPE_ICON, ParseError,
};

/// Encode a pixel dimension for a directory entry.
///
/// Anything at or above 256 is stored as 0, which readers interpret as 256.
/// This holds even for dimensions above 256 that were never downscaled.
pub fn directory_dimension(pixels: u32) -> u8 {
    if pixels >= ICO_MAX_DIMENSION {
        0
    } else {
        pixels as u8
    }
}

/// ICONDIR header (6 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct IconDirHeader {
    pub reserved: u16,
    pub kind: u16,
    pub count: u16,
}

impl IconDirHeader {
    pub const SIZE: usize = ICO_HEADER_SIZE;

    /// Header for an icon container with `count` images
    pub fn new(count: u16) -> Self {
        Self {
            reserved: 0,
            kind: ICO_TYPE_ICON,
            count,
        }
    }

    /// Write header to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..2].copy_from_slice(&self.reserved.to_le_bytes());
        bytes[2..4].copy_from_slice(&self.kind.to_le_bytes());
        bytes[4..6].copy_from_slice(&self.count.to_le_bytes());
        bytes
    }

    /// Read header from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            reserved: u16::from_le_bytes([bytes[0], bytes[1]]),
            kind: u16::from_le_bytes([bytes[2], bytes[3]]),
            count: u16::from_le_bytes([bytes[4], bytes[5]]),
        })
    }
}

/// ICONDIRENTRY (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct IconDirEntry {
    pub width: u8,
    pub height: u8,
    pub palette_count: u8,
    pub reserved: u8,
    pub color_planes: u16,
    pub bits_per_pixel: u16,
    pub size: u32,
    pub offset: u32,
}

impl IconDirEntry {
    pub const SIZE: usize = ICO_ENTRY_SIZE;

    /// Entry for a 32bpp PNG resource placed right after a single-entry directory
    pub fn for_png(width: u32, height: u32, size: u32) -> Self {
        Self {
            width: directory_dimension(width),
            height: directory_dimension(height),
            palette_count: 0,
            reserved: 0,
            color_planes: 1,
            bits_per_pixel: ICO_BITS_PER_PIXEL,
            size,
            offset: ICO_RESOURCE_OFFSET,
        }
    }

    /// Width as readers interpret it (0 = 256)
    pub fn pixel_width(&self) -> u32 {
        expand_dimension(self.width)
    }

    /// Height as readers interpret it (0 = 256)
    pub fn pixel_height(&self) -> u32 {
        expand_dimension(self.height)
    }

    /// Write entry to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0] = self.width;
        bytes[1] = self.height;
        bytes[2] = self.palette_count;
        bytes[3] = self.reserved;
        bytes[4..6].copy_from_slice(&self.color_planes.to_le_bytes());
        bytes[6..8].copy_from_slice(&self.bits_per_pixel.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.size.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.offset.to_le_bytes());
        bytes
    }

    /// Read entry from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            width: bytes[0],
            height: bytes[1],
            palette_count: bytes[2],
            reserved: bytes[3],
            color_planes: u16::from_le_bytes([bytes[4], bytes[5]]),
            bits_per_pixel: u16::from_le_bytes([bytes[6], bytes[7]]),
            size: u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
            offset: u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]),
        })
    }
}

fn expand_dimension(byte: u8) -> u32 {
    if byte == 0 {
        ICO_MAX_DIMENSION
    } else {
        byte as u32
    }
}

/// A parsed single-image icon container borrowing its resource bytes
#[derive(Debug, Clone, Copy)]
pub struct IconContainer<'a> {
    pub header: IconDirHeader,
    pub entry: IconDirEntry,
    pub resource: &'a [u8],
}

impl<'a> IconContainer<'a> {
    /// Parse a container with exactly one directory entry
    pub fn parse(bytes: &'a [u8]) -> Result<Self, ParseError> {
        let too_short = || ParseError::TooShort(bytes.len());

        let header = IconDirHeader::from_bytes(bytes).ok_or_else(too_short)?;
        if header.reserved != 0 {
            return Err(ParseError::BadReserved);
        }
        if header.kind != ICO_TYPE_ICON {
            return Err(ParseError::NotAnIcon(header.kind));
        }
        if header.count != 1 {
            return Err(ParseError::UnsupportedCount(header.count));
        }

        let entry =
            IconDirEntry::from_bytes(&bytes[IconDirHeader::SIZE..]).ok_or_else(too_short)?;

        let out_of_bounds = || ParseError::ResourceOutOfBounds {
            offset: entry.offset,
            size: entry.size,
            len: bytes.len(),
        };
        let start = entry.offset as usize;
        let end = start
            .checked_add(entry.size as usize)
            .ok_or_else(out_of_bounds)?;
        let resource = bytes.get(start..end).ok_or_else(out_of_bounds)?;

        Ok(Self {
            header,
            entry,
            resource,
        })
    }
}
