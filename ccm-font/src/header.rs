//! Raw CCM file header
//!
//! Note: Not packed - we use explicit byte serialization. Named fields
//! occupy bytes 0..32; bytes 18..20 and 32..36 are padding, always zero.

use crate::HEADER_SIZE;

/// CCM file header (36 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CcmHeader {
    /// Format magic, `0x20000` for a valid file
    pub format: u32,
    /// Total file size the header claims
    pub file_size: u32,
    /// Line height in pixels
    pub font_height: u16,
    /// Atlas texture width in pixels
    pub texture_width: u16,
    /// Atlas texture height in pixels
    pub texture_height: u16,
    /// Number of region table entries
    pub region_count: u16,
    /// Number of glyph table records
    pub glyph_count: u16,
    /// Byte offset of the region table
    pub region_offset: u32,
    /// Byte offset of the glyph table
    pub glyph_offset: u32,
    /// Alignment field carried through verbatim
    pub alignment: u16,
    /// Declared number of atlas textures
    pub texture_count: u16,
}

impl CcmHeader {
    pub const SIZE: usize = HEADER_SIZE;

    /// Read a header from the start of `bytes`
    ///
    /// Returns `None` if the buffer is shorter than [`Self::SIZE`].
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            format: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            file_size: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            font_height: u16::from_le_bytes([bytes[8], bytes[9]]),
            texture_width: u16::from_le_bytes([bytes[10], bytes[11]]),
            texture_height: u16::from_le_bytes([bytes[12], bytes[13]]),
            region_count: u16::from_le_bytes([bytes[14], bytes[15]]),
            glyph_count: u16::from_le_bytes([bytes[16], bytes[17]]),
            region_offset: u32::from_le_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]),
            glyph_offset: u32::from_le_bytes([bytes[24], bytes[25], bytes[26], bytes[27]]),
            alignment: u16::from_le_bytes([bytes[28], bytes[29]]),
            texture_count: u16::from_le_bytes([bytes[30], bytes[31]]),
        })
    }

    /// Write the header to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&self.format.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.file_size.to_le_bytes());
        bytes[8..10].copy_from_slice(&self.font_height.to_le_bytes());
        bytes[10..12].copy_from_slice(&self.texture_width.to_le_bytes());
        bytes[12..14].copy_from_slice(&self.texture_height.to_le_bytes());
        bytes[14..16].copy_from_slice(&self.region_count.to_le_bytes());
        bytes[16..18].copy_from_slice(&self.glyph_count.to_le_bytes());
        bytes[20..24].copy_from_slice(&self.region_offset.to_le_bytes());
        bytes[24..28].copy_from_slice(&self.glyph_offset.to_le_bytes());
        bytes[28..30].copy_from_slice(&self.alignment.to_le_bytes());
        bytes[30..32].copy_from_slice(&self.texture_count.to_le_bytes());
        bytes
    }
}
