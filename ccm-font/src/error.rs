//! CCM codec error types

use thiserror::Error;

/// Errors produced by the CCM codec
#[derive(Debug, Error)]
pub enum CcmError {
    /// Buffer too small to contain the 36-byte file header
    #[error("file too small for CCM header ({0} bytes)")]
    TooSmall(usize),

    /// Magic value mismatch
    #[error("invalid CCM magic 0x{0:x} (expected 0x20000)")]
    BadMagic(u32),

    /// Header declares more bytes than the buffer holds
    #[error("file size mismatch: header claims {declared}, actual {actual}")]
    SizeMismatch { declared: u32, actual: usize },

    /// Region or glyph table offset points inside the header
    #[error("invalid table offsets: region_offset={region_offset}, glyph_offset={glyph_offset}")]
    BadOffsets { region_offset: u32, glyph_offset: u32 },

    /// A declared table extends past the end of the buffer
    #[error("unexpected end of file")]
    UnexpectedEof,

    /// Glyph record references a byte offset outside the region table
    #[error("glyph {glyph} has invalid region offset {offset}")]
    BadRegionRef { glyph: u16, offset: u32 },

    /// Malformed line in a glyph text listing
    #[error("malformed line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    /// Unparsable value for a typed field edit
    #[error("invalid value {value:?} for {field}")]
    BadFieldValue { field: &'static str, value: String },

    /// Texture id outside the valid range for the font
    #[error("texture id {texture_id} out of range (font has {texture_count} textures)")]
    InvalidTextureId { texture_id: i16, texture_count: u16 },

    /// Glyph index outside the glyph list
    #[error("glyph index {index} out of range (font has {len} glyphs)")]
    GlyphIndexOutOfRange { index: usize, len: usize },

    /// Filesystem failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
