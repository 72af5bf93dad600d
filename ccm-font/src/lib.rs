//! CCM bitmap font descriptor codec
//!
//! CCM is a little-endian binary format describing a bitmap font for a
//! rendering engine: per-glyph layout metrics plus the source rectangle of
//! each glyph inside an external texture atlas. The atlas images themselves
//! are separate files referenced by index; a CCM file carries only metrics
//! and coordinates.
//!
//! This crate is a pure codec: decode with validation, canonical re-encode,
//! a human-readable text listing in both directions, and a raw-byte hex
//! dumper for diagnostics. It does not render glyphs, pack atlases, or
//! decode texture images.
//!
//! # File Layout
//!
//! ```text
//! Header (36 bytes):
//!   0x00: format (magic 0x20000)  u32
//!   0x04: file_size               u32
//!   0x08: font_height             u16
//!   0x0a: texture_width           u16
//!   0x0c: texture_height          u16
//!   0x0e: region_count            u16
//!   0x10: glyph_count             u16
//!   0x12: (pad, 2 bytes)
//!   0x14: region_offset           u32
//!   0x18: glyph_offset            u32
//!   0x1c: alignment               u16
//!   0x1e: texture_count           u16
//!   0x20: (reserved, 4 bytes)
//!
//! Region table (8 bytes each, at region_offset):
//!   x1, y1, x2, y2 as i16
//!
//! Glyph table (24 bytes each, at glyph_offset):
//!   code          u32   Unicode codepoint
//!   region_offset u32   byte offset of this glyph's region entry
//!   texture_id    i16   atlas texture index
//!   prespace      i16   leading space before the glyph
//!   width         i16   glyph pixel width
//!   advance       i16   cursor advance after the glyph
//!   reserved      2 x i32, always zero
//! ```
//!
//! Every glyph references exactly one region entry; the encoder always emits
//! the canonical layout (header, regions, glyphs, one region per glyph in
//! sequence order).
//!
//! # Usage
//!
//! ```
//! use ccm_font::{CcmFont, TexRegion, encode_ccm, parse_ccm};
//!
//! let mut font = CcmFont::new();
//! font.font_height = 24;
//! font.add_glyph(65, 0, 1, 12, 14, TexRegion::new(0, 0, 12, 24)).unwrap();
//!
//! let bytes = encode_ccm(&font);
//! let reloaded = parse_ccm(&bytes).unwrap();
//! assert_eq!(reloaded.glyphs().len(), 1);
//! ```

mod decode;
mod dump;
mod encode;
mod error;
mod files;
mod font;
mod header;
mod text;

pub use decode::parse_ccm;
pub use dump::{HexDump, hex_dump};
pub use encode::encode_ccm;
pub use error::CcmError;
pub use files::{export_text_file, import_text_file, read_ccm_file, write_ccm_file};
pub use font::{CcmFont, Glyph, GlyphField, TexRegion};
pub use header::CcmHeader;
pub use text::{TextImport, export_text, import_text};

// =============================================================================
// Constants
// =============================================================================

/// CCM format magic value
pub const CCM_MAGIC: u32 = 0x0002_0000;

/// File header size in bytes
pub const HEADER_SIZE: usize = 36;

/// Size of one region table entry in bytes
pub const REGION_SIZE: usize = 8;

/// Size of one glyph table record in bytes
pub const GLYPH_RECORD_SIZE: usize = 24;
