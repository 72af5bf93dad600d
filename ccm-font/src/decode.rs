//! CCM binary decoder

use tracing::{debug, warn};

use crate::error::CcmError;
use crate::font::{CcmFont, Glyph, TexRegion};
use crate::header::CcmHeader;
use crate::{CCM_MAGIC, GLYPH_RECORD_SIZE, HEADER_SIZE, REGION_SIZE};

/// Parse a CCM file from raw bytes
///
/// Decoding is all-or-nothing: any validation failure returns an error and
/// no partial font escapes. The header's declared texture count is advisory;
/// when the file carries glyphs, the count is recomputed from their texture
/// ids.
///
/// # Errors
///
/// * [`CcmError::TooSmall`] - buffer shorter than the 36-byte header
/// * [`CcmError::BadMagic`] - format field is not `0x20000`
/// * [`CcmError::SizeMismatch`] - declared file size exceeds the buffer
/// * [`CcmError::BadOffsets`] - a table offset points inside the header
/// * [`CcmError::UnexpectedEof`] - a declared table runs past the buffer
/// * [`CcmError::BadRegionRef`] - a glyph references no region table entry
pub fn parse_ccm(data: &[u8]) -> Result<CcmFont, CcmError> {
    let header = CcmHeader::from_bytes(data).ok_or(CcmError::TooSmall(data.len()))?;
    debug!("parsed CCM header: {:?}", header);

    if header.format != CCM_MAGIC {
        return Err(CcmError::BadMagic(header.format));
    }
    if header.file_size as usize > data.len() {
        return Err(CcmError::SizeMismatch {
            declared: header.file_size,
            actual: data.len(),
        });
    }
    if (header.region_offset as usize) < HEADER_SIZE || (header.glyph_offset as usize) < HEADER_SIZE
    {
        return Err(CcmError::BadOffsets {
            region_offset: header.region_offset,
            glyph_offset: header.glyph_offset,
        });
    }

    // Region table
    let region_count = header.region_count as usize;
    let regions_end =
        u64::from(header.region_offset) + (region_count * REGION_SIZE) as u64;
    if regions_end > data.len() as u64 {
        return Err(CcmError::UnexpectedEof);
    }
    let mut regions = Vec::with_capacity(region_count);
    for i in 0..region_count {
        let at = header.region_offset as usize + i * REGION_SIZE;
        regions.push(TexRegion {
            x1: read_i16(data, at),
            y1: read_i16(data, at + 2),
            x2: read_i16(data, at + 4),
            y2: read_i16(data, at + 6),
        });
    }

    // Glyph table
    let glyph_count = header.glyph_count as usize;
    let glyphs_end =
        u64::from(header.glyph_offset) + (glyph_count * GLYPH_RECORD_SIZE) as u64;
    if glyphs_end > data.len() as u64 {
        return Err(CcmError::UnexpectedEof);
    }
    let mut glyphs = Vec::with_capacity(glyph_count);
    for i in 0..glyph_count {
        let at = header.glyph_offset as usize + i * GLYPH_RECORD_SIZE;
        let code = read_u32(data, at);
        let region_ref = read_u32(data, at + 4);
        let texture_id = read_i16(data, at + 8);
        let prespace = read_i16(data, at + 10);
        let width = read_i16(data, at + 12);
        let advance = read_i16(data, at + 14);
        let reserved0 = read_i32(data, at + 16);
        let reserved1 = read_i32(data, at + 20);
        if reserved0 != 0 || reserved1 != 0 {
            warn!(
                "glyph {}: non-zero reserved fields ({}, {})",
                i, reserved0, reserved1
            );
        }

        let region = region_index(region_ref, header.region_offset, region_count).ok_or(
            CcmError::BadRegionRef {
                glyph: i as u16,
                offset: region_ref,
            },
        )?;
        glyphs.push(Glyph {
            code,
            texture_id,
            prespace,
            width,
            advance,
            region,
        });
    }

    let mut font = CcmFont {
        font_height: header.font_height,
        texture_width: header.texture_width,
        texture_height: header.texture_height,
        alignment: header.alignment,
        texture_count: header.texture_count,
        regions,
        glyphs,
    };
    if let Some(count) = font.derived_texture_count() {
        font.texture_count = count;
    }
    debug!(
        "loaded CCM font: {} glyphs, {} textures",
        font.glyphs().len(),
        font.texture_count
    );
    Ok(font)
}

/// Map a glyph record's region byte offset back to a region table index
fn region_index(region_ref: u32, region_offset: u32, region_count: usize) -> Option<usize> {
    let delta = region_ref.checked_sub(region_offset)? as usize;
    if delta % REGION_SIZE != 0 {
        return None;
    }
    let index = delta / REGION_SIZE;
    (index < region_count).then_some(index)
}

fn read_i16(data: &[u8], at: usize) -> i16 {
    i16::from_le_bytes([data[at], data[at + 1]])
}

fn read_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

fn read_i32(data: &[u8], at: usize) -> i32 {
    i32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode_ccm;

    fn sample_font() -> CcmFont {
        let mut font = CcmFont::new();
        font.font_height = 24;
        font.texture_width = 256;
        font.texture_height = 128;
        font.texture_count = 2;
        font.add_glyph(65, 0, 1, 12, 14, TexRegion::new(0, 0, 12, 24))
            .unwrap();
        font.add_glyph(66, 1, 0, 10, 11, TexRegion::new(12, 0, 22, 24))
            .unwrap();
        font.add_glyph(0x3042, 1, -1, 20, 21, TexRegion::new(0, 24, 20, 48))
            .unwrap();
        font
    }

    /// 36-byte file with zero tables and the given declared texture count
    fn empty_file(texture_count: u16) -> Vec<u8> {
        let header = CcmHeader {
            format: CCM_MAGIC,
            file_size: HEADER_SIZE as u32,
            font_height: 0,
            texture_width: 0,
            texture_height: 0,
            region_count: 0,
            glyph_count: 0,
            region_offset: HEADER_SIZE as u32,
            glyph_offset: HEADER_SIZE as u32,
            alignment: 0,
            texture_count,
        };
        header.to_bytes().to_vec()
    }

    #[test]
    fn roundtrip_preserves_glyphs() {
        let font = sample_font();
        let decoded = parse_ccm(&encode_ccm(&font)).unwrap();

        assert_eq!(decoded.glyphs().len(), 3);
        for (a, b) in font.glyphs().iter().zip(decoded.glyphs()) {
            assert_eq!(a.code, b.code);
            assert_eq!(a.texture_id, b.texture_id);
            assert_eq!(a.prespace, b.prespace);
            assert_eq!(a.width, b.width);
            assert_eq!(a.advance, b.advance);
            assert_eq!(font.region_of(a), decoded.region_of(b));
        }
        assert_eq!(decoded.font_height, 24);
        assert_eq!(decoded.texture_width, 256);
        assert_eq!(decoded.texture_height, 128);
        assert_eq!(decoded.texture_count, 2);
    }

    #[test]
    fn rejects_short_buffer() {
        assert!(matches!(
            parse_ccm(&[0u8; 10]),
            Err(CcmError::TooSmall(10))
        ));
        assert!(matches!(parse_ccm(&[]), Err(CcmError::TooSmall(0))));
    }

    #[test]
    fn rejects_bad_magic() {
        let mut bytes = encode_ccm(&sample_font());
        bytes[0..4].copy_from_slice(&0x12345u32.to_le_bytes());
        assert!(matches!(
            parse_ccm(&bytes),
            Err(CcmError::BadMagic(0x12345))
        ));
    }

    #[test]
    fn bad_magic_wins_over_other_header_garbage() {
        // every other header field is nonsense too; magic is still the answer
        let bytes = vec![0xffu8; 50];
        assert!(matches!(
            parse_ccm(&bytes),
            Err(CcmError::BadMagic(0xffff_ffff))
        ));
    }

    #[test]
    fn rejects_declared_size_beyond_buffer() {
        let mut bytes = vec![0u8; 50];
        bytes[0..4].copy_from_slice(&CCM_MAGIC.to_le_bytes());
        bytes[4..8].copy_from_slice(&100u32.to_le_bytes());
        assert!(matches!(
            parse_ccm(&bytes),
            Err(CcmError::SizeMismatch {
                declared: 100,
                actual: 50
            })
        ));
    }

    #[test]
    fn rejects_offsets_inside_header() {
        let mut bytes = empty_file(1);
        bytes[20..24].copy_from_slice(&20u32.to_le_bytes());
        assert!(matches!(parse_ccm(&bytes), Err(CcmError::BadOffsets { .. })));

        let mut bytes = empty_file(1);
        bytes[24..28].copy_from_slice(&35u32.to_le_bytes());
        assert!(matches!(parse_ccm(&bytes), Err(CcmError::BadOffsets { .. })));
    }

    #[test]
    fn empty_tables_decode_to_empty_font() {
        let decoded = parse_ccm(&empty_file(1)).unwrap();
        assert!(decoded.glyphs().is_empty());
        assert!(decoded.regions().is_empty());
        assert_eq!(decoded.texture_count, 1);
    }

    #[test]
    fn empty_font_keeps_declared_texture_count() {
        let decoded = parse_ccm(&empty_file(5)).unwrap();
        assert_eq!(decoded.texture_count, 5);
    }

    #[test]
    fn rejects_unresolvable_region_ref() {
        let mut font = CcmFont::new();
        font.add_glyph(65, 0, 0, 1, 1, TexRegion::new(0, 0, 1, 1))
            .unwrap();
        let mut bytes = encode_ccm(&font);
        // glyph record starts at 44; its region ref points at slot 1, but
        // the table only has slot 0
        bytes[48..52].copy_from_slice(&44u32.to_le_bytes());
        assert!(matches!(
            parse_ccm(&bytes),
            Err(CcmError::BadRegionRef {
                glyph: 0,
                offset: 44
            })
        ));
    }

    #[test]
    fn rejects_misaligned_region_ref() {
        let mut font = CcmFont::new();
        font.add_glyph(65, 0, 0, 1, 1, TexRegion::new(0, 0, 1, 1))
            .unwrap();

        let mut bytes = encode_ccm(&font);
        bytes[48..52].copy_from_slice(&37u32.to_le_bytes());
        assert!(matches!(
            parse_ccm(&bytes),
            Err(CcmError::BadRegionRef { .. })
        ));

        // below the region table entirely
        let mut bytes = encode_ccm(&font);
        bytes[48..52].copy_from_slice(&20u32.to_le_bytes());
        assert!(matches!(
            parse_ccm(&bytes),
            Err(CcmError::BadRegionRef { .. })
        ));
    }

    #[test]
    fn rejects_truncated_glyph_table() {
        let bytes = encode_ccm(&sample_font());
        let mut truncated = bytes[..bytes.len() - 4].to_vec();
        // keep the declared size honest so the table check is what trips
        let truncated_len = truncated.len() as u32;
        truncated[4..8].copy_from_slice(&truncated_len.to_le_bytes());
        assert!(matches!(parse_ccm(&truncated), Err(CcmError::UnexpectedEof)));
    }

    #[test]
    fn accepts_nonzero_reserved_fields() {
        let mut font = CcmFont::new();
        font.add_glyph(65, 0, 0, 1, 1, TexRegion::new(0, 0, 1, 1))
            .unwrap();
        let mut bytes = encode_ccm(&font);
        bytes[60..64].copy_from_slice(&7i32.to_le_bytes());
        let decoded = parse_ccm(&bytes).unwrap();
        assert_eq!(decoded.glyphs().len(), 1);
        assert_eq!(decoded.glyphs()[0].code, 65);
    }

    #[test]
    fn recomputes_texture_count_from_glyphs() {
        let mut bytes = encode_ccm(&sample_font());
        bytes[30..32].copy_from_slice(&9u16.to_le_bytes());
        let decoded = parse_ccm(&bytes).unwrap();
        assert_eq!(decoded.texture_count, 2);
    }

    #[test]
    fn shared_region_refs_are_allowed() {
        // two glyphs pointing at the same region slot decode fine
        let mut font = CcmFont::new();
        font.add_glyph(65, 0, 0, 1, 1, TexRegion::new(5, 6, 7, 8))
            .unwrap();
        font.add_glyph(66, 0, 0, 1, 1, TexRegion::new(9, 9, 9, 9))
            .unwrap();
        let mut bytes = encode_ccm(&font);
        // second glyph record's region ref (at 52 + 24 + 4) -> slot 0
        bytes[80..84].copy_from_slice(&36u32.to_le_bytes());
        let decoded = parse_ccm(&bytes).unwrap();
        assert_eq!(
            decoded.region_of(&decoded.glyphs()[1]),
            Some(TexRegion::new(5, 6, 7, 8))
        );
    }
}
