//! In-memory CCM font model

use crate::error::CcmError;
use crate::text::parse_point;

/// Rectangle in atlas pixel coordinates
///
/// `(x1, y1)` is the top-left corner, `(x2, y2)` the bottom-right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TexRegion {
    pub x1: i16,
    pub y1: i16,
    pub x2: i16,
    pub y2: i16,
}

impl TexRegion {
    pub fn new(x1: i16, y1: i16, x2: i16, y2: i16) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// One glyph: layout metrics plus a reference into the font's region arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Unicode codepoint
    pub code: u32,
    /// Atlas texture index
    pub texture_id: i16,
    /// Leading space before the glyph
    pub prespace: i16,
    /// Glyph pixel width
    pub width: i16,
    /// Cursor advance after the glyph
    pub advance: i16,
    /// Index into the region arena
    pub(crate) region: usize,
}

impl Glyph {
    /// Index of this glyph's region in the font's arena
    pub fn region_index(&self) -> usize {
        self.region
    }
}

/// Addressable glyph fields for text-driven edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphField {
    Code,
    TextureId,
    Prespace,
    Width,
    Advance,
    /// Top-left region corner, written as `(x, y)`
    RegionTop,
    /// Bottom-right region corner, written as `(x, y)`
    RegionBottom,
}

/// In-memory CCM font
///
/// Holds the logical font state only. Layout-derived header fields (file
/// size, table counts and offsets) are not stored: the decoder validates
/// them and the encoder recomputes them from the live glyph list.
///
/// Glyphs reference their texture regions through an arena indexed by
/// position; the encoder rewrites region slots in current glyph order, so
/// arena slots orphaned by [`CcmFont::remove_glyph`] never serialize.
#[derive(Debug, Clone)]
pub struct CcmFont {
    /// Line height in pixels
    pub font_height: u16,
    /// Atlas texture width in pixels
    pub texture_width: u16,
    /// Atlas texture height in pixels
    pub texture_height: u16,
    /// Alignment field carried through from the source file
    pub alignment: u16,
    /// Number of atlas textures (recomputed from the glyphs on encode)
    pub texture_count: u16,
    pub(crate) regions: Vec<TexRegion>,
    pub(crate) glyphs: Vec<Glyph>,
}

impl Default for CcmFont {
    fn default() -> Self {
        Self::new()
    }
}

impl CcmFont {
    /// Create an empty font with a single texture
    pub fn new() -> Self {
        Self {
            font_height: 0,
            texture_width: 0,
            texture_height: 0,
            alignment: 0,
            texture_count: 1,
            regions: Vec::new(),
            glyphs: Vec::new(),
        }
    }

    /// All glyphs in sequence order
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// The region arena
    pub fn regions(&self) -> &[TexRegion] {
        &self.regions
    }

    /// Glyph at `index`
    pub fn glyph(&self, index: usize) -> Option<&Glyph> {
        self.glyphs.get(index)
    }

    /// Region referenced by `glyph`
    pub fn region_of(&self, glyph: &Glyph) -> Option<TexRegion> {
        self.regions.get(glyph.region).copied()
    }

    /// `max(texture_id) + 1` over the current glyphs
    ///
    /// `None` when the glyph list is empty. A negative maximum (only
    /// reachable from hand-crafted files) clamps to zero.
    pub fn derived_texture_count(&self) -> Option<u16> {
        self.glyphs
            .iter()
            .map(|g| g.texture_id)
            .max()
            .map(|max| (i32::from(max) + 1).max(0) as u16)
    }

    /// Append a glyph and its region
    ///
    /// The region goes into the arena and the glyph references it by
    /// position. `texture_id` must lie in `[0, texture_count)`.
    pub fn add_glyph(
        &mut self,
        code: u32,
        texture_id: i16,
        prespace: i16,
        width: i16,
        advance: i16,
        region: TexRegion,
    ) -> Result<usize, CcmError> {
        if texture_id < 0 || texture_id as u16 >= self.texture_count {
            return Err(CcmError::InvalidTextureId {
                texture_id,
                texture_count: self.texture_count,
            });
        }
        self.regions.push(region);
        self.glyphs.push(Glyph {
            code,
            texture_id,
            prespace,
            width,
            advance,
            region: self.regions.len() - 1,
        });
        Ok(self.glyphs.len() - 1)
    }

    /// Remove and return the glyph at `index`
    pub fn remove_glyph(&mut self, index: usize) -> Result<Glyph, CcmError> {
        if index >= self.glyphs.len() {
            return Err(CcmError::GlyphIndexOutOfRange {
                index,
                len: self.glyphs.len(),
            });
        }
        Ok(self.glyphs.remove(index))
    }

    /// Parse `value` for one field of the glyph at `index`, validate, commit
    ///
    /// Nothing is written when an error is returned. `TextureId` values are
    /// bounds-checked against the current texture count; region corners use
    /// the strict `(x, y)` pair grammar.
    pub fn set_glyph_field(
        &mut self,
        index: usize,
        field: GlyphField,
        value: &str,
    ) -> Result<(), CcmError> {
        let len = self.glyphs.len();
        let glyph = self
            .glyphs
            .get_mut(index)
            .ok_or(CcmError::GlyphIndexOutOfRange { index, len })?;
        match field {
            GlyphField::Code => glyph.code = parse_field("code", value)?,
            GlyphField::TextureId => {
                let id: i16 = parse_field("textureId", value)?;
                if id < 0 || id as u16 >= self.texture_count {
                    return Err(CcmError::InvalidTextureId {
                        texture_id: id,
                        texture_count: self.texture_count,
                    });
                }
                glyph.texture_id = id;
            }
            GlyphField::Prespace => glyph.prespace = parse_field("prespace", value)?,
            GlyphField::Width => glyph.width = parse_field("width", value)?,
            GlyphField::Advance => glyph.advance = parse_field("advance", value)?,
            GlyphField::RegionTop => {
                let (x, y) = parse_point(value).ok_or_else(|| CcmError::BadFieldValue {
                    field: "top",
                    value: value.to_string(),
                })?;
                let region = &mut self.regions[glyph.region];
                region.x1 = x;
                region.y1 = y;
            }
            GlyphField::RegionBottom => {
                let (x, y) = parse_point(value).ok_or_else(|| CcmError::BadFieldValue {
                    field: "bottom",
                    value: value.to_string(),
                })?;
                let region = &mut self.regions[glyph.region];
                region.x2 = x;
                region.y2 = y;
            }
        }
        Ok(())
    }
}

fn parse_field<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, CcmError> {
    value.trim().parse().map_err(|_| CcmError::BadFieldValue {
        field,
        value: value.to_string(),
    })
}
