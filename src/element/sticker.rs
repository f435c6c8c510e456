use egui::{Align2, Color32, FontId, Painter, Pos2};

use super::Drawable;

/// Emoji sticker stamped at a single anchor point
#[derive(Debug, Clone)]
pub struct StickerStamp {
    glyph: String,
    size: f32,
    anchor: Pos2,
}

impl StickerStamp {
    /// Create a new sticker with the given glyph and font size
    pub fn new(glyph: impl Into<String>, size: f32, anchor: Pos2) -> Self {
        Self {
            glyph: glyph.into(),
            size,
            anchor,
        }
    }

    /// Get the glyph this sticker paints
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Get the font size the glyph is painted at
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Where the glyph is currently centered
    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }
}

impl Drawable for StickerStamp {
    fn kind(&self) -> &'static str {
        "sticker"
    }

    // Dragging a sticker repositions it; points are not accumulated.
    fn extend(&mut self, pos: Pos2) {
        self.anchor = pos;
    }

    fn draw(&self, painter: &Painter) {
        // egui's bundled emoji are monochrome glyphs; tint them like ink.
        painter.text(
            self.anchor,
            Align2::CENTER_CENTER,
            &self.glyph,
            FontId::proportional(self.size),
            Color32::BLACK,
        );
    }
}
