use egui::{Painter, Pos2};

// Re-export concrete implementations
pub(crate) mod sticker;
pub(crate) mod stroke;

pub use sticker::StickerStamp;
pub use stroke::FreehandStroke;

/// Common trait that everything in the drawing history must implement
pub trait Drawable {
    /// Get the drawable kind as a string
    fn kind(&self) -> &'static str;

    /// Grow the drawable by one pointer sample. Strokes append the point,
    /// stickers move their anchor to it. Never fails.
    fn extend(&mut self, pos: Pos2);

    /// Draw the drawable using the provided painter.
    ///
    /// Paints from internal state only and never mutates it; repeated calls
    /// produce the same output.
    fn draw(&self, painter: &Painter);
}

/// Enumeration of all drawable variants in the history
#[derive(Debug, Clone)]
pub enum DrawableKind {
    Stroke(FreehandStroke),
    Sticker(StickerStamp),
}

impl Drawable for DrawableKind {
    fn kind(&self) -> &'static str {
        match self {
            DrawableKind::Stroke(_) => "stroke",
            DrawableKind::Sticker(_) => "sticker",
        }
    }

    fn extend(&mut self, pos: Pos2) {
        match self {
            DrawableKind::Stroke(s) => s.extend(pos),
            DrawableKind::Sticker(s) => s.extend(pos),
        }
    }

    fn draw(&self, painter: &Painter) {
        match self {
            DrawableKind::Stroke(s) => s.draw(painter),
            DrawableKind::Sticker(s) => s.draw(painter),
        }
    }
}

/// Factory functions for creating drawables
pub mod factory {
    use super::*;
    use egui::Color32;

    /// Create a new freehand stroke starting at the given point
    pub fn create_stroke(start: Pos2, thickness: f32, color: Color32) -> DrawableKind {
        DrawableKind::Stroke(FreehandStroke::new(vec![start], thickness, color))
    }

    /// Create a new sticker stamp anchored at the given point
    pub fn create_sticker(glyph: impl Into<String>, size: f32, anchor: Pos2) -> DrawableKind {
        DrawableKind::Sticker(StickerStamp::new(glyph, size, anchor))
    }
}
