use egui::{Color32, Painter, Rect};

use crate::element::Drawable;
use crate::history::DrawingHistory;
use crate::tools::ToolPreview;

/// Repaints the whole scene from history on every pass
pub struct Renderer {
    background: Color32,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            background: Color32::WHITE,
        }
    }

    /// The canvas background color
    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Clear the canvas, replay every committed drawable in insertion order
    /// (later drawables occlude earlier ones at overlaps), then paint the
    /// hover preview unless a gesture is in progress.
    pub fn render(
        &self,
        painter: &Painter,
        rect: Rect,
        history: &DrawingHistory,
        preview: Option<&ToolPreview>,
    ) {
        painter.rect_filled(rect, 0.0, self.background);

        for drawable in history.committed() {
            drawable.draw(painter);
        }

        if !history.is_drawing() {
            if let Some(preview) = preview {
                preview.draw(painter);
            }
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
