use egui::{Align2, Color32, FontId, Painter, Pos2};
use log::info;

use crate::element::{DrawableKind, factory};

/// Color every marker stroke is drawn in
pub const MARKER_COLOR: Color32 = Color32::BLACK;
/// Thickness of the fine marker
pub const THIN_MARKER: f32 = 2.0;
/// Thickness of the broad marker
pub const THICK_MARKER: f32 = 6.0;
/// Font size stickers are stamped at unless a preset says otherwise
pub const DEFAULT_STICKER_SIZE: f32 = 28.0;

/// The selectable drawing modes. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Tool {
    Marker { thickness: f32 },
    Sticker { glyph: String, size: f32 },
}

impl Default for Tool {
    fn default() -> Self {
        Tool::Marker {
            thickness: THIN_MARKER,
        }
    }
}

impl Tool {
    /// Short label for panel buttons and logs
    pub fn label(&self) -> String {
        match self {
            Tool::Marker { thickness } => format!("marker {thickness:.0}px"),
            Tool::Sticker { glyph, .. } => glyph.clone(),
        }
    }

    /// Construct the drawable a gesture with this tool starts with
    pub fn begin_at(&self, pos: Pos2) -> DrawableKind {
        match self {
            Tool::Marker { thickness } => factory::create_stroke(pos, *thickness, MARKER_COLOR),
            Tool::Sticker { glyph, size } => factory::create_sticker(glyph.clone(), *size, pos),
        }
    }
}

/// Ephemeral hint of where the next gesture would land.
///
/// Never enters the history; recomputed from the active tool and hover
/// position on every move and discarded when the pointer leaves or presses.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolPreview {
    Marker { center: Pos2, thickness: f32 },
    Sticker { glyph: String, size: f32, anchor: Pos2 },
}

impl ToolPreview {
    /// Paint the preview semi-transparently at its position
    pub fn draw(&self, painter: &Painter) {
        match self {
            ToolPreview::Marker { center, thickness } => {
                // Disc diameter matches the stroke the marker would leave.
                painter.circle_filled(*center, thickness / 2.0, MARKER_COLOR.gamma_multiply(0.5));
            }
            ToolPreview::Sticker {
                glyph,
                size,
                anchor,
            } => {
                painter.text(
                    *anchor,
                    Align2::CENTER_CENTER,
                    glyph,
                    FontId::proportional(*size),
                    MARKER_COLOR.gamma_multiply(0.5),
                );
            }
        }
    }
}

/// Holds the active tool and the last known hover position, and derives the
/// preview from the two.
pub struct ToolSelector {
    current: Tool,
    hover: Option<Pos2>,
    revision: u64,
}

impl ToolSelector {
    pub fn new() -> Self {
        Self {
            current: Tool::default(),
            hover: None,
            revision: 0,
        }
    }

    /// Replace the active tool.
    ///
    /// The preview follows immediately: switching tools while hovering shows
    /// the new tool at the remembered position without waiting for pointer
    /// motion.
    pub fn select(&mut self, tool: Tool) {
        info!("tool selected: {}", tool.label());
        self.current = tool;
        self.revision += 1;
    }

    /// The active tool
    pub fn current(&self) -> &Tool {
        &self.current
    }

    /// Record the hover position the preview is derived from
    pub fn pointer_moved(&mut self, pos: Pos2) {
        self.hover = Some(pos);
        self.revision += 1;
    }

    /// Forget the hover position (pointer left the canvas)
    pub fn pointer_left(&mut self) {
        if self.hover.take().is_some() {
            self.revision += 1;
        }
    }

    /// Preview of the active tool at an explicit position
    pub fn preview_at(&self, pos: Pos2) -> ToolPreview {
        match &self.current {
            Tool::Marker { thickness } => ToolPreview::Marker {
                center: pos,
                thickness: *thickness,
            },
            Tool::Sticker { glyph, size } => ToolPreview::Sticker {
                glyph: glyph.clone(),
                size: *size,
                anchor: pos,
            },
        }
    }

    /// Preview at the remembered hover position, or `None` when the pointer
    /// is away from the canvas
    pub fn preview(&self) -> Option<ToolPreview> {
        self.hover.map(|pos| self.preview_at(pos))
    }

    /// Monotonic counter covering tool changes and hover motion
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Default for ToolSelector {
    fn default() -> Self {
        Self::new()
    }
}
