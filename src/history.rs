use egui::Pos2;
use log::debug;

use crate::element::{Drawable, DrawableKind};
use crate::tools::Tool;

/// Owns every drawable the user has produced and replays them for rendering.
///
/// Two stacks give linear undo/redo: `committed` is the visible scene in draw
/// order, `undone` holds drawables popped by undo until new work invalidates
/// them. While a gesture is active the in-progress drawable is the tail of
/// `committed`, so it repaints through the same pass as settled history.
pub struct DrawingHistory {
    /// The visible scene, in draw order
    committed: Vec<DrawableKind>,
    /// Drawables removed by undo, recoverable until new work arrives
    undone: Vec<DrawableKind>,
    /// True between `begin` and `end`; the tail of `committed` is in progress
    drawing: bool,
    /// Bumped on every effective mutation; observers repaint when it moves
    revision: u64,
}

impl DrawingHistory {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self {
            committed: Vec::new(),
            undone: Vec::new(),
            drawing: false,
            revision: 0,
        }
    }

    /// Start a new gesture: construct the active tool's drawable at `pos` and
    /// append it to the committed scene, so it paints through the same render
    /// pass while still being drawn. Any redoable drawables are dropped.
    ///
    /// A `begin` while a gesture is already active (a second pointer-down
    /// without a matching pointer-up) is rejected as a no-op.
    pub fn begin(&mut self, tool: &Tool, pos: Pos2) {
        if self.drawing {
            debug!("begin ignored: a gesture is already active");
            return;
        }

        self.undone.clear();
        self.committed.push(tool.begin_at(pos));
        self.drawing = true;
        self.revision += 1;
    }

    /// Extend the in-progress drawable by one pointer sample. No-op while
    /// idle.
    pub fn extend(&mut self, pos: Pos2) {
        if !self.drawing {
            return;
        }
        if let Some(current) = self.committed.last_mut() {
            current.extend(pos);
            self.revision += 1;
        }
    }

    /// Finish the active gesture. The drawable stays where `begin` put it;
    /// abandoning a gesture this way never rolls anything back. No-op while
    /// idle.
    pub fn end(&mut self) {
        if !self.drawing {
            return;
        }
        debug!(
            "gesture committed, {} drawable(s) in history",
            self.committed.len()
        );
        self.drawing = false;
        self.revision += 1;
    }

    /// Move the most recently committed drawable to the undone stack. No-op
    /// when nothing is committed.
    ///
    /// Undoing mid-gesture takes the in-progress drawable with it and ends
    /// the gesture; later `extend`/`end` calls fall into the idle no-ops.
    pub fn undo(&mut self) {
        let Some(drawable) = self.committed.pop() else {
            return;
        };
        debug!("undo {}", drawable.kind());
        self.undone.push(drawable);
        self.drawing = false;
        self.revision += 1;
    }

    /// Move the most recently undone drawable back onto the committed scene.
    /// No-op when the undone stack is empty.
    pub fn redo(&mut self) {
        let Some(drawable) = self.undone.pop() else {
            return;
        };
        debug!("redo {}", drawable.kind());
        self.committed.push(drawable);
        self.revision += 1;
    }

    /// Drop everything: the committed scene, the undone stack and any active
    /// gesture.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.undone.clear();
        self.drawing = false;
        self.revision += 1;
    }

    /// Returns true if there are drawables that can be undone
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Returns true if there are drawables that can be redone
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// The visible scene, in draw order
    pub fn committed(&self) -> &[DrawableKind] {
        &self.committed
    }

    /// Drawables waiting for redo, oldest first
    pub fn undone(&self) -> &[DrawableKind] {
        &self.undone
    }

    /// True while a gesture is active
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Monotonic change counter; stays put across rejected or no-op calls
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl Default for DrawingHistory {
    fn default() -> Self {
        Self::new()
    }
}
