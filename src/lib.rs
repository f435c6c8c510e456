#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod element;
pub mod history;
pub mod input;
pub mod panels;
pub mod presets;
pub mod renderer;
pub mod tools;

pub use app::SketchApp;
pub use element::{Drawable, DrawableKind, FreehandStroke, StickerStamp};
pub use history::DrawingHistory;
pub use input::{InputEvent, InputLocation};
pub use presets::StickerPreset;
pub use renderer::Renderer;
pub use tools::{Tool, ToolPreview, ToolSelector};
