use crate::history::DrawingHistory;
use crate::input::{InputEvent, InputHandler};
use crate::panels;
use crate::presets::{self, StickerPreset};
use crate::renderer::Renderer;
use crate::tools::ToolSelector;

/// The whole sketchpad session: drawing history, tool state, renderer and
/// input plumbing, constructed once and owned for the lifetime of the app.
pub struct SketchApp {
    history: DrawingHistory,
    tools: ToolSelector,
    renderer: Renderer,
    input: InputHandler,
    /// User-added sticker presets; persisted across runs
    custom_stickers: Vec<StickerPreset>,
    /// Contents of the "add sticker" text entry in the tools panel
    sticker_entry: String,
    /// Core revision observed last frame; a repaint is requested when it moves
    seen_revision: u64,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let stored = cc
            .storage
            .and_then(|storage| storage.get_string(presets::STORAGE_KEY));
        let custom_stickers = presets::load_or_default(stored);

        Self {
            history: DrawingHistory::new(),
            tools: ToolSelector::new(),
            renderer: Renderer::new(),
            input: InputHandler::new(egui::Rect::NOTHING),
            custom_stickers,
            sticker_entry: String::new(),
            seen_revision: 0,
        }
    }

    pub fn history(&self) -> &DrawingHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut DrawingHistory {
        &mut self.history
    }

    pub fn tools(&self) -> &ToolSelector {
        &self.tools
    }

    pub fn tools_mut(&mut self) -> &mut ToolSelector {
        &mut self.tools
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn custom_stickers(&self) -> &[StickerPreset] {
        &self.custom_stickers
    }

    pub fn sticker_entry(&self) -> &str {
        &self.sticker_entry
    }

    pub fn sticker_entry_mut(&mut self) -> &mut String {
        &mut self.sticker_entry
    }

    /// Validate and append a custom sticker preset
    pub fn add_custom_sticker(&mut self, preset: StickerPreset) {
        match presets::validate(&preset) {
            Ok(()) => {
                log::info!("custom sticker added: {}", preset.glyph);
                self.custom_stickers.push(preset);
            }
            Err(err) => log::warn!("rejected custom sticker: {err}"),
        }
    }

    /// Translate this frame's pointer and key events into drawing operations
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        self.input.set_canvas_rect(canvas_rect);

        for event in self.input.process_input(ctx) {
            self.route_event(event);
        }
    }

    fn route_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { location } if location.is_in_canvas => {
                let tool = self.tools.current().clone();
                self.history.begin(&tool, location.position);
            }
            InputEvent::PointerMove {
                location,
                primary_down,
            } => {
                if self.history.is_drawing() && primary_down {
                    self.history.extend(location.position);
                } else if location.is_in_canvas {
                    self.tools.pointer_moved(location.position);
                } else {
                    self.tools.pointer_left();
                }
            }
            InputEvent::PointerUp { location } => {
                self.history.end();
                // The pointer now hovers where the gesture ended; the preview
                // reappears there rather than at a stale position.
                if location.is_in_canvas {
                    self.tools.pointer_moved(location.position);
                }
            }
            InputEvent::PointerLeave { .. } => {
                // Abandoning a gesture just stops extension; whatever was
                // committed at begin time stays committed.
                self.history.end();
                self.tools.pointer_left();
            }
            InputEvent::KeyDown {
                key: egui::Key::Z,
                modifiers,
            } if modifiers.command => {
                if modifiers.shift {
                    self.history.redo();
                } else {
                    self.history.undo();
                }
            }
            _ => {}
        }
    }

    fn core_revision(&self) -> u64 {
        self.history.revision() + self.tools.revision()
    }
}

impl eframe::App for SketchApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match presets::encode(&self.custom_stickers) {
            Ok(blob) => storage.set_string(presets::STORAGE_KEY, blob),
            Err(err) => log::warn!("failed to save sticker presets: {err}"),
        }
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);

        // Mutation and notification settle within one event dispatch, so a
        // moved revision means exactly one fully-settled state to repaint.
        let revision = self.core_revision();
        if revision != self.seen_revision {
            self.seen_revision = revision;
            ctx.request_repaint();
        }
    }
}
