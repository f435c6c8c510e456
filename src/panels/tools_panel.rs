use crate::SketchApp;
use crate::presets::{self, StickerPreset};
use crate::tools::{DEFAULT_STICKER_SIZE, THICK_MARKER, THIN_MARKER, Tool};

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active = app.tools().current().clone();

            let thin = Tool::Marker {
                thickness: THIN_MARKER,
            };
            let thick = Tool::Marker {
                thickness: THICK_MARKER,
            };

            ui.horizontal(|ui| {
                if ui.selectable_label(active == thin, "Thin marker").clicked() {
                    app.tools_mut().select(thin);
                }
                if ui
                    .selectable_label(active == thick, "Thick marker")
                    .clicked()
                {
                    app.tools_mut().select(thick);
                }
            });

            ui.separator();
            ui.label("Stickers");

            // Defer selection until the buttons are laid out to keep the
            // borrow of the preset lists immutable.
            let mut chosen: Option<Tool> = None;
            ui.horizontal_wrapped(|ui| {
                let builtin = presets::builtin_presets();
                for preset in builtin.iter().chain(app.custom_stickers()) {
                    let tool = Tool::Sticker {
                        glyph: preset.glyph.clone(),
                        size: preset.size,
                    };
                    if ui
                        .selectable_label(app.tools().current() == &tool, &preset.glyph)
                        .clicked()
                    {
                        chosen = Some(tool);
                    }
                }
            });
            if let Some(tool) = chosen {
                app.tools_mut().select(tool);
            }

            ui.horizontal(|ui| {
                ui.text_edit_singleline(app.sticker_entry_mut());
                if ui.button("Add").clicked() {
                    let glyph = app.sticker_entry().trim().to_string();
                    app.add_custom_sticker(StickerPreset::new(glyph, DEFAULT_STICKER_SIZE));
                    app.sticker_entry_mut().clear();
                }
            });

            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                let can_undo = app.history().can_undo();
                let can_redo = app.history().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.history_mut().undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.history_mut().redo();
                }
                if ui.button("Clear").clicked() {
                    log::info!("canvas cleared from UI");
                    app.history_mut().clear();
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label(format!("Committed: {}", app.history().committed().len()));
                ui.label(format!("Undone: {}", app.history().undone().len()));
            });
        });
}
