use crate::SketchApp;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let canvas_rect = ui.available_rect_before_wrap();

        // Handle input
        app.handle_input(ctx, canvas_rect);

        // Render the canvas
        let painter = ui.painter();
        let preview = app.tools().preview();
        app.renderer()
            .render(painter, canvas_rect, app.history(), preview.as_ref());
    });
}
