use crate::PaintApp;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(egui::Color32::WHITE))
        .show(ctx, |ui| {
            // The drawing surface fills the remaining space
            let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            app.handle_input(ctx, &response);
            app.render(&painter, response.rect);

            if response.hovered() {
                ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
            }
        });
}
