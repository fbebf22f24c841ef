use crate::PaintApp;
use crate::command::Command;
use crate::stroke::{StrokeWidth, contrast_color};

pub fn control_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("control_panel")
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                // Color picker
                let mut color = app.canvas().color();
                ui.label(
                    egui::RichText::new(" Color ")
                        .color(contrast_color(color))
                        .background_color(color),
                );
                egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                );
                if color != app.canvas().color() {
                    app.execute(Command::SetColor(color));
                }

                ui.separator();

                // Stroke size selector
                let mut width = app.canvas().stroke_width();
                egui::ComboBox::from_label("Size")
                    .selected_text(width.to_string())
                    .show_ui(ui, |ui| {
                        for option in StrokeWidth::ALL {
                            ui.selectable_value(&mut width, option, option.to_string());
                        }
                    });
                if width != app.canvas().stroke_width() {
                    log::info!("Stroke size selected: {}", width);
                    app.execute(Command::SetStrokeWidth(width));
                }

                ui.separator();

                if ui.button("Clear Canvas").clicked() {
                    app.execute(Command::Clear);
                }
                if ui.button("Save Drawing").clicked() {
                    app.save_drawing();
                }
            });
            ui.add_space(5.0);
        });
}
