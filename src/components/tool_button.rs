use crate::tools::Tool;
use eframe::egui;

/// Toggle button for one palette tool
pub struct ToolButton {
    pub tool: Tool,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(tool: Tool, selected: bool) -> Self {
        Self { tool, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(104.0, 32.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_rgb(100, 181, 246) // Light blue when selected
            } else if response.hovered() {
                egui::Color32::from_gray(225)
            } else {
                egui::Color32::from_gray(240)
            };

            ui.painter().rect_filled(rect, 4.0, bg_color);

            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                format!("{} {}", self.tool.icon(), self.tool.name()),
                egui::FontId::proportional(16.0),
                egui::Color32::BLACK,
            );

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response.on_hover_text(self.tool.name())
    }
}
