use crate::PaintApp;
use crate::command::Command;
use crate::components::ToolButton;
use crate::tools::Tool;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tool_palette")
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                let active = app.canvas().tool();
                for tool in Tool::ALL {
                    if ToolButton::new(tool, tool == active).show(ui).clicked() {
                        app.execute(Command::SelectTool(tool));
                    }
                }
            });
            ui.add_space(5.0);
        });
}
