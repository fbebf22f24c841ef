use crate::stroke::StrokeWidth;
use crate::tools::Tool;
use egui::Color32;

/// Actions issued by the palette and control panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    SelectTool(Tool),
    SetColor(Color32),
    SetStrokeWidth(StrokeWidth),
    /// Reset the whole canvas to white
    Clear,
}

impl Command {
    pub fn label(&self) -> &'static str {
        match self {
            Command::SelectTool(_) => "Select Tool",
            Command::SetColor(_) => "Set Color",
            Command::SetStrokeWidth(_) => "Set Size",
            Command::Clear => "Clear Canvas",
        }
    }
}
