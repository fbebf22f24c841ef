use crate::bitmap::Bitmap;
use crate::command::Command;
use crate::error::{PaintError, PaintResult};
use crate::stroke::{StrokeStyle, StrokeWidth};
use crate::tools::{PreviewGeometry, ShapePreview, Tool};
use egui::{Color32, Pos2};
use std::path::{Path, PathBuf};

/// Pointer state between a press and its release
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interaction {
    pub start: Pos2,
    pub previous: Pos2,
    /// Most recent pointer position, used for the shape preview
    pub latest: Pos2,
}

impl Interaction {
    fn new(point: Pos2) -> Self {
        Self {
            start: point,
            previous: point,
            latest: point,
        }
    }
}

/// Owns the drawing and turns pointer events into bitmap mutations
#[derive(Debug, Clone)]
pub struct CanvasController {
    bitmap: Bitmap,
    tool: Tool,
    style: StrokeStyle,
    interaction: Option<Interaction>,
    /// Bumped on every bitmap mutation
    revision: u64,
}

impl Default for CanvasController {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl CanvasController {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            bitmap: Bitmap::new(width, height),
            tool: Tool::default(),
            style: StrokeStyle::default(),
            interaction: None,
            revision: 0,
        }
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    pub fn color(&self) -> Color32 {
        self.style.color()
    }

    pub fn stroke_width(&self) -> StrokeWidth {
        self.style.width()
    }

    pub fn interaction(&self) -> Option<&Interaction> {
        self.interaction.as_ref()
    }

    pub fn is_pointer_down(&self) -> bool {
        self.interaction.is_some()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Switching tools abandons any stroke in progress
    pub fn select_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            log::info!("Tool selected: {}", tool.name());
        }
        self.tool = tool;
        self.interaction = None;
    }

    pub fn set_color(&mut self, color: Color32) {
        self.style.set_color(color);
    }

    pub fn set_stroke_width(&mut self, width: StrokeWidth) {
        self.style.set_width(width);
    }

    pub fn execute(&mut self, command: Command) {
        log::debug!("Executing command: {}", command.label());
        match command {
            Command::SelectTool(tool) => self.select_tool(tool),
            Command::SetColor(color) => self.set_color(color),
            Command::SetStrokeWidth(width) => self.set_stroke_width(width),
            Command::Clear => self.clear(),
        }
    }

    pub fn on_pointer_down(&mut self, point: Pos2) {
        self.interaction = Some(Interaction::new(point));

        if self.tool.is_freehand() {
            let (color, width) = self.paint();
            self.bitmap.draw_dot(point, color, width);
            self.touch();
        }
    }

    pub fn on_pointer_move(&mut self, point: Pos2) {
        let Some(interaction) = self.interaction.as_mut() else {
            return;
        };
        let from = interaction.previous;
        interaction.latest = point;

        if self.tool.is_freehand() {
            interaction.previous = point;
            let (color, width) = self.paint();
            self.bitmap.draw_line(from, point, color, width);
            self.touch();
        }
    }

    pub fn on_pointer_up(&mut self, point: Pos2) {
        let Some(interaction) = self.interaction.take() else {
            return;
        };

        if let Some(geometry) = PreviewGeometry::for_tool(self.tool, interaction.start, point) {
            let (color, width) = self.paint();
            let shape = ShapePreview {
                geometry,
                color,
                width,
            };
            log::debug!("Committing {:?}", shape.geometry);
            shape.commit(&mut self.bitmap);
            self.touch();
        }
    }

    /// Outline to draw over the canvas while a shape tool is dragged
    pub fn render_preview(&self) -> Option<ShapePreview> {
        let interaction = self.interaction.as_ref()?;
        let geometry = PreviewGeometry::for_tool(self.tool, interaction.start, interaction.latest)?;
        Some(ShapePreview {
            geometry,
            color: self.style.color(),
            width: self.style.width().as_f32(),
        })
    }

    pub fn clear(&mut self) {
        log::info!("Clearing canvas");
        self.bitmap.fill(Color32::WHITE);
        self.touch();
    }

    /// Stretch the drawing onto a new surface size. The content is resampled.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.bitmap.size() == [width.max(1), height.max(1)] {
            return;
        }
        log::info!(
            "Resizing canvas from {}x{} to {}x{}",
            self.bitmap.width(),
            self.bitmap.height(),
            width,
            height
        );
        self.bitmap = self.bitmap.resized(width, height);
        self.touch();
    }

    /// PNG encoding of the current bitmap
    pub fn export_bitmap(&self) -> PaintResult<Vec<u8>> {
        self.bitmap.encode_png()
    }

    /// Write the drawing as PNG, adding a `.png` extension when missing.
    /// Returns the path actually written.
    pub fn save_png(&self, path: impl AsRef<Path>) -> PaintResult<PathBuf> {
        let path = with_png_extension(path.as_ref());
        let bytes = self.export_bitmap()?;
        std::fs::write(&path, bytes).map_err(|source| PaintError::Io {
            path: path.clone(),
            source,
        })?;
        log::info!("Saved drawing to {}", path.display());
        Ok(path)
    }

    /// Color and width for the active tool. The eraser paints white.
    fn paint(&self) -> (Color32, f32) {
        let color = match self.tool {
            Tool::Eraser => Color32::WHITE,
            _ => self.style.color(),
        };
        (color, self.style.width().as_f32())
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

fn with_png_extension(path: &Path) -> PathBuf {
    let has_png = path
        .extension()
        .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case("png"));
    if has_png {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_owned();
        name.push(".png");
        PathBuf::from(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_png_extension() {
        assert_eq!(with_png_extension(Path::new("a/drawing")), PathBuf::from("a/drawing.png"));
        assert_eq!(with_png_extension(Path::new("drawing.PNG")), PathBuf::from("drawing.PNG"));
        assert_eq!(with_png_extension(Path::new("drawing.jpg")), PathBuf::from("drawing.jpg.png"));
    }

    #[test]
    fn test_move_without_press_is_ignored() {
        let mut canvas = CanvasController::new(20, 20);
        canvas.on_pointer_move(pos2(5.0, 5.0));
        canvas.on_pointer_up(pos2(5.0, 5.0));
        assert_eq!(canvas.revision(), 0);
        assert!(!canvas.is_pointer_down());
    }

    #[test]
    fn test_interaction_tracks_points() {
        let mut canvas = CanvasController::new(20, 20);
        canvas.select_tool(Tool::Line);
        canvas.on_pointer_down(pos2(1.0, 2.0));
        canvas.on_pointer_move(pos2(3.0, 4.0));

        let interaction = canvas.interaction().copied().unwrap();
        assert_eq!(interaction.start, pos2(1.0, 2.0));
        assert_eq!(interaction.latest, pos2(3.0, 4.0));
        // Shape tools never advance the freehand anchor
        assert_eq!(interaction.previous, pos2(1.0, 2.0));
    }

    #[test]
    fn test_same_size_resize_keeps_revision() {
        let mut canvas = CanvasController::new(20, 10);
        canvas.resize(20, 10);
        assert_eq!(canvas.revision(), 0);
        canvas.resize(0, 0);
        assert_eq!(canvas.bitmap().size(), [1, 1]);
        assert_eq!(canvas.revision(), 1);
    }

    #[test]
    fn test_execute_commands() {
        let mut canvas = CanvasController::new(8, 8);
        canvas.execute(Command::SelectTool(Tool::Eraser));
        canvas.execute(Command::SetColor(Color32::RED));
        canvas.execute(Command::SetStrokeWidth(StrokeWidth::ALL[0]));
        assert_eq!(canvas.tool(), Tool::Eraser);
        assert_eq!(canvas.color(), Color32::RED);
        assert_eq!(canvas.stroke_width().pixels(), 1);

        canvas.execute(Command::Clear);
        assert_eq!(canvas.revision(), 1);
    }
}
