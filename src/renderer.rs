// src/renderer.rs
use crate::canvas::CanvasController;
use eframe::egui::{self, Color32, Pos2, Rect, TextureHandle, TextureOptions};

const CANVAS_TEXTURE_NAME: &str = "canvas_bitmap";

/// Composites the canvas bitmap and the shape preview onto the screen
pub struct Renderer {
    ctx: egui::Context,
    texture: Option<TextureHandle>,
    /// Canvas revision currently held by `texture`
    uploaded_revision: Option<u64>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("has_texture", &self.texture.is_some())
            .field("uploaded_revision", &self.uploaded_revision)
            .finish()
    }
}

impl Renderer {
    /// Creates a new renderer bound to the app's egui context
    ///
    /// Args:
    ///     ctx (egui::Context): The context textures are uploaded to
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            texture: None,
            uploaded_revision: None,
        }
    }

    pub fn uploaded_revision(&self) -> Option<u64> {
        self.uploaded_revision
    }

    /// Upload the bitmap if it changed since the last frame and return its texture
    pub fn sync_texture(&mut self, canvas: &CanvasController) -> &TextureHandle {
        let revision = canvas.revision();
        let stale = self.uploaded_revision != Some(revision);

        let texture = match self.texture.take() {
            Some(mut texture) => {
                if stale {
                    texture.set(canvas.bitmap().to_color_image(), TextureOptions::NEAREST);
                }
                texture
            }
            None => self.ctx.load_texture(
                CANVAS_TEXTURE_NAME,
                canvas.bitmap().to_color_image(),
                TextureOptions::NEAREST,
            ),
        };
        self.uploaded_revision = Some(revision);
        self.texture.insert(texture)
    }

    /// Renders the bitmap stretched over `rect` plus any active preview
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with
    ///     rect (egui::Rect): The on-screen drawing surface
    ///     canvas (CanvasController): The drawing to show
    pub fn render(&mut self, painter: &egui::Painter, rect: Rect, canvas: &CanvasController) {
        let texture_id = self.sync_texture(canvas).id();
        let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
        painter.image(texture_id, rect, uv, Color32::WHITE);

        if let Some(shape) = preview_shape(rect, canvas) {
            painter.add(shape);
        }
    }
}

/// Screen-space outline of the active shape preview, if any.
/// Pixel centers map to the middle of their on-screen cells.
pub fn preview_shape(rect: Rect, canvas: &CanvasController) -> Option<egui::Shape> {
    let preview = canvas.render_preview()?;
    let [width, height] = canvas.bitmap().size();
    let scale_x = rect.width() / width as f32;
    let scale_y = rect.height() / height as f32;
    let to_screen =
        |p: Pos2| rect.min + egui::vec2((p.x + 0.5) * scale_x, (p.y + 0.5) * scale_y);
    Some(preview.to_egui_shape(to_screen, scale_x.min(scale_y)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::Tool;

    #[test]
    fn test_texture_follows_revision() {
        let ctx = egui::Context::default();
        let mut renderer = Renderer::new(ctx);
        let mut canvas = CanvasController::new(16, 16);

        renderer.sync_texture(&canvas);
        assert_eq!(renderer.uploaded_revision(), Some(0));

        canvas.on_pointer_down(egui::pos2(4.0, 4.0));
        let texture = renderer.sync_texture(&canvas);
        assert_eq!(texture.size(), [16, 16]);
        assert_eq!(renderer.uploaded_revision(), Some(canvas.revision()));
    }

    #[test]
    fn test_render_with_preview() {
        let ctx = egui::Context::default();
        let mut renderer = Renderer::new(ctx.clone());
        let mut canvas = CanvasController::new(100, 100);
        canvas.select_tool(Tool::Oval);
        canvas.on_pointer_down(egui::pos2(10.0, 10.0));
        canvas.on_pointer_move(egui::pos2(60.0, 40.0));

        let layer_id = egui::LayerId::background();
        let rect = Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let painter = egui::Painter::new(ctx, layer_id, rect);

        renderer.render(&painter, rect, &canvas);
        // Previews never touch the bitmap
        assert_eq!(renderer.uploaded_revision(), Some(0));
    }

    fn dragged(tool: Tool) -> CanvasController {
        let mut canvas = CanvasController::new(100, 100);
        canvas.select_tool(tool);
        canvas.on_pointer_down(egui::pos2(10.0, 10.0));
        canvas.on_pointer_move(egui::pos2(50.0, 40.0));
        canvas
    }

    #[test]
    fn test_no_preview_shape_without_drag() {
        let canvas = CanvasController::new(100, 100);
        let rect = Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(200.0, 200.0));
        assert!(preview_shape(rect, &canvas).is_none());
    }

    #[test]
    fn test_rectangle_preview_on_scaled_surface() {
        let canvas = dragged(Tool::Rectangle);
        // Surface twice the bitmap size, offset from the screen origin
        let rect = Rect::from_min_size(egui::pos2(20.0, 30.0), egui::vec2(200.0, 200.0));

        let Some(egui::Shape::Rect(shape)) = preview_shape(rect, &canvas) else {
            panic!("expected a rectangle outline");
        };
        assert_eq!(
            shape.rect,
            Rect::from_min_max(egui::pos2(41.0, 51.0), egui::pos2(121.0, 111.0))
        );
        assert_eq!(shape.fill, Color32::TRANSPARENT);
        assert_eq!(shape.stroke.width, 10.0);
        assert_eq!(shape.stroke.color, Color32::BLACK);
    }

    #[test]
    fn test_line_preview_on_scaled_surface() {
        let canvas = dragged(Tool::Line);
        let rect = Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(200.0, 200.0));

        let Some(egui::Shape::LineSegment { points, stroke }) = preview_shape(rect, &canvas) else {
            panic!("expected a line segment");
        };
        assert_eq!(points, [egui::pos2(21.0, 21.0), egui::pos2(101.0, 81.0)]);
        assert_eq!(stroke.width, 10.0);
    }

    #[test]
    fn test_oval_preview_is_an_unfilled_closed_path() {
        let canvas = dragged(Tool::Oval);
        let rect = Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(200.0, 200.0));

        let Some(egui::Shape::Path(path)) = preview_shape(rect, &canvas) else {
            panic!("expected an oval path");
        };
        assert!(path.closed);
        assert_eq!(path.fill, Color32::TRANSPARENT);
        assert_eq!(path.stroke.width, 10.0);
        assert_eq!(path.points.len(), 64);
        // Rightmost point of the ellipse inscribed in (21,21)-(101,81)
        assert_eq!(path.points[0], egui::pos2(101.0, 51.0));
        assert!(path.points.iter().all(|p| {
            (21.0 - 1e-3..=101.0 + 1e-3).contains(&p.x) && (21.0 - 1e-3..=81.0 + 1e-3).contains(&p.y)
        }));
    }
}
