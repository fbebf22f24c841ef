use crate::bitmap::Bitmap;
use crate::tools::Tool;
use egui::{Color32, Pos2, Rect};

const OVAL_PREVIEW_SEGMENTS: usize = 64;

/// Axis-aligned box spanned by two corners in either order.
/// Equivalent to `min(x1,x2), min(y1,y2), |x1-x2|, |y1-y2|`.
pub fn bounding_box(a: Pos2, b: Pos2) -> Rect {
    Rect::from_two_pos(a, b)
}

/// Outline geometry of a shape tool between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PreviewGeometry {
    Rectangle(Rect),
    Oval(Rect),
    Line { from: Pos2, to: Pos2 },
}

impl PreviewGeometry {
    /// Geometry `tool` would produce dragging from `start` to `end`.
    /// Freehand tools have no shape.
    pub fn for_tool(tool: Tool, start: Pos2, end: Pos2) -> Option<Self> {
        match tool {
            Tool::Rectangle => Some(Self::Rectangle(bounding_box(start, end))),
            Tool::Oval => Some(Self::Oval(bounding_box(start, end))),
            Tool::Line => Some(Self::Line { from: start, to: end }),
            Tool::Pencil | Tool::Eraser => None,
        }
    }
}

/// Transient outline drawn over the canvas while a shape tool is dragged
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapePreview {
    pub geometry: PreviewGeometry,
    pub color: Color32,
    pub width: f32,
}

impl ShapePreview {
    /// Bake the outline into `bitmap`
    pub fn commit(&self, bitmap: &mut Bitmap) {
        match self.geometry {
            PreviewGeometry::Rectangle(rect) => bitmap.draw_rect_outline(rect, self.color, self.width),
            PreviewGeometry::Oval(rect) => bitmap.draw_oval_outline(rect, self.color, self.width),
            PreviewGeometry::Line { from, to } => bitmap.draw_line(from, to, self.color, self.width),
        }
    }

    /// egui shape for the overlay. `to_screen` maps canvas to screen space
    /// and `scale` is the canvas-to-screen zoom.
    pub fn to_egui_shape(&self, to_screen: impl Fn(Pos2) -> Pos2, scale: f32) -> egui::Shape {
        let stroke = egui::Stroke::new(self.width * scale, self.color);
        match self.geometry {
            PreviewGeometry::Rectangle(rect) => egui::Shape::rect_stroke(
                Rect::from_two_pos(to_screen(rect.min), to_screen(rect.max)),
                0.0,
                stroke,
            ),
            PreviewGeometry::Oval(rect) => {
                let screen = Rect::from_two_pos(to_screen(rect.min), to_screen(rect.max));
                let center = screen.center();
                let radius = screen.size() * 0.5;
                let points = (0..OVAL_PREVIEW_SEGMENTS)
                    .map(|i| {
                        let angle = std::f32::consts::TAU * i as f32 / OVAL_PREVIEW_SEGMENTS as f32;
                        center + egui::vec2(radius.x * angle.cos(), radius.y * angle.sin())
                    })
                    .collect();
                egui::Shape::closed_line(points, stroke)
            }
            PreviewGeometry::Line { from, to } => {
                egui::Shape::line_segment([to_screen(from), to_screen(to)], stroke)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_bounding_box_any_drag_direction() {
        let rect = bounding_box(pos2(50.0, 40.0), pos2(10.0, 10.0));
        assert_eq!(rect.min, pos2(10.0, 10.0));
        assert_eq!(rect.width(), 40.0);
        assert_eq!(rect.height(), 30.0);

        let rect = bounding_box(pos2(10.0, 40.0), pos2(50.0, 10.0));
        assert_eq!(rect.min, pos2(10.0, 10.0));
        assert_eq!(rect.max, pos2(50.0, 40.0));
    }

    #[test]
    fn test_zero_size_box() {
        let rect = bounding_box(pos2(7.0, 7.0), pos2(7.0, 7.0));
        assert_eq!(rect.width(), 0.0);
        assert_eq!(rect.height(), 0.0);
    }

    #[test]
    fn test_geometry_for_tool() {
        let a = pos2(1.0, 2.0);
        let b = pos2(3.0, 4.0);
        assert_eq!(
            PreviewGeometry::for_tool(Tool::Line, a, b),
            Some(PreviewGeometry::Line { from: a, to: b })
        );
        assert!(matches!(
            PreviewGeometry::for_tool(Tool::Oval, b, a),
            Some(PreviewGeometry::Oval(rect)) if rect.min == a && rect.max == b
        ));
        assert_eq!(PreviewGeometry::for_tool(Tool::Pencil, a, b), None);
    }
}
