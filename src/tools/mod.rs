use serde::{Deserialize, Serialize};

mod shape;
pub use shape::{PreviewGeometry, ShapePreview, bounding_box};

/// Enum representing all palette tools.
/// Pencil and eraser draw freehand; the rest draw a shape on release.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Pencil,
    Eraser,
    Rectangle,
    Oval,
    Line,
}

impl Tool {
    pub const ALL: [Tool; 5] = [
        Tool::Pencil,
        Tool::Eraser,
        Tool::Rectangle,
        Tool::Oval,
        Tool::Line,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Pencil => "Pencil",
            Self::Eraser => "Eraser",
            Self::Rectangle => "Rectangle",
            Self::Oval => "Oval",
            Self::Line => "Line",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Pencil => "✏",
            Self::Eraser => "⌫",
            Self::Rectangle => "▭",
            Self::Oval => "◯",
            Self::Line => "╱",
        }
    }

    /// Parse a tool by its palette name, ignoring case
    pub fn from_name(name: &str) -> Option<Tool> {
        Self::ALL
            .iter()
            .copied()
            .find(|tool| tool.name().eq_ignore_ascii_case(name))
    }

    pub fn is_freehand(self) -> bool {
        matches!(self, Self::Pencil | Self::Eraser)
    }

    pub fn is_shape(self) -> bool {
        !self.is_freehand()
    }
}
