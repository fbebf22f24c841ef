use egui::Color32;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the fixed stroke widths offered by the size selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct StrokeWidth(u32);

impl StrokeWidth {
    pub const ALL: [StrokeWidth; 7] = [
        StrokeWidth(1),
        StrokeWidth(3),
        StrokeWidth(5),
        StrokeWidth(8),
        StrokeWidth(10),
        StrokeWidth(15),
        StrokeWidth(20),
    ];

    /// Returns the width if `pixels` is one of the offered sizes
    pub fn new(pixels: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|w| w.0 == pixels)
    }

    pub fn pixels(self) -> u32 {
        self.0
    }

    pub fn as_f32(self) -> f32 {
        self.0 as f32
    }
}

impl Default for StrokeWidth {
    fn default() -> Self {
        StrokeWidth(5)
    }
}

impl fmt::Display for StrokeWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for StrokeWidth {
    type Error = String;

    fn try_from(pixels: u32) -> Result<Self, Self::Error> {
        Self::new(pixels).ok_or_else(|| format!("unsupported stroke width: {pixels}"))
    }
}

impl From<StrokeWidth> for u32 {
    fn from(width: StrokeWidth) -> Self {
        width.0
    }
}

/// Color and width applied to the next stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    color: Color32,
    width: StrokeWidth,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            width: StrokeWidth::default(),
        }
    }
}

impl StrokeStyle {
    pub fn new(color: Color32, width: StrokeWidth) -> Self {
        Self {
            color: opaque(color),
            width,
        }
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// Strokes are always opaque; any alpha is dropped
    pub fn set_color(&mut self, color: Color32) {
        self.color = opaque(color);
    }

    pub fn width(&self) -> StrokeWidth {
        self.width
    }

    pub fn set_width(&mut self, width: StrokeWidth) {
        self.width = width;
    }
}

fn opaque(color: Color32) -> Color32 {
    let [r, g, b, _] = color.to_srgba_unmultiplied();
    Color32::from_rgb(r, g, b)
}

/// Text color that stays readable on top of `background`
pub fn contrast_color(background: Color32) -> Color32 {
    let luminance = (0.299 * background.r() as f32
        + 0.587 * background.g() as f32
        + 0.114 * background.b() as f32)
        / 255.0;
    if luminance > 0.5 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}
