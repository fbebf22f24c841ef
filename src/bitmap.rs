//! RGBA pixel buffer with the stroke primitives the canvas needs.
//!
//! Coordinates are pixel indices and every pixel is sampled at its center.
//! A primitive paints a pixel (opaque, no blending, no anti-aliasing) when
//! the pixel lies within half the stroke width of the primitive's geometry.
//! Ovals are the exception: their curve is first traced through whole
//! pixels and a round dot is stamped at each one.
//! Anything that falls outside the buffer is clipped.

use crate::error::PaintResult;
use egui::{Color32, Pos2, Rect};
use image::{ImageFormat, Rgba, RgbaImage, imageops};
use std::io::Cursor;

/// Strokes thinner than one pixel still cover the pixel they pass through
const MIN_HALF_WIDTH: f32 = 0.5;
const EPSILON: f32 = 1e-4;

#[derive(Clone, Debug, PartialEq)]
pub struct Bitmap {
    image: RgbaImage,
}

impl Bitmap {
    /// Opaque white bitmap. Zero dimensions are bumped to one pixel.
    pub fn new(width: u32, height: u32) -> Self {
        let image = RgbaImage::from_pixel(width.max(1), height.max(1), to_rgba(Color32::WHITE));
        Self { image }
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn size(&self) -> [u32; 2] {
        [self.width(), self.height()]
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        self.image.get_pixel_checked(x, y).map(|p| {
            let [r, g, b, a] = p.0;
            Color32::from_rgba_unmultiplied(r, g, b, a)
        })
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color32) {
        if let Some(pixel) = self.image.get_pixel_mut_checked(x, y) {
            *pixel = to_rgba(color);
        }
    }

    pub fn fill(&mut self, color: Color32) {
        let rgba = to_rgba(color);
        for pixel in self.image.pixels_mut() {
            *pixel = rgba;
        }
    }

    /// A zero-length round-capped stroke
    pub fn draw_dot(&mut self, center: Pos2, color: Color32, width: f32) {
        self.draw_line(center, center, color, width);
    }

    /// Straight segment with round caps. Successive segments sharing an
    /// endpoint therefore meet with a round join.
    pub fn draw_line(&mut self, from: Pos2, to: Pos2, color: Color32, width: f32) {
        let bounds = Rect::from_two_pos(from, to);
        self.stamp(bounds, width, color, |p| distance_to_segment(p, from, to));
    }

    /// Outline of `rect`, centered on its edges
    pub fn draw_rect_outline(&mut self, rect: Rect, color: Color32, width: f32) {
        let center = rect.center();
        let half = rect.size() * 0.5;
        self.stamp(rect, width, color, |p| {
            sdf_box(p.x - center.x, p.y - center.y, half.x, half.y).abs()
        });
    }

    /// Outline of the ellipse inscribed in `rect`. The curve is traced
    /// through whole pixels, so a width-1 outline is one closed 8-connected
    /// loop however thin the box.
    pub fn draw_oval_outline(&mut self, rect: Rect, color: Color32, width: f32) {
        let rx = rect.width() * 0.5;
        let ry = rect.height() * 0.5;
        if rx < EPSILON || ry < EPSILON {
            // Flattened ellipse: its outline is the segment across the box
            self.draw_line(rect.min, rect.max, color, width);
            return;
        }
        for (x, y) in trace_ellipse(rect.center(), rx, ry) {
            self.draw_dot(Pos2::new(x as f32, y as f32), color, width);
        }
    }

    /// New white bitmap of the given size with this one stretched into it
    pub fn resized(&self, width: u32, height: u32) -> Bitmap {
        let mut fresh = Bitmap::new(width, height);
        let scaled = imageops::resize(
            &self.image,
            fresh.width(),
            fresh.height(),
            imageops::FilterType::Nearest,
        );
        imageops::overlay(&mut fresh.image, &scaled, 0, 0);
        fresh
    }

    pub fn encode_png(&self) -> PaintResult<Vec<u8>> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    pub fn decode_png(bytes: &[u8]) -> PaintResult<Bitmap> {
        let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)?;
        Ok(Self::from_image(image.into_rgba8()))
    }

    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied(
            [self.width() as usize, self.height() as usize],
            self.image.as_raw(),
        )
    }

    /// Paint every pixel whose center lies within half of `width` of the
    /// geometry described by `distance`. `bounds` must enclose the geometry.
    fn stamp(&mut self, bounds: Rect, width: f32, color: Color32, distance: impl Fn(Pos2) -> f32) {
        let half = (width * 0.5).max(MIN_HALF_WIDTH);
        let pad = half + 1.0;

        let max_x = self.width() as i64 - 1;
        let max_y = self.height() as i64 - 1;
        let x0 = ((bounds.min.x - pad).floor() as i64).max(0);
        let y0 = ((bounds.min.y - pad).floor() as i64).max(0);
        let x1 = ((bounds.max.x + pad).ceil() as i64).min(max_x);
        let y1 = ((bounds.max.y + pad).ceil() as i64).min(max_y);
        if x0 > x1 || y0 > y1 {
            return;
        }

        let rgba = to_rgba(color);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let p = Pos2::new(x as f32, y as f32);
                if distance(p) <= half + EPSILON {
                    self.image.put_pixel(x as u32, y as u32, rgba);
                }
            }
        }
    }
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba(color.to_srgba_unmultiplied())
}

fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq < EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Signed distance to a box centered at the origin with half-extents (hx, hy)
fn sdf_box(px: f32, py: f32, hx: f32, hy: f32) -> f32 {
    let dx = px.abs() - hx;
    let dy = py.abs() - hy;
    let outside = (dx.max(0.0) * dx.max(0.0) + dy.max(0.0) * dy.max(0.0)).sqrt();
    let inside = dx.max(dy).min(0.0);
    outside + inside
}

/// Pixels along the ellipse centered at `center`, in order around the curve.
/// Samples are rounded to the nearest pixel and neighbouring samples are
/// joined with integer line steps, which closes any gap.
fn trace_ellipse(center: Pos2, rx: f32, ry: f32) -> Vec<(i64, i64)> {
    // Perimeter is below 4 * (rx + ry), so samples land at most a pixel apart
    let steps = (4.0 * (rx + ry)).ceil().max(8.0) as usize;
    let samples: Vec<(i64, i64)> = (0..steps)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / steps as f32;
            (
                (center.x + rx * angle.cos()).round() as i64,
                (center.y + ry * angle.sin()).round() as i64,
            )
        })
        .collect();

    let mut pixels = Vec::with_capacity(steps * 2);
    for (i, &from) in samples.iter().enumerate() {
        let to = samples[(i + 1) % samples.len()];
        trace_segment(from, to, &mut pixels);
    }
    pixels
}

/// Bresenham walk from `from` to `to`, skipping a repeat of the last pixel
fn trace_segment(from: (i64, i64), to: (i64, i64), out: &mut Vec<(i64, i64)>) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        if out.last() != Some(&(x, y)) {
            out.push((x, y));
        }
        if (x, y) == to {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
