//! Geometric frame transforms - flipping and rotation into frame sets

use crate::blend::composite_over;
use crate::config::RotationFilter;
use crate::error::{check_at_least_one, FramesError, Result};
use crate::slice::slice_strip;
use image::{imageops, Rgba, RgbaImage};
use log::debug;
use std::f64::consts::PI;

/// Transparent color used for the rotation canvas
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Mirror an image left to right: output `(x, y)` is source `(w - 1 - x, y)`.
pub fn flip_horizontal(image: &RgbaImage) -> RgbaImage {
    imageops::flip_horizontal(image)
}

/// Mirror an image top to bottom: output `(x, y)` is source `(x, h - 1 - y)`.
pub fn flip_vertical(image: &RgbaImage) -> RgbaImage {
    imageops::flip_vertical(image)
}

/// Flip every frame horizontally, preserving order.
pub fn flip_all_horizontal(frames: &[RgbaImage]) -> Vec<RgbaImage> {
    frames.iter().map(flip_horizontal).collect()
}

/// Flip every frame vertically, preserving order.
pub fn flip_all_vertical(frames: &[RgbaImage]) -> Vec<RgbaImage> {
    frames.iter().map(flip_vertical).collect()
}

/// Render `steps` rotations of `image` as a frame list.
///
/// Frame `i` is the image turned by `i * 360 / steps` degrees about its center
/// `(w / 2, h / 2)` and drawn at the left edge of a square cell of side
/// `max(w, h)`. Angles follow screen coordinates (y grows downward), so a
/// positive angle turns clockwise on screen. Cells are drawn on one strip and
/// re-sliced, so content turned past a cell edge is clipped by the strip or
/// lands in the neighbouring cell.
pub fn rotate(image: &RgbaImage, steps: i32, filter: RotationFilter) -> Result<Vec<RgbaImage>> {
    let steps = check_at_least_one("steps", steps)?;

    let (width, height) = image.dimensions();
    let size = width.max(height);
    let strip_width = size.checked_mul(steps).ok_or(FramesError::CanvasTooLarge {
        width: size as u64 * steps as u64,
        height: size as u64,
    })?;
    if width == 0 || height == 0 {
        return Err(FramesError::ZeroArea { width, height });
    }
    let mut strip = RgbaImage::from_pixel(strip_width, size, TRANSPARENT);

    debug!(
        "rotating {}x{} image through {} steps ({:?})",
        width, height, steps, filter
    );

    let step_angle = 2.0 / steps as f64 * PI;
    for i in 0..steps {
        let rotation = Rotation::new(i as f64 * step_angle, width, height, (size * i) as f64);
        rotation.draw(&mut strip, image, filter);
    }

    slice_strip(&strip, 0, 0, size, size, steps)
}

/// Placement of one rotated copy on the strip.
struct Rotation {
    cos: f64,
    sin: f64,
    center_x: f64,
    center_y: f64,
    offset_x: f64,
}

impl Rotation {
    fn new(angle: f64, width: u32, height: u32, offset_x: f64) -> Self {
        // Exact quadrant turns get exact coefficients; float noise would
        // otherwise shift samples that land on integer source coordinates.
        let (mut sin, mut cos) = angle.sin_cos();
        if sin == 1.0 || sin == -1.0 {
            cos = 0.0;
        } else if cos == 1.0 || cos == -1.0 {
            sin = 0.0;
        }

        Self {
            cos,
            sin,
            center_x: width as f64 / 2.0,
            center_y: height as f64 / 2.0,
            offset_x,
        }
    }

    /// Map a source point onto the strip.
    fn forward(&self, x: f64, y: f64) -> (f64, f64) {
        let dx = x - self.center_x;
        let dy = y - self.center_y;
        (
            self.cos * dx - self.sin * dy + self.center_x + self.offset_x,
            self.sin * dx + self.cos * dy + self.center_y,
        )
    }

    /// Map a strip point back into source space.
    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let dx = x - self.offset_x - self.center_x;
        let dy = y - self.center_y;
        (
            self.cos * dx + self.sin * dy + self.center_x,
            -self.sin * dx + self.cos * dy + self.center_y,
        )
    }

    fn draw(&self, strip: &mut RgbaImage, image: &RgbaImage, filter: RotationFilter) {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return;
        }

        // Bounding box of the rotated image, clamped to the strip
        let corners = [
            self.forward(0.0, 0.0),
            self.forward(width as f64, 0.0),
            self.forward(0.0, height as f64),
            self.forward(width as f64, height as f64),
        ];
        let min_x = corners.iter().map(|c| c.0).fold(f64::INFINITY, f64::min);
        let max_x = corners.iter().map(|c| c.0).fold(f64::NEG_INFINITY, f64::max);
        let min_y = corners.iter().map(|c| c.1).fold(f64::INFINITY, f64::min);
        let max_y = corners.iter().map(|c| c.1).fold(f64::NEG_INFINITY, f64::max);

        let x0 = min_x.floor().max(0.0) as u32;
        let y0 = min_y.floor().max(0.0) as u32;
        let x1 = (max_x.ceil().max(0.0) as u32).min(strip.width());
        let y1 = (max_y.ceil().max(0.0) as u32).min(strip.height());

        for y in y0..y1 {
            for x in x0..x1 {
                // Sample at pixel centers
                let (sx, sy) = self.inverse(x as f64 + 0.5, y as f64 + 0.5);
                let sample = match filter {
                    RotationFilter::Nearest => sample_nearest(image, sx, sy),
                    RotationFilter::Bilinear => sample_bilinear(image, sx, sy),
                };
                if let Some(src) = sample {
                    let dst = strip.get_pixel_mut(x, y);
                    *dst = composite_over(&src, dst);
                }
            }
        }
    }
}

/// Pixel covering source point (`x`, `y`), if inside the image.
fn sample_nearest(image: &RgbaImage, x: f64, y: f64) -> Option<Rgba<u8>> {
    if x < 0.0 || y < 0.0 || x >= image.width() as f64 || y >= image.height() as f64 {
        return None;
    }
    Some(*image.get_pixel(x as u32, y as u32))
}

/// Bilinear blend of the four pixels around source point (`x`, `y`).
///
/// Colors are weighted by alpha so transparent neighbours do not darken edges.
fn sample_bilinear(image: &RgbaImage, x: f64, y: f64) -> Option<Rgba<u8>> {
    let (width, height) = image.dimensions();
    if x < 0.0 || y < 0.0 || x >= width as f64 || y >= height as f64 {
        return None;
    }

    let fx = (x - 0.5).max(0.0);
    let fy = (y - 0.5).max(0.0);
    let x0 = (fx.floor() as u32).min(width - 1);
    let y0 = (fy.floor() as u32).min(height - 1);
    let x1 = (x0 + 1).min(width - 1);
    let y1 = (y0 + 1).min(height - 1);
    let tx = fx - x0 as f64;
    let ty = fy - y0 as f64;

    let taps = [
        (image.get_pixel(x0, y0), (1.0 - tx) * (1.0 - ty)),
        (image.get_pixel(x1, y0), tx * (1.0 - ty)),
        (image.get_pixel(x0, y1), (1.0 - tx) * ty),
        (image.get_pixel(x1, y1), tx * ty),
    ];

    let mut alpha = 0.0;
    let mut color = [0.0f64; 3];
    for (pixel, weight) in taps {
        let a = pixel[3] as f64 * weight;
        alpha += a;
        for c in 0..3 {
            color[c] += pixel[c] as f64 * a;
        }
    }

    if alpha <= 0.0 {
        return Some(TRANSPARENT);
    }

    let channel = |v: f64| v.round().clamp(0.0, 255.0) as u8;
    Some(Rgba([
        channel(color[0] / alpha),
        channel(color[1] / alpha),
        channel(color[2] / alpha),
        channel(alpha),
    ]))
}
