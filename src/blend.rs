//! Source-over alpha compositing

use image::{Rgba, RgbaImage};

/// Composite `src` over `dst` using Porter-Duff "source over".
pub(crate) fn composite_over(src: &Rgba<u8>, dst: &Rgba<u8>) -> Rgba<u8> {
    if src[3] == 0 {
        return *dst;
    }
    if src[3] == 255 || dst[3] == 0 {
        return *src;
    }

    let src_alpha = src[3] as f32 / 255.0;
    let dst_alpha = dst[3] as f32 / 255.0;

    // out_alpha = src_alpha + dst_alpha * (1 - src_alpha)
    let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);

    let composite = |s: u8, d: u8| -> u8 {
        let s = s as f32 / 255.0;
        let d = d as f32 / 255.0;
        let result = (s * src_alpha + d * dst_alpha * (1.0 - src_alpha)) / out_alpha;
        (result.clamp(0.0, 1.0) * 255.0).round() as u8
    };

    Rgba([
        composite(src[0], dst[0]),
        composite(src[1], dst[1]),
        composite(src[2], dst[2]),
        (out_alpha * 255.0).round() as u8,
    ])
}

/// Draw `image` onto `canvas` with its top-left corner at (`x`, `y`).
///
/// Pixels falling outside the canvas are clipped.
pub(crate) fn draw_over(canvas: &mut RgbaImage, image: &RgbaImage, x: u32, y: u32) {
    let canvas_width = canvas.width();
    let canvas_height = canvas.height();

    for (sy, row) in image.rows().enumerate() {
        let dest_y = y + sy as u32;
        if dest_y >= canvas_height {
            break;
        }

        for (sx, pixel) in row.enumerate() {
            let dest_x = x + sx as u32;
            if dest_x >= canvas_width {
                break;
            }
            let dst = canvas.get_pixel_mut(dest_x, dest_y);
            *dst = composite_over(pixel, dst);
        }
    }
}
