//! Sprite-sheet composition - combines a frame list into one horizontal strip

use crate::blend::draw_over;
use crate::error::{check_not_empty, FramesError, Result};
use image::{Rgba, RgbaImage};
use log::debug;

/// Transparent color used for the sheet background
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Size of one sheet cell: the largest frame width and height.
pub fn cell_size(frames: &[RgbaImage]) -> (u32, u32) {
    let width = frames.iter().map(|f| f.width()).max().unwrap_or(0);
    let height = frames.iter().map(|f| f.height()).max().unwrap_or(0);
    (width, height)
}

/// Render a frame list into a single-row sprite sheet.
///
/// Every frame gets a cell of the largest frame width and height and is
/// centered within it using integer halves, so an odd difference leaves the
/// extra pixel on the right or bottom. The background is transparent.
///
/// # Examples
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use frames::spritesheet::create_sprite_sheet;
///
/// let frame = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]));
/// let sheet = create_sprite_sheet(&[frame.clone(), frame.clone(), frame]).unwrap();
/// assert_eq!(sheet.dimensions(), (6, 2));
/// ```
pub fn create_sprite_sheet(frames: &[RgbaImage]) -> Result<RgbaImage> {
    check_not_empty("frameImages", frames)?;

    let (cell_width, cell_height) = cell_size(frames);
    let sheet_width = u32::try_from(frames.len())
        .ok()
        .and_then(|count| cell_width.checked_mul(count))
        .ok_or(FramesError::CanvasTooLarge {
            width: cell_width as u64 * frames.len() as u64,
            height: cell_height as u64,
        })?;
    let mut sheet = RgbaImage::from_pixel(sheet_width, cell_height, TRANSPARENT);

    debug!(
        "composing {} frames into {}x{} sheet",
        frames.len(),
        sheet_width,
        cell_height
    );

    for (i, frame) in frames.iter().enumerate() {
        let dest_x = cell_width * i as u32 + cell_width / 2 - frame.width() / 2;
        let dest_y = cell_height / 2 - frame.height() / 2;
        draw_over(&mut sheet, frame, dest_x, dest_y);
    }

    Ok(sheet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slice::frame_list_from_sheet;

    fn make_solid_frame(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
        RgbaImage::from_pixel(width, height, color)
    }

    #[test]
    fn test_empty_frames_fails() {
        let err = create_sprite_sheet(&[]).unwrap_err();
        assert!(matches!(err, FramesError::EmptyFrames { .. }));
    }

    #[test]
    fn test_single_frame() {
        let red = Rgba([255, 0, 0, 255]);
        let sheet = create_sprite_sheet(&[make_solid_frame(3, 3, red)]).unwrap();

        assert_eq!(sheet.dimensions(), (3, 3));
        assert_eq!(*sheet.get_pixel(0, 0), red);
        assert_eq!(*sheet.get_pixel(2, 2), red);
    }

    #[test]
    fn test_four_frames_horizontal() {
        let red = Rgba([255, 0, 0, 255]);
        let green = Rgba([0, 255, 0, 255]);
        let blue = Rgba([0, 0, 255, 255]);
        let yellow = Rgba([255, 255, 0, 255]);

        let frames = vec![
            make_solid_frame(2, 2, red),
            make_solid_frame(2, 2, green),
            make_solid_frame(2, 2, blue),
            make_solid_frame(2, 2, yellow),
        ];

        let sheet = create_sprite_sheet(&frames).unwrap();

        assert_eq!(sheet.width(), 8);
        assert_eq!(sheet.height(), 2);
        assert_eq!(*sheet.get_pixel(0, 0), red);
        assert_eq!(*sheet.get_pixel(2, 0), green);
        assert_eq!(*sheet.get_pixel(4, 0), blue);
        assert_eq!(*sheet.get_pixel(6, 0), yellow);
    }

    #[test]
    fn test_smaller_frame_centered() {
        let red = Rgba([255, 0, 0, 255]);
        let green = Rgba([0, 255, 0, 255]);

        let frames = vec![make_solid_frame(2, 2, red), make_solid_frame(4, 4, green)];
        let sheet = create_sprite_sheet(&frames).unwrap();

        assert_eq!(sheet.dimensions(), (8, 4));

        // Frame 0 (2x2) sits at (1, 1) inside its 4x4 cell
        assert_eq!(*sheet.get_pixel(0, 0), TRANSPARENT);
        assert_eq!(*sheet.get_pixel(1, 1), red);
        assert_eq!(*sheet.get_pixel(2, 2), red);
        assert_eq!(*sheet.get_pixel(3, 3), TRANSPARENT);

        // Frame 1 fills its cell
        assert_eq!(*sheet.get_pixel(4, 0), green);
        assert_eq!(*sheet.get_pixel(7, 3), green);
    }

    #[test]
    fn test_odd_difference_rounds_toward_origin() {
        let red = Rgba([255, 0, 0, 255]);
        let frames = vec![make_solid_frame(3, 1, red), make_solid_frame(1, 2, red)];
        let sheet = create_sprite_sheet(&frames).unwrap();

        // cell = 3x2; frame 1 (1x2) at x = 3 + 1 - 0 = 4, y = 1 - 1 = 0
        assert_eq!(sheet.dimensions(), (6, 2));
        assert_eq!(*sheet.get_pixel(4, 0), red);
        assert_eq!(*sheet.get_pixel(3, 0), TRANSPARENT);
        assert_eq!(*sheet.get_pixel(5, 1), TRANSPARENT);

        // frame 0 (3x1) at y = 1 - 0 = 1
        assert_eq!(*sheet.get_pixel(0, 0), TRANSPARENT);
        assert_eq!(*sheet.get_pixel(0, 1), red);
    }

    #[test]
    fn test_even_cell_odd_frame() {
        let red = Rgba([255, 0, 0, 255]);
        let frames = vec![make_solid_frame(4, 4, red), make_solid_frame(1, 1, red)];
        let sheet = create_sprite_sheet(&frames).unwrap();

        // cell 4x4; frame 1 at x = 4 + 2 - 0 = 6, y = 2
        assert_eq!(*sheet.get_pixel(6, 2), red);
        assert_eq!(*sheet.get_pixel(5, 1), TRANSPARENT);
    }

    #[test]
    fn test_sheet_slices_back_to_frames() {
        let frames: Vec<RgbaImage> = (0..3u8)
            .map(|i| RgbaImage::from_fn(2, 3, |x, y| Rgba([i, x as u8, y as u8, 255])))
            .collect();

        let sheet = create_sprite_sheet(&frames).unwrap();
        let sliced = frame_list_from_sheet(&sheet, 0, 0, 2, 3, 3).unwrap();
        assert_eq!(sliced, frames);
    }

    #[test]
    fn test_sheet_width_overflow_fails() {
        // Zero-height frames keep the buffers empty
        let wide = RgbaImage::new(1 << 31, 0);
        let err = create_sprite_sheet(&[wide.clone(), wide]).unwrap_err();
        assert!(matches!(err, FramesError::CanvasTooLarge { width, .. } if width == 1 << 32));
    }

    #[test]
    fn test_cell_size() {
        let frames = vec![RgbaImage::new(2, 5), RgbaImage::new(4, 1)];
        assert_eq!(cell_size(&frames), (4, 5));
        assert_eq!(cell_size(&[]), (0, 0));
    }
}
