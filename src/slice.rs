//! Frame-list extraction - indexed files and horizontal sprite-sheet strips

use crate::config::PaddingMode;
use crate::error::{check_at_least_one, check_non_negative, FramesError, Result};
use crate::loader::ImageLoader;
use image::{imageops, RgbaImage};
use log::{debug, trace};

/// Number of digits used to zero-pad frame indices.
///
/// `Legacy` keeps the historical `frames / 10 + 1` rule, which pads one digit
/// more than needed at exact powers of ten (10 frames get 2 digits).
/// `Digits` pads to the width of the largest index, `frames - 1`.
pub fn padding_width(frames: u32, mode: PaddingMode) -> usize {
    match mode {
        PaddingMode::Legacy => (frames / 10) as usize + 1,
        PaddingMode::Digits => frames.saturating_sub(1).max(1).to_string().len(),
    }
}

/// Build a zero-padded frame identifier such as `walk003.png`.
pub fn frame_name(base: &str, index: u32, width: usize, suffix: &str) -> String {
    format!("{}{:0width$}{}", base, index, suffix, width = width)
}

/// Identifiers for `frames` indexed files named `base` + index + `suffix`.
pub fn frame_names(base: &str, suffix: &str, frames: i32, mode: PaddingMode) -> Result<Vec<String>> {
    let frames = check_at_least_one("frames", frames)?;
    let width = padding_width(frames, mode);
    Ok((0..frames).map(|i| frame_name(base, i, width, suffix)).collect())
}

/// Load a frame list from indexed files through `loader`.
///
/// Loader failures are returned as [`FramesError::Load`] with the failing name.
pub fn frame_list_from_files<L: ImageLoader>(
    loader: &L,
    base: &str,
    suffix: &str,
    frames: i32,
    mode: PaddingMode,
) -> Result<Vec<RgbaImage>> {
    let names = frame_names(base, suffix, frames, mode)?;
    debug!("loading {} indexed frames for '{}'", names.len(), base);

    names
        .into_iter()
        .map(|name| {
            loader.load_image(&name).map_err(|source| FramesError::Load { name, source })
        })
        .collect()
}

/// Slice `frames` consecutive `width` x `height` regions from a horizontal strip.
///
/// Frame `k` is the region starting at `(x + k * width, y)`. All arguments are
/// validated before any pixel is read, and the whole strip must lie inside
/// `image`.
///
/// # Examples
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use frames::slice::frame_list_from_sheet;
///
/// let sheet = RgbaImage::from_pixel(8, 2, Rgba([255, 0, 0, 255]));
/// let frames = frame_list_from_sheet(&sheet, 0, 0, 2, 2, 4).unwrap();
/// assert_eq!(frames.len(), 4);
/// assert_eq!(frames[3].dimensions(), (2, 2));
/// ```
pub fn frame_list_from_sheet(
    image: &RgbaImage,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    frames: i32,
) -> Result<Vec<RgbaImage>> {
    let x = check_non_negative("x", x)?;
    let y = check_non_negative("y", y)?;
    let width = check_non_negative("width", width)?;
    let height = check_non_negative("height", height)?;
    let frames = check_at_least_one("frames", frames)?;

    slice_strip(image, x, y, width, height, frames)
}

/// Slice a strip whose arguments are already validated.
pub(crate) fn slice_strip(
    image: &RgbaImage,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    frames: u32,
) -> Result<Vec<RgbaImage>> {
    if width == 0 || height == 0 {
        return Err(FramesError::ZeroArea { width, height });
    }

    let right = x as u64 + width as u64 * frames as u64;
    let bottom = y as u64 + height as u64;
    if right > image.width() as u64 || bottom > image.height() as u64 {
        return Err(FramesError::OutOfBounds {
            x,
            y,
            width,
            height,
            frames,
            source_width: image.width(),
            source_height: image.height(),
        });
    }

    debug!(
        "slicing {} frames of {}x{} at ({}, {}) from {}x{} sheet",
        frames,
        width,
        height,
        x,
        y,
        image.width(),
        image.height()
    );

    Ok((0..frames)
        .map(|frame| {
            let frame_x = x + frame * width;
            trace!("frame {} at x={}", frame, frame_x);
            imageops::crop_imm(image, frame_x, y, width, height).to_image()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::collections::HashMap;

    /// Sheet where every pixel encodes its own coordinates.
    fn make_coordinate_sheet(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 7, 255]))
    }

    #[test]
    fn test_padding_width_legacy() {
        assert_eq!(padding_width(1, PaddingMode::Legacy), 1);
        assert_eq!(padding_width(9, PaddingMode::Legacy), 1);
        // Historical rule: 10 frames get two digits although 0..9 needs one
        assert_eq!(padding_width(10, PaddingMode::Legacy), 2);
        assert_eq!(padding_width(99, PaddingMode::Legacy), 10);
        assert_eq!(padding_width(100, PaddingMode::Legacy), 11);
    }

    #[test]
    fn test_padding_width_digits() {
        assert_eq!(padding_width(1, PaddingMode::Digits), 1);
        assert_eq!(padding_width(10, PaddingMode::Digits), 1);
        assert_eq!(padding_width(11, PaddingMode::Digits), 2);
        assert_eq!(padding_width(100, PaddingMode::Digits), 2);
        assert_eq!(padding_width(101, PaddingMode::Digits), 3);
    }

    #[test]
    fn test_frame_name() {
        assert_eq!(frame_name("walk", 3, 2, ".png"), "walk03.png");
        assert_eq!(frame_name("walk", 12, 1, ".png"), "walk12.png");
        assert_eq!(frame_name("", 0, 3, ""), "000");
    }

    #[test]
    fn test_frame_names_ten_frames() {
        let names = frame_names("run", ".png", 10, PaddingMode::Legacy).unwrap();
        assert_eq!(names.len(), 10);
        assert_eq!(names[0], "run00.png");
        assert_eq!(names[9], "run09.png");

        let names = frame_names("run", ".png", 10, PaddingMode::Digits).unwrap();
        assert_eq!(names[9], "run9.png");
    }

    #[test]
    fn test_frame_names_zero_frames_fails() {
        assert!(frame_names("run", ".png", 0, PaddingMode::Legacy).is_err());
    }

    #[test]
    fn test_frame_list_from_files() {
        let mut images = HashMap::new();
        for i in 0..3u8 {
            images.insert(
                format!("blink{}.png", i),
                RgbaImage::from_pixel(1, 1, Rgba([i, i, i, 255])),
            );
        }

        let frames = frame_list_from_files(&images, "blink", ".png", 3, PaddingMode::Legacy).unwrap();
        assert_eq!(frames.len(), 3);
        assert_eq!(*frames[2].get_pixel(0, 0), Rgba([2, 2, 2, 255]));
    }

    #[test]
    fn test_frame_list_from_files_propagates_loader_error() {
        let images: HashMap<String, RgbaImage> = HashMap::new();
        let err = frame_list_from_files(&images, "blink", ".png", 2, PaddingMode::Legacy).unwrap_err();
        match err {
            FramesError::Load { name, .. } => assert_eq!(name, "blink0.png"),
            other => panic!("expected load error, got {other:?}"),
        }
    }

    #[test]
    fn test_slice_matches_source_regions() {
        for n in 1..=5u32 {
            let (w, h) = (3, 2);
            let sheet = make_coordinate_sheet(n * w, h);
            let frames = frame_list_from_sheet(&sheet, 0, 0, w as i32, h as i32, n as i32).unwrap();

            assert_eq!(frames.len(), n as usize);
            for (k, frame) in frames.iter().enumerate() {
                assert_eq!(frame.dimensions(), (w, h));
                for fy in 0..h {
                    for fx in 0..w {
                        assert_eq!(frame.get_pixel(fx, fy), sheet.get_pixel(k as u32 * w + fx, fy));
                    }
                }
            }
        }
    }

    #[test]
    fn test_slice_with_offset() {
        let sheet = make_coordinate_sheet(10, 6);
        let frames = frame_list_from_sheet(&sheet, 1, 2, 4, 3, 2).unwrap();

        assert_eq!(*frames[0].get_pixel(0, 0), Rgba([1, 2, 7, 255]));
        assert_eq!(*frames[1].get_pixel(0, 0), Rgba([5, 2, 7, 255]));
        assert_eq!(*frames[1].get_pixel(3, 2), Rgba([8, 4, 7, 255]));
    }

    #[test]
    fn test_slice_invalid_arguments() {
        let sheet = make_coordinate_sheet(4, 4);

        let cases = [
            (-1, 0, 1, 1, 1, "x"),
            (0, -1, 1, 1, 1, "y"),
            (0, 0, -1, 1, 1, "width"),
            (0, 0, 1, -1, 1, "height"),
            (0, 0, 1, 1, 0, "frames"),
        ];
        for (x, y, w, h, n, field) in cases {
            let err = frame_list_from_sheet(&sheet, x, y, w, h, n).unwrap_err();
            match err {
                FramesError::InvalidArgument { name, .. } => assert_eq!(name, field),
                other => panic!("expected invalid argument, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_slice_out_of_bounds() {
        let sheet = make_coordinate_sheet(8, 2);
        let err = frame_list_from_sheet(&sheet, 1, 0, 2, 2, 4).unwrap_err();
        assert!(matches!(err, FramesError::OutOfBounds { source_width: 8, .. }));

        let err = frame_list_from_sheet(&sheet, 0, 1, 2, 2, 1).unwrap_err();
        assert!(matches!(err, FramesError::OutOfBounds { .. }));
    }

    #[test]
    fn test_slice_zero_size_frames_fails() {
        let sheet = make_coordinate_sheet(2, 2);

        // Zero passes argument validation but yields no pixels to slice
        for (w, h) in [(0, 0), (0, 2), (2, 0)] {
            let err = frame_list_from_sheet(&sheet, 0, 0, w, h, 1).unwrap_err();
            assert!(matches!(err, FramesError::ZeroArea { .. }));
        }
    }
}
