//! Frame animations - a cursor over a fixed list of frame images
//!
//! Three variants share the [`Animation`] trait:
//! - [`SingleFrameAnimation`]: one frame, never moves
//! - [`LoopedFramesAnimation`]: wraps back to the first frame after the last
//! - [`MultipleFramesAnimation`]: plays once and holds the last frame
//!
//! The host render loop calls [`Animation::advance`] once per tick and draws
//! [`Animation::current_frame`].

use crate::error::{check_not_empty, check_some, Result};
use image::RgbaImage;
use log::debug;

/// One or more frames in an animation.
pub trait Animation {
    /// Move to the next frame.
    ///
    /// Returns `true` if the animation is still in motion after this call.
    fn advance(&mut self) -> bool;

    /// The frame to draw for the current tick.
    fn current_frame(&self) -> &RgbaImage;
}

/// An animation consisting of a single frame.
#[derive(Debug, Clone)]
pub struct SingleFrameAnimation {
    frame: RgbaImage,
}

impl SingleFrameAnimation {
    pub fn new(frame: RgbaImage) -> Self {
        Self { frame }
    }

    /// Create from an optional frame, failing when it is absent.
    pub fn from_option(frame: Option<RgbaImage>) -> Result<Self> {
        Ok(Self::new(check_some("currentFrame", frame)?))
    }
}

impl Animation for SingleFrameAnimation {
    fn advance(&mut self) -> bool {
        false
    }

    fn current_frame(&self) -> &RgbaImage {
        &self.frame
    }
}

/// Cursor state shared by the multi-frame variants.
#[derive(Debug, Clone)]
struct FrameCursor {
    frames: Vec<RgbaImage>,
    index: usize,
}

impl FrameCursor {
    fn new(frames: &[RgbaImage]) -> Result<Self> {
        check_not_empty("frames", frames)?;
        Ok(Self { frames: frames.to_vec(), index: 0 })
    }

    fn last(&self) -> usize {
        self.frames.len() - 1
    }

    fn current(&self) -> &RgbaImage {
        &self.frames[self.index]
    }
}

/// A multi-frame animation that wraps to the first frame after the last.
#[derive(Debug, Clone)]
pub struct LoopedFramesAnimation {
    cursor: FrameCursor,
}

impl LoopedFramesAnimation {
    /// Create a looped animation from a copy of `frames`.
    ///
    /// Fails with [`FramesError::EmptyFrames`](crate::FramesError::EmptyFrames)
    /// if `frames` is empty.
    pub fn new(frames: &[RgbaImage]) -> Result<Self> {
        let cursor = FrameCursor::new(frames)?;
        debug!("looped animation with {} frames", cursor.frames.len());
        Ok(Self { cursor })
    }

    /// Index of the current frame.
    pub fn index(&self) -> usize {
        self.cursor.index
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.cursor.frames.len()
    }

    /// Always `false`; construction rejects empty frame lists.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn frames(&self) -> &[RgbaImage] {
        &self.cursor.frames
    }

    /// Return to the first frame.
    pub fn reset(&mut self) {
        self.cursor.index = 0;
    }
}

impl Animation for LoopedFramesAnimation {
    fn advance(&mut self) -> bool {
        self.cursor.index += 1;
        if self.cursor.index == self.cursor.frames.len() {
            self.cursor.index = 0;
        }
        true
    }

    fn current_frame(&self) -> &RgbaImage {
        self.cursor.current()
    }
}

/// A multi-frame animation that plays once and stops on its last frame.
#[derive(Debug, Clone)]
pub struct MultipleFramesAnimation {
    cursor: FrameCursor,
}

impl MultipleFramesAnimation {
    /// Create a play-once animation from a copy of `frames`.
    ///
    /// Fails with [`FramesError::EmptyFrames`](crate::FramesError::EmptyFrames)
    /// if `frames` is empty.
    pub fn new(frames: &[RgbaImage]) -> Result<Self> {
        let cursor = FrameCursor::new(frames)?;
        debug!("play-once animation with {} frames", cursor.frames.len());
        Ok(Self { cursor })
    }

    /// Index of the current frame.
    pub fn index(&self) -> usize {
        self.cursor.index
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.cursor.frames.len()
    }

    /// Always `false`; construction rejects empty frame lists.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn frames(&self) -> &[RgbaImage] {
        &self.cursor.frames
    }

    /// Whether the cursor rests on the last frame.
    pub fn is_finished(&self) -> bool {
        self.cursor.index == self.cursor.last()
    }

    /// Rewind to the first frame so the animation can play again.
    pub fn reset(&mut self) {
        self.cursor.index = 0;
    }
}

impl Animation for MultipleFramesAnimation {
    fn advance(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.cursor.index += 1;
        true
    }

    fn current_frame(&self) -> &RgbaImage {
        self.cursor.current()
    }
}
