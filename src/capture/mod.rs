//! Frame acquisition seam and HUD cropping.
//!
//! The engine never captures video itself. A [`FrameSource`] collaborator
//! (screen share, capture card, test fixture) supplies whole frames; the
//! [`crop`] module carves out the two bottom-corner HUD candidates.

pub mod crop;

pub use crop::{crop_bottom, Side};

use image::RgbaImage;

/// Supplies the current video frame.
///
/// Returning `None` means no video is available yet; the engine skips the
/// run and reports a status line instead of failing.
pub trait FrameSource {
    fn current_frame(&self) -> Option<RgbaImage>;
}
