//! Bottom-corner HUD crops.
//!
//! Health and ammo readouts sit in the bottom corners of most shooter
//! HUDs, so the pipeline only ever looks at the bottom-left and
//! bottom-right portions of a frame.

use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// Horizontal side of the frame a HUD crop is anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Uppercase label for status lines and tips.
    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "LEFT",
            Side::Right => "RIGHT",
        }
    }
}

/// Crops the bottom portion of a frame, anchored to the given side.
///
/// `keep_w` and `keep_h` are fractions of the frame dimensions, clamped
/// to [0, 1]; output dimensions are the floor of dimension times
/// fraction. The crop is flush with the bottom edge and with the chosen
/// side. A zero-area result is legal and callers must tolerate it.
pub fn crop_bottom(frame: &RgbaImage, side: Side, keep_w: f64, keep_h: f64) -> RgbaImage {
    let (w, h) = frame.dimensions();

    let crop_w = (w as f64 * keep_w.clamp(0.0, 1.0)) as u32;
    let crop_h = (h as f64 * keep_h.clamp(0.0, 1.0)) as u32;

    let x0 = match side {
        Side::Left => 0,
        Side::Right => w - crop_w,
    };
    let y0 = h - crop_h;

    image::imageops::crop_imm(frame, x0, y0, crop_w, crop_h).to_image()
}
