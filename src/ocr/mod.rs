//! Text recognition seam.
//!
//! Recognition is a black-box capability: given a normalized image
//! region it returns best-effort text. Output is assumed imperfect,
//! latency-bearing and occasionally empty or garbled; everything
//! downstream is written to tolerate that.

pub mod engine;
pub mod preprocess;

pub use engine::TesseractRecognizer;
pub use preprocess::prepare;

use anyhow::Result;
use image::GrayImage;

/// Best-effort text recognition over a normalized HUD crop.
///
/// The recognize call is the only pipeline step that may block for a
/// non-trivial, variable duration.
pub trait TextRecognizer {
    fn recognize(&self, img: &GrayImage) -> Result<String>;
}
