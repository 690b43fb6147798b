//! Tesseract-backed recognizer.
//!
//! Shells out to the `tesseract` CLI: the normalized crop is written to a
//! temporary PNG, recognized with `--psm 6` (a single uniform block of
//! text, which is what a HUD corner looks like), and the stdout text is
//! returned trimmed.

use anyhow::{anyhow, Result};
use image::GrayImage;
use std::path::PathBuf;
use std::process::Command;
use tempfile::NamedTempFile;

use super::TextRecognizer;

/// Runs the `tesseract` executable over normalized HUD crops.
pub struct TesseractRecognizer {
    executable: PathBuf,
    language: String,
}

impl TesseractRecognizer {
    /// Uses `tesseract` from PATH with English trained data.
    pub fn new() -> Self {
        Self {
            executable: PathBuf::from("tesseract"),
            language: "eng".to_string(),
        }
    }

    /// Uses a specific executable, e.g. a bundled install.
    pub fn with_executable(executable: PathBuf) -> Self {
        Self {
            executable,
            language: "eng".to_string(),
        }
    }
}

impl Default for TesseractRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn recognize(&self, img: &GrayImage) -> Result<String> {
        let temp_input = NamedTempFile::with_suffix(".png")?;
        img.save(temp_input.path())?;

        let output = Command::new(&self.executable)
            .arg(temp_input.path())
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .arg("--psm")
            .arg("6")
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!("Tesseract failed: {}", stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
