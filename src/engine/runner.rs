//! Periodic coaching loop.
//!
//! Spawns a background thread that ticks at the configured capture
//! interval while coaching is active. Ticks and manual simulate requests
//! both funnel through the engine's single-flight guard; a trigger that
//! lands while a run is in flight is dropped, not queued, so no backlog
//! accumulates behind a slow recognizer.

use anyhow::{anyhow, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::capture::FrameSource;
use crate::engine::{Engine, RunOutcome};

/// Drives an [`Engine`] from a periodic timer.
pub struct CoachRunner {
    engine: Arc<Mutex<Engine>>,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl CoachRunner {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            running: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }

    /// Shared handle to the engine, for mode changes and history access.
    pub fn engine(&self) -> Arc<Mutex<Engine>> {
        Arc::clone(&self.engine)
    }

    /// True while the periodic loop is active.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Starts the periodic loop.
    ///
    /// Returns an error if coaching is already running.
    pub fn start<F>(&mut self, frames: F) -> Result<()>
    where
        F: FrameSource + Send + 'static,
    {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(anyhow!("Coaching is already running"));
        }

        let engine = Arc::clone(&self.engine);
        let running = Arc::clone(&self.running);
        let interval = engine
            .lock()
            .map(|e| e.capture_interval())
            .unwrap_or(Duration::from_millis(2000));

        self.handle = Some(thread::spawn(move || {
            crate::log("coaching loop started");
            while running.load(Ordering::SeqCst) {
                // A manual run holding the engine means this tick is
                // skipped, not queued behind it
                if let Ok(mut engine) = engine.try_lock() {
                    engine.poll_lookup();
                    let outcome = engine.run_once(&frames, false);
                    crate::log(&format!("tick: {}", outcome));
                }

                // Sleep in short slices so stop() stays prompt
                let wake = Instant::now() + interval;
                while running.load(Ordering::SeqCst) && Instant::now() < wake {
                    thread::sleep(Duration::from_millis(50));
                }
            }
            crate::log("coaching loop stopped");
        }));

        Ok(())
    }

    /// Stops the loop and joins the worker thread.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Runs one manual pipeline pass, cooldown-bypassing.
    ///
    /// Returns `None` when a run is already in flight; a busy engine is
    /// only noticeable by the absence of a tip.
    pub fn simulate(&self, frames: &dyn FrameSource) -> Option<RunOutcome> {
        let mut engine = self.engine.try_lock().ok()?;
        Some(engine.run_once(frames, true))
    }
}

impl Drop for CoachRunner {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CoachConfig;
    use crate::engine::TipSink;
    use crate::ocr::TextRecognizer;
    use anyhow::Result;
    use image::{GrayImage, RgbaImage};

    struct BlankFrames;

    impl FrameSource for BlankFrames {
        fn current_frame(&self) -> Option<RgbaImage> {
            Some(RgbaImage::new(128, 128))
        }
    }

    struct EchoRecognizer(&'static str);

    impl TextRecognizer for EchoRecognizer {
        fn recognize(&self, _img: &GrayImage) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    #[derive(Clone, Default)]
    struct CountingSink {
        tips: Arc<Mutex<Vec<String>>>,
    }

    impl TipSink for CountingSink {
        fn tip(&mut self, text: &str) {
            self.tips.lock().unwrap().push(text.to_string());
        }

        fn status(&mut self, _text: &str) {}
    }

    fn runner(sink: CountingSink) -> CoachRunner {
        let config = CoachConfig {
            capture_interval_ms: 10,
            ..CoachConfig::default()
        };
        let engine = Engine::with_seed(
            config,
            Some(Box::new(EchoRecognizer("OUT OF AMMO"))),
            Box::new(sink),
            7,
        );
        CoachRunner::new(engine)
    }

    #[test]
    fn test_loop_emits_then_stops() {
        let sink = CountingSink::default();
        let mut runner = runner(sink.clone());

        runner.start(BlankFrames).unwrap();
        thread::sleep(Duration::from_millis(120));
        runner.stop();

        assert!(!runner.is_running());
        // First tick emits; later identical captures short-circuit
        assert_eq!(sink.tips.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_double_start_is_refused() {
        let sink = CountingSink::default();
        let mut runner = runner(sink);

        runner.start(BlankFrames).unwrap();
        assert!(runner.start(BlankFrames).is_err());
        runner.stop();
    }

    #[test]
    fn test_simulate_without_loop() {
        let sink = CountingSink::default();
        let runner = runner(sink.clone());

        let outcome = runner.simulate(&BlankFrames);

        assert_eq!(
            outcome,
            Some(RunOutcome::Emitted(crate::tips::TipCategory::Reload))
        );
        assert_eq!(sink.tips.lock().unwrap().len(), 1);
    }
}
