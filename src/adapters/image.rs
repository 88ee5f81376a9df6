//! Stand-in camera classifier.
//!
//! Implements [`ImageAnalyzer`] with a verdict set by the host, for
//! simulation and bench testing without a real model.  Records the
//! threshold of the last call so callers can check what the engine asked.

use log::debug;

use crate::app::ports::ImageAnalyzer;

/// Classifier that answers with a fixed, settable verdict.
#[derive(Debug, Clone)]
pub struct FixedImageAnalyzer {
    verdict: bool,
    calls: u32,
    last_threshold: Option<f32>,
}

impl FixedImageAnalyzer {
    pub fn new(verdict: bool) -> Self {
        Self {
            verdict,
            calls: 0,
            last_threshold: None,
        }
    }

    /// Change the answer for subsequent frames.
    pub fn set_verdict(&mut self, verdict: bool) {
        self.verdict = verdict;
    }

    /// Number of frames classified so far.
    pub fn calls(&self) -> u32 {
        self.calls
    }

    pub fn last_threshold(&self) -> Option<f32> {
        self.last_threshold
    }
}

impl ImageAnalyzer for FixedImageAnalyzer {
    type Image = [u8];

    fn image_contains_cat(&mut self, image: &[u8], confidence_threshold: f32) -> bool {
        self.calls += 1;
        self.last_threshold = Some(confidence_threshold);
        debug!(
            "FixedImageAnalyzer: {} byte frame, threshold {:.1} -> {}",
            image.len(),
            confidence_threshold,
            self.verdict
        );
        self.verdict
    }
}
