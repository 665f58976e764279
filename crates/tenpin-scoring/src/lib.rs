pub mod scoring;

use tenpin_core::config::LaneRules;
use tenpin_core::error::ScoreError;
use tenpin_core::frame::Pins;

pub use scoring::{FrameScore, score_frame, score_frame_breakdown};

/// Scores single frames under a fixed set of lane rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameScorer {
    rules: LaneRules,
}

impl FrameScorer {
    pub fn new(rules: LaneRules) -> Self {
        Self { rules }
    }

    /// Build a scorer from `LaneRules::load()`.
    pub fn from_config() -> Self {
        Self::new(LaneRules::load())
    }

    pub fn rules(&self) -> &LaneRules {
        &self.rules
    }

    /// Points credited to `frame`, bonus included.
    ///
    /// `next_frame` is only read for strikes and spares, `next_next_frame`
    /// only for a strike followed by another strike.
    pub fn score(
        &self,
        frame: &[Pins],
        next_frame: Option<&[Pins]>,
        next_next_frame: Option<&[Pins]>,
    ) -> Result<u32, ScoreError> {
        self.breakdown(frame, next_frame, next_next_frame)
            .map(|score| score.total)
    }

    /// Same as [`FrameScorer::score`], split into base pins and bonus.
    pub fn breakdown(
        &self,
        frame: &[Pins],
        next_frame: Option<&[Pins]>,
        next_next_frame: Option<&[Pins]>,
    ) -> Result<FrameScore, ScoreError> {
        scoring::breakdown_with(self.rules.pin_count, frame, next_frame, next_next_frame)
    }
}
