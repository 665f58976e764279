use serde::{Deserialize, Serialize};

use tenpin_core::error::{BonusFrame, ScoreError};
use tenpin_core::frame::{FrameKind, PIN_COUNT, Pins, is_strike, pins_down};

/// Score of one frame, split into the pins it knocked down and the bonus
/// pins borrowed from the frames after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameScore {
    pub kind: FrameKind,
    pub base: u32,
    pub bonus: u32,
    pub total: u32,
}

/// Score one frame of ten-pin bowling.
///
/// Scoring rules:
/// - Open: pins knocked down in the frame
/// - Spare: 10 + the first ball of `next_frame`
/// - Strike: 10 + every ball of `next_frame`, plus the first ball of
///   `next_next_frame` when `next_frame` is also a strike
pub fn score_frame(
    frame: &[Pins],
    next_frame: Option<&[Pins]>,
    next_next_frame: Option<&[Pins]>,
) -> Result<u32, ScoreError> {
    score_frame_breakdown(frame, next_frame, next_next_frame).map(|score| score.total)
}

/// Same rules as [`score_frame`], returning the base/bonus split.
pub fn score_frame_breakdown(
    frame: &[Pins],
    next_frame: Option<&[Pins]>,
    next_next_frame: Option<&[Pins]>,
) -> Result<FrameScore, ScoreError> {
    breakdown_with(PIN_COUNT, frame, next_frame, next_next_frame)
}

pub(crate) fn breakdown_with(
    pin_count: Pins,
    frame: &[Pins],
    next_frame: Option<&[Pins]>,
    next_next_frame: Option<&[Pins]>,
) -> Result<FrameScore, ScoreError> {
    if frame.is_empty() {
        return Err(ScoreError::EmptyFrame);
    }

    let base = pins_down(frame);
    let kind = FrameKind::classify(frame, pin_count);

    let bonus = match kind {
        FrameKind::Open => 0,
        FrameKind::Spare => first_ball(next_frame, BonusFrame::Next)?,
        FrameKind::Strike => {
            let next = bonus_frame(next_frame, BonusFrame::Next)?;
            let mut bonus = pins_down(next);
            // A strike in the next frame leaves only one ball there
            if is_strike(next, pin_count) {
                bonus += first_ball(next_next_frame, BonusFrame::NextNext)?;
            }
            bonus
        },
    };

    tracing::trace!(?kind, base, bonus, "Scored frame");

    Ok(FrameScore {
        kind,
        base,
        bonus,
        total: base + bonus,
    })
}

fn bonus_frame(frame: Option<&[Pins]>, which: BonusFrame) -> Result<&[Pins], ScoreError> {
    match frame {
        Some(balls) if !balls.is_empty() => Ok(balls),
        _ => {
            tracing::debug!(%which, "Bonus frame missing");
            Err(ScoreError::MissingBonusFrame { frame: which })
        },
    }
}

fn first_ball(frame: Option<&[Pins]>, which: BonusFrame) -> Result<u32, ScoreError> {
    let balls = bonus_frame(frame, which)?;
    Ok(balls[0] as u32)
}
