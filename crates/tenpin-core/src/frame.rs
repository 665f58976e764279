use serde::{Deserialize, Serialize};

/// Pins knocked down by a single ball.
pub type Pins = u8;

/// Pins racked at the start of a standard frame.
pub const PIN_COUNT: Pins = 10;

/// How a frame ended, which decides where its bonus comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameKind {
    /// Whole rack down with the first ball. Bonus: the next two balls.
    Strike,
    /// Whole rack down across two balls. Bonus: the next ball.
    Spare,
    /// Pins left standing. No bonus.
    Open,
}

impl FrameKind {
    /// Classify a frame. Strike is checked before spare so that `[10]`
    /// never reads a second ball.
    pub fn classify(frame: &[Pins], pin_count: Pins) -> Self {
        if is_strike(frame, pin_count) {
            Self::Strike
        } else if is_spare(frame, pin_count) {
            Self::Spare
        } else {
            Self::Open
        }
    }
}

/// First ball took the whole rack.
pub fn is_strike(frame: &[Pins], pin_count: Pins) -> bool {
    frame.first() == Some(&pin_count)
}

/// Not a strike, and the first two balls together took the whole rack.
pub fn is_spare(frame: &[Pins], pin_count: Pins) -> bool {
    match frame {
        [first, second, ..] => {
            *first != pin_count && *first as u32 + *second as u32 == pin_count as u32
        },
        _ => false,
    }
}

/// Total pins knocked down across every ball in the frame.
pub fn pins_down(frame: &[Pins]) -> u32 {
    frame.iter().map(|&ball| ball as u32).sum()
}
