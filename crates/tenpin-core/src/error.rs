/// Which following frame a bonus ball is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusFrame {
    Next,
    NextNext,
}

impl std::fmt::Display for BonusFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Next => write!(f, "next frame"),
            Self::NextNext => write!(f, "frame after next"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    /// The frame being scored has no balls in it.
    EmptyFrame,
    /// A strike or spare needs a bonus ball from a frame that was not
    /// supplied (or was supplied with no balls).
    MissingBonusFrame { frame: BonusFrame },
}

impl std::fmt::Display for ScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyFrame => write!(f, "cannot score a frame with no balls"),
            Self::MissingBonusFrame { frame } => {
                write!(f, "bonus ball required from the {frame}, but none was given")
            },
        }
    }
}

impl std::error::Error for ScoreError {}
