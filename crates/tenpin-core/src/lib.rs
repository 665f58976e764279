pub mod config;
pub mod error;
pub mod frame;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::frame::{PIN_COUNT, Pins};

    /// A strike recorded as a single ball.
    pub const STRIKE: [Pins; 1] = [PIN_COUNT];

    /// A strike padded with an empty second ball, as scorecards often record it.
    pub const STRIKE_PADDED: [Pins; 2] = [PIN_COUNT, 0];

    /// Two-ball frame that leaves at least one pin standing.
    pub fn open(first: Pins, second: Pins) -> [Pins; 2] {
        assert!(
            first as u32 + second as u32 <= PIN_COUNT as u32 - 1,
            "open({first}, {second}) knocks down the whole rack"
        );
        [first, second]
    }

    /// Two-ball frame that clears the rack with the second ball.
    pub fn spare(first: Pins) -> [Pins; 2] {
        assert!(first < PIN_COUNT, "spare({first}) would be a strike");
        [first, PIN_COUNT - first]
    }

    /// Every legal open frame.
    pub fn all_open_frames() -> Vec<[Pins; 2]> {
        (0..PIN_COUNT)
            .flat_map(|first| (0..PIN_COUNT - first).map(move |second| [first, second]))
            .collect()
    }

    /// Every legal spare.
    pub fn all_spares() -> Vec<[Pins; 2]> {
        (0..PIN_COUNT).map(spare).collect()
    }
}
