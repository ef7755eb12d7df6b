use serde::{Deserialize, Serialize};

use super::constants::{MIN_TRACK_FRAMES, MOVEMENT_THRESHOLD, WINDOW_CAPACITY, WRIST_LANDMARK};

/// Parameters of one majority-vote cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoteParams {
    /// Tally length divided by this gives the appearance floor a label must
    /// reach to be eligible.
    pub divisor: usize,
    /// Minimum tally length before a vote resolves.
    pub threshold: usize,
}

impl VoteParams {
    pub const fn new(divisor: usize, threshold: usize) -> Self {
        Self { divisor, threshold }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Maximum observations retained in the history window.
    pub window_capacity: usize,
    /// Frames a movement check needs before it can confirm motion.
    pub min_track_frames: usize,
    /// Per-frame displacement (normalized units) that counts as motion.
    pub movement_threshold: f32,
    /// Landmark index the movement checks track.
    pub landmark_index: usize,
    /// Vote used for static letters and for dynamic letters whose movement
    /// check came back negative.
    pub static_vote: VoteParams,
    /// Longer confirmation vote for dynamic letters with no dedicated
    /// movement check.
    pub extended_vote: VoteParams,
    /// Tally length at which a movement-confirmed substitute resolves.
    pub dynamic_confirm_threshold: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            window_capacity: WINDOW_CAPACITY,
            min_track_frames: MIN_TRACK_FRAMES,
            movement_threshold: MOVEMENT_THRESHOLD,
            landmark_index: WRIST_LANDMARK,
            static_vote: VoteParams::new(2, 10),
            extended_vote: VoteParams::new(3, 15),
            dynamic_confirm_threshold: 4,
        }
    }
}

impl ResolverConfig {
    /// Window share below which the current frame's label no longer counts
    /// as the window's candidate letter.
    pub fn stability_slack(&self) -> usize {
        self.window_capacity / 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_tuned_values() {
        let cfg = ResolverConfig::default();
        assert_eq!(cfg.window_capacity, 10);
        assert_eq!(cfg.static_vote, VoteParams::new(2, 10));
        assert_eq!(cfg.extended_vote, VoteParams::new(3, 15));
        assert_eq!(cfg.stability_slack(), 2);
    }
}
