//! Directional movement detection over a short observation track
//!
//! Answers "did the hand move consistently in direction D" by comparing the
//! tracked landmark between consecutive frames. Strict monotonicity: one
//! frame of stalled or reversed motion rejects the whole track.

use tracing::trace;

use crate::config::ResolverConfig;
use crate::types::Observation;

/// Direction of travel in normalized image coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementDirection {
    Down,
    Up,
    Left,
    Right,
}

impl MovementDirection {
    /// Signed displacement from `older` to `newer` along this direction at
    /// the given landmark. Positive means the hand travelled this way.
    /// Frames missing the landmark yield no displacement.
    fn displacement(self, newer: &Observation, older: &Observation, landmark: usize) -> Option<f32> {
        let n = newer.landmark(landmark)?;
        let o = older.landmark(landmark)?;
        let d = match self {
            MovementDirection::Down => n.y - o.y,
            MovementDirection::Up => o.y - n.y,
            MovementDirection::Right => n.x - o.x,
            MovementDirection::Left => o.x - n.x,
        };
        Some(d)
    }

    /// Whether the most recent `min_track_frames` observations of `track`
    /// (oldest first, newest at the tail) show consistent motion this way.
    ///
    /// Pure function of the track; `false` on insufficient evidence.
    pub fn detect(self, track: &[Observation], config: &ResolverConfig) -> bool {
        if track.len() < config.min_track_frames {
            return false;
        }
        let recent = &track[track.len() - config.min_track_frames..];
        for pair in recent.windows(2) {
            let (older, newer) = (&pair[0], &pair[1]);
            match self.displacement(newer, older, config.landmark_index) {
                Some(d) => {
                    trace!(direction = ?self, displacement = d, "movement step");
                    if d <= config.movement_threshold {
                        return false;
                    }
                }
                None => return false,
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LandmarkPoint;
    use proptest::prelude::*;

    fn obs_at(x: f32, y: f32) -> Observation {
        Observation::new("X", vec![LandmarkPoint::new(x, y)])
    }

    fn cfg() -> ResolverConfig {
        ResolverConfig::default()
    }

    #[test]
    fn short_track_never_detects() {
        let track = vec![obs_at(0.5, 0.1), obs_at(0.5, 0.2), obs_at(0.5, 0.3)];
        for dir in [
            MovementDirection::Down,
            MovementDirection::Up,
            MovementDirection::Left,
            MovementDirection::Right,
        ] {
            assert!(!dir.detect(&track, &cfg()));
        }
    }

    #[test]
    fn down_detects_increasing_y() {
        let track = vec![
            obs_at(0.5, 0.10),
            obs_at(0.5, 0.15),
            obs_at(0.5, 0.20),
            obs_at(0.5, 0.25),
        ];
        assert!(MovementDirection::Down.detect(&track, &cfg()));
        assert!(!MovementDirection::Up.detect(&track, &cfg()));
    }

    #[test]
    fn single_stalled_step_rejects() {
        let track = vec![
            obs_at(0.5, 0.10),
            obs_at(0.5, 0.15),
            obs_at(0.5, 0.15), // no movement between these frames
            obs_at(0.5, 0.25),
        ];
        assert!(!MovementDirection::Down.detect(&track, &cfg()));
    }

    #[test]
    fn left_detects_decreasing_x() {
        let track = vec![
            obs_at(0.80, 0.5),
            obs_at(0.70, 0.5),
            obs_at(0.60, 0.5),
            obs_at(0.50, 0.5),
        ];
        assert!(MovementDirection::Left.detect(&track, &cfg()));
        assert!(!MovementDirection::Right.detect(&track, &cfg()));
    }

    #[test]
    fn sub_threshold_drift_rejects() {
        // steps of 0.01 are under the 0.02 threshold
        let track = vec![
            obs_at(0.5, 0.10),
            obs_at(0.5, 0.11),
            obs_at(0.5, 0.12),
            obs_at(0.5, 0.13),
        ];
        assert!(!MovementDirection::Down.detect(&track, &cfg()));
    }

    #[test]
    fn only_most_recent_frames_are_sampled() {
        // stalled motion early in the track is outside the sampled tail
        let track = vec![
            obs_at(0.5, 0.50),
            obs_at(0.5, 0.50),
            obs_at(0.5, 0.10),
            obs_at(0.5, 0.15),
            obs_at(0.5, 0.20),
            obs_at(0.5, 0.25),
        ];
        assert!(MovementDirection::Down.detect(&track, &cfg()));
    }

    #[test]
    fn missing_landmark_rejects() {
        let mut track = vec![
            obs_at(0.5, 0.10),
            obs_at(0.5, 0.15),
            obs_at(0.5, 0.20),
            obs_at(0.5, 0.25),
        ];
        track[2] = Observation::new("X", vec![]);
        assert!(!MovementDirection::Down.detect(&track, &cfg()));
    }

    proptest! {
        #[test]
        fn strictly_rising_y_always_detects_down(start in 0.0f32..0.3, step in 0.021f32..0.1) {
            let track: Vec<_> = (0..4)
                .map(|i| obs_at(0.5, start + step * i as f32))
                .collect();
            prop_assert!(MovementDirection::Down.detect(&track, &cfg()));
            prop_assert!(!MovementDirection::Up.detect(&track, &cfg()));
        }

        #[test]
        fn opposite_directions_never_both_detect(ys in prop::collection::vec(0.0f32..1.0, 4)) {
            let track: Vec<_> = ys.iter().map(|&y| obs_at(0.5, y)).collect();
            let down = MovementDirection::Down.detect(&track, &cfg());
            let up = MovementDirection::Up.detect(&track, &cfg());
            prop_assert!(!(down && up));
        }
    }
}
