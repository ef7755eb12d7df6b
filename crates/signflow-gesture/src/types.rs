//! Core types shared across the resolver

use serde::{Deserialize, Serialize};

/// One tracked hand keypoint in normalized image coordinates.
///
/// x grows toward the right edge of the frame, y toward the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandmarkPoint {
    pub x: f32,
    pub y: f32,
}

impl LandmarkPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One gesture category as ranked by the upstream classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredLabel {
    pub label: String,
    pub score: f32,
}

/// One frame's classification plus hand landmark snapshot.
///
/// Immutable once admitted to the history window. The resolver only ever
/// consumes the top-ranked label and the landmark list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub label: String,
    pub landmarks: Vec<LandmarkPoint>,
}

impl Observation {
    pub fn new(label: impl Into<String>, landmarks: Vec<LandmarkPoint>) -> Self {
        Self {
            label: label.into(),
            landmarks,
        }
    }

    /// Builds an observation from a ranked classification list, keeping only
    /// the top-ranked label. Returns `None` when the classifier saw no hand,
    /// which the resolver treats as a no-op frame.
    pub fn from_ranked(categories: &[ScoredLabel], landmarks: Vec<LandmarkPoint>) -> Option<Self> {
        categories
            .first()
            .map(|c| Self::new(c.label.clone(), landmarks))
    }

    /// Coordinate of the tracked landmark, or `None` when the snapshot is
    /// shorter than the requested index.
    pub fn landmark(&self, index: usize) -> Option<LandmarkPoint> {
        self.landmarks.get(index).copied()
    }
}

/// Event published when the resolver appends to the accumulated word.
#[derive(Debug, Clone, PartialEq)]
pub enum SignEvent {
    /// A letter (or multi-char substitute such as "RZ") was appended.
    LetterAppended {
        /// The text that was appended by this resolution.
        text: String,
        /// Snapshot of the full accumulated word after the append.
        word: String,
        /// Whether a directional movement check confirmed this letter, as
        /// opposed to a plain majority vote.
        movement_confirmed: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_ranked_takes_top_label() {
        let ranked = vec![
            ScoredLabel {
                label: "A".into(),
                score: 0.9,
            },
            ScoredLabel {
                label: "B".into(),
                score: 0.1,
            },
        ];
        let obs = Observation::from_ranked(&ranked, vec![]).unwrap();
        assert_eq!(obs.label, "A");
    }

    #[test]
    fn from_ranked_empty_is_none() {
        assert!(Observation::from_ranked(&[], vec![]).is_none());
    }

    #[test]
    fn landmark_out_of_range_is_none() {
        let obs = Observation::new("A", vec![LandmarkPoint::new(0.5, 0.5)]);
        assert!(obs.landmark(0).is_some());
        assert!(obs.landmark(1).is_none());
    }
}
