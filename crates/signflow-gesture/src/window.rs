//! Bounded history window of recent observations
//!
//! The window is not a generic ring buffer: it only ever holds frames about
//! one candidate letter. Admitting a label nobody in the window shares drops
//! the whole history first, so a scene change starts from a clean slate.

use std::collections::VecDeque;

use tracing::debug;

use crate::types::Observation;

#[derive(Debug)]
pub struct ObservationWindow {
    entries: VecDeque<Observation>,
    capacity: usize,
}

impl ObservationWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Admits one observation, clearing the window first when its label has
    /// no occurrence in the current history, then evicting oldest-first at
    /// capacity.
    pub fn admit(&mut self, obs: Observation) {
        if !self.entries.is_empty() && self.count_label(&obs.label) == 0 {
            debug!(label = %obs.label, "foreign label, dropping window history");
            self.entries.clear();
        }
        self.entries.push_back(obs);
        if self.entries.len() > self.capacity {
            debug!("window at capacity, evicting oldest");
            self.entries.pop_front();
        }
    }

    /// Number of entries classified as `label`.
    pub fn count_label(&self, label: &str) -> usize {
        self.entries.iter().filter(|o| o.label == label).count()
    }

    /// Whether `label` dominates the window: its count must exceed the
    /// window length minus the allowed slack.
    pub fn is_stable_for(&self, label: &str, slack: usize) -> bool {
        self.count_label(label) + slack > self.entries.len()
    }

    /// The up-to-`n` most recent entries, oldest first.
    pub fn recent(&self, n: usize) -> Vec<Observation> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip).cloned().collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
