//! Word accumulator and dynamic-sign resolver
//!
//! Ingests one observation per camera frame and decides whether the signed
//! letter is static (resolved by majority vote alone) or dynamic (resolved
//! only once the matching hand movement is confirmed over the window). The
//! per-letter dispatch is deliberately asymmetric; the branches mirror how
//! each sign is actually performed and must not be unified.

use tracing::{debug, info, trace};

use crate::alphabet;
use crate::config::{ResolverConfig, VoteParams};
use crate::movement::MovementDirection;
use crate::types::{Observation, SignEvent};
use crate::window::ObservationWindow;

/// Stateful resolver owned by the frame callback. Single-threaded by
/// design: one observation at a time, no interior locking.
#[derive(Debug)]
pub struct SignResolver {
    window: ObservationWindow,
    tally: Vec<String>,
    word: String,
    config: ResolverConfig,
}

impl Default for SignResolver {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}

impl SignResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            window: ObservationWindow::new(config.window_capacity),
            tally: Vec::new(),
            word: String::new(),
            config,
        }
    }

    /// The accumulated word so far.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Removes the trailing character, if any. User-initiated edit.
    pub fn pop_letter(&mut self) {
        self.word.pop();
    }

    /// Appends a word separator. User-initiated edit.
    pub fn push_space(&mut self) {
        self.word.push(' ');
    }

    /// Drops all recognition state and the accumulated word.
    pub fn reset(&mut self) {
        self.window.clear();
        self.tally.clear();
        self.word.clear();
    }

    /// Ingests one frame's observation. Returns an event when this frame
    /// resolved a letter onto the accumulated word.
    pub fn process(&mut self, obs: &Observation) -> Option<SignEvent> {
        trace!(window_len = self.window.len(), tally_len = self.tally.len(), "frame in");

        // A frame with no recognized gesture is a normal no-op, not an error.
        if obs.label.trim().is_empty() {
            return None;
        }

        self.window.admit(obs.clone());

        // Abandon a window that is no longer about the current letter.
        if !self
            .window
            .is_stable_for(&obs.label, self.config.stability_slack())
        {
            debug!(label = %obs.label, "label unstable over window, resetting");
            self.window.clear();
            self.tally.clear();
        }

        if !alphabet::is_dynamic(&obs.label) {
            debug!(label = %obs.label, "static sign");
            // A static letter needs no movement history.
            self.window.clear();
            self.vote(&obs.label, self.config.static_vote)
        } else if !self.window.is_empty() {
            debug!(label = %obs.label, "possible dynamic sign");
            self.resolve_dynamic(&obs.label)
        } else {
            None
        }
    }

    /// Per-letter movement dispatch. The branches are intentionally not
    /// uniform: H never falls back to a vote on a missed movement, and I
    /// needs two directions to hold at once.
    fn resolve_dynamic(&mut self, label: &str) -> Option<SignEvent> {
        let track = self.window.recent(self.config.min_track_frames);
        match label {
            "N" | "O" | "C" | "S" => self.movement_or_vote(label, MovementDirection::Down, &track),
            "L" => self.movement_or_vote(label, MovementDirection::Right, &track),
            "H" => {
                if MovementDirection::Down.detect(&track, &self.config) {
                    self.confirm_substitute(alphabet::substitute(label)?)
                } else {
                    None
                }
            }
            "I" => {
                let down = MovementDirection::Down.detect(&track, &self.config);
                let left = MovementDirection::Left.detect(&track, &self.config);
                if down && left {
                    // The letter J is signed as I plus a down-left hook.
                    self.confirm_substitute("J")
                } else {
                    self.vote(label, self.config.static_vote)
                }
            }
            _ => self.vote(label, self.config.extended_vote),
        }
    }

    fn movement_or_vote(
        &mut self,
        label: &str,
        direction: MovementDirection,
        track: &[Observation],
    ) -> Option<SignEvent> {
        if direction.detect(track, &self.config) {
            self.confirm_substitute(alphabet::substitute(label)?)
        } else {
            self.vote(label, self.config.static_vote)
        }
    }

    /// A movement-confirmed substitute is appended as soon as the tally has
    /// gathered enough evidence for this candidate, bypassing the majority
    /// pick.
    fn confirm_substitute(&mut self, substitute: &str) -> Option<SignEvent> {
        self.tally.push(substitute.to_string());
        if self.tally.len() < self.config.dynamic_confirm_threshold {
            return None;
        }
        let event = self.append_to_word(substitute, true);
        self.finish_cycle();
        event
    }

    /// Majority-vote emission. Appends the winning label once the tally
    /// reaches `params.threshold`; ties break in favor of the label seen
    /// first. Resolving always clears both tally and window, emitted or not.
    fn vote(&mut self, label: &str, params: VoteParams) -> Option<SignEvent> {
        trace!(label, tally = ?self.tally, "tallying");
        self.tally.push(label.to_string());
        if self.tally.len() < params.threshold {
            return None;
        }

        let appearance_floor = self.tally.len() / params.divisor.max(1);
        let mut winner: Option<(String, usize)> = None;
        for (i, candidate) in self.tally.iter().enumerate() {
            if self.tally[..i].contains(candidate) {
                continue;
            }
            let count = self.tally.iter().filter(|l| *l == candidate).count();
            if count < appearance_floor {
                continue;
            }
            // Strictly-greater keeps the first-seen label on ties.
            if winner.as_ref().map_or(true, |(_, best)| count > *best) {
                winner = Some((candidate.clone(), count));
            }
        }

        let event = winner
            .filter(|(label, _)| !label.trim().is_empty())
            .and_then(|(label, _)| self.append_to_word(&label, false));
        self.finish_cycle();
        event
    }

    fn append_to_word(&mut self, text: &str, movement_confirmed: bool) -> Option<SignEvent> {
        self.word.push_str(text);
        info!(text, word = %self.word, "letter resolved");
        Some(SignEvent::LetterAppended {
            text: text.to_string(),
            word: self.word.clone(),
            movement_confirmed,
        })
    }

    fn finish_cycle(&mut self) {
        self.tally.clear();
        self.window.clear();
    }
}
