use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Shared metrics for cross-thread pipeline monitoring
#[derive(Clone, Default)]
pub struct PipelineMetrics {
    // Frame flow
    pub frames_in: Arc<AtomicU64>,         // Observations received from the source
    pub frames_no_gesture: Arc<AtomicU64>, // Frames with no recognized gesture

    // Resolver activity
    pub letters_emitted: Arc<AtomicU64>, // Letters appended to the word
    pub dynamic_matches: Arc<AtomicU64>, // Movement-confirmed substitutes
    pub word_edits: Arc<AtomicU64>,      // User pops and spaces

    // Error tracking
    pub source_errors: Arc<AtomicU64>,

    // Activity indicators
    pub last_letter_time: Arc<RwLock<Option<Instant>>>,
}

impl PipelineMetrics {
    pub fn record_frame(&self) {
        self.frames_in.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_no_gesture(&self) {
        self.frames_no_gesture.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_letter(&self) {
        self.letters_emitted.fetch_add(1, Ordering::Relaxed);
        *self.last_letter_time.write() = Some(Instant::now());
    }

    pub fn record_dynamic_match(&self) {
        self.dynamic_matches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_word_edit(&self) {
        self.word_edits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_source_error(&self) {
        self.source_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy for display or logging.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            frames_in: self.frames_in.load(Ordering::Relaxed),
            frames_no_gesture: self.frames_no_gesture.load(Ordering::Relaxed),
            letters_emitted: self.letters_emitted.load(Ordering::Relaxed),
            dynamic_matches: self.dynamic_matches.load(Ordering::Relaxed),
            word_edits: self.word_edits.load(Ordering::Relaxed),
            source_errors: self.source_errors.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub frames_in: u64,
    pub frames_no_gesture: u64,
    pub letters_emitted: u64,
    pub dynamic_matches: u64,
    pub word_edits: u64,
    pub source_errors: u64,
}
