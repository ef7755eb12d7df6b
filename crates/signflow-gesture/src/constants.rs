//! Tuning constants for the fingerspelling resolver

/// Maximum number of observations retained in the history window
pub const WINDOW_CAPACITY: usize = 10;

/// Minimum number of frames a movement check needs before it can confirm motion
pub const MIN_TRACK_FRAMES: usize = 4;

/// Minimum per-frame displacement (normalized image units) that still counts
/// as deliberate motion
pub const MOVEMENT_THRESHOLD: f32 = 0.02;

/// Landmark tracked by the movement checks (index 0 = wrist in the hand
/// landmark model)
pub const WRIST_LANDMARK: usize = 0;

/// Number of keypoints produced per hand by the landmark model
pub const HAND_LANDMARK_COUNT: usize = 21;
