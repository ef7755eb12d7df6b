pub mod alphabet;
pub mod config;
pub mod constants;
pub mod movement;
pub mod resolver;
pub mod types;
pub mod window;

// Core exports - grouped and sorted alphabetically
pub use config::{ResolverConfig, VoteParams};
pub use constants::{MIN_TRACK_FRAMES, MOVEMENT_THRESHOLD, WINDOW_CAPACITY, WRIST_LANDMARK};
pub use movement::MovementDirection;
pub use resolver::SignResolver;
pub use types::{LandmarkPoint, Observation, ScoredLabel, SignEvent};
pub use window::ObservationWindow;
