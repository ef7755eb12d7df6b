//! signflow pipeline host
//!
//! Wires an observation source (the seam to the on-device gesture
//! classifier) through the resolver core and publishes resolved letters.

pub mod config;
pub mod pipeline;
pub mod source;
