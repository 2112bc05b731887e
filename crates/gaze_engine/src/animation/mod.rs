//! Animation drivers

pub mod orbit;

pub use orbit::{compute_target_position, OrbitAnimator, TickCounter, DEFAULT_SPEED};
