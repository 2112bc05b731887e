//! Eye geometry
//!
//! Look-at rotation for a single eye, symmetric placement of an eye pair
//! and the factory that assembles eyes from engine spheres.

pub mod eye;
pub mod pair;
pub mod factory;

pub use eye::{look_at, look_rotation};
pub use factory::{EyeFactory, EyeStyle, FlyStyle};
pub use pair::EyePair;
