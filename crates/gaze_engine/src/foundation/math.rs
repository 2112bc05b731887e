//! Math utilities and types
//!
//! Provides the vector and color types shared by the scene, gaze and
//! animation modules.

use serde::{Deserialize, Serialize};

pub use nalgebra::Vector3;

/// 3D vector type, used for positions, directions and Euler rotations
pub type Vec3 = Vector3<f32>;

/// Linear RGB color with components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color3 {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
}

impl Color3 {
    /// Opaque white
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Opaque black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Pure red
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);

    /// Create a color from its components
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Whether every component lies in `[0, 1]`
    pub fn is_normalized(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }
}

impl Default for Color3 {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }

    /// Four-quadrant arctangent of `y / x` with `atan2(0, 0) == 0`.
    ///
    /// Both operands being zero (of either sign) yields `+0.0`. The plain
    /// `f32::atan2` returns `±π` for `atan2(±0, -0)`, which would flip an
    /// eye around whenever a gaze component happens to be exactly zero.
    pub fn atan2_or_zero(y: f32, x: f32) -> f32 {
        if y == 0.0 && x == 0.0 {
            0.0
        } else {
            y.atan2(x)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::constants::{HALF_PI, PI};
    use super::utils::*;
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_atan2_or_zero_degenerate() {
        assert_eq!(atan2_or_zero(0.0, 0.0), 0.0);
        assert_eq!(atan2_or_zero(0.0, -0.0), 0.0);
        assert_eq!(atan2_or_zero(-0.0, -0.0), 0.0);
        assert_eq!(atan2_or_zero(-0.0, 0.0), 0.0);
    }

    #[test]
    fn test_atan2_or_zero_matches_atan2_elsewhere() {
        assert_relative_eq!(atan2_or_zero(1.0, 0.0), HALF_PI);
        assert_relative_eq!(atan2_or_zero(-1.0, -0.0), -HALF_PI);
        assert_relative_eq!(atan2_or_zero(0.0, -1.0), PI);
        assert_relative_eq!(atan2_or_zero(1.0, 1.0), PI / 4.0);
    }

    #[test]
    fn test_angle_conversion() {
        assert_relative_eq!(deg_to_rad(180.0), PI);
        assert_relative_eq!(rad_to_deg(HALF_PI), 90.0, epsilon = 1e-4);
    }

    #[test]
    fn test_color_normalization() {
        assert!(Color3::new(0.6, 0.44, 0.6).is_normalized());
        assert!(!Color3::new(1.2, 0.0, 0.0).is_normalized());
        assert_eq!(Color3::default(), Color3::WHITE);
    }
}
