//! Binocular eye pair

use crate::foundation::math::Vec3;
use crate::scene::Spatial;

use super::eye;

/// Two eyes that move together and gaze independently
#[derive(Debug, Clone)]
pub struct EyePair<E> {
    /// Eye on the negative x side
    pub left: E,
    /// Eye on the positive x side
    pub right: E,
}

impl<E: Spatial> EyePair<E> {
    /// Pair two already placed eyes
    pub const fn new(left: E, right: E) -> Self {
        Self { left, right }
    }

    /// Horizontal distance between the eyes, measured from their live positions
    pub fn separation(&self) -> f32 {
        (self.left.position().x - self.right.position().x).abs()
    }

    /// Midpoint between the eyes
    pub fn center(&self) -> Vec3 {
        (self.left.position() + self.right.position()) * 0.5
    }

    /// Move the pair so it is centered on `center`
    ///
    /// The separation is re-measured from the current eye positions on every
    /// call, so the eyes must have been placed apart before the first move.
    /// Both eyes take `center`'s y and z.
    pub fn set_position(&mut self, center: Vec3) {
        let half = self.separation() / 2.0;
        self.left
            .set_position(Vec3::new(center.x - half, center.y, center.z));
        self.right
            .set_position(Vec3::new(center.x + half, center.y, center.z));
    }

    /// Turn both eyes towards `point`
    pub fn look_at(&mut self, point: Vec3) {
        eye::look_at(&mut self.left, point);
        eye::look_at(&mut self.right, point);
    }
}
