//! Single-eye look-at

use crate::foundation::math::{utils::atan2_or_zero, Vec3};
use crate::scene::Spatial;

/// Rotation that turns an eye at `eye` towards `point`
///
/// The eye looks down `-Z` at rest. With gaze `g = point - eye` the result is
/// `(atan2(g.y, -g.z), -atan2(g.x, -g.z), 0)`: pitch, yaw and no roll. A
/// zero gaze vector yields a zero rotation.
pub fn look_rotation(eye: Vec3, point: Vec3) -> Vec3 {
    let gaze = point - eye;
    let alpha = atan2_or_zero(gaze.y, -gaze.z);
    let beta = atan2_or_zero(gaze.x, -gaze.z);
    Vec3::new(alpha, -beta, 0.0)
}

/// Orient `eye` towards `point`
pub fn look_at<E: Spatial + ?Sized>(eye: &mut E, point: Vec3) {
    let rotation = look_rotation(eye.position(), point);
    eye.set_rotation(rotation);
}
