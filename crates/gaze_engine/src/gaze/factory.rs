//! Eye and fly construction
//!
//! An eye is a white cel-shaded eyeball with a flattened colored iris and a
//! flattened unlit black pupil pressed onto its front (`-Z`) side, merged
//! into a single mesh so it can be rotated as one.

use serde::{Deserialize, Serialize};

use crate::foundation::math::{Color3, Vec3};
use crate::scene::{MaterialDesc, SceneBackend, SceneError, Spatial, SphereOptions};

use super::pair::EyePair;

/// Proportions of a generated eye
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EyeStyle {
    /// Eyeball radius
    pub radius: f32,
    /// Iris radius as a fraction of the eyeball radius
    pub iris_ratio: f32,
    /// Pupil radius as a fraction of the eyeball radius
    pub pupil_ratio: f32,
    /// Distance of each eye from the pair center, in eyeball radii
    pub offset_ratio: f32,
    /// Eyeball tessellation
    pub eyeball_segments: u32,
    /// Iris tessellation
    pub iris_segments: u32,
    /// Pupil tessellation
    pub pupil_segments: u32,
}

impl Default for EyeStyle {
    fn default() -> Self {
        Self {
            radius: 1.0,
            iris_ratio: 0.4,
            pupil_ratio: 0.2,
            offset_ratio: 1.7,
            eyeball_segments: 16,
            iris_segments: 8,
            pupil_segments: 16,
        }
    }
}

impl EyeStyle {
    /// Horizontal distance between the two eyes of a fresh pair
    pub fn separation(&self) -> f32 {
        2.0 * self.offset_ratio * self.radius
    }

    /// Reject proportions that cannot produce a visible eye
    pub fn validate(&self) -> Result<(), SceneError> {
        let positive = |value: f32| value.is_finite() && value > 0.0;
        if !positive(self.radius) {
            return Err(SceneError::InvalidDescriptor(format!(
                "eye radius must be positive, got {}",
                self.radius
            )));
        }
        if !positive(self.iris_ratio) || !positive(self.pupil_ratio) {
            return Err(SceneError::InvalidDescriptor(
                "iris and pupil ratios must be positive".to_string(),
            ));
        }
        if self.offset_ratio < 0.0 {
            return Err(SceneError::InvalidDescriptor(format!(
                "eye offset must not be negative, got {}",
                self.offset_ratio
            )));
        }
        Ok(())
    }
}

/// Appearance of the fly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlyStyle {
    /// Sphere diameter
    pub diameter: f32,
    /// Sphere tessellation
    pub segments: u32,
    /// Diffuse color
    pub color: Color3,
    /// Position before the first tick
    pub position: Vec3,
}

impl Default for FlyStyle {
    fn default() -> Self {
        Self {
            diameter: 0.5,
            segments: 8,
            color: Color3::RED,
            position: Vec3::new(1.0, 0.0, -3.0),
        }
    }
}

/// Builds eyes and the fly on any [`SceneBackend`]
pub struct EyeFactory;

impl EyeFactory {
    /// Create one eye with the given iris color, centered at the origin
    pub fn create_eye<B: SceneBackend>(
        backend: &mut B,
        color: Color3,
        style: &EyeStyle,
    ) -> Result<B::Entity, SceneError> {
        style.validate()?;
        let radius = style.radius;

        let eyeball = backend.create_sphere(
            "eyeball",
            &SphereOptions::new(2.0 * radius, style.eyeball_segments),
        )?;
        let eyeball_material =
            backend.create_material(&MaterialDesc::cel("eyeballmaterial", Color3::WHITE))?;
        backend.set_material(&eyeball, &eyeball_material)?;

        let mut iris = backend.create_sphere(
            "iris",
            &SphereOptions::new(2.0 * style.iris_ratio * radius, style.iris_segments),
        )?;
        iris.set_position(Vec3::new(0.0, 0.0, -radius * 0.97));
        iris.set_scaling(Vec3::new(1.0, 1.0, 0.05));
        let iris_material = backend.create_material(&MaterialDesc::standard("irismaterial", color))?;
        backend.set_material(&iris, &iris_material)?;

        let mut pupil = backend.create_sphere(
            "pupil",
            &SphereOptions::new(2.0 * style.pupil_ratio * radius, style.pupil_segments),
        )?;
        pupil.set_position(Vec3::new(0.0, 0.0, -radius));
        pupil.set_scaling(Vec3::new(1.0, 1.0, 0.1));
        let pupil_material =
            backend.create_material(&MaterialDesc::unlit("pupilmaterial", Color3::BLACK))?;
        backend.set_material(&pupil, &pupil_material)?;

        backend.merge_meshes(vec![eyeball, iris, pupil])
    }

    /// Create two eyes placed symmetrically about the origin
    pub fn create_eye_pair<B: SceneBackend>(
        backend: &mut B,
        color: Color3,
        style: &EyeStyle,
    ) -> Result<EyePair<B::Entity>, SceneError> {
        let mut left = Self::create_eye(backend, color, style)?;
        let mut right = Self::create_eye(backend, color, style)?;

        let offset = style.offset_ratio * style.radius;
        left.set_position(Vec3::new(-offset, 0.0, 0.0));
        right.set_position(Vec3::new(offset, 0.0, 0.0));

        log::debug!("Created eye pair with color {:?}, separation {}", color, style.separation());
        Ok(EyePair::new(left, right))
    }

    /// Create the red fly sphere at its starting position
    pub fn create_fly<B: SceneBackend>(
        backend: &mut B,
        style: &FlyStyle,
    ) -> Result<B::Entity, SceneError> {
        let mut fly =
            backend.create_sphere("fly", &SphereOptions::new(style.diameter, style.segments))?;
        let material = backend.create_material(&MaterialDesc::standard("flymaterial", style.color))?;
        backend.set_material(&fly, &material)?;
        fly.set_position(style.position);
        Ok(fly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{HeadlessScene, NodeKind, ShadingModel};
    use approx::assert_relative_eq;

    #[test]
    fn test_eye_is_merged_from_three_parts() {
        let mut scene = HeadlessScene::new();
        let color = Color3::new(0.0, 0.85, 1.0);
        let eye = EyeFactory::create_eye(&mut scene, color, &EyeStyle::default()).unwrap();

        assert_eq!(scene.node_count(), 1);
        let node = eye.snapshot();
        assert_eq!(node.position, Vec3::zeros());
        assert_eq!(node.materials.len(), 3);

        let shading: Vec<_> = node
            .materials
            .iter()
            .map(|id| scene.material(*id).unwrap().shading)
            .collect();
        assert_eq!(
            shading,
            vec![ShadingModel::Cel, ShadingModel::Standard, ShadingModel::Unlit]
        );
        assert_eq!(scene.material(node.materials[1]).unwrap().diffuse, color);
        assert_eq!(scene.material(node.materials[2]).unwrap().diffuse, Color3::BLACK);

        let NodeKind::Merged(parts) = node.kind else {
            panic!("eye should be a merged mesh");
        };
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].kind, NodeKind::Sphere(SphereOptions::new(2.0, 16)));
        assert_eq!(parts[1].kind, NodeKind::Sphere(SphereOptions::new(0.8, 8)));
        assert_eq!(parts[2].kind, NodeKind::Sphere(SphereOptions::new(0.4, 16)));
        assert_relative_eq!(parts[1].position, Vec3::new(0.0, 0.0, -0.97));
        assert_relative_eq!(parts[1].scaling.z, 0.05);
        assert_relative_eq!(parts[2].position, Vec3::new(0.0, 0.0, -1.0));
        assert_relative_eq!(parts[2].scaling.z, 0.1);
    }

    #[test]
    fn test_eye_scales_with_radius() {
        let mut scene = HeadlessScene::new();
        let style = EyeStyle {
            radius: 2.5,
            ..EyeStyle::default()
        };
        let eye = EyeFactory::create_eye(&mut scene, Color3::WHITE, &style).unwrap();

        let NodeKind::Merged(parts) = eye.snapshot().kind else {
            panic!("eye should be a merged mesh");
        };
        assert_eq!(parts[0].kind, NodeKind::Sphere(SphereOptions::new(5.0, 16)));
        assert_relative_eq!(parts[2].position.z, -2.5);
    }

    #[test]
    fn test_eye_pair_starts_apart() {
        let mut scene = HeadlessScene::new();
        let pair = EyeFactory::create_eye_pair(&mut scene, Color3::WHITE, &EyeStyle::default())
            .unwrap();

        assert_relative_eq!(pair.left.position(), Vec3::new(-1.7, 0.0, 0.0));
        assert_relative_eq!(pair.right.position(), Vec3::new(1.7, 0.0, 0.0));
        assert_relative_eq!(pair.separation(), EyeStyle::default().separation());
        assert_eq!(scene.node_count(), 2);
    }

    #[test]
    fn test_invalid_style_rejected() {
        let mut scene = HeadlessScene::new();
        let style = EyeStyle {
            radius: 0.0,
            ..EyeStyle::default()
        };
        let result = EyeFactory::create_eye(&mut scene, Color3::WHITE, &style);

        assert!(matches!(result, Err(SceneError::InvalidDescriptor(_))));
        assert_eq!(scene.node_count(), 0);
    }

    #[test]
    fn test_fly() {
        let mut scene = HeadlessScene::new();
        let fly = EyeFactory::create_fly(&mut scene, &FlyStyle::default()).unwrap();

        let node = fly.snapshot();
        assert_eq!(node.name, "fly");
        assert_eq!(node.kind, NodeKind::Sphere(SphereOptions::new(0.5, 8)));
        assert_eq!(node.position, Vec3::new(1.0, 0.0, -3.0));
        assert_eq!(scene.material(node.materials[0]).unwrap().diffuse, Color3::RED);
    }
}
