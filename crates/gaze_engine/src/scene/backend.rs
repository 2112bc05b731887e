//! Backend traits and descriptors

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::foundation::math::{Color3, Vec3};

/// An entity with a mutable transform
///
/// Rotation is stored as Euler angles in radians: `x` is pitch, `y` is yaw
/// and `z` is roll. Forward is `-Z`.
pub trait Spatial {
    /// World space position
    fn position(&self) -> Vec3;

    /// Move the entity
    fn set_position(&mut self, position: Vec3);

    /// Euler rotation (pitch, yaw, roll)
    fn rotation(&self) -> Vec3;

    /// Replace the Euler rotation
    fn set_rotation(&mut self, rotation: Vec3);

    /// Per-axis scale factors
    fn scaling(&self) -> Vec3;

    /// Replace the scale factors
    fn set_scaling(&mut self, scaling: Vec3);
}

/// Minimal set of operations the demo needs from a rendering engine
pub trait SceneBackend {
    /// Handle to a positionable mesh
    type Entity: Spatial;

    /// Handle to a material
    type Material;

    /// Create a sphere mesh centered at the origin
    fn create_sphere(
        &mut self,
        name: &str,
        options: &SphereOptions,
    ) -> Result<Self::Entity, SceneError>;

    /// Create a material
    fn create_material(&mut self, desc: &MaterialDesc) -> Result<Self::Material, SceneError>;

    /// Assign a material to a mesh
    fn set_material(
        &mut self,
        entity: &Self::Entity,
        material: &Self::Material,
    ) -> Result<(), SceneError>;

    /// Bake several meshes into one, disposing the sources
    ///
    /// Each source keeps its own material in the result. The merged entity
    /// starts with an identity transform.
    fn merge_meshes(&mut self, parts: Vec<Self::Entity>) -> Result<Self::Entity, SceneError>;

    /// Add a camera
    fn add_camera(&mut self, desc: &CameraDesc) -> Result<(), SceneError>;

    /// Add a light
    fn add_light(&mut self, desc: &LightDesc) -> Result<(), SceneError>;
}

/// Sphere tessellation parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereOptions {
    /// Sphere diameter in world units
    pub diameter: f32,
    /// Number of horizontal segments
    pub segments: u32,
}

impl SphereOptions {
    /// Create sphere options
    pub const fn new(diameter: f32, segments: u32) -> Self {
        Self { diameter, segments }
    }

    /// Reject empty or non-finite spheres
    pub fn validate(&self) -> Result<(), SceneError> {
        if !self.diameter.is_finite() || self.diameter <= 0.0 {
            return Err(SceneError::InvalidDescriptor(format!(
                "sphere diameter must be positive, got {}",
                self.diameter
            )));
        }
        if self.segments == 0 {
            return Err(SceneError::InvalidDescriptor(
                "sphere needs at least one segment".to_string(),
            ));
        }
        Ok(())
    }
}

/// How a material responds to light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShadingModel {
    /// Regular diffuse/specular shading
    Standard,
    /// Toon shading with hard light bands
    Cel,
    /// Lighting disabled, diffuse color drawn as is
    Unlit,
}

/// Material description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDesc {
    /// Material name
    pub name: String,
    /// Diffuse color
    pub diffuse: Color3,
    /// Shading model
    pub shading: ShadingModel,
}

impl MaterialDesc {
    /// Standard lit material
    pub fn standard(name: impl Into<String>, diffuse: Color3) -> Self {
        Self {
            name: name.into(),
            diffuse,
            shading: ShadingModel::Standard,
        }
    }

    /// Cel-shaded material
    pub fn cel(name: impl Into<String>, diffuse: Color3) -> Self {
        Self {
            name: name.into(),
            diffuse,
            shading: ShadingModel::Cel,
        }
    }

    /// Material with lighting disabled
    pub fn unlit(name: impl Into<String>, diffuse: Color3) -> Self {
        Self {
            name: name.into(),
            diffuse,
            shading: ShadingModel::Unlit,
        }
    }

    /// Reject colors outside `[0, 1]`
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.diffuse.is_normalized() {
            Ok(())
        } else {
            Err(SceneError::InvalidDescriptor(format!(
                "material '{}' has color outside [0, 1]: {:?}",
                self.name, self.diffuse
            )))
        }
    }
}

/// Free camera aimed at a target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraDesc {
    /// Camera name
    pub name: String,
    /// Camera position
    pub position: Vec3,
    /// Point the camera looks at
    pub target: Vec3,
    /// Whether user input should drive the camera
    pub attach_controls: bool,
}

impl Default for CameraDesc {
    fn default() -> Self {
        Self {
            name: "camera1".to_string(),
            position: Vec3::new(0.0, 0.0, -20.0),
            target: Vec3::zeros(),
            attach_controls: true,
        }
    }
}

/// Hemispheric light
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightDesc {
    /// Light name
    pub name: String,
    /// Direction towards the sky hemisphere
    pub direction: Vec3,
    /// Intensity multiplier
    pub intensity: f32,
}

impl Default for LightDesc {
    fn default() -> Self {
        Self {
            name: "light1".to_string(),
            direction: Vec3::new(-1.0, 1.0, -1.0),
            intensity: 1.0,
        }
    }
}

impl LightDesc {
    /// Reject a zero direction or a negative or NaN intensity
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.direction.norm_squared() == 0.0 {
            return Err(SceneError::InvalidDescriptor(format!(
                "light '{}' has a zero direction",
                self.name
            )));
        }
        if self.intensity.is_nan() || self.intensity < 0.0 {
            return Err(SceneError::InvalidDescriptor(format!(
                "light '{}' intensity must be a non-negative number, got {}",
                self.name, self.intensity
            )));
        }
        Ok(())
    }
}

/// Scene backend errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// Entity is not (or no longer) part of the scene
    #[error("Unknown entity: {0}")]
    UnknownEntity(String),

    /// Descriptor values are out of range
    #[error("Invalid descriptor: {0}")]
    InvalidDescriptor(String),

    /// Merge called without meshes
    #[error("Cannot merge an empty mesh list")]
    EmptyMerge,
}
