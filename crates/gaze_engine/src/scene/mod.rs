//! Scene capability interface
//!
//! The gaze and animation code never talks to a renderer directly. It only
//! needs a [`SceneBackend`] that can build colored spheres, materials, a
//! camera and a light, and entities that implement [`Spatial`].
//! [`HeadlessScene`] is the in-memory implementation used by tests and the
//! demo binary.

pub mod backend;
pub mod headless;

pub use backend::{
    CameraDesc, LightDesc, MaterialDesc, SceneBackend, SceneError, ShadingModel, Spatial,
    SphereOptions,
};
pub use headless::{HeadlessEntity, HeadlessScene, MaterialId, Node, NodeId, NodeKind};
