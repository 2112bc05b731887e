//! # Gaze Engine
//!
//! Engine-agnostic pieces of the watching eyes demo: eyeballs that turn to
//! follow a fly orbiting in front of them.
//!
//! ## Features
//!
//! - **Gaze Geometry**: look-at rotation and symmetric eye-pair placement
//! - **Orbit Animation**: closed-form target path driven by a tick counter
//! - **Fixed-Rate Scheduling**: single-threaded tick loop with a stop handle
//! - **Scene Interface**: minimal capability trait for a rendering engine,
//!   with an in-memory backend for tests and headless runs
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gaze_engine::prelude::*;
//!
//! struct Watcher {
//!     eyes: Option<EyePair<HeadlessEntity>>,
//!     fly: OrbitAnimator,
//! }
//!
//! impl Application<HeadlessScene> for Watcher {
//!     fn initialize(&mut self, engine: &mut Engine<HeadlessScene>) -> Result<(), AppError> {
//!         let eyes = EyeFactory::create_eye_pair(
//!             engine.scene_mut(),
//!             Color3::new(0.0, 0.85, 1.0),
//!             &EyeStyle::default(),
//!         )?;
//!         self.eyes = Some(eyes);
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, _engine: &mut Engine<HeadlessScene>, _tick: u64) -> Result<(), AppError> {
//!         let target = self.fly.advance();
//!         if let Some(eyes) = self.eyes.as_mut() {
//!             eyes.look_at(target);
//!         }
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut engine = Engine::new(EngineConfig::default(), HeadlessScene::new())?;
//!     let mut app = Watcher { eyes: None, fly: OrbitAnimator::default() };
//!     engine.run(&mut app)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod scene;
pub mod gaze;
pub mod animation;
pub mod scheduler;

mod application;
mod engine;

pub use application::{Application, AppError};
pub use engine::{Engine, EngineConfig, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Application, AppError,
        Engine, EngineConfig, EngineError,
        animation::{compute_target_position, OrbitAnimator, TickCounter},
        config::{Config, ConfigError},
        foundation::math::{Color3, Vec3},
        gaze::{EyeFactory, EyePair, EyeStyle, FlyStyle},
        scene::{
            CameraDesc, HeadlessEntity, HeadlessScene, LightDesc, SceneBackend, SceneError,
            Spatial,
        },
        scheduler::{RunSummary, StopHandle, StopReason},
    };
}
