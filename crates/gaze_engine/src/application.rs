//! Application trait and lifecycle management

use crate::config::ConfigError;
use crate::engine::{Engine, EngineError};
use crate::scene::{SceneBackend, SceneError};
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to drive a scene with the engine's tick loop.
pub trait Application<B: SceneBackend> {
    /// Initialize the application
    ///
    /// Called once before the first tick. Build the scene here.
    fn initialize(&mut self, engine: &mut Engine<B>) -> Result<(), AppError>;

    /// Update the application
    ///
    /// Called once per tick. `tick` starts at 1.
    fn update(&mut self, engine: &mut Engine<B>, tick: u64) -> Result<(), AppError>;

    /// Cleanup the application
    ///
    /// Called after the last tick, also when the run was stopped early.
    fn cleanup(&mut self, _engine: &mut Engine<B>) {}
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Scene backend error
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Custom application error
    #[error("Application error: {0}")]
    Custom(String),
}
