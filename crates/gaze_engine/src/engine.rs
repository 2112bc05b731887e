//! Core engine implementation

use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    application::Application,
    config::{Config, ConfigError},
    scene::SceneBackend,
    scheduler::{IntervalScheduler, RunSummary, SchedulerError, StopHandle, DEFAULT_TICK_RATE},
};

/// Main engine struct
///
/// Owns the scene backend and drives an [`Application`] at a fixed tick rate.
pub struct Engine<B: SceneBackend> {
    /// Scene backend the application builds into
    scene: B,

    /// Engine configuration
    config: EngineConfig,

    /// Cancels the tick loop
    stop: StopHandle,

    /// Last tick delivered to the application
    tick: u64,
}

impl<B: SceneBackend> Engine<B> {
    /// Create a new engine instance
    pub fn new(config: EngineConfig, scene: B) -> Result<Self, EngineError> {
        config.validate()?;
        log::info!(
            "Initializing engine at {} ticks/s{}",
            config.tick_rate,
            config
                .max_ticks
                .map_or_else(String::new, |max| format!(", stopping after {max} ticks"))
        );

        Ok(Self {
            scene,
            config,
            stop: StopHandle::default(),
            tick: 0,
        })
    }

    /// Initialize `app`, tick it until stopped, then clean it up
    ///
    /// After [`Engine::quit`] or a stop handle fired, the engine stays
    /// stopped and a second call returns without ticking.
    pub fn run<A: Application<B>>(&mut self, app: &mut A) -> Result<RunSummary, EngineError> {
        app.initialize(self)
            .map_err(|e| EngineError::ApplicationError(format!("App initialization: {e}")))?;

        let mut scheduler = IntervalScheduler::from_rate(self.config.tick_rate)?
            .with_max_ticks(self.config.max_ticks)
            .with_stop_handle(self.stop.clone());

        log::info!("Starting tick loop...");
        let result = scheduler.run(|tick| {
            self.tick = tick;
            app.update(self, tick)
                .map(|()| ControlFlow::Continue(()))
                .map_err(|e| EngineError::ApplicationError(format!("App update at tick {tick}: {e}")))
        });

        // Cleanup
        app.cleanup(self);

        let summary = result?;
        log::info!(
            "Engine shutdown complete after {} ticks ({:.1} ticks/s, {:?})",
            summary.ticks,
            summary.average_rate,
            summary.reason
        );
        Ok(summary)
    }

    /// Request engine shutdown before the next tick
    pub fn quit(&self) {
        log::info!("Engine shutdown requested");
        self.stop.stop();
    }

    /// Handle that stops the engine from anywhere
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Get the scene backend
    pub fn scene(&self) -> &B {
        &self.scene
    }

    /// Get mutable access to the scene backend
    pub fn scene_mut(&mut self) -> &mut B {
        &mut self.scene
    }

    /// Get the engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Last tick delivered to the application, 0 before the first
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Take back the scene backend
    pub fn into_scene(self) -> B {
        self.scene
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Ticks per second
    pub tick_rate: f64,

    /// Stop after this many ticks; run until stopped when absent
    pub max_ticks: Option<u64>,

    /// Default log filter (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            max_ticks: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config for EngineConfig {}

impl EngineConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tick_rate.is_finite() || self.tick_rate <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "tick_rate must be positive, got {}",
                self.tick_rate
            )));
        }
        if crate::foundation::logging::parse_level(&self.log_level).is_none() {
            return Err(ConfigError::Invalid(format!(
                "unknown log_level '{}'",
                self.log_level
            )));
        }
        Ok(())
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Application error
    #[error("Application error: {0}")]
    ApplicationError(String),

    /// Tick scheduler error
    #[error("Scheduler error: {0}")]
    Scheduler(#[from] SchedulerError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
