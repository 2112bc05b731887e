//! Watching eyes demo
//!
//! Usage: `watching_eyes [config.toml | config.ron]`

mod demo;
mod settings;

use gaze_engine::config::{Config, ConfigError};
use gaze_engine::foundation::logging;
use gaze_engine::scene::{HeadlessScene, Spatial};
use gaze_engine::Engine;

use demo::EyesDemo;
use settings::DemoConfig;

fn load_config() -> Result<DemoConfig, ConfigError> {
    let config = match std::env::args().nth(1) {
        Some(path) => DemoConfig::load_from_file(&path)?,
        None => DemoConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config();

    // Initialize logging
    logging::init(
        config
            .as_ref()
            .map_or("info", |config| config.engine.log_level.as_str()),
    );

    let config = config.map_err(|e| {
        log::error!("Could not load configuration: {}", e);
        e
    })?;

    log::info!("Starting watching eyes demo");

    let mut engine = Engine::new(config.engine.clone(), HeadlessScene::new())?;
    let mut app = EyesDemo::new(config);

    match engine.run(&mut app) {
        Ok(summary) => {
            if let Some(fly) = app.fly() {
                let last = fly.position();
                log::info!(
                    "{} eye pairs followed the fly for {} ticks, last seen at ({:.2}, {:.2}, {:.2})",
                    app.eyes().len(),
                    app.animator().tick(),
                    last.x,
                    last.y,
                    last.z
                );
            }
            log::info!("Watching eyes demo finished: {:?}", summary.reason);
            Ok(())
        }
        Err(e) => {
            log::error!("Watching eyes demo failed: {}", e);
            Err(e.into())
        }
    }
}
