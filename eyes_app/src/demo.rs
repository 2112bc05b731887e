//! Eyeballs following a fly
//!
//! Four eye pairs are spread around the origin; a red fly circles in front
//! of them and every eye turns to look at it on each tick.

use gaze_engine::animation::OrbitAnimator;
use gaze_engine::foundation::math::{utils::rad_to_deg, Vec3};
use gaze_engine::gaze::{EyeFactory, EyePair};
use gaze_engine::scene::{SceneBackend, Spatial};
use gaze_engine::{AppError, Application, Engine};

use crate::settings::DemoConfig;

/// The watching eyes scene
pub struct EyesDemo<B: SceneBackend> {
    config: DemoConfig,
    animator: OrbitAnimator,
    eyes: Vec<EyePair<B::Entity>>,
    fly: Option<B::Entity>,
}

impl<B: SceneBackend> EyesDemo<B> {
    /// Demo that will build the scene described by `config`
    pub fn new(config: DemoConfig) -> Self {
        let animator = OrbitAnimator::new(config.speed);
        Self {
            config,
            animator,
            eyes: Vec::new(),
            fly: None,
        }
    }

    /// Eye pairs created so far
    pub fn eyes(&self) -> &[EyePair<B::Entity>] {
        &self.eyes
    }

    /// The fly, once the scene is built
    pub fn fly(&self) -> Option<&B::Entity> {
        self.fly.as_ref()
    }

    /// Animation state
    pub fn animator(&self) -> &OrbitAnimator {
        &self.animator
    }

    fn report(&self, tick: u64, target: Vec3) {
        log::info!(
            "Tick {}: fly at ({:.2}, {:.2}, {:.2})",
            tick,
            target.x,
            target.y,
            target.z
        );
        for (index, pair) in self.eyes.iter().enumerate() {
            let left = pair.left.rotation();
            let right = pair.right.rotation();
            log::debug!(
                "  pair {}: left pitch {:.1}° yaw {:.1}°, right pitch {:.1}° yaw {:.1}°",
                index,
                rad_to_deg(left.x),
                rad_to_deg(left.y),
                rad_to_deg(right.x),
                rad_to_deg(right.y)
            );
        }
    }
}

impl<B: SceneBackend> Application<B> for EyesDemo<B> {
    fn initialize(&mut self, engine: &mut Engine<B>) -> Result<(), AppError> {
        self.config.validate()?;
        let scene = engine.scene_mut();

        scene.add_camera(&self.config.camera)?;
        scene.add_light(&self.config.light)?;

        for pair_config in &self.config.eye_pairs {
            let mut pair =
                EyeFactory::create_eye_pair(scene, pair_config.color, &self.config.eye_style)?;
            pair.set_position(pair_config.center);
            self.eyes.push(pair);
        }

        self.fly = Some(EyeFactory::create_fly(scene, &self.config.fly)?);

        log::info!(
            "Scene built: {} eye pairs watching a fly at speed {}",
            self.eyes.len(),
            self.animator.speed()
        );
        Ok(())
    }

    fn update(&mut self, _engine: &mut Engine<B>, tick: u64) -> Result<(), AppError> {
        let target = self.animator.advance();

        if let Some(fly) = self.fly.as_mut() {
            fly.set_position(target);
        }
        for pair in &mut self.eyes {
            pair.look_at(target);
        }

        let every = self.config.report_every;
        if every > 0 && tick % every == 0 {
            self.report(tick, target);
        }
        Ok(())
    }

    fn cleanup(&mut self, _engine: &mut Engine<B>) {
        log::info!(
            "Eyes demo stopped after {} animation ticks",
            self.animator.tick()
        );
    }
}
