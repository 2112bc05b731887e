//! Sinusoidal orbit of the gaze target
//!
//! Each axis follows its own sine or cosine of the tick number:
//!
//! ```text
//! x = sin(tick * 0.1 * speed) * 3
//! y = cos(tick * 0.17 * speed) * 3
//! z = -10 + sin((tick * 0.05 + 0.5) * speed) * 7
//! ```
//!
//! so the target stays inside `[-3, 3] x [-3, 3] x [-17, -3]`.

use crate::foundation::math::Vec3;

/// Speed used by the demo
pub const DEFAULT_SPEED: f32 = 0.3;

const X_FREQUENCY: f64 = 0.1;
const Y_FREQUENCY: f64 = 0.17;
const Z_FREQUENCY: f64 = 0.05;
const Z_PHASE: f64 = 0.5;
const XY_AMPLITUDE: f64 = 3.0;
const Z_CENTER: f64 = -10.0;
const Z_AMPLITUDE: f64 = 7.0;

/// Position of the target at `tick`
///
/// Pure function of its inputs. The phase is computed in `f64` so large tick
/// counts keep their precision before the result is narrowed to `f32`.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn compute_target_position(tick: u64, speed: f32) -> Vec3 {
    let tick = tick as f64;
    let speed = f64::from(speed);

    let x = (tick * X_FREQUENCY * speed).sin() * XY_AMPLITUDE;
    let y = (tick * Y_FREQUENCY * speed).cos() * XY_AMPLITUDE;
    let z = Z_CENTER + ((tick * Z_FREQUENCY + Z_PHASE) * speed).sin() * Z_AMPLITUDE;

    Vec3::new(x as f32, y as f32, z as f32)
}

/// Monotonic tick count owned by whoever drives the animation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickCounter {
    tick: u64,
}

impl TickCounter {
    /// Counter at tick 0
    pub const fn new() -> Self {
        Self { tick: 0 }
    }

    /// Current tick
    pub const fn get(&self) -> u64 {
        self.tick
    }

    /// Advance by one and return the new tick; the first call returns 1
    pub fn increment(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    /// Back to tick 0
    pub fn reset(&mut self) {
        self.tick = 0;
    }
}

/// Moves the target one tick at a time
#[derive(Debug, Clone)]
pub struct OrbitAnimator {
    counter: TickCounter,
    speed: f32,
}

impl Default for OrbitAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED)
    }
}

impl OrbitAnimator {
    /// Animator at tick 0
    pub const fn new(speed: f32) -> Self {
        Self {
            counter: TickCounter::new(),
            speed,
        }
    }

    /// Speed multiplier
    pub const fn speed(&self) -> f32 {
        self.speed
    }

    /// Ticks advanced so far
    pub const fn tick(&self) -> u64 {
        self.counter.get()
    }

    /// Target position for the current tick, without advancing
    pub fn position(&self) -> Vec3 {
        compute_target_position(self.counter.get(), self.speed)
    }

    /// Advance one tick and return the new target position
    pub fn advance(&mut self) -> Vec3 {
        let tick = self.counter.increment();
        let position = compute_target_position(tick, self.speed);
        log::trace!("Tick {}: target at {:?}", tick, position);
        position
    }

    /// Restart from tick 0
    pub fn reset(&mut self) {
        self.counter.reset();
    }
}
