//! Time management utilities

use std::time::{Duration, Instant};

/// Frame timer tracking tick count and rate
pub struct Timer {
    started: Instant,
    last_frame: Instant,
    delta_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_frame: now,
            delta_time: 0.0,
            frame_count: 0,
        }
    }

    /// Update the timer (should be called once per tick)
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Get the time since the previous tick in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time since timer creation
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Get the current tick count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average tick rate since timer creation
    #[allow(clippy::cast_precision_loss)]
    pub fn average_fps(&self) -> f32 {
        let total = self.elapsed().as_secs_f32();
        if total > 0.0 {
            self.frame_count as f32 / total
        } else {
            0.0
        }
    }
}
