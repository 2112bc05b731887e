//! Fixed-interval tick driver
//!
//! Runs a callback on the calling thread at a fixed cadence until it is
//! stopped. Deadlines are `start + n * interval`, so sleep jitter does not
//! accumulate; after an overrun the schedule restarts from the current
//! instant instead of firing a burst of catch-up ticks.

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::foundation::time::Timer;

/// Nominal demo cadence
pub const DEFAULT_TICK_RATE: f64 = 60.0;

/// Cancels a running [`IntervalScheduler`]
///
/// Clones share the same flag, so a handle can be moved to another thread or
/// kept by the tick callback itself.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,
}

impl StopHandle {
    /// Request the scheduler to stop before its next tick
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    /// Whether a stop was requested
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A [`StopHandle`] was triggered
    Stopped,
    /// The callback returned [`ControlFlow::Break`]
    Break,
    /// The configured tick limit was reached
    MaxTicks,
}

/// Result of a completed run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Number of ticks executed
    pub ticks: u64,
    /// Wall time of the run
    pub elapsed: Duration,
    /// Average ticks per second
    pub average_rate: f32,
    /// Why the run ended
    pub reason: StopReason,
}

/// Scheduler construction errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchedulerError {
    /// Interval or rate cannot drive a loop
    #[error("Invalid tick interval: {0}")]
    InvalidInterval(String),
}

/// Single-threaded fixed-interval scheduler
#[derive(Debug)]
pub struct IntervalScheduler {
    interval: Duration,
    max_ticks: Option<u64>,
    stop: StopHandle,
}

impl IntervalScheduler {
    /// Scheduler firing every `interval`
    pub fn new(interval: Duration) -> Result<Self, SchedulerError> {
        if interval.is_zero() {
            return Err(SchedulerError::InvalidInterval(
                "interval must be longer than zero".to_string(),
            ));
        }
        Ok(Self {
            interval,
            max_ticks: None,
            stop: StopHandle::default(),
        })
    }

    /// Scheduler firing `rate` times per second
    pub fn from_rate(rate: f64) -> Result<Self, SchedulerError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(SchedulerError::InvalidInterval(format!(
                "tick rate must be positive, got {rate}"
            )));
        }
        Self::new(Duration::from_secs_f64(1.0 / rate))
    }

    /// Stop after `max_ticks` ticks; `None` runs until stopped
    #[must_use]
    pub const fn with_max_ticks(mut self, max_ticks: Option<u64>) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// Share an existing stop flag instead of the scheduler's own
    #[must_use]
    pub fn with_stop_handle(mut self, stop: StopHandle) -> Self {
        self.stop = stop;
        self
    }

    /// Time between ticks
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Handle that cancels this scheduler
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Run `callback` once per tick until stopped
    ///
    /// The callback receives the tick number, starting at 1. An error from
    /// the callback ends the run and is returned as is.
    pub fn run<F, E>(&mut self, mut callback: F) -> Result<RunSummary, E>
    where
        F: FnMut(u64) -> Result<ControlFlow<()>, E>,
    {
        let mut timer = Timer::new();
        let mut tick = 0_u64;
        let mut deadline = Instant::now() + self.interval;

        log::debug!("Scheduler started, interval {:?}", self.interval);

        let reason = loop {
            if self.stop.is_stopped() {
                break StopReason::Stopped;
            }
            if self.max_ticks.is_some_and(|max| tick >= max) {
                break StopReason::MaxTicks;
            }

            let now = Instant::now();
            if deadline > now {
                std::thread::sleep(deadline - now);
            }

            tick += 1;
            timer.update();
            if callback(tick)?.is_break() {
                break StopReason::Break;
            }

            deadline += self.interval;
            let now = Instant::now();
            if deadline < now {
                log::trace!(
                    "Tick {} overran its slot by {:?} ({:.4}s since previous tick)",
                    tick,
                    now - deadline,
                    timer.delta_time()
                );
                deadline = now;
            }
        };

        let summary = RunSummary {
            ticks: tick,
            elapsed: timer.elapsed(),
            average_rate: timer.average_fps(),
            reason,
        };
        log::debug!("Scheduler finished: {:?}", summary);
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn fast() -> IntervalScheduler {
        IntervalScheduler::new(Duration::from_millis(1)).unwrap()
    }

    #[test]
    fn test_invalid_intervals() {
        assert!(IntervalScheduler::new(Duration::ZERO).is_err());
        assert!(IntervalScheduler::from_rate(0.0).is_err());
        assert!(IntervalScheduler::from_rate(-60.0).is_err());
        assert!(IntervalScheduler::from_rate(f64::NAN).is_err());
    }

    #[test]
    fn test_rate_to_interval() {
        let scheduler = IntervalScheduler::from_rate(DEFAULT_TICK_RATE).unwrap();
        let millis = scheduler.interval().as_secs_f64() * 1000.0;
        assert!((millis - 16.666).abs() < 0.01, "interval was {millis} ms");
    }

    #[test]
    fn test_ticks_start_at_one_and_respect_max() {
        let mut seen = Vec::new();
        let summary = fast()
            .with_max_ticks(Some(5))
            .run(|tick| {
                seen.push(tick);
                Ok::<_, Infallible>(ControlFlow::Continue(()))
            })
            .unwrap();

        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
        assert_eq!(summary.ticks, 5);
        assert_eq!(summary.reason, StopReason::MaxTicks);
    }

    #[test]
    fn test_break_from_callback() {
        let summary = fast()
            .run(|tick| {
                Ok::<_, Infallible>(if tick == 3 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                })
            })
            .unwrap();

        assert_eq!(summary.ticks, 3);
        assert_eq!(summary.reason, StopReason::Break);
    }

    #[test]
    fn test_stop_handle_from_callback() {
        let mut scheduler = fast();
        let handle = scheduler.stop_handle();
        let summary = scheduler
            .run(|tick| {
                if tick == 4 {
                    handle.stop();
                }
                Ok::<_, Infallible>(ControlFlow::Continue(()))
            })
            .unwrap();

        assert_eq!(summary.ticks, 4);
        assert_eq!(summary.reason, StopReason::Stopped);
    }

    #[test]
    fn test_stop_handle_from_other_thread() {
        let mut scheduler = fast();
        let handle = scheduler.stop_handle();
        let stopper = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(20));
            handle.stop();
        });

        let summary = scheduler
            .run(|_| Ok::<_, Infallible>(ControlFlow::Continue(())))
            .unwrap();
        stopper.join().unwrap();

        assert_eq!(summary.reason, StopReason::Stopped);
        assert!(summary.ticks > 0);
    }

    #[test]
    fn test_shared_stop_handle() {
        let handle = StopHandle::default();
        let mut scheduler = fast().with_stop_handle(handle.clone());
        let summary = scheduler
            .run(|tick| {
                if tick == 2 {
                    handle.stop();
                }
                Ok::<_, Infallible>(ControlFlow::Continue(()))
            })
            .unwrap();

        assert_eq!(summary.ticks, 2);
        assert!(scheduler.stop_handle().is_stopped());
    }

    #[test]
    fn test_stopped_before_start_runs_nothing() {
        let mut scheduler = fast();
        scheduler.stop_handle().stop();
        let mut calls = 0;
        let summary = scheduler
            .run(|_| {
                calls += 1;
                Ok::<_, Infallible>(ControlFlow::Continue(()))
            })
            .unwrap();

        assert_eq!(calls, 0);
        assert_eq!(summary.ticks, 0);
    }

    #[test]
    fn test_callback_error_propagates() {
        let result = fast().run(|tick| {
            if tick == 2 {
                Err("boom")
            } else {
                Ok(ControlFlow::Continue(()))
            }
        });
        assert_eq!(result.unwrap_err(), "boom");
    }

    #[test]
    fn test_cadence_is_roughly_fixed() {
        let interval = Duration::from_millis(5);
        let summary = IntervalScheduler::new(interval)
            .unwrap()
            .with_max_ticks(Some(10))
            .run(|_| Ok::<_, Infallible>(ControlFlow::Continue(())))
            .unwrap();

        // Ten deadlines at 5 ms each; sleeping never returns early
        assert!(summary.elapsed >= interval * 10);
    }

    #[test]
    fn test_overrun_does_not_burst() {
        let interval = Duration::from_millis(20);
        let mut stamps = Vec::new();
        IntervalScheduler::new(interval)
            .unwrap()
            .with_max_ticks(Some(5))
            .run(|tick| {
                stamps.push(Instant::now());
                if tick == 1 {
                    std::thread::sleep(interval * 5);
                }
                Ok::<_, Infallible>(ControlFlow::Continue(()))
            })
            .unwrap();

        assert_eq!(stamps.len(), 5);
        // Tick 2 starts right after the stall, later ticks keep the cadence
        for pair in stamps[1..].windows(2) {
            assert!(pair[1] - pair[0] >= interval / 2);
        }
    }
}
