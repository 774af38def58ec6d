use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use parking_lot::Mutex;

/// Time source of the smooth scale timer.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self { now: Mutex::new(Instant::now()) }
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, duration: Duration) {
        *self.now.lock() += duration;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock()
    }
}

/// Single shot timer polled by the event loop.
///
/// Starting an active timer restarts it, so only the last start counts.
pub struct SmoothScaleTimer {
    clock: Arc<dyn Clock>,
    interval: Duration,
    deadline: Option<Instant>,
}

impl SmoothScaleTimer {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(200);

    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_interval(clock, Self::DEFAULT_INTERVAL)
    }

    pub fn with_interval(clock: Arc<dyn Clock>, interval: Duration) -> Self {
        Self {
            clock,
            interval,
            deadline: None,
        }
    }

    pub fn start(&mut self) {
        self.deadline = Some(self.clock.now() + self.interval);
    }

    pub fn kill(&mut self) {
        self.deadline = None;
    }

    pub fn is_active(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn is_due(&self) -> bool {
        self.deadline.is_some_and(|deadline| self.clock.now() >= deadline)
    }

    pub fn remaining(&self) -> Option<Duration> {
        self.deadline.map(|deadline| deadline.saturating_duration_since(self.clock.now()))
    }
}
