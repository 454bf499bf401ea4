use anyhow::{Result, bail};
use log::info;
use std::cell::Cell;
use std::time::{Duration, Instant};

/// Time source for the rate limiter
pub trait Clock {
    fn now(&self) -> Instant;
    fn sleep(&self, duration: Duration);
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Deterministic clock: `sleep` advances time instantly and is counted
pub struct ManualClock {
    origin: Instant,
    elapsed: Cell<Duration>,
    sleeps: Cell<usize>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Cell::new(Duration::ZERO),
            sleeps: Cell::new(0),
        }
    }

    pub fn advance(&self, duration: Duration) {
        self.elapsed.set(self.elapsed.get() + duration);
    }

    pub fn sleeps(&self) -> usize {
        self.sleeps.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed.get()
    }

    fn sleep(&self, duration: Duration) {
        self.sleeps.set(self.sleeps.get() + 1);
        self.advance(duration);
    }
}

/// Spaces consecutive upstream calls at least `gap` apart
pub struct RateLimiter<C: Clock = SystemClock> {
    gap: Duration,
    poll_interval: Duration,
    last_call: Option<Instant>,
    clock: C,
}

impl RateLimiter<SystemClock> {
    pub fn new(gap: Duration, poll_interval: Duration) -> Result<Self> {
        Self::with_clock(gap, poll_interval, SystemClock)
    }
}

impl<C: Clock> RateLimiter<C> {
    /// A zero `poll_interval` is rejected: waiting would never make progress.
    pub fn with_clock(gap: Duration, poll_interval: Duration, clock: C) -> Result<Self> {
        if poll_interval.is_zero() {
            bail!("Rate limiter poll interval must be greater than zero");
        }
        Ok(Self {
            gap,
            poll_interval,
            last_call: None,
            clock,
        })
    }

    /// Block until the gap since the previous call has elapsed, then claim this call
    pub fn acquire(&mut self) {
        if let Some(remaining) = self.remaining() {
            info!("Rate limited, waiting for {}s", remaining.as_secs_f64().round());
            self.wait_out();
        }
        self.record_call();
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn remaining(&self) -> Option<Duration> {
        let last = self.last_call?;
        let since = self.clock.now().saturating_duration_since(last);
        (since < self.gap).then(|| self.gap - since)
    }

    fn wait_out(&self) {
        while self.remaining().is_some() {
            self.clock.sleep(self.poll_interval);
        }
    }

    fn record_call(&mut self) {
        self.last_call = Some(self.clock.now());
    }
}
