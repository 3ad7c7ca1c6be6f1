//! Rate limiting for high-frequency page events.
//!
//! Both gates are clock-agnostic: callers pass the current time (the browser
//! side uses `performance.now()`), which keeps them testable natively.

/// Leading-edge throttle: the first call fires, later calls are dropped until
/// `limit_ms` has elapsed since the last call that fired.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit_ms: f64,
    last_fired: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: u32) -> Self {
        Self { limit_ms: f64::from(limit_ms), last_fired: None }
    }

    /// Returns true when the caller should run its handler now.
    pub fn try_fire(&mut self, now_ms: f64) -> bool {
        match self.last_fired {
            Some(last) if now_ms - last < self.limit_ms => false,
            _ => {
                self.last_fired = Some(now_ms);
                true
            }
        }
    }
}

/// Identifies one scheduled debounced call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Trailing-edge debounce over a platform timer handle `T`.
///
/// Only one timer is pending at a time: [`Debounce::schedule`] hands back the
/// handle it replaced so the caller can cancel it. The ticket passed to the
/// new timer stays current until the next schedule.
#[derive(Debug)]
pub struct Debounce<T> {
    wait_ms: u32,
    generation: u64,
    pending: Option<T>,
}

impl<T> Debounce<T> {
    pub fn new(wait_ms: u32) -> Self {
        Self { wait_ms, generation: 0, pending: None }
    }

    pub fn wait_ms(&self) -> u32 {
        self.wait_ms
    }

    /// Start a timer through `start` and make it the pending one.
    pub fn schedule(&mut self, start: impl FnOnce(DebounceTicket) -> T) -> Option<T> {
        self.generation = self.generation.wrapping_add(1);
        let timer = start(DebounceTicket(self.generation));
        self.pending.replace(timer)
    }

    pub fn is_current(&self, ticket: DebounceTicket) -> bool {
        ticket.0 == self.generation
    }
}
