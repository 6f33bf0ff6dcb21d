//! Cancellable timers and the scroll-settle debounce built on them.

use std::collections::BTreeMap;

/// Handle of a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Something that can run a callback after a delay.
///
/// The scheduler only hands out ids; whoever drives it reports fired ids back
/// to the grid (`GridGeometry::on_timer`).
pub trait TimerScheduler {
    /// Schedule a timer firing after `delay_ms`
    fn schedule(&mut self, delay_ms: f64) -> TimerId;
    /// Cancel a pending timer. Unknown or already fired ids are ignored.
    fn cancel(&mut self, id: TimerId);
}

/// Deterministic scheduler driven by an explicit clock.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: f64,
    next_id: u64,
    pending: BTreeMap<TimerId, f64>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current time
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Number of timers waiting to fire
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Advance the clock to `time`, returning the ids of every timer whose
    /// deadline has passed, earliest first. The clock never moves backward.
    pub fn advance_to(&mut self, time: f64) -> Vec<TimerId> {
        if time > self.now {
            self.now = time;
        }
        let now = self.now;
        let mut fired: Vec<(TimerId, f64)> = self
            .pending
            .iter()
            .filter(|&(_, &deadline)| deadline <= now)
            .map(|(&id, &deadline)| (id, deadline))
            .collect();
        fired.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        for (id, _) in &fired {
            self.pending.remove(id);
        }
        fired.into_iter().map(|(id, _)| id).collect()
    }

    /// Advance the clock by `delta`
    pub fn advance_by(&mut self, delta: f64) -> Vec<TimerId> {
        self.advance_to(self.now + delta.max(0.0))
    }
}

impl TimerScheduler for ManualScheduler {
    fn schedule(&mut self, delay_ms: f64) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.insert(id, self.now + delay_ms.max(0.0));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.remove(&id);
    }
}

/// Default delay (ms) after the last scroll input before `is_scrolling` clears
pub const DEFAULT_SCROLL_DEBOUNCE_MS: f64 = 150.0;

/// Keeps exactly one settle timer alive per scroll burst.
///
/// Every scroll input cancels the pending timer and schedules a new one, so
/// the only timer that can fire is the one armed by the last input.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollDebounce {
    delay_ms: f64,
    pending: Option<TimerId>,
}

impl Default for ScrollDebounce {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_DEBOUNCE_MS)
    }
}

impl ScrollDebounce {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    /// Id of the armed timer, if any
    pub fn pending(&self) -> Option<TimerId> {
        self.pending
    }

    /// Re-arm the settle timer after a scroll input
    pub fn touch(&mut self, scheduler: &mut impl TimerScheduler) {
        if let Some(id) = self.pending.take() {
            scheduler.cancel(id);
        }
        self.pending = Some(scheduler.schedule(self.delay_ms));
    }

    /// Report a fired timer. Returns `true` if it was the armed settle timer.
    pub fn fire(&mut self, id: TimerId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}
