//! Interval and one-shot timers.

use std::time::Duration;

/// Owns a repeating timer. Dropping the handle cancels it.
pub struct IntervalHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl IntervalHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for IntervalHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntervalHandle").field("active", &self.cancel.is_some()).finish()
    }
}

/// Source of timer callbacks on the single UI thread.
pub trait Scheduler {
    /// Call `tick` every `period` until the returned handle is dropped.
    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> IntervalHandle;

    /// Call `once` after `delay`. Not cancellable.
    fn after(&self, delay: Duration, once: Box<dyn FnOnce()>);
}

/// `setInterval`/`setTimeout` via `gloo-timers`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    fn every(&self, period: Duration, mut tick: Box<dyn FnMut()>) -> IntervalHandle {
        let interval = gloo_timers::callback::Interval::new(millis(period), move || tick());
        IntervalHandle::new(move || drop(interval))
    }

    fn after(&self, delay: Duration, once: Box<dyn FnOnce()>) {
        gloo_timers::callback::Timeout::new(millis(delay), once).forget();
    }
}

#[cfg(feature = "hydrate")]
fn millis(d: Duration) -> u32 {
    u32::try_from(d.as_millis()).unwrap_or(u32::MAX)
}
