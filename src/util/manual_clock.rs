//! Deterministic `Scheduler` for tests. Time only moves on `advance`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use super::timer::{IntervalHandle, Scheduler};

struct Repeating {
    period_ms: u64,
    next_due_ms: u64,
    cancelled: Rc<Cell<bool>>,
    tick: Option<Box<dyn FnMut()>>,
}

struct OneShot {
    due_ms: u64,
    once: Option<Box<dyn FnOnce()>>,
}

#[derive(Default)]
struct ClockState {
    now_ms: u64,
    repeating: Vec<Repeating>,
    one_shots: Vec<OneShot>,
}

enum Due {
    Repeating(usize),
    OneShot(usize),
}

#[derive(Clone, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.state.borrow().now_ms
    }

    pub fn active_intervals(&self) -> usize {
        self.state.borrow().repeating.iter().filter(|r| !r.cancelled.get()).count()
    }

    pub fn pending_timeouts(&self) -> usize {
        self.state.borrow().one_shots.iter().filter(|o| o.once.is_some()).count()
    }

    /// Move time forward, firing every callback that falls due in order.
    pub fn advance(&self, ms: u64) {
        let target = self.now_ms() + ms;
        while let Some((due_ms, due)) = self.next_due(target) {
            self.state.borrow_mut().now_ms = due_ms;
            match due {
                Due::Repeating(i) => {
                    let tick = {
                        let mut state = self.state.borrow_mut();
                        let entry = &mut state.repeating[i];
                        entry.next_due_ms += entry.period_ms;
                        entry.tick.take()
                    };
                    if let Some(mut tick) = tick {
                        tick();
                        self.state.borrow_mut().repeating[i].tick = Some(tick);
                    }
                }
                Due::OneShot(i) => {
                    let once = self.state.borrow_mut().one_shots[i].once.take();
                    if let Some(once) = once {
                        once();
                    }
                }
            }
        }
        self.state.borrow_mut().now_ms = target;
    }

    fn next_due(&self, target: u64) -> Option<(u64, Due)> {
        let state = self.state.borrow();
        let repeating = state
            .repeating
            .iter()
            .enumerate()
            .filter(|(_, r)| !r.cancelled.get() && r.next_due_ms <= target)
            .map(|(i, r)| (r.next_due_ms, Due::Repeating(i)));
        let one_shots = state
            .one_shots
            .iter()
            .enumerate()
            .filter(|(_, o)| o.once.is_some() && o.due_ms <= target)
            .map(|(i, o)| (o.due_ms, Due::OneShot(i)));
        repeating.chain(one_shots).min_by_key(|(due_ms, _)| *due_ms)
    }
}

impl Scheduler for ManualClock {
    fn every(&self, period: Duration, tick: Box<dyn FnMut()>) -> IntervalHandle {
        let period_ms = u64::try_from(period.as_millis()).unwrap_or(u64::MAX).max(1);
        let cancelled = Rc::new(Cell::new(false));
        let mut state = self.state.borrow_mut();
        let next_due_ms = state.now_ms + period_ms;
        state.repeating.push(Repeating { period_ms, next_due_ms, cancelled: Rc::clone(&cancelled), tick: Some(tick) });
        IntervalHandle::new(move || cancelled.set(true))
    }

    fn after(&self, delay: Duration, once: Box<dyn FnOnce()>) {
        let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        let mut state = self.state.borrow_mut();
        let due_ms = state.now_ms + delay_ms;
        state.one_shots.push(OneShot { due_ms, once: Some(once) });
    }
}
