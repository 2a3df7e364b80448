//! Unread-notification badge poller.
//!
//! `start` refreshes once immediately and then on a fixed interval for as
//! long as the poller (or its interval handle) lives. Each refresh is an
//! independent local task; ticks do not wait for earlier requests.
//!
//! ERROR HANDLING
//! ==============
//! A failed or malformed response is logged and dropped. The badge keeps its
//! last value and the next tick tries again. Responses that complete out of
//! order are sequenced by issue order, see `state::badge`.

#[cfg(test)]
#[path = "notification_badge_test.rs"]
mod notification_badge_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::dom::BadgeView;
use crate::net::api::CountSource;
use crate::state::badge::{NotificationCount, RefreshOutcome};
use crate::util::task::Spawner;
use crate::util::timer::{IntervalHandle, Scheduler};

struct PollerShared {
    source: Rc<dyn CountSource>,
    badge: Rc<dyn BadgeView>,
    spawner: Rc<dyn Spawner>,
    state: RefCell<NotificationCount>,
}

pub struct NotificationBadgePoller {
    shared: Rc<PollerShared>,
    interval: Duration,
    handle: RefCell<Option<IntervalHandle>>,
}

impl NotificationBadgePoller {
    pub fn new(
        source: Rc<dyn CountSource>,
        badge: Rc<dyn BadgeView>,
        spawner: Rc<dyn Spawner>,
        interval: Duration,
    ) -> Self {
        let shared = PollerShared { source, badge, spawner, state: RefCell::new(NotificationCount::default()) };
        Self { shared: Rc::new(shared), interval, handle: RefCell::new(None) }
    }

    /// Refresh now, then every interval until `stop`. Restarting replaces
    /// the previous interval.
    pub fn start(&self, scheduler: &dyn Scheduler) {
        refresh(&self.shared);
        let shared = Rc::clone(&self.shared);
        let handle = scheduler.every(self.interval, Box::new(move || refresh(&shared)));
        *self.handle.borrow_mut() = Some(handle);
    }

    pub fn stop(&self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.borrow().is_some()
    }

    /// Start one fetch-and-render cycle.
    pub fn refresh(&self) {
        refresh(&self.shared);
    }

    /// Interval handler.
    pub fn on_tick(&self) {
        self.refresh();
    }

    /// Snapshot of the cached count and failure streak.
    pub fn snapshot(&self) -> NotificationCount {
        self.shared.state.borrow().clone()
    }
}

fn refresh(shared: &Rc<PollerShared>) {
    let seq = shared.state.borrow_mut().begin();
    let request = shared.source.fetch_count();
    let task_shared = Rc::clone(shared);
    shared.spawner.spawn(Box::pin(async move {
        let result = request.await;
        let outcome = task_shared.state.borrow_mut().complete(seq, result);
        match outcome {
            RefreshOutcome::Applied(display) => task_shared.badge.render(&display),
            RefreshOutcome::Stale => {
                leptos::logging::log!("dropping stale unread count (request {seq})");
            }
            RefreshOutcome::Failed(e) => {
                let streak = task_shared.state.borrow().consecutive_failures();
                leptos::logging::warn!("unread count refresh failed ({streak} in a row): {e}");
            }
        }
    }));
}
