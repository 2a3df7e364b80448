//! Page-level event surface.
//!
//! The browser adapter turns DOM events into `PageEvent`s and hands them to
//! `Page::dispatch`. Each event reaches exactly one component, and any error
//! it raises is logged here and goes no further, so a broken navbar cannot
//! take the theme toggle or the badge down with it.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::components::notification_badge::NotificationBadgePoller;
use crate::components::scroll_view::ScrollReactiveView;
use crate::components::theme_toggle::ThemePreference;
use crate::error::ViewError;
use crate::state::scroll::IntersectionSample;
use crate::util::timer::Scheduler;

/// Browser signals the page reacts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PageEvent {
    /// Document finished parsing.
    Ready,
    Scroll { offset: f64 },
    ToggleClicked,
    /// Observer report for the reveal target registered at `index`.
    Intersect { index: usize, sample: IntersectionSample },
}

impl PageEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Scroll { .. } => "scroll",
            Self::ToggleClicked => "toggle-click",
            Self::Intersect { .. } => "intersect",
        }
    }
}

pub struct Page {
    theme: ThemePreference,
    scroll: ScrollReactiveView,
    badge: Option<NotificationBadgePoller>,
}

impl Page {
    pub fn new(theme: ThemePreference, scroll: ScrollReactiveView, badge: Option<NotificationBadgePoller>) -> Self {
        Self { theme, scroll, badge }
    }

    pub fn theme(&self) -> &ThemePreference {
        &self.theme
    }

    pub fn scroll(&self) -> &ScrollReactiveView {
        &self.scroll
    }

    pub fn badge(&self) -> Option<&NotificationBadgePoller> {
        self.badge.as_ref()
    }

    /// One-time startup: apply the stored theme and begin polling.
    pub fn initialize(&self, scheduler: &dyn Scheduler) {
        self.theme.initialize();
        match &self.badge {
            Some(badge) => badge.start(scheduler),
            None => leptos::logging::warn!("notification badge missing; unread count polling disabled"),
        }
    }

    /// Route one event to its component.
    ///
    /// # Errors
    ///
    /// Returns whatever the receiving component reported.
    pub fn handle(&self, event: PageEvent) -> Result<(), ViewError> {
        match event {
            PageEvent::Ready => self.scroll.on_ready(),
            PageEvent::Scroll { offset } => self.scroll.on_scroll(offset).map(|_| ()),
            PageEvent::ToggleClicked => {
                self.theme.toggle();
                Ok(())
            }
            PageEvent::Intersect { index, sample } => {
                self.scroll.on_intersect(index, sample);
                Ok(())
            }
        }
    }

    /// `handle`, with failures logged and contained.
    pub fn dispatch(&self, event: PageEvent) {
        if let Err(e) = self.handle(event) {
            leptos::logging::warn!("{} handler failed: {e}", event.name());
        }
    }
}
