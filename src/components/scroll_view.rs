//! Scroll-reactive navbar chrome and reveal-on-visibility.
//!
//! The two behaviors share nothing but the page. The navbar class is a pure
//! function of the live scroll offset. Each animated element carries a
//! one-way reveal flag; the observer may keep reporting after the first
//! reveal and those reports are no-ops.

#[cfg(test)]
#[path = "scroll_view_test.rs"]
mod scroll_view_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::ScrollConfig;
use crate::dom::{ClassTarget, RevealTarget};
use crate::error::ViewError;
use crate::state::scroll::{IntersectionSample, RevealFlag, RevealOutcome, RevealStyle, ScrollState};

/// Navbar "scrolled" class driven by the vertical offset.
pub struct NavbarChrome {
    navbar: Option<Rc<dyn ClassTarget>>,
    scrolled_class: String,
    threshold: f64,
}

impl NavbarChrome {
    pub fn new(navbar: Option<Rc<dyn ClassTarget>>, config: &ScrollConfig) -> Self {
        Self { navbar, scrolled_class: config.scrolled_class.clone(), threshold: config.threshold_px }
    }

    /// # Errors
    ///
    /// Returns [`ViewError::MissingElement`] when the page has no navbar.
    pub fn on_scroll(&self, offset: f64) -> Result<ScrollState, ViewError> {
        let navbar = self.navbar.as_ref().ok_or_else(|| ViewError::MissingElement("navbar".to_owned()))?;
        let state = ScrollState::from_offset(offset, self.threshold);
        navbar.set_class(&self.scrolled_class, state.is_scrolled);
        Ok(state)
    }
}

struct RevealEntry {
    target: Rc<dyn RevealTarget>,
    flag: RevealFlag,
}

/// Animated elements registered at startup, addressed by registration order.
pub struct RevealSet {
    entries: Vec<RevealEntry>,
    threshold: f64,
}

impl RevealSet {
    pub fn new(targets: Vec<Rc<dyn RevealTarget>>, threshold: f64) -> Self {
        let entries = targets.into_iter().map(|target| RevealEntry { target, flag: RevealFlag::default() }).collect();
        Self { entries, threshold }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.entries.get(index).is_some_and(|e| e.flag.is_revealed())
    }

    pub fn revealed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.flag.is_revealed()).count()
    }

    /// Feed one observer report. Unknown indices report `Hidden`.
    pub fn on_intersect(&mut self, index: usize, sample: IntersectionSample) -> RevealOutcome {
        let threshold = self.threshold;
        let Some(entry) = self.entries.get_mut(index) else {
            return RevealOutcome::Hidden;
        };
        let outcome = entry.flag.observe(sample, threshold);
        if outcome == RevealOutcome::Revealed {
            entry.target.reveal(&RevealStyle::SHOWN);
        }
        outcome
    }
}

/// Scroll-driven view state for the page chrome.
pub struct ScrollReactiveView {
    navbar: NavbarChrome,
    reveals: RefCell<RevealSet>,
    body: Option<Rc<dyn ClassTarget>>,
    preload_class: String,
}

impl ScrollReactiveView {
    pub fn new(
        navbar: Option<Rc<dyn ClassTarget>>,
        reveal_targets: Vec<Rc<dyn RevealTarget>>,
        body: Option<Rc<dyn ClassTarget>>,
        config: &ScrollConfig,
    ) -> Self {
        Self {
            navbar: NavbarChrome::new(navbar, config),
            reveals: RefCell::new(RevealSet::new(reveal_targets, config.reveal_ratio)),
            body,
            preload_class: config.preload_class.clone(),
        }
    }

    /// Drop the body's preload class so CSS transitions start running.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::MissingElement`] when the page has no body handle.
    pub fn on_ready(&self) -> Result<(), ViewError> {
        let body = self.body.as_ref().ok_or_else(|| ViewError::MissingElement("body".to_owned()))?;
        body.set_class(&self.preload_class, false);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`ViewError::MissingElement`] when the page has no navbar.
    pub fn on_scroll(&self, offset: f64) -> Result<ScrollState, ViewError> {
        self.navbar.on_scroll(offset)
    }

    pub fn on_intersect(&self, index: usize, sample: IntersectionSample) -> RevealOutcome {
        self.reveals.borrow_mut().on_intersect(index, sample)
    }

    pub fn reveal_count(&self) -> usize {
        self.reveals.borrow().len()
    }

    pub fn revealed_count(&self) -> usize {
        self.reveals.borrow().revealed_count()
    }
}
