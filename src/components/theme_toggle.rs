//! Theme initialization and toggle.
//!
//! Reads the preference from the store and writes it to the root element's
//! theme attribute. Toggling writes back to the store, relabels the toggle
//! control, and holds a transition class on the body long enough for the
//! stylesheet to interpolate colors.
//!
//! TRADE-OFFS
//! ==========
//! The attribute on the root element is the source of truth for "current"
//! theme, so markup or other scripts that change it are respected. The
//! component's own copy only covers a missing or garbled attribute.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::dom::{AttributeTarget, ClassTarget, LabelTarget, PreferenceStore};
use crate::state::theme::Theme;
use crate::util::timer::Scheduler;

/// Element handles the theme component writes to.
pub struct ThemeHandles {
    pub store: Rc<dyn PreferenceStore>,
    /// Element carrying the theme attribute (`<html>`).
    pub root: Rc<dyn AttributeTarget>,
    /// Element carrying the transition class (`<body>`).
    pub body: Rc<dyn ClassTarget>,
    /// Toggle control, absent when the page has none.
    pub toggle: Option<Rc<dyn LabelTarget>>,
}

pub struct ThemePreference {
    handles: ThemeHandles,
    scheduler: Rc<dyn Scheduler>,
    config: ThemeConfig,
    active: Cell<Theme>,
    /// Bumped per toggle; only the latest toggle's timeout clears the class.
    transition_gen: Rc<Cell<u64>>,
}

impl ThemePreference {
    pub fn new(handles: ThemeHandles, scheduler: Rc<dyn Scheduler>, config: ThemeConfig) -> Self {
        Self { handles, scheduler, config, active: Cell::new(Theme::default()), transition_gen: Rc::new(Cell::new(0)) }
    }

    pub fn active(&self) -> Theme {
        self.active.get()
    }

    pub fn has_toggle(&self) -> bool {
        self.handles.toggle.is_some()
    }

    /// Apply the stored theme (light when absent) and label the toggle.
    pub fn initialize(&self) -> Theme {
        let theme = match self.handles.store.load(&self.config.storage_key) {
            Some(raw) => Theme::parse(&raw).unwrap_or_else(|| {
                leptos::logging::warn!("unrecognized stored theme {raw:?}; using light");
                Theme::Light
            }),
            None => Theme::Light,
        };
        self.apply(theme);
        theme
    }

    /// Switch to the opposite of the theme currently on the root element.
    pub fn toggle(&self) -> Theme {
        let current = self
            .handles
            .root
            .attribute(&self.config.attribute)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_else(|| self.active.get());
        let next = current.toggled();

        self.begin_transition();
        self.apply(next);
        self.handles.store.store(&self.config.storage_key, next.as_str());
        next
    }

    fn apply(&self, theme: Theme) {
        self.handles.root.set_attribute(&self.config.attribute, theme.as_str());
        if let Some(toggle) = &self.handles.toggle {
            toggle.set_label(theme.toggle_label());
        }
        self.active.set(theme);
    }

    fn begin_transition(&self) {
        let class = self.config.transition_class.clone();
        let body = Rc::clone(&self.handles.body);
        let generation = self.transition_gen.get() + 1;
        self.transition_gen.set(generation);
        let current_gen = Rc::clone(&self.transition_gen);

        body.set_class(&class, true);
        self.scheduler.after(
            self.config.transition(),
            Box::new(move || {
                if current_gen.get() == generation {
                    body.set_class(&class, false);
                }
            }),
        );
    }
}
