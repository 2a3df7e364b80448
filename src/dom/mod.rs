//! Element handle seams between component logic and the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never reach for a global document. They receive the handles
//! below at construction; `browser` implements them over `web-sys` for the
//! `hydrate` build, and tests substitute recording fakes.

#[cfg(feature = "hydrate")]
pub mod browser;
#[cfg(test)]
pub mod recording;

use crate::state::badge::BadgeDisplay;
use crate::state::scroll::RevealStyle;
use crate::state::theme::ToggleLabel;

/// Persistent key-value slot (browser `localStorage`).
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn store(&self, key: &str, value: &str);
}

/// Element carrying a named attribute (the theme root).
pub trait AttributeTarget {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
}

/// Element whose class list can be switched. Must be idempotent.
pub trait ClassTarget {
    fn set_class(&self, class: &str, enabled: bool);
}

/// The theme toggle control.
pub trait LabelTarget {
    fn set_label(&self, label: ToggleLabel);
}

/// An element animated in on first visibility.
pub trait RevealTarget {
    fn reveal(&self, style: &RevealStyle);
}

/// The unread-notification badge.
pub trait BadgeView {
    fn render(&self, display: &BadgeDisplay);
}
