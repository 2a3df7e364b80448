//! In-memory element fakes that record every mutation for assertions.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use super::{AttributeTarget, BadgeView, ClassTarget, LabelTarget, PreferenceStore, RevealTarget};
use crate::state::badge::BadgeDisplay;
use crate::state::scroll::RevealStyle;
use crate::state::theme::ToggleLabel;

#[derive(Debug, Default)]
struct Recorded {
    attributes: HashMap<String, String>,
    classes: BTreeSet<String>,
    label: Option<ToggleLabel>,
    label_writes: usize,
    reveals: Vec<RevealStyle>,
    badge: Option<BadgeDisplay>,
    badge_writes: usize,
}

/// A cloneable stand-in for any page element. Clones share state.
#[derive(Clone, Debug, Default)]
pub struct RecordingElement {
    inner: Rc<RefCell<Recorded>>,
}

impl RecordingElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attr(&self, name: &str) -> Option<String> {
        self.inner.borrow().attributes.get(name).cloned()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.inner.borrow().classes.contains(class)
    }

    pub fn add_class(&self, class: &str) {
        self.inner.borrow_mut().classes.insert(class.to_owned());
    }

    pub fn label(&self) -> Option<ToggleLabel> {
        self.inner.borrow().label
    }

    pub fn label_writes(&self) -> usize {
        self.inner.borrow().label_writes
    }

    pub fn reveals(&self) -> Vec<RevealStyle> {
        self.inner.borrow().reveals.clone()
    }

    pub fn badge(&self) -> Option<BadgeDisplay> {
        self.inner.borrow().badge.clone()
    }

    pub fn badge_writes(&self) -> usize {
        self.inner.borrow().badge_writes
    }
}

impl AttributeTarget for RecordingElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attr(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.inner.borrow_mut().attributes.insert(name.to_owned(), value.to_owned());
    }
}

impl ClassTarget for RecordingElement {
    fn set_class(&self, class: &str, enabled: bool) {
        let mut inner = self.inner.borrow_mut();
        if enabled {
            inner.classes.insert(class.to_owned());
        } else {
            inner.classes.remove(class);
        }
    }
}

impl LabelTarget for RecordingElement {
    fn set_label(&self, label: ToggleLabel) {
        let mut inner = self.inner.borrow_mut();
        inner.label = Some(label);
        inner.label_writes += 1;
    }
}

impl RevealTarget for RecordingElement {
    fn reveal(&self, style: &RevealStyle) {
        self.inner.borrow_mut().reveals.push(*style);
    }
}

impl BadgeView for RecordingElement {
    fn render(&self, display: &BadgeDisplay) {
        let mut inner = self.inner.borrow_mut();
        inner.badge = Some(display.clone());
        inner.badge_writes += 1;
    }
}

/// `localStorage` stand-in. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.store(key, value);
        store
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn store(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}
