//! `web-sys` implementations of the element handle traits.
//!
//! TRADE-OFFS
//! ==========
//! DOM mutation results are discarded. A rejected `classList.add` or style
//! write has no recovery path and must not abort the handler that issued it.

use wasm_bindgen::JsCast;

use super::{AttributeTarget, BadgeView, ClassTarget, LabelTarget, PreferenceStore, RevealTarget};
use crate::state::badge::BadgeDisplay;
use crate::state::scroll::RevealStyle;
use crate::state::theme::ToggleLabel;

/// `window.localStorage`, or nothing when the browser denies access.
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            leptos::logging::warn!("localStorage unavailable; theme preference will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn store(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Any DOM element acting as a handle.
#[derive(Clone)]
pub struct DomElement {
    el: web_sys::Element,
}

impl DomElement {
    pub fn new(el: web_sys::Element) -> Self {
        Self { el }
    }

    fn style(&self) -> Option<web_sys::CssStyleDeclaration> {
        self.el.dyn_ref::<web_sys::HtmlElement>().map(web_sys::HtmlElement::style)
    }
}

impl AttributeTarget for DomElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.el.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let _ = self.el.set_attribute(name, value);
    }
}

impl ClassTarget for DomElement {
    fn set_class(&self, class: &str, enabled: bool) {
        let class_list = self.el.class_list();
        if enabled {
            let _ = class_list.add_1(class);
        } else {
            let _ = class_list.remove_1(class);
        }
    }
}

impl LabelTarget for DomElement {
    fn set_label(&self, label: ToggleLabel) {
        self.el.set_inner_html(&format!(r#"<i class="{}"></i> {}"#, label.icon, label.text));
    }
}

impl RevealTarget for DomElement {
    fn reveal(&self, style: &RevealStyle) {
        if let Some(css) = self.style() {
            let _ = css.set_property("opacity", style.opacity);
            let _ = css.set_property("transform", style.transform);
        }
    }
}

impl BadgeView for DomElement {
    fn render(&self, display: &BadgeDisplay) {
        self.el.set_text_content(Some(&display.text));
        if let Some(css) = self.style() {
            let _ = css.set_property("display", if display.visible { "inline" } else { "none" });
        }
    }
}
