//! Browser wiring: element lookup and event binding.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only module that touches the live document. It resolves the
//! configured ids/selectors into handles, builds the `Page`, and forwards
//! `DOMContentLoaded`, `scroll`, `click` and `IntersectionObserver` reports
//! as `PageEvent`s. Listener closures are leaked with `forget` because they
//! live for the whole page session.
//!
//! A missing element disables only the listener that needs it.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::components::notification_badge::NotificationBadgePoller;
use crate::components::scroll_view::ScrollReactiveView;
use crate::components::theme_toggle::{ThemeHandles, ThemePreference};
use crate::config::ViewConfig;
use crate::dom::browser::{DomElement, LocalStore};
use crate::dom::{ClassTarget, LabelTarget, RevealTarget};
use crate::error::ViewError;
use crate::net::api::HttpCountSource;
use crate::page::{Page, PageEvent};
use crate::state::scroll::IntersectionSample;
use crate::util::task::BrowserSpawner;
use crate::util::timer::BrowserScheduler;

/// Build the page from the live document and bind every listener.
///
/// # Errors
///
/// Returns [`ViewError::MissingElement`] only when there is no window,
/// document or root element at all; individual page elements are optional.
pub fn mount(config: &ViewConfig) -> Result<Rc<Page>, ViewError> {
    let window = web_sys::window().ok_or_else(|| ViewError::MissingElement("window".to_owned()))?;
    let document = window.document().ok_or_else(|| ViewError::MissingElement("document".to_owned()))?;
    let root = document.document_element().ok_or_else(|| ViewError::MissingElement("html".to_owned()))?;
    let body = document.body().map(|b| DomElement::new(b.unchecked_into()));

    let toggle_el = lookup_id(&document, &config.theme.toggle_id);
    let navbar_el = lookup_selector(&document, &config.scroll.navbar_selector);
    let reveal_els = lookup_all(&document, &config.scroll.reveal_selector_list());
    let badge_el = lookup_id(&document, &config.badge.badge_id);

    let scheduler = Rc::new(BrowserScheduler);
    let body_class: Rc<dyn ClassTarget> = match &body {
        Some(b) => Rc::new(b.clone()),
        None => Rc::new(DomElement::new(root.clone())),
    };

    let theme = ThemePreference::new(
        ThemeHandles {
            store: Rc::new(LocalStore::open()),
            root: Rc::new(DomElement::new(root.clone())),
            body: body_class,
            toggle: toggle_el.clone().map(|el| Rc::new(DomElement::new(el)) as Rc<dyn LabelTarget>),
        },
        scheduler.clone(),
        config.theme.clone(),
    );

    let scroll = ScrollReactiveView::new(
        navbar_el.map(|el| Rc::new(DomElement::new(el)) as Rc<dyn ClassTarget>),
        reveal_els.iter().map(|el| Rc::new(DomElement::new(el.clone())) as Rc<dyn RevealTarget>).collect(),
        body.map(|b| Rc::new(b) as Rc<dyn ClassTarget>),
        &config.scroll,
    );

    let badge = badge_el.map(|el| {
        NotificationBadgePoller::new(
            Rc::new(HttpCountSource::new(config.badge.endpoint.clone())),
            Rc::new(DomElement::new(el)),
            Rc::new(BrowserSpawner),
            config.badge.interval(),
        )
    });

    let page = Rc::new(Page::new(theme, scroll, badge));
    page.initialize(scheduler.as_ref());

    bind_ready(&document, &page);
    bind_scroll(&window, &page);
    match &toggle_el {
        Some(el) => bind_click(el, &page),
        None => leptos::logging::warn!("#{} missing; theme toggle disabled", config.theme.toggle_id),
    }
    bind_reveals(reveal_els, config.scroll.reveal_ratio, &page);

    Ok(page)
}

fn lookup_id(document: &web_sys::Document, id: &str) -> Option<web_sys::Element> {
    document.get_element_by_id(id)
}

fn lookup_selector(document: &web_sys::Document, selector: &str) -> Option<web_sys::Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(_) => {
            leptos::logging::warn!("invalid selector {selector:?}");
            None
        }
    }
}

fn lookup_all(document: &web_sys::Document, selector: &str) -> Vec<web_sys::Element> {
    if selector.is_empty() {
        return Vec::new();
    }
    let Ok(nodes) = document.query_selector_all(selector) else {
        leptos::logging::warn!("invalid selector {selector:?}");
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

fn document_is_loading(document: &web_sys::Document) -> bool {
    document.ready_state() == "loading"
}

fn bind_ready(document: &web_sys::Document, page: &Rc<Page>) {
    if !document_is_loading(document) {
        page.dispatch(PageEvent::Ready);
        return;
    }
    let page = Rc::clone(page);
    let cb = Closure::wrap(Box::new(move || page.dispatch(PageEvent::Ready)) as Box<dyn FnMut()>);
    let _ = document.add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref());
    cb.forget();
}

fn bind_scroll(window: &web_sys::Window, page: &Rc<Page>) {
    let page = Rc::clone(page);
    let scroll_source = window.clone();
    let cb = Closure::wrap(Box::new(move || {
        let offset = scroll_source.scroll_y().unwrap_or(0.0);
        page.dispatch(PageEvent::Scroll { offset });
    }) as Box<dyn FnMut()>);

    let options = web_sys::AddEventListenerOptions::new();
    options.set_passive(true);
    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        cb.as_ref().unchecked_ref(),
        &options,
    );
    cb.forget();
}

fn bind_click(toggle: &web_sys::Element, page: &Rc<Page>) {
    let page = Rc::clone(page);
    let cb = Closure::wrap(Box::new(move || page.dispatch(PageEvent::ToggleClicked)) as Box<dyn FnMut()>);
    let _ = toggle.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
    cb.forget();
}

fn bind_reveals(targets: Vec<web_sys::Element>, ratio: f64, page: &Rc<Page>) {
    if targets.is_empty() {
        return;
    }
    let handler_page = Rc::clone(page);
    let observed = targets.clone();
    let cb = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
        for entry in entries.iter() {
            let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
            let target = entry.target();
            let Some(index) = observed.iter().position(|el| *el == target) else {
                continue;
            };
            let sample = IntersectionSample { is_intersecting: entry.is_intersecting(), ratio: entry.intersection_ratio() };
            handler_page.dispatch(PageEvent::Intersect { index, sample });
        }
    }) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(ratio));
    let observer = match web_sys::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(_) => {
            leptos::logging::warn!("IntersectionObserver unavailable; revealing all animated elements");
            for index in 0..targets.len() {
                page.dispatch(PageEvent::Intersect {
                    index,
                    sample: IntersectionSample { is_intersecting: true, ratio: 1.0 },
                });
            }
            return;
        }
    };
    for el in &targets {
        observer.observe(el);
    }
    cb.forget();
}
