//! Thin helpers over `web-sys` shared by the behaviors.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use folio_core::timing::timer_millis;
use folio_core::{FrameGate, Scheduler};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

/// `setTimeout`-backed scheduler. Timers are never cancelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        Timeout::new(timer_millis(delay), task).forget();
    }
}

fn elements(list: Result<NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn select(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn select_all(document: &Document, selector: &str) -> Vec<Element> {
    elements(document.query_selector_all(selector))
}

pub fn select_within(root: &Element, selector: &str) -> Vec<Element> {
    elements(root.query_selector_all(selector))
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property(property, value);
    }
}

pub fn clear_style(el: &Element, property: &str) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        let _ = el.style().remove_property(property);
    }
}

/// Run `f` once, right before the next repaint.
pub fn next_frame(window: &Window, f: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(move |_timestamp: f64| f());
    if let Err(e) = window.request_animation_frame(callback.unchecked_ref()) {
        log::debug!("requestAnimationFrame failed: {:?}", e);
    }
}

/// Run `f` on the next frame unless a run is already queued behind `gate`.
pub fn next_frame_gated(window: &Window, gate: &Rc<FrameGate>, f: impl FnOnce() + 'static) {
    if !gate.try_open() {
        return;
    }
    let gate = gate.clone();
    next_frame(window, move || {
        f();
        gate.close();
    });
}

/// Run `tick` on every frame for the rest of the page's life.
pub fn every_frame(window: &Window, mut tick: impl FnMut() + 'static) {
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();
    let loop_window = window.clone();

    *slot.borrow_mut() = Some(Closure::new(move || {
        tick();
        if let Some(callback) = next.borrow().as_ref() {
            let _ = loop_window.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }));

    if let Some(callback) = slot.borrow().as_ref() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}
