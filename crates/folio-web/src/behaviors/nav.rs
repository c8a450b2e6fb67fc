use std::cell::RefCell;
use std::rc::Rc;

use folio_core::config::ScrollConfig;
use folio_core::nav::{SectionOffset, active_section, anchor_target, link_targets};
use folio_core::{FrameGate, MobileMenu, NavbarTracker};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

use crate::dom::{clear_style, next_frame_gated, select_within, set_class, set_style};
use crate::hooks::NavMenu;

fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn install_menu(document: &Document, body: &HtmlElement, menu: &NavMenu) {
    let state = Rc::new(RefCell::new(MobileMenu::new()));

    let render: Rc<dyn Fn(bool)> = {
        let toggle = menu.toggle.clone();
        let links = menu.links.clone();
        let body = body.clone();
        Rc::new(move |open| {
            set_class(&toggle, "active", open);
            set_class(&links, "active", open);
            if open {
                set_style(&body, "overflow", "hidden");
            } else {
                clear_style(&body, "overflow");
            }
        })
    };

    {
        let state = state.clone();
        let render = render.clone();
        EventListener::new(&menu.toggle, "click", move |_| {
            let open = state.borrow_mut().toggle();
            render(open);
        })
        .forget();
    }

    for link in select_within(&menu.links, "a") {
        let state = state.clone();
        let render = render.clone();
        EventListener::new(&link, "click", move |_| {
            state.borrow_mut().close();
            render(false);
        })
        .forget();
    }

    EventListener::new(document, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if state.borrow_mut().key_pressed(&event.key()) {
            render(false);
        }
    })
    .forget();
}

/// Same-page links scroll smoothly instead of jumping.
pub fn install_anchors(document: &Document, anchors: &[Element]) {
    for anchor in anchors {
        let document = document.clone();
        let link = anchor.clone();
        EventListener::new_with_options(
            anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let href = link.get_attribute("href").unwrap_or_default();
                let Some(target) = anchor_target(&href).and_then(|id| document.get_element_by_id(id))
                else {
                    return;
                };
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            },
        )
        .forget();
    }
}

pub fn install_navbar(window: &Window, nav: &Element, scroll: &ScrollConfig) {
    let tracker = Rc::new(RefCell::new(NavbarTracker::new(
        scroll_y(window),
        scroll.nav_hide_after,
        scroll.nav_solid_after,
    )));
    let gate = Rc::new(FrameGate::new());
    let frame_window = window.clone();
    let nav = nav.clone();

    EventListener::new(window, "scroll", move |_| {
        let window = frame_window.clone();
        let tracker = tracker.clone();
        let nav = nav.clone();
        next_frame_gated(&frame_window, &gate, move || {
            let state = tracker.borrow_mut().update(scroll_y(&window));
            set_class(&nav, "nav-hidden", state.hidden);
            set_class(&nav, "scrolled", state.scrolled);
        });
    })
    .forget();
}

/// Highlight the nav link of the section currently in view.
pub fn install_active_link(
    window: &Window,
    links_root: &Element,
    sections: &[HtmlElement],
    lookahead: f64,
) {
    if sections.is_empty() {
        return;
    }
    let links = Rc::new(select_within(links_root, "a"));
    let sections: Rc<[HtmlElement]> = sections.into();
    let gate = Rc::new(FrameGate::new());
    let frame_window = window.clone();

    EventListener::new(window, "scroll", move |_| {
        let window = frame_window.clone();
        let links = links.clone();
        let sections = sections.clone();
        next_frame_gated(&frame_window, &gate, move || {
            // Offsets are re-read every time; layout shifts as images load.
            let offsets: Vec<SectionOffset> = sections
                .iter()
                .map(|section| SectionOffset {
                    id: section.id(),
                    top: f64::from(section.offset_top()),
                })
                .collect();
            let current = active_section(&offsets, scroll_y(&window), lookahead);

            for link in links.iter() {
                let href = link.get_attribute("href").unwrap_or_default();
                let active = current.is_some_and(|id| link_targets(&href, id));
                set_class(link, "active", active);
            }
        });
    })
    .forget();
}
