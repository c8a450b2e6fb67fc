use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{CursorFollower, Point};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent, Window};

use crate::dom::{every_frame, set_class, set_style};
use crate::hooks::Cursor;

pub fn install(
    window: &Window,
    document: &Document,
    cursor: &Cursor,
    hover_targets: &[Element],
    easing: f64,
) {
    let state = Rc::new(RefCell::new(CursorFollower::new(easing)));

    let dot = cursor.dot.clone();
    let follower = state.clone();
    EventListener::new(document, "mousemove", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let at = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
        let dot_at = follower.borrow_mut().pointer_moved(at);
        place(&dot, dot_at);
    })
    .forget();

    let ring = cursor.ring.clone();
    let follower = state.clone();
    every_frame(window, move || {
        let ring_at = follower.borrow_mut().step();
        place(&ring, ring_at);
    });

    for target in hover_targets {
        for (event, hovering) in [("mouseenter", true), ("mouseleave", false)] {
            let ring = cursor.ring.clone();
            let follower = state.clone();
            EventListener::new(target, event, move |_| {
                if follower.borrow_mut().set_hover(hovering) {
                    set_class(&ring, "hover", hovering);
                }
            })
            .forget();
        }
    }
}

fn place(el: &Element, at: Point) {
    set_style(el, "left", &format!("{}px", at.x));
    set_style(el, "top", &format!("{}px", at.y));
}
