use std::cell::Cell;
use std::rc::Rc;

use folio_core::config::MotionConfig;
use folio_core::motion::{NEUTRAL_TILT_CSS, Rect, Tilt, parallax_offset, translate_css};
use folio_core::{FrameGate, Point};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, Window};

use crate::dom::{next_frame_gated, set_style};

fn client_point(event: &web_sys::Event) -> Option<Point> {
    let event = event.dyn_ref::<MouseEvent>()?;
    Some(Point::new(
        f64::from(event.client_x()),
        f64::from(event.client_y()),
    ))
}

fn viewport(window: &Window) -> (f64, f64) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64());
    let height = window.inner_height().ok().and_then(|v| v.as_f64());
    (width.unwrap_or(0.0), height.unwrap_or(0.0))
}

/// Floating hero shapes drift with the pointer on wide screens.
pub fn install_parallax(window: &Window, floating: &[Element], motion: &MotionConfig) {
    if floating.is_empty() {
        return;
    }
    let wide = window
        .match_media(&motion.parallax_media_query)
        .ok()
        .flatten()
        .is_some_and(|query| query.matches());
    if !wide {
        log::debug!("viewport too narrow for parallax");
        return;
    }

    let pointer = Rc::new(Cell::new(Point::default()));
    let floating: Rc<[Element]> = floating.into();
    let gate = Rc::new(FrameGate::new());
    let frame_window = window.clone();
    let speed = motion.parallax_speed;

    EventListener::new(window, "mousemove", move |event| {
        let Some(at) = client_point(event) else {
            return;
        };
        // Only the latest position matters once the frame runs.
        pointer.set(at);

        let window = frame_window.clone();
        let pointer = pointer.clone();
        let floating = floating.clone();
        next_frame_gated(&frame_window, &gate, move || {
            let size = viewport(&window);
            for (index, el) in floating.iter().enumerate() {
                let offset = parallax_offset(index, pointer.get(), size, speed);
                set_style(el, "transform", &translate_css(offset));
            }
        });
    })
    .forget();
}

pub fn install_tilt(cards: &[Element], divisor: f64) {
    for card in cards {
        let target = card.clone();
        EventListener::new(card, "mousemove", move |event| {
            let Some(at) = client_point(event) else {
                return;
            };
            let bounds = target.get_bounding_client_rect();
            let rect = Rect {
                left: bounds.left(),
                top: bounds.top(),
                width: bounds.width(),
                height: bounds.height(),
            };
            set_style(&target, "transform", &Tilt::toward(at, rect, divisor).css());
        })
        .forget();

        let target = card.clone();
        EventListener::new(card, "mouseleave", move |_| {
            set_style(&target, "transform", NEUTRAL_TILT_CSS);
        })
        .forget();
    }
}
