use folio_core::config::TimingConfig;
use folio_core::motion::stagger_delay;
use folio_core::preloader::load_already_fired;
use folio_core::Preloader;
use gloo::events::EventListener;
use web_sys::{Document, Window};

use crate::dom::{TimeoutScheduler, set_class, set_style};
use crate::hooks::Hooks;

/// Preloader dismissal and the staggered hero entrance, both on `load`.
pub fn install(hooks: &Hooks, timing: &TimingConfig) {
    let body = hooks.body.clone();
    let hero_parts = hooks.hero_parts.clone();
    let stagger = timing.hero_stagger_secs;

    let preloader = hooks.preloader.clone().map(|screen| {
        set_class(&body, "loading", true);
        (screen, Preloader::new(TimeoutScheduler, timing.preloader()))
    });

    when_loaded(&hooks.window, &hooks.document, move || {
        set_class(&body, "loaded", true);
        for (index, part) in hero_parts.iter().enumerate() {
            set_style(part, "animation-delay", &stagger_delay(index, stagger));
        }

        if let Some((screen, preloader)) = preloader {
            preloader.page_loaded(move || {
                set_class(&screen, "loaded", true);
                set_class(&body, "loading", false);
            });
        }
    });
}

fn when_loaded(window: &Window, document: &Document, f: impl FnOnce() + 'static) {
    if load_already_fired(&document.ready_state()) {
        f();
        return;
    }
    EventListener::once(window, "load", move |_| f()).forget();
}
