use folio_core::config::TimingConfig;
use folio_core::{RevealTracker, Scheduler, SkillGroup};
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::{TimeoutScheduler, select_within, set_class, set_style};

/// Build an observer that hands each entry to `on_entry`.
fn observe_with(
    threshold: f64,
    mut on_entry: impl FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
) -> Option<IntersectionObserver> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_entry(&entry, &observer);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            callback.forget();
            Some(observer)
        }
        Err(e) => {
            log::warn!("IntersectionObserver unavailable: {:?}", e);
            None
        }
    }
}

/// Fade sections in the first time they scroll into view.
pub fn install_reveal(targets: &[Element], threshold: f64) {
    if targets.is_empty() {
        return;
    }
    for target in targets {
        set_class(target, "fade-in", true);
    }

    let tracked = targets.to_vec();
    let mut revealed = RevealTracker::new();
    let Some(observer) = observe_with(threshold, move |entry, observer| {
        let target = entry.target();
        let Some(index) = tracked.iter().position(|el| *el == target) else {
            return;
        };
        if revealed.intersected(index, entry.is_intersecting()) {
            set_class(&target, "visible", true);
            observer.unobserve(&target);
        }
    }) else {
        return;
    };

    for target in targets {
        observer.observe(target);
    }
}

/// Fill each group's skill bars, staggered, the first time it is seen.
pub fn install_skill_bars(groups: &[Element], timing: &TimingConfig, threshold: f64) {
    if groups.is_empty() {
        return;
    }
    let base = std::time::Duration::from_millis(timing.skill_base_delay_ms);
    let step = std::time::Duration::from_millis(timing.skill_step_ms);

    let mut tracked: Vec<(Element, Vec<Element>, SkillGroup)> = groups
        .iter()
        .map(|group| {
            let bars = select_within(group, ".skill-progress");
            let progress: Vec<Option<String>> = bars
                .iter()
                .map(|bar| bar.get_attribute("data-progress"))
                .collect();
            let state = SkillGroup::new(progress.iter().map(Option::as_deref), base, step);
            (group.clone(), bars, state)
        })
        .collect();

    let Some(observer) = observe_with(threshold, move |entry, observer| {
        let target = entry.target();
        let Some((_, bars, state)) = tracked.iter_mut().find(|(group, ..)| *group == target) else {
            return;
        };
        let Some(fills) = state.intersected(entry.is_intersecting()) else {
            return;
        };
        observer.unobserve(&target);

        for fill in fills {
            let bar = bars[fill.index].clone();
            TimeoutScheduler.schedule(
                fill.delay,
                Box::new(move || set_style(&bar, "width", &fill.width())),
            );
        }
    }) else {
        return;
    };

    for group in groups {
        observer.observe(group);
    }
}
