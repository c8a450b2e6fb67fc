use std::cell::Cell;
use std::time::Duration;

use crate::timing::Scheduler;

/// Keeps the loading screen up a little past `load` so its progress
/// animation can finish.
pub struct Preloader<S> {
    scheduler: S,
    hold: Duration,
    started: Cell<bool>,
}

impl<S: Scheduler> Preloader<S> {
    pub fn new(scheduler: S, hold: Duration) -> Self {
        Self {
            scheduler,
            hold,
            started: Cell::new(false),
        }
    }

    /// Called on window load. `dismiss` runs once the hold time is over.
    ///
    /// Only the first call counts; returns false for the others.
    pub fn page_loaded(&self, dismiss: impl FnOnce() + 'static) -> bool {
        if self.started.replace(true) {
            return false;
        }
        self.scheduler.schedule(self.hold, Box::new(dismiss));
        true
    }
}

/// Whether `load` has already fired for a given `document.readyState`.
///
/// The wasm module can finish instantiating after the event, in which case
/// listening for it would wait forever.
pub fn load_already_fired(ready_state: &str) -> bool {
    ready_state == "complete"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::ManualScheduler;
    use std::rc::Rc;

    #[test]
    fn test_dismisses_after_hold() {
        let scheduler = ManualScheduler::new();
        let preloader = Preloader::new(scheduler.clone(), Duration::from_millis(1800));
        let dismissed = Rc::new(Cell::new(false));

        let flag = dismissed.clone();
        assert!(preloader.page_loaded(move || flag.set(true)));

        scheduler.advance(Duration::from_millis(1799));
        assert!(!dismissed.get());
        scheduler.advance(Duration::from_millis(1));
        assert!(dismissed.get());
    }

    #[test]
    fn test_second_load_is_ignored() {
        let scheduler = ManualScheduler::new();
        let preloader = Preloader::new(scheduler.clone(), Duration::from_millis(1800));
        assert!(preloader.page_loaded(|| {}));
        assert!(!preloader.page_loaded(|| {}));
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_ready_state() {
        assert!(load_already_fired("complete"));
        assert!(!load_already_fired("interactive"));
        assert!(!load_already_fired("loading"));
    }
}
