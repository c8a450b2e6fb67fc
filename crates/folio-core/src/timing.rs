//! Deferred work: delayed reverts and per-frame coalescing.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Longest delay `setTimeout` honors; anything above fires immediately.
pub const MAX_TIMER_MS: u64 = i32::MAX as u64;

/// `delay` as a `setTimeout` argument, clamped to [`MAX_TIMER_MS`].
pub fn timer_millis(delay: Duration) -> u32 {
    delay.as_millis().min(u128::from(MAX_TIMER_MS)) as u32
}

/// Runs a task once after a delay.
///
/// The browser implementation sits on `setTimeout`; tests use
/// [`ManualScheduler`] to move time by hand.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        (**self).schedule(delay, task)
    }
}

/// "Change something now, put it back later."
///
/// Used by every behavior that flashes a temporary state: the submit button
/// label, the copy-email check mark.
#[derive(Debug, Clone)]
pub struct TimedTransition<S> {
    scheduler: S,
    duration: Duration,
}

impl<S: Scheduler> TimedTransition<S> {
    pub fn new(scheduler: S, duration: Duration) -> Self {
        Self {
            scheduler,
            duration,
        }
    }

    /// Run `apply` immediately and `revert` once the duration has elapsed.
    pub fn run(&self, apply: impl FnOnce(), revert: impl FnOnce() + 'static) {
        apply();
        self.revert_later(revert);
    }

    /// Schedule only the revert half, for callers that already applied
    /// their state change.
    pub fn revert_later(&self, revert: impl FnOnce() + 'static) {
        self.scheduler.schedule(self.duration, Box::new(revert));
    }
}

struct PendingTask {
    due: Duration,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_seq: u64,
    pending: Vec<PendingTask>,
}

/// A scheduler whose clock only moves when told to.
///
/// Tasks run in due order (ties in scheduling order) during [`advance`].
///
/// [`advance`]: ManualScheduler::advance
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Move the clock forward, running every task that comes due.
    ///
    /// Tasks scheduled by a running task are picked up in the same call if
    /// they fall inside the window.
    pub fn advance(&self, by: Duration) {
        let target = self.clock.borrow().now + by;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let due_index = clock
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.seq))
                    .map(|(i, _)| i);
                match due_index {
                    Some(i) => {
                        let task = clock.pending.swap_remove(i);
                        clock.now = task.due;
                        Some(task.task)
                    }
                    None => {
                        clock.now = target;
                        None
                    }
                }
            };
            // The borrow is released before the task runs so it can reschedule.
            match next {
                Some(task) => task(),
                None => break,
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let mut clock = self.clock.borrow_mut();
        let due = clock.now + delay;
        let seq = clock.next_seq;
        clock.next_seq += 1;
        clock.pending.push(PendingTask { due, seq, task });
    }
}

/// Guard flag that lets at most one update through per rendered frame.
///
/// A handler calls [`try_open`](FrameGate::try_open); only when it returns
/// true does it request an animation frame, and that frame callback calls
/// [`close`](FrameGate::close) when done.
#[derive(Debug, Default)]
pub struct FrameGate {
    ticking: Cell<bool>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_open(&self) -> bool {
        !self.ticking.replace(true)
    }

    pub fn close(&self) {
        self.ticking.set(false);
    }

    pub fn is_open(&self) -> bool {
        self.ticking.get()
    }
}
