use anyhow::Result;

use crate::timing::{Scheduler, TimedTransition};

/// Ways of getting text onto the user's clipboard, best first.
#[allow(async_fn_in_trait)]
pub trait ClipboardAccess {
    /// Whether the async clipboard API exists at all (it does not on
    /// insecure origins).
    fn has_clipboard_api(&self) -> bool;
    async fn write_text(&self, text: &str) -> Result<()>;
    /// The legacy `execCommand("copy")` route through a hidden text field.
    fn legacy_copy(&self, text: &str) -> Result<()>;
    /// Last resort: show the text so the user can copy it by hand.
    fn prompt_manual_copy(&self, text: &str);
}

/// Which route the copy ended up taking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    ClipboardApi,
    LegacyCommand,
    ManualPrompt,
}

impl CopyMethod {
    /// Whether the text actually reached the clipboard.
    pub fn copied(&self) -> bool {
        !matches!(self, CopyMethod::ManualPrompt)
    }
}

pub async fn copy_with_fallback<C: ClipboardAccess>(access: &C, text: &str) -> CopyMethod {
    if access.has_clipboard_api() {
        match access.write_text(text).await {
            Ok(()) => return CopyMethod::ClipboardApi,
            Err(e) => log::debug!("clipboard API write failed, trying legacy copy: {:#}", e),
        }
    }

    match access.legacy_copy(text) {
        Ok(()) => CopyMethod::LegacyCommand,
        Err(e) => {
            log::debug!("legacy copy failed, asking the user: {:#}", e);
            access.prompt_manual_copy(text);
            CopyMethod::ManualPrompt
        }
    }
}

/// The copy-email button: copies, then flashes a "copied" state.
pub struct CopyButton<C, S> {
    access: C,
    feedback: TimedTransition<S>,
}

impl<C: ClipboardAccess, S: Scheduler> CopyButton<C, S> {
    pub fn new(access: C, feedback: TimedTransition<S>) -> Self {
        Self { access, feedback }
    }

    /// Copy `text`; on success `show(true)` runs now and `show(false)` once
    /// the feedback period is over.
    pub async fn click<F>(&self, text: &str, show: F) -> CopyMethod
    where
        F: Fn(bool) + 'static,
    {
        let method = copy_with_fallback(&self.access, text).await;
        if method.copied() {
            show(true);
            self.feedback.revert_later(move || show(false));
        }
        method
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::ManualScheduler;
    use anyhow::bail;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    #[derive(Default)]
    struct FakeClipboard {
        api: bool,
        api_fails: bool,
        legacy_fails: bool,
        written: RefCell<Vec<String>>,
        prompted: RefCell<Vec<String>>,
    }

    impl ClipboardAccess for FakeClipboard {
        fn has_clipboard_api(&self) -> bool {
            self.api
        }

        async fn write_text(&self, text: &str) -> Result<()> {
            if self.api_fails {
                bail!("NotAllowedError");
            }
            self.written.borrow_mut().push(text.to_string());
            Ok(())
        }

        fn legacy_copy(&self, text: &str) -> Result<()> {
            if self.legacy_fails {
                bail!("execCommand refused");
            }
            self.written.borrow_mut().push(text.to_string());
            Ok(())
        }

        fn prompt_manual_copy(&self, text: &str) {
            self.prompted.borrow_mut().push(text.to_string());
        }
    }

    #[tokio::test]
    async fn test_api_used_when_available() {
        let clip = FakeClipboard {
            api: true,
            ..Default::default()
        };
        let method = copy_with_fallback(&clip, "me@studio.dev").await;
        assert_eq!(method, CopyMethod::ClipboardApi);
        assert_eq!(*clip.written.borrow(), vec!["me@studio.dev"]);
    }

    #[tokio::test]
    async fn test_api_failure_falls_back_to_legacy() {
        let clip = FakeClipboard {
            api: true,
            api_fails: true,
            ..Default::default()
        };
        assert_eq!(
            copy_with_fallback(&clip, "x@y.z").await,
            CopyMethod::LegacyCommand
        );
    }

    #[tokio::test]
    async fn test_missing_api_goes_straight_to_legacy() {
        let clip = FakeClipboard {
            api_fails: true,
            ..Default::default()
        };
        assert_eq!(
            copy_with_fallback(&clip, "x@y.z").await,
            CopyMethod::LegacyCommand
        );
        assert!(clip.prompted.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_everything_failing_prompts_user() {
        let clip = FakeClipboard {
            legacy_fails: true,
            ..Default::default()
        };
        let method = copy_with_fallback(&clip, "x@y.z").await;
        assert_eq!(method, CopyMethod::ManualPrompt);
        assert!(!method.copied());
        assert_eq!(*clip.prompted.borrow(), vec!["x@y.z"]);
    }

    #[tokio::test]
    async fn test_button_shows_check_for_feedback_period() {
        let scheduler = ManualScheduler::new();
        let button = CopyButton::new(
            FakeClipboard {
                api: true,
                ..Default::default()
            },
            TimedTransition::new(scheduler.clone(), Duration::from_millis(2000)),
        );
        let copied = Rc::new(Cell::new(false));

        let state = copied.clone();
        button.click("me@studio.dev", move |on| state.set(on)).await;
        assert!(copied.get());

        scheduler.advance(Duration::from_millis(1999));
        assert!(copied.get());
        scheduler.advance(Duration::from_millis(1));
        assert!(!copied.get());
    }

    #[tokio::test]
    async fn test_button_shows_nothing_after_manual_prompt() {
        let scheduler = ManualScheduler::new();
        let button = CopyButton::new(
            FakeClipboard {
                legacy_fails: true,
                ..Default::default()
            },
            TimedTransition::new(scheduler.clone(), Duration::from_millis(2000)),
        );
        let shown = Rc::new(Cell::new(false));

        let state = shown.clone();
        let method = button.click("me@studio.dev", move |on| state.set(on)).await;
        assert_eq!(method, CopyMethod::ManualPrompt);
        assert!(!shown.get());
        assert_eq!(scheduler.pending(), 0);
    }
}
