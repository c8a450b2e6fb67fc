//! Behavior controllers for the folio portfolio page.
//!
//! Everything here is plain Rust with no browser dependency: each page
//! behavior is a small controller that owns only its own state and is fed
//! events by the `folio-web` crate. Anything that has to wait (timers,
//! network, clipboard) goes through a trait so it can be driven from tests.

pub mod clipboard;
pub mod config;
pub mod contact;
pub mod cursor;
pub mod motion;
pub mod nav;
pub mod preloader;
pub mod reveal;
pub mod timing;

pub use clipboard::{ClipboardAccess, CopyButton, CopyMethod, copy_with_fallback};
pub use config::SiteConfig;
pub use contact::{
    ButtonState, ContactForm, FieldError, FormField, FormView, HttpTransport, SubmitOutcome,
    Transport, validate_field,
};
pub use cursor::{CursorFollower, Point};
pub use motion::{Rect, Tilt};
pub use nav::{MobileMenu, NavbarState, NavbarTracker, SectionOffset};
pub use preloader::Preloader;
pub use reveal::{BarFill, RevealTracker, SkillGroup};
pub use timing::{FrameGate, ManualScheduler, Scheduler, TimedTransition};
