//! Navigation: the mobile menu, the hide-on-scroll navbar, in-page anchors and
//! the active-link highlight.

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns true if the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Handle a key press. Only Escape does anything, and only while open.
    pub fn key_pressed(&mut self, key: &str) -> bool {
        key == "Escape" && self.close()
    }
}

/// Classes the navbar should carry after a scroll update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavbarState {
    /// `nav-hidden`: scrolled down past the hide threshold
    pub hidden: bool,
    /// `scrolled`: past the solid-background threshold
    pub scrolled: bool,
}

/// Tracks the last scroll offset to tell scroll direction.
#[derive(Debug, Clone)]
pub struct NavbarTracker {
    last_offset: f64,
    hide_after: f64,
    solid_after: f64,
}

impl NavbarTracker {
    pub fn new(initial_offset: f64, hide_after: f64, solid_after: f64) -> Self {
        Self {
            last_offset: initial_offset,
            hide_after,
            solid_after,
        }
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    pub fn update(&mut self, offset: f64) -> NavbarState {
        let state = NavbarState {
            hidden: offset > self.last_offset && offset > self.hide_after,
            scrolled: offset > self.solid_after,
        };
        self.last_offset = offset;
        state
    }
}

/// The element id an in-page anchor points at.
///
/// Returns `None` for a bare `#` or anything that is not a fragment link.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Vertical position of a `section[id]`, as read from `offsetTop`.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

/// The last section (in document order) whose top, pulled up by `lookahead`,
/// has been scrolled past.
pub fn active_section(sections: &[SectionOffset], scroll_y: f64, lookahead: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| scroll_y >= s.top - lookahead)
        .map(|s| s.id.as_str())
}

/// Whether a nav link's `href` points at the section with `id`.
pub fn link_targets(href: &str, id: &str) -> bool {
    anchor_target(href) == Some(id)
}
