//! Wires each `folio-core` controller to the DOM.
//!
//! Every behavior is independent: a missing hook only disables the behavior
//! that needs it. Listeners live as long as the page and are leaked on
//! purpose.

pub mod clipboard;
pub mod contact;
pub mod cursor;
pub mod motion;
pub mod nav;
pub mod page;
pub mod reveal;

use folio_core::SiteConfig;

use crate::hooks::Hooks;

pub fn install(hooks: &Hooks, config: &SiteConfig) {
    page::install(hooks, &config.timing);

    if let Some(cursor) = &hooks.cursor {
        cursor::install(
            &hooks.window,
            &hooks.document,
            cursor,
            &hooks.hover_targets,
            config.motion.cursor_easing,
        );
    }

    if let Some(menu) = &hooks.menu {
        nav::install_menu(&hooks.document, &hooks.body, menu);
    }
    nav::install_anchors(&hooks.document, &hooks.anchors);

    reveal::install_reveal(&hooks.reveal_targets, config.scroll.reveal_threshold);
    reveal::install_skill_bars(
        &hooks.skill_groups,
        &config.timing,
        config.scroll.skills_threshold,
    );

    if let Some(nav) = &hooks.nav {
        nav::install_navbar(&hooks.window, nav, &config.scroll);
    }

    if let Some(form) = &hooks.contact_form {
        contact::install(&hooks.document, form, config);
    }

    motion::install_parallax(&hooks.window, &hooks.floating, &config.motion);

    if let Some(links) = &hooks.nav_links {
        nav::install_active_link(
            &hooks.window,
            links,
            &hooks.sections,
            config.scroll.section_lookahead,
        );
    }

    if let Some(button) = &hooks.copy_button {
        clipboard::install(&hooks.window, &hooks.document, button, config);
    }

    motion::install_tilt(&hooks.tilt_cards, config.motion.tilt_divisor);
}
