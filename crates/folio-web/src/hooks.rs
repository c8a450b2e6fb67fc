//! The markup contract: every element the behaviors touch, looked up once.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, Window};

use crate::dom::{select, select_all};

pub const HOVER_TARGETS: &str = "a, button, .project-card, .skills-category, .contact-link";
pub const REVEAL_TARGETS: &str =
    ".section-header, .project-card, .skills-category, .contact-info, .contact-form";
pub const HERO_PARTS: &str = ".hero-tag, .hero-title, .hero-description, .hero-cta";
pub const TILT_CARDS: &str = ".project-card:not(.flip-card):not(.flip-card-small)";

pub struct Cursor {
    pub dot: Element,
    pub ring: Element,
}

pub struct NavMenu {
    pub toggle: Element,
    pub links: Element,
}

pub struct Hooks {
    pub window: Window,
    pub document: Document,
    pub body: HtmlElement,
    pub preloader: Option<Element>,
    pub cursor: Option<Cursor>,
    pub hover_targets: Vec<Element>,
    pub nav: Option<Element>,
    pub menu: Option<NavMenu>,
    pub nav_links: Option<Element>,
    pub anchors: Vec<Element>,
    pub sections: Vec<HtmlElement>,
    pub reveal_targets: Vec<Element>,
    pub skill_groups: Vec<Element>,
    pub contact_form: Option<HtmlFormElement>,
    pub floating: Vec<Element>,
    pub copy_button: Option<Element>,
    pub hero_parts: Vec<Element>,
    pub tilt_cards: Vec<Element>,
}

impl Hooks {
    /// Returns `None` only when there is no document body to work with.
    pub fn locate(window: Window) -> Option<Self> {
        let document = window.document()?;
        let body = document.body()?;

        let cursor = match (select(&document, ".cursor-dot"), select(&document, ".cursor-ring")) {
            (Some(dot), Some(ring)) => Some(Cursor { dot, ring }),
            _ => None,
        };
        let nav_links = select(&document, ".nav-links");
        let menu = select(&document, ".nav-toggle")
            .zip(nav_links.clone())
            .map(|(toggle, links)| NavMenu { toggle, links });
        let sections = select_all(&document, "section[id]")
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();
        let contact_form = document
            .get_element_by_id("contactForm")
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok());

        let hooks = Self {
            preloader: select(&document, ".preloader"),
            cursor,
            hover_targets: select_all(&document, HOVER_TARGETS),
            nav: select(&document, ".nav"),
            menu,
            nav_links,
            anchors: select_all(&document, r##"a[href^="#"]"##),
            sections,
            reveal_targets: select_all(&document, REVEAL_TARGETS),
            skill_groups: select_all(&document, ".skills-category"),
            contact_form,
            floating: select_all(&document, ".float-circle, .float-arch"),
            copy_button: select(&document, ".copy-email-btn"),
            hero_parts: select_all(&document, HERO_PARTS),
            tilt_cards: select_all(&document, TILT_CARDS),
            window,
            document,
            body,
        };
        hooks.log_missing();
        Some(hooks)
    }

    fn log_missing(&self) {
        let optional = [
            (".preloader", self.preloader.is_some()),
            (".cursor-dot/.cursor-ring", self.cursor.is_some()),
            (".nav", self.nav.is_some()),
            (".nav-toggle/.nav-links", self.menu.is_some()),
            ("#contactForm", self.contact_form.is_some()),
            (".copy-email-btn", self.copy_button.is_some()),
        ];
        for (hook, found) in optional {
            if !found {
                log::debug!("no {} on this page, behavior skipped", hook);
            }
        }
    }
}
