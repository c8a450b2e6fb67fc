#[allow(clippy::unit_arg, clippy::unused_unit)]
mod app;
mod behaviors;
mod dom;
mod hooks;
mod icons;
mod logging;

use app::App;
use folio_core::SiteConfig;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

const SITE_TOML: &str = include_str!("../site.toml");

/// Entry point for the WASM application.
///
/// Renders the page into `<body>`, then attaches the interactive behaviors
/// to the markup it just produced.
#[wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();

    let parsed = SiteConfig::from_toml_str(SITE_TOML);
    let level = parsed
        .as_ref()
        .map(|config| config.log_level.as_str())
        .unwrap_or("info");
    if let Err(e) = logging::init_logging(level) {
        web_sys::console::warn_1(&JsValue::from_str(&e));
        let _ = logging::init_logging("info");
    }
    let config = parsed.unwrap_or_else(|e| {
        log::warn!("site config is invalid, using defaults: {:#}", e);
        SiteConfig::default()
    });

    let page_config = config.clone();
    leptos::mount::mount_to_body(move || view! { <App config=page_config.clone()/> });

    let Some(window) = web_sys::window() else {
        log::error!("no window; behaviors not installed");
        return;
    };
    match hooks::Hooks::locate(window) {
        Some(hooks) => {
            behaviors::install(&hooks, &config);
            log::debug!(
                "behaviors installed: {} sections, {} reveal targets, {} skill groups",
                hooks.sections.len(),
                hooks.reveal_targets.len(),
                hooks.skill_groups.len()
            );
        }
        None => log::error!("document has no body; behaviors not installed"),
    }
}
