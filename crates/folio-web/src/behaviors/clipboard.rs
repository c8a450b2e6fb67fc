use std::rc::Rc;

use anyhow::{Result, anyhow, bail};
use folio_core::{ClipboardAccess, CopyButton, SiteConfig, TimedTransition};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, Element, HtmlDocument, HtmlTextAreaElement, Window};

use crate::dom::{TimeoutScheduler, set_class, set_style};
use crate::icons;

struct BrowserClipboard {
    window: Window,
    document: Document,
}

impl ClipboardAccess for BrowserClipboard {
    fn has_clipboard_api(&self) -> bool {
        // `navigator.clipboard` is undefined outside secure contexts.
        js_sys::Reflect::get(&self.window.navigator(), &JsValue::from_str("clipboard"))
            .map(|value| !value.is_undefined() && !value.is_null())
            .unwrap_or(false)
    }

    async fn write_text(&self, text: &str) -> Result<()> {
        let promise = self.window.navigator().clipboard().write_text(text);
        JsFuture::from(promise)
            .await
            .map_err(|e| anyhow!("clipboard write rejected: {:?}", e))?;
        Ok(())
    }

    fn legacy_copy(&self, text: &str) -> Result<()> {
        let body = self
            .document
            .body()
            .ok_or_else(|| anyhow!("document has no body"))?;
        let field = self
            .document
            .create_element("textarea")
            .map_err(|e| anyhow!("failed to create textarea: {:?}", e))?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| anyhow!("created element is not a textarea"))?;
        field.set_value(text);
        set_style(&field, "position", "fixed");
        set_style(&field, "opacity", "0");
        body.append_child(&field)
            .map_err(|e| anyhow!("failed to attach textarea: {:?}", e))?;
        field.select();

        let copied = self
            .document
            .dyn_ref::<HtmlDocument>()
            .map(|doc| doc.exec_command("copy"));
        field.remove();

        match copied {
            Some(Ok(true)) => Ok(()),
            Some(Ok(false)) => bail!("execCommand(\"copy\") returned false"),
            Some(Err(e)) => bail!("execCommand(\"copy\") threw: {:?}", e),
            None => bail!("not an HTML document"),
        }
    }

    fn prompt_manual_copy(&self, text: &str) {
        let _ = self
            .window
            .prompt_with_message_and_default("Copy this email address:", text);
    }
}

pub fn install(window: &Window, document: &Document, button: &Element, config: &SiteConfig) {
    let copier = Rc::new(CopyButton::new(
        BrowserClipboard {
            window: window.clone(),
            document: document.clone(),
        },
        TimedTransition::new(TimeoutScheduler, config.timing.copy_feedback()),
    ));
    let fallback = config.contact_email.clone();
    let target = button.clone();

    EventListener::new(button, "click", move |_| {
        let email = target
            .get_attribute("data-email")
            .filter(|email| !email.trim().is_empty())
            .unwrap_or_else(|| fallback.clone());
        let copier = copier.clone();
        let button = target.clone();
        spawn_local(async move {
            let method = copier
                .click(&email, move |copied| show_copied(&button, copied))
                .await;
            log::debug!("email copy finished via {:?}", method);
        });
    })
    .forget();
}

fn show_copied(button: &Element, copied: bool) {
    set_class(button, "copied", copied);
    button.set_inner_html(if copied { icons::CHECK } else { icons::COPY });
}
