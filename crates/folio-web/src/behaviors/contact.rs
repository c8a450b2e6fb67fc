use std::rc::Rc;

use folio_core::config::ColorConfig;
use folio_core::{
    ButtonState, ContactForm, FieldError, FormField, FormView, HttpTransport, SiteConfig,
    TimedTransition,
};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
};

use crate::dom::{TimeoutScheduler, clear_style, has_class, select_within, set_class, set_style};
use crate::icons;

const CONTROLS: &str = "input, textarea";

/// The contact form as the controller sees it.
#[derive(Clone)]
struct DomForm {
    document: Document,
    form: HtmlFormElement,
    button: Option<HtmlButtonElement>,
    original_label: Rc<str>,
    colors: Rc<ColorConfig>,
}

impl DomForm {
    fn controls(&self) -> Vec<Element> {
        select_within(&self.form, CONTROLS)
    }
}

fn snapshot(index: usize, control: &Element) -> Option<FormField> {
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        return Some(FormField::new(
            index,
            &input.name(),
            &input.type_(),
            &input.value(),
        ));
    }
    control
        .dyn_ref::<HtmlTextAreaElement>()
        .map(|area| FormField::new(index, &area.name(), "textarea", &area.value()))
}

impl FormView for DomForm {
    fn fields(&self) -> Vec<FormField> {
        self.controls()
            .iter()
            .enumerate()
            .filter_map(|(index, control)| snapshot(index, control))
            .collect()
    }

    fn show_error(&self, index: usize, error: Option<&FieldError>) {
        let Some(control) = self.controls().into_iter().nth(index) else {
            return;
        };
        let Some(group) = control.parent_element() else {
            return;
        };
        let existing = group.query_selector(".form-error").ok().flatten();

        match error {
            Some(error) => {
                let node = existing.or_else(|| {
                    let span = self.document.create_element("span").ok()?;
                    span.set_class_name("form-error");
                    group.append_child(&span).ok()?;
                    Some(span)
                });
                if let Some(node) = node {
                    node.set_text_content(Some(&error.to_string()));
                }
                set_class(&control, "input-error", true);
            }
            None => {
                if let Some(node) = existing {
                    node.remove();
                }
                set_class(&control, "input-error", false);
            }
        }
    }

    fn set_button(&self, state: ButtonState) {
        let Some(button) = &self.button else {
            return;
        };
        button.set_disabled(state.is_disabled());

        match state {
            ButtonState::Idle => button.set_inner_html(&self.original_label),
            ButtonState::Sent => {
                button.set_inner_html(&format!("<span>{}</span>{}", label(state), icons::SENT))
            }
            ButtonState::Sending | ButtonState::Failed => {
                button.set_inner_html(&format!("<span>{}</span>", label(state)))
            }
        }

        match state {
            ButtonState::Sent => set_style(button, "background", &self.colors.success),
            ButtonState::Failed => set_style(button, "background", &self.colors.error),
            ButtonState::Idle => clear_style(button, "background"),
            ButtonState::Sending => {}
        }
    }

    fn reset(&self) {
        self.form.reset();
    }
}

fn label(state: ButtonState) -> &'static str {
    state.label().unwrap_or_default()
}

pub fn install(document: &Document, form: &HtmlFormElement, config: &SiteConfig) {
    let button = select_within(form, ".btn-submit")
        .into_iter()
        .next()
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
    let original_label: Rc<str> = button
        .as_ref()
        .map(|b| b.inner_html())
        .unwrap_or_default()
        .into();

    // `form.action` resolves to the page URL when the attribute is blank.
    let endpoint = match form.get_attribute("action") {
        Some(action) if !action.trim().is_empty() => form.action(),
        _ => String::new(),
    };
    if endpoint.is_empty() {
        log::debug!("contact form has no action; submissions will be simulated");
    }

    let view = DomForm {
        document: document.clone(),
        form: form.clone(),
        button,
        original_label,
        colors: Rc::new(config.colors.clone()),
    };
    let controller = Rc::new(ContactForm::new(
        HttpTransport::new(),
        &endpoint,
        TimedTransition::new(TimeoutScheduler, config.timing.button_reset()),
    ));

    for (index, control) in view.controls().into_iter().enumerate() {
        {
            let view = view.clone();
            let controller = controller.clone();
            let target = control.clone();
            EventListener::new(&control, "blur", move |_| {
                if let Some(field) = snapshot(index, &target) {
                    controller.check_field(&view, &field);
                }
            })
            .forget();
        }

        let view = view.clone();
        let controller = controller.clone();
        let target = control.clone();
        EventListener::new(&control, "input", move |_| {
            if let Some(field) = snapshot(index, &target) {
                controller.field_edited(&view, &field, has_class(&target, "input-error"));
            }
        })
        .forget();
    }

    EventListener::new_with_options(
        form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            let view = view.clone();
            let controller = controller.clone();
            spawn_local(async move {
                controller.submit(&view).await;
            });
        },
    )
    .forget();
}
