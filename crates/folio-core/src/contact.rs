use anyhow::{Context, Result, bail};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::timing::{Scheduler, TimedTransition};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Minimum length of the `name` field, in characters
pub const MIN_NAME_CHARS: usize = 2;
/// Minimum length of the `message` field, in characters
pub const MIN_MESSAGE_CHARS: usize = 10;

/// A snapshot of one form control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Position among the form's controls, used by the view to find it again
    pub index: usize,
    pub name: String,
    /// The `type` attribute; `textarea` for text areas
    pub input_type: String,
    pub value: String,
}

impl FormField {
    pub fn new(index: usize, name: &str, input_type: &str, value: &str) -> Self {
        Self {
            index,
            name: name.to_string(),
            input_type: input_type.to_string(),
            value: value.to_string(),
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.input_type.eq_ignore_ascii_case("hidden")
    }

    pub fn is_email(&self) -> bool {
        self.input_type.eq_ignore_ascii_case("email")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
    NameTooShort,
    MessageTooShort,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required => write!(f, "This field is required"),
            FieldError::InvalidEmail => write!(f, "Please enter a valid email address"),
            FieldError::NameTooShort => {
                write!(f, "Name must be at least {} characters", MIN_NAME_CHARS)
            }
            FieldError::MessageTooShort => {
                write!(f, "Message must be at least {} characters", MIN_MESSAGE_CHARS)
            }
        }
    }
}

impl std::error::Error for FieldError {}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Check one field against the rules, first failure wins.
pub fn validate_field(field: &FormField) -> Result<(), FieldError> {
    let value = field.value.trim();
    // Same unit as an input's `value.length`.
    let units = value.encode_utf16().count();

    if value.is_empty() {
        Err(FieldError::Required)
    } else if field.is_email() && !is_valid_email(value) {
        Err(FieldError::InvalidEmail)
    } else if field.name == "name" && units < MIN_NAME_CHARS {
        Err(FieldError::NameTooShort)
    } else if field.name == "message" && units < MIN_MESSAGE_CHARS {
        Err(FieldError::MessageTooShort)
    } else {
        Ok(())
    }
}

/// Name/value pairs that go over the wire: every named field, hidden ones too.
pub fn form_payload(fields: &[FormField]) -> Vec<(String, String)> {
    fields
        .iter()
        .filter(|f| !f.name.is_empty())
        .map(|f| (f.name.clone(), f.value.clone()))
        .collect()
}

/// What the submit button shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// Original label, enabled
    Idle,
    Sending,
    Sent,
    Failed,
}

impl ButtonState {
    /// Label for the transient states; `Idle` restores whatever the button
    /// had originally.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            ButtonState::Idle => None,
            ButtonState::Sending => Some("Sending..."),
            ButtonState::Sent => Some("Message sent!"),
            ButtonState::Failed => Some("Something went wrong, try again"),
        }
    }

    pub fn is_disabled(&self) -> bool {
        !matches!(self, ButtonState::Idle)
    }
}

/// The parts of the contact form the controller reads and writes.
pub trait FormView {
    fn fields(&self) -> Vec<FormField>;
    /// Show `error` next to the field at `index`, or clear it when `None`.
    fn show_error(&self, index: usize, error: Option<&FieldError>);
    fn set_button(&self, state: ButtonState);
    /// Clear the form back to its initial values
    fn reset(&self);
}

/// Sends a validated submission somewhere.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_form(&self, endpoint: &str, fields: &[(String, String)]) -> Result<()>;
}

/// Posts the form as `application/x-www-form-urlencoded`.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpTransport {
    async fn post_form(&self, endpoint: &str, fields: &[(String, String)]) -> Result<()> {
        let response = self
            .client
            .post(endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(fields)
            .send()
            .await
            .with_context(|| format!("Failed to reach form endpoint {}", endpoint))?;

        let status = response.status();
        if !status.is_success() {
            bail!("Form endpoint answered with status {}", status.as_u16());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed for these fields; nothing was sent
    Rejected(Vec<String>),
    Sent,
    Failed,
}

/// Validation and submission for the contact form.
pub struct ContactForm<T, S> {
    transport: T,
    endpoint: Option<String>,
    button_reset: TimedTransition<S>,
}

impl<T: Transport, S: Scheduler> ContactForm<T, S> {
    /// An empty `endpoint` makes every valid submission succeed locally.
    pub fn new(transport: T, endpoint: &str, button_reset: TimedTransition<S>) -> Self {
        let endpoint = endpoint.trim();
        Self {
            transport,
            endpoint: (!endpoint.is_empty()).then(|| endpoint.to_string()),
            button_reset,
        }
    }

    /// Validate one field and update its inline error. Returns true if valid.
    pub fn check_field<V: FormView>(&self, view: &V, field: &FormField) -> bool {
        let result = validate_field(field);
        view.show_error(field.index, result.as_ref().err());
        result.is_ok()
    }

    /// Live re-validation while typing, only once the field has been flagged.
    pub fn field_edited<V: FormView>(&self, view: &V, field: &FormField, flagged: bool) {
        if flagged {
            self.check_field(view, field);
        }
    }

    /// Validate everything, then send.
    ///
    /// Every visible field is checked so all errors show at once. The button
    /// goes back to idle after the reset delay whatever the outcome.
    pub async fn submit<V>(&self, view: &V) -> SubmitOutcome
    where
        V: FormView + Clone + 'static,
    {
        let fields = view.fields();
        let rejected: Vec<String> = fields
            .iter()
            .filter(|f| !f.is_hidden())
            .filter(|f| !self.check_field(view, f))
            .map(|f| f.name.clone())
            .collect();
        if !rejected.is_empty() {
            return SubmitOutcome::Rejected(rejected);
        }

        view.set_button(ButtonState::Sending);
        let payload = form_payload(&fields);

        let outcome = match &self.endpoint {
            None => {
                log::info!(
                    "no form endpoint configured; simulated sending {} fields",
                    payload.len()
                );
                SubmitOutcome::Sent
            }
            Some(endpoint) => match self.transport.post_form(endpoint, &payload).await {
                Ok(()) => SubmitOutcome::Sent,
                Err(e) => {
                    log::warn!("contact form submission failed: {:#}", e);
                    SubmitOutcome::Failed
                }
            },
        };

        if outcome == SubmitOutcome::Sent {
            view.set_button(ButtonState::Sent);
            view.reset();
        } else {
            view.set_button(ButtonState::Failed);
        }

        let view = view.clone();
        self.button_reset
            .revert_later(move || view.set_button(ButtonState::Idle));
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::ManualScheduler;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    fn field(name: &str, input_type: &str, value: &str) -> FormField {
        FormField::new(0, name, input_type, value)
    }

    #[test]
    fn test_required_for_blank_values() {
        for input_type in ["text", "email", "textarea"] {
            assert_eq!(
                validate_field(&field("subject", input_type, "   ")),
                Err(FieldError::Required)
            );
        }
    }

    #[test]
    fn test_email_format() {
        assert!(validate_field(&field("email", "email", "ada@example.org")).is_ok());
        assert!(validate_field(&field("email", "email", " ada@example.org ")).is_ok());
        for bad in ["ada", "ada@example", "@example.org", "ada @x.org", "a@b@c.org"] {
            assert_eq!(
                validate_field(&field("email", "email", bad)),
                Err(FieldError::InvalidEmail),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_email_rule_follows_type_not_name() {
        assert!(validate_field(&field("email", "text", "not-an-address")).is_ok());
    }

    #[test]
    fn test_name_length() {
        assert_eq!(
            validate_field(&field("name", "text", "A")),
            Err(FieldError::NameTooShort)
        );
        assert!(validate_field(&field("name", "text", "Al")).is_ok());
        assert!(validate_field(&field("name", "text", "Éo")).is_ok());
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // One astral character is two units, as in the browser.
        assert!(validate_field(&field("name", "text", "😀")).is_ok());
        assert!(validate_field(&field("message", "textarea", "🎉🎉🎉🎉🎉")).is_ok());
        assert_eq!(
            validate_field(&field("message", "textarea", "🎉🎉🎉🎉")),
            Err(FieldError::MessageTooShort)
        );
    }

    #[test]
    fn test_message_length() {
        assert_eq!(
            validate_field(&field("message", "textarea", "too short")),
            Err(FieldError::MessageTooShort)
        );
        assert!(validate_field(&field("message", "textarea", "long enough")).is_ok());
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(FieldError::Required.to_string(), "This field is required");
        assert!(FieldError::NameTooShort.to_string().contains('2'));
        assert!(FieldError::MessageTooShort.to_string().contains("10"));
    }

    #[test]
    fn test_payload_keeps_hidden_and_drops_unnamed() {
        let fields = vec![
            FormField::new(0, "name", "text", "Ada"),
            FormField::new(1, "_subject", "hidden", "Portfolio contact"),
            FormField::new(2, "", "text", "ignored"),
        ];
        assert_eq!(
            form_payload(&fields),
            vec![
                ("name".to_string(), "Ada".to_string()),
                ("_subject".to_string(), "Portfolio contact".to_string()),
            ]
        );
    }

    #[test]
    fn test_button_labels() {
        assert_eq!(ButtonState::Idle.label(), None);
        assert!(!ButtonState::Idle.is_disabled());
        assert!(ButtonState::Sending.is_disabled());
        assert_eq!(ButtonState::Sent.label(), Some("Message sent!"));
    }

    #[derive(Clone, Default)]
    struct StubView {
        fields: Rc<RefCell<Vec<FormField>>>,
        errors: Rc<RefCell<Vec<Option<FieldError>>>>,
        button: Rc<Cell<Option<ButtonState>>>,
    }

    impl StubView {
        fn with(fields: Vec<FormField>) -> Self {
            let view = Self::default();
            *view.errors.borrow_mut() = vec![None; fields.len()];
            *view.fields.borrow_mut() = fields;
            view
        }
    }

    impl FormView for StubView {
        fn fields(&self) -> Vec<FormField> {
            self.fields.borrow().clone()
        }

        fn show_error(&self, index: usize, error: Option<&FieldError>) {
            self.errors.borrow_mut()[index] = error.copied();
        }

        fn set_button(&self, state: ButtonState) {
            self.button.set(Some(state));
        }

        fn reset(&self) {
            for f in self.fields.borrow_mut().iter_mut() {
                f.value.clear();
            }
        }
    }

    #[derive(Default)]
    struct CountingTransport {
        calls: Cell<usize>,
        fail: bool,
    }

    impl Transport for CountingTransport {
        async fn post_form(&self, _endpoint: &str, _fields: &[(String, String)]) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                bail!("boom");
            }
            Ok(())
        }
    }

    fn form(
        transport: CountingTransport,
        endpoint: &str,
    ) -> (ContactForm<CountingTransport, ManualScheduler>, ManualScheduler) {
        let scheduler = ManualScheduler::new();
        let reset = TimedTransition::new(scheduler.clone(), Duration::from_secs(3));
        (ContactForm::new(transport, endpoint, reset), scheduler)
    }

    fn valid_fields() -> Vec<FormField> {
        vec![
            FormField::new(0, "name", "text", "Ada Lovelace"),
            FormField::new(1, "email", "email", "ada@example.org"),
            FormField::new(2, "message", "textarea", "I would like to talk."),
        ]
    }

    #[test]
    fn test_check_field_sets_and_clears_error() {
        let (form, _) = form(CountingTransport::default(), "");
        let view = StubView::with(vec![FormField::new(0, "name", "text", "")]);

        assert!(!form.check_field(&view, &view.fields()[0]));
        assert_eq!(view.errors.borrow()[0], Some(FieldError::Required));

        view.fields.borrow_mut()[0].value = "Ada".to_string();
        assert!(form.check_field(&view, &view.fields()[0]));
        assert_eq!(view.errors.borrow()[0], None);
    }

    #[test]
    fn test_field_edited_only_revalidates_flagged_fields() {
        let (form, _) = form(CountingTransport::default(), "");
        let view = StubView::with(vec![FormField::new(0, "name", "text", "")]);

        form.field_edited(&view, &view.fields()[0], false);
        assert_eq!(view.errors.borrow()[0], None);

        form.field_edited(&view, &view.fields()[0], true);
        assert_eq!(view.errors.borrow()[0], Some(FieldError::Required));
    }

    #[tokio::test]
    async fn test_invalid_submit_sends_nothing() {
        let (form, scheduler) = form(CountingTransport::default(), "https://forms.test/f/1");
        let mut fields = valid_fields();
        fields[0].value = "A".to_string();
        fields[2].value = String::new();
        let view = StubView::with(fields);

        let outcome = form.submit(&view).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(vec!["name".to_string(), "message".to_string()])
        );
        assert_eq!(form.transport.calls.get(), 0);
        assert_eq!(view.button.get(), None);
        assert_eq!(scheduler.pending(), 0);
        let errors = view.errors.borrow();
        assert_eq!(errors[0], Some(FieldError::NameTooShort));
        assert_eq!(errors[1], None);
        assert_eq!(errors[2], Some(FieldError::Required));
    }

    #[tokio::test]
    async fn test_hidden_fields_are_not_validated() {
        let (form, _) = form(CountingTransport::default(), "https://forms.test/f/1");
        let mut fields = valid_fields();
        fields.push(FormField::new(3, "_gotcha", "hidden", ""));
        let view = StubView::with(fields);

        assert_eq!(form.submit(&view).await, SubmitOutcome::Sent);
        assert_eq!(form.transport.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_failed_transport_keeps_values_and_resets_button() {
        let transport = CountingTransport {
            fail: true,
            ..Default::default()
        };
        let (form, scheduler) = form(transport, "https://forms.test/f/1");
        let view = StubView::with(valid_fields());

        assert_eq!(form.submit(&view).await, SubmitOutcome::Failed);
        assert_eq!(view.button.get(), Some(ButtonState::Failed));
        assert_eq!(view.fields()[0].value, "Ada Lovelace");

        scheduler.advance(Duration::from_millis(2999));
        assert_eq!(view.button.get(), Some(ButtonState::Failed));
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(view.button.get(), Some(ButtonState::Idle));
    }

    #[tokio::test]
    async fn test_without_endpoint_submission_is_simulated() {
        let (form, scheduler) = form(CountingTransport::default(), "  ");
        let view = StubView::with(valid_fields());

        assert_eq!(form.submit(&view).await, SubmitOutcome::Sent);
        assert_eq!(form.transport.calls.get(), 0);
        assert_eq!(view.button.get(), Some(ButtonState::Sent));
        assert!(view.fields().iter().all(|f| f.value.is_empty()));

        scheduler.advance(Duration::from_secs(3));
        assert_eq!(view.button.get(), Some(ButtonState::Idle));
    }
}
