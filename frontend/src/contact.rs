use std::collections::BTreeMap;

use async_trait::async_trait;
use gloo_net::http::Request;
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::toast::ToastKind;
use crate::config;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InquiryType {
    #[default]
    General,
    Cloud,
    Data,
    Ai,
    Training,
    Careers,
}

impl InquiryType {
    pub const ALL: [InquiryType; 6] = [
        InquiryType::General,
        InquiryType::Cloud,
        InquiryType::Data,
        InquiryType::Ai,
        InquiryType::Training,
        InquiryType::Careers,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            InquiryType::General => "general",
            InquiryType::Cloud => "cloud",
            InquiryType::Data => "data",
            InquiryType::Ai => "ai",
            InquiryType::Training => "training",
            InquiryType::Careers => "careers",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InquiryType::General => "General Inquiry",
            InquiryType::Cloud => "Cloud Architecture & Migration",
            InquiryType::Data => "Data Engineering & Analytics",
            InquiryType::Ai => "Generative AI & Machine Learning",
            InquiryType::Training => "Training & Enablement",
            InquiryType::Careers => "Careers",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.value() == value)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub inquiry_type: InquiryType,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.first_name.trim().is_empty() {
            errors.insert(Field::FirstName, "First name is required");
        }
        if self.last_name.trim().is_empty() {
            errors.insert(Field::LastName, "Last name is required");
        }
        let email = self.email.trim();
        if email.is_empty() {
            errors.insert(Field::Email, "Email is required");
        } else if !is_valid_email(email) {
            errors.insert(Field::Email, "Format must be a valid email address");
        }
        if self.message.trim().is_empty() {
            errors.insert(Field::Message, "Message is required");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn subject(&self) -> String {
        format!(
            "New inquiry from {} {}",
            self.first_name.trim(),
            self.last_name.trim()
        )
    }

    /// Form state to install once a submission settles. `None` leaves the
    /// current fields alone, including edits made while the request was out.
    pub fn reset_after(outcome: &SubmitOutcome) -> Option<ContactForm> {
        matches!(outcome, SubmitOutcome::Sent).then(ContactForm::default)
    }
}

#[derive(Debug, Default)]
pub struct InFlight {
    active: bool,
}

impl InFlight {
    /// False when a submission is already running.
    pub fn try_begin(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        true
    }

    pub fn finish(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[derive(Serialize, Debug)]
pub struct RelayPayload<'a> {
    pub access_key: &'a str,
    pub subject: String,
    pub from_name: String,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub company: &'a str,
    pub inquiry_type: &'static str,
    pub message: &'a str,
}

impl<'a> RelayPayload<'a> {
    pub fn new(access_key: &'a str, form: &'a ContactForm) -> Self {
        Self {
            access_key,
            subject: form.subject(),
            from_name: format!("{} {}", form.first_name.trim(), form.last_name.trim()),
            first_name: form.first_name.trim(),
            last_name: form.last_name.trim(),
            email: form.email.trim(),
            company: form.company.trim(),
            inquiry_type: form.inquiry_type.value(),
            message: form.message.trim(),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl RelayResponse {
    pub fn into_result(self) -> Result<(), SubmitError> {
        if self.success {
            Ok(())
        } else {
            Err(SubmitError::Rejected(
                self.message.unwrap_or_else(|| "no reason given".to_string()),
            ))
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("relay answered with status {0}")]
    Status(u16),
    #[error("relay rejected the submission: {0}")]
    Rejected(String),
    #[error("could not read relay response: {0}")]
    Decode(String),
}

#[async_trait(?Send)]
pub trait FormRelay {
    async fn send(&self, form: &ContactForm) -> Result<(), SubmitError>;
}

pub struct HttpRelay {
    endpoint: String,
    access_key: String,
}

impl HttpRelay {
    pub fn new(endpoint: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            access_key: access_key.into(),
        }
    }
}

impl Default for HttpRelay {
    fn default() -> Self {
        Self::new(config::get_form_relay_url(), config::get_form_relay_key())
    }
}

#[async_trait(?Send)]
impl FormRelay for HttpRelay {
    async fn send(&self, form: &ContactForm) -> Result<(), SubmitError> {
        let payload = RelayPayload::new(&self.access_key, form);
        let response = Request::post(&self.endpoint)
            .header("Accept", "application/json")
            .json(&payload)
            .map_err(|e| SubmitError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(SubmitError::Status(response.status()));
        }

        response
            .json::<RelayResponse>()
            .await
            .map_err(|e| SubmitError::Decode(e.to_string()))?
            .into_result()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Sent,
    Invalid(FieldErrors),
    Failed(SubmitError),
}

/// User-facing toast for an outcome. Invalid forms are reported inline instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: ToastKind,
    pub title: &'static str,
    pub message: String,
}

impl SubmitOutcome {
    pub fn notice(&self) -> Option<Notice> {
        match self {
            SubmitOutcome::Sent => Some(Notice {
                kind: ToastKind::Success,
                title: "Message Sent Successfully",
                message: "We've received your inquiry. An architect will be in touch within 24 hours."
                    .to_string(),
            }),
            SubmitOutcome::Invalid(_) => None,
            SubmitOutcome::Failed(_) => Some(Notice {
                kind: ToastKind::Error,
                title: "Message Not Sent",
                message: format!(
                    "Something went wrong while sending your inquiry. Please try again, or email us directly at {}.",
                    config::CONTACT_EMAIL
                ),
            }),
        }
    }
}

/// Validates, then makes at most one relay call. Never retries.
pub async fn submit<R: FormRelay + ?Sized>(relay: &R, form: &ContactForm) -> SubmitOutcome {
    if let Err(errors) = form.validate() {
        info!("Contact form has {} invalid field(s)", errors.0.len());
        return SubmitOutcome::Invalid(errors);
    }

    match relay.send(form).await {
        Ok(()) => {
            info!("Contact inquiry sent ({})", form.inquiry_type.value());
            SubmitOutcome::Sent
        }
        Err(e) => {
            warn!("Contact inquiry failed: {}", e);
            SubmitOutcome::Failed(e)
        }
    }
}

/// `mailto:` link prefilled with what the visitor typed, for when the relay is down.
pub fn mailto_fallback(form: &ContactForm) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        config::CONTACT_EMAIL,
        urlencoding::encode(&form.subject()),
        urlencoding::encode(form.message.trim())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    struct FakeRelay {
        calls: Cell<usize>,
        result: Result<(), SubmitError>,
    }

    impl FakeRelay {
        fn answering(result: Result<(), SubmitError>) -> Self {
            Self {
                calls: Cell::new(0),
                result,
            }
        }
    }

    #[async_trait(?Send)]
    impl FormRelay for FakeRelay {
        async fn send(&self, _form: &ContactForm) -> Result<(), SubmitError> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    fn filled() -> ContactForm {
        ContactForm {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@company.com".into(),
            company: "Acme Corp".into(),
            inquiry_type: InquiryType::Data,
            message: "We need a new warehouse.".into(),
        }
    }

    #[test]
    fn empty_first_name_blocks_the_network_call() {
        let relay = FakeRelay::answering(Ok(()));
        let form = ContactForm {
            first_name: String::new(),
            ..filled()
        };

        match block_on(submit(&relay, &form)) {
            SubmitOutcome::Invalid(errors) => {
                assert_eq!(errors.get(Field::FirstName), Some("First name is required"));
                assert!(!errors.contains(Field::Email));
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
        assert_eq!(relay.calls.get(), 0);
    }

    #[test]
    fn email_shape_is_checked() {
        let bad = ContactForm {
            email: "not-an-email".into(),
            ..filled()
        };
        let errors = bad.validate().unwrap_err();
        assert_eq!(errors.get(Field::Email), Some("Format must be a valid email address"));

        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn blank_form_reports_every_required_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        for field in [Field::FirstName, Field::LastName, Field::Email, Field::Message] {
            assert!(errors.contains(field), "{:?}", field);
        }
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let form = ContactForm {
            message: "   \n".into(),
            ..filled()
        };
        assert!(form.validate().unwrap_err().contains(Field::Message));
    }

    #[test]
    fn valid_form_is_sent_exactly_once() {
        let relay = FakeRelay::answering(Ok(()));
        let outcome = block_on(submit(&relay, &filled()));

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(relay.calls.get(), 1);
    }

    #[test]
    fn network_failure_keeps_fields_and_raises_generic_error() {
        let relay = FakeRelay::answering(Err(SubmitError::Status(503)));
        let outcome = block_on(submit(&relay, &filled()));

        assert_eq!(outcome, SubmitOutcome::Failed(SubmitError::Status(503)));
        assert_eq!(relay.calls.get(), 1);
        let notice = outcome.notice().unwrap();
        assert_eq!(notice.kind, ToastKind::Error);
        assert!(notice.message.contains(config::CONTACT_EMAIL));
        assert_eq!(ContactForm::reset_after(&outcome), None);
    }

    #[test]
    fn failure_keeps_edits_made_during_the_request() {
        let relay = FakeRelay::answering(Err(SubmitError::Transport("offline".into())));
        let sent = filled();
        let outcome = block_on(submit(&relay, &sent));

        let mut on_screen = ContactForm {
            first_name: "Janet".into(),
            ..sent
        };
        if let Some(replacement) = ContactForm::reset_after(&outcome) {
            on_screen = replacement;
        }
        assert_eq!(on_screen.first_name, "Janet");
        assert_eq!(on_screen.message, "We need a new warehouse.");
    }

    #[test]
    fn success_clears_the_form() {
        let relay = FakeRelay::answering(Ok(()));
        let outcome = block_on(submit(&relay, &filled()));

        assert_eq!(outcome.notice().map(|n| n.kind), Some(ToastKind::Success));
        assert_eq!(ContactForm::reset_after(&outcome), Some(ContactForm::default()));
        assert_eq!(ContactForm::reset_after(&SubmitOutcome::Invalid(FieldErrors::default())), None);
    }

    #[test]
    fn in_flight_guard_admits_one_submission_at_a_time() {
        let relay = FakeRelay::answering(Ok(()));
        let mut guard = InFlight::default();

        assert!(guard.try_begin());
        assert!(!guard.try_begin());
        assert!(guard.is_active());
        block_on(submit(&relay, &filled()));
        assert!(!guard.try_begin());
        guard.finish();

        assert!(!guard.is_active());
        assert!(guard.try_begin());
        assert_eq!(relay.calls.get(), 1);
    }

    #[test]
    fn relay_response_flag_decides_success() {
        let ok: RelayResponse = serde_json::from_str(r#"{"success":true,"message":"Email sent"}"#).unwrap();
        assert_eq!(ok.into_result(), Ok(()));

        let rejected: RelayResponse = serde_json::from_str(r#"{"success":false,"message":"Invalid access key"}"#).unwrap();
        assert_eq!(
            rejected.into_result(),
            Err(SubmitError::Rejected("Invalid access key".into()))
        );

        let bare: RelayResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(matches!(bare.into_result(), Err(SubmitError::Rejected(_))));
    }

    #[test]
    fn payload_carries_subject_and_trimmed_fields() {
        let form = ContactForm {
            first_name: " Jane ".into(),
            ..filled()
        };
        let payload = serde_json::to_value(RelayPayload::new("key", &form)).unwrap();

        assert_eq!(payload["access_key"], "key");
        assert_eq!(payload["subject"], "New inquiry from Jane Doe");
        assert_eq!(payload["first_name"], "Jane");
        assert_eq!(payload["inquiry_type"], "data");
    }

    #[test]
    fn inquiry_types_round_trip_through_select_values() {
        for kind in InquiryType::ALL {
            assert_eq!(InquiryType::from_value(kind.value()), Some(kind));
        }
        assert_eq!(InquiryType::from_value("sales"), None);
    }

    #[test]
    fn mailto_fallback_is_encoded() {
        let link = mailto_fallback(&filled());
        assert!(link.starts_with("mailto:hello@faan.ai?subject=New%20inquiry%20from%20Jane%20Doe"));
        assert!(link.contains("body=We%20need%20a%20new%20warehouse."));
    }
}
