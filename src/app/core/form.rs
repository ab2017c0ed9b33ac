//! Contact form: field values, validation and timed submission.
//!
//! ```text
//! Idle --submit(valid)--> Submitting --latency elapsed, send Ok--> Succeeded --display elapsed--> Idle
//!   ^  \--submit(invalid): errors shown, stays Idle                  |
//!   \------------------------- send Err: banner, fields kept <-------/ (from Submitting)
//! ```
//!
//! Time never advances on its own: callers pass `now` to [`ContactForm::submit`]
//! and [`ContactForm::tick`], which keeps the machine deterministic in tests.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::time::{Duration, Instant};
use unicode_segmentation::UnicodeSegmentation;

use crate::app::FormField;
use crate::delivery::{ContactMessage, DeliveryError, MessageSender};

/// Minimum message length, in characters.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Basic shape check only: `local@domain.tld` without whitespace.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap_or_else(|e| panic!("email pattern: {e}"))
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    Required,
    InvalidFormat,
    TooShort,
}

impl ValidationError {
    /// Inline message shown under `field`.
    pub fn message(self, field: FormField) -> String {
        match self {
            ValidationError::Required => format!("{} is required", field.label()),
            ValidationError::InvalidFormat => "Please enter a valid email".to_string(),
            ValidationError::TooShort => {
                format!("Message must be at least {} characters", MIN_MESSAGE_CHARS)
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ValidationError::Required => "Required",
            ValidationError::InvalidFormat => "InvalidFormat",
            ValidationError::TooShort => "TooShort",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: Option<ValidationError>,
    pub email: Option<ValidationError>,
    pub message: Option<ValidationError>,
}

impl ValidationErrors {
    pub fn get(&self, field: FormField) -> Option<ValidationError> {
        match field {
            FormField::Name => self.name,
            FormField::Email => self.email,
            FormField::Message => self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

/// Run every rule; all applicable errors are reported together.
pub fn validate(fields: &FormFields) -> ValidationErrors {
    let name = fields
        .name
        .trim()
        .is_empty()
        .then_some(ValidationError::Required);

    let email = if fields.email.trim().is_empty() {
        Some(ValidationError::Required)
    } else if !EMAIL_RE.is_match(&fields.email) {
        Some(ValidationError::InvalidFormat)
    } else {
        None
    };

    let message = if fields.message.trim().is_empty() {
        Some(ValidationError::Required)
    } else if fields.message.chars().count() < MIN_MESSAGE_CHARS {
        Some(ValidationError::TooShort)
    } else {
        None
    };

    ValidationErrors {
        name,
        email,
        message,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting { deadline: Instant },
    Succeeded { until: Instant },
}

/// Timings of the simulated submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormTimings {
    pub submit_latency: Duration,
    pub success_display: Duration,
}

impl Default for FormTimings {
    fn default() -> Self {
        FormTimings {
            submit_latency: Duration::from_millis(1500),
            success_display: Duration::from_millis(3000),
        }
    }
}

/// Result of a submit request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Started,
    Invalid(ValidationErrors),
    /// A submission is already in flight or the confirmation is showing.
    Ignored,
}

/// Transition reported by [`ContactForm::tick`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Sent,
    Failed(DeliveryError),
    Reset,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    pub fields: FormFields,
    pub errors: ValidationErrors,
    pub status: SubmissionStatus,
    /// Set when the last delivery failed; cleared by the next submit.
    pub failure: Option<DeliveryError>,
    timings: FormTimings,
    /// Payload handed to the sender once the latency elapses.
    pending: Option<ContactMessage>,
}

impl Default for ContactForm {
    fn default() -> Self {
        ContactForm::new(FormTimings::default())
    }
}

impl ContactForm {
    pub fn new(timings: FormTimings) -> Self {
        ContactForm {
            fields: FormFields::default(),
            errors: ValidationErrors::default(),
            status: SubmissionStatus::Idle,
            failure: None,
            timings,
            pending: None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.status, SubmissionStatus::Submitting { .. })
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self.status, SubmissionStatus::Succeeded { .. })
    }

    /// Fields accept input only while idle.
    pub fn is_editable(&self) -> bool {
        self.status == SubmissionStatus::Idle
    }

    pub fn insert_char(&mut self, field: FormField, c: char) -> bool {
        if !self.is_editable() {
            return false;
        }
        self.fields.get_mut(field).push(c);
        true
    }

    pub fn insert_str(&mut self, field: FormField, s: &str) -> bool {
        if !self.is_editable() {
            return false;
        }
        self.fields.get_mut(field).push_str(s);
        true
    }

    /// Remove the last grapheme cluster of `field`.
    pub fn backspace(&mut self, field: FormField) -> bool {
        if !self.is_editable() {
            return false;
        }
        let value = self.fields.get_mut(field);
        match value.grapheme_indices(true).next_back() {
            Some((idx, _)) => {
                value.truncate(idx);
                true
            }
            None => false,
        }
    }

    /// Validate and, when everything passes, start the simulated submission.
    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        if !self.is_editable() {
            return SubmitOutcome::Ignored;
        }
        let errors = validate(&self.fields);
        self.errors = errors.clone();
        if !errors.is_empty() {
            tracing::debug!(?errors, "contact form rejected");
            return SubmitOutcome::Invalid(errors);
        }
        self.failure = None;
        self.pending = Some(ContactMessage {
            name: self.fields.name.clone(),
            email: self.fields.email.clone(),
            message: self.fields.message.clone(),
        });
        self.status = SubmissionStatus::Submitting {
            deadline: now + self.timings.submit_latency,
        };
        tracing::info!("contact form submitting");
        SubmitOutcome::Started
    }

    /// Fire whichever deadline has passed at `now`.
    pub fn tick(&mut self, now: Instant, sender: &dyn MessageSender) -> Option<FormEvent> {
        match self.status {
            SubmissionStatus::Submitting { deadline } if now >= deadline => {
                let msg = self.pending.take().unwrap_or_else(|| ContactMessage {
                    name: self.fields.name.clone(),
                    email: self.fields.email.clone(),
                    message: self.fields.message.clone(),
                });
                match sender.send(&msg) {
                    Ok(()) => {
                        self.fields = FormFields::default();
                        self.status = SubmissionStatus::Succeeded {
                            until: now + self.timings.success_display,
                        };
                        tracing::info!("contact form sent");
                        Some(FormEvent::Sent)
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "contact form delivery failed");
                        self.status = SubmissionStatus::Idle;
                        self.failure = Some(e.clone());
                        Some(FormEvent::Failed(e))
                    }
                }
            }
            SubmissionStatus::Succeeded { until } if now >= until => {
                self.status = SubmissionStatus::Idle;
                Some(FormEvent::Reset)
            }
            _ => None,
        }
    }

    /// Next instant at which `tick` will do something, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.status {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Submitting { deadline } => Some(deadline),
            SubmissionStatus::Succeeded { until } => Some(until),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::SimulatedSender;

    fn fields(name: &str, email: &str, message: &str) -> FormFields {
        FormFields {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    #[test]
    fn only_name_missing() {
        let e = validate(&fields("", "a@b.com", "hello world!"));
        assert_eq!(e.name, Some(ValidationError::Required));
        assert_eq!(e.email, None);
        assert_eq!(e.message, None);
    }

    #[test]
    fn email_and_message_fail_together() {
        let e = validate(&fields("Jo", "not-an-email", "short"));
        assert_eq!(e.name, None);
        assert_eq!(e.email, Some(ValidationError::InvalidFormat));
        assert_eq!(e.message, Some(ValidationError::TooShort));
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let e = validate(&fields("   ", " \t", "\n  "));
        assert_eq!(e.name, Some(ValidationError::Required));
        assert_eq!(e.email, Some(ValidationError::Required));
        assert_eq!(e.message, Some(ValidationError::Required));
    }

    #[test]
    fn email_pattern_is_permissive_shape_check() {
        for ok in ["a@b.co", "x.y+z@sub.domain.org", "a@b.c.d", "ü@ö.de"] {
            assert_eq!(validate(&fields("n", ok, "0123456789")).email, None, "{ok}");
        }
        for bad in ["a@b", "@b.com", "a@.com.", "a b@c.com", "a@@b.com", " a@b.com"] {
            assert_eq!(
                validate(&fields("n", bad, "0123456789")).email,
                Some(ValidationError::InvalidFormat),
                "{bad}"
            );
        }
    }

    #[test]
    fn message_length_counts_chars_not_bytes() {
        // Nine multi-byte characters are still too short.
        assert_eq!(
            validate(&fields("n", "a@b.co", "ééééééééé")).message,
            Some(ValidationError::TooShort)
        );
        assert_eq!(validate(&fields("n", "a@b.co", "éééééééééé")).message, None);
    }

    #[test]
    fn messages_name_the_field() {
        assert_eq!(
            ValidationError::Required.message(FormField::Name),
            "Name is required"
        );
        assert_eq!(ValidationError::InvalidFormat.to_string(), "InvalidFormat");
    }

    #[test]
    fn invalid_submit_stays_idle() {
        let mut f = ContactForm::default();
        let now = Instant::now();
        assert!(matches!(f.submit(now), SubmitOutcome::Invalid(_)));
        assert_eq!(f.status, SubmissionStatus::Idle);
        assert_eq!(f.tick(now + Duration::from_secs(10), &SimulatedSender), None);
    }

    #[test]
    fn full_cycle_with_default_timings() {
        let mut f = ContactForm::default();
        f.fields = fields("Jo", "jo@example.com", "hello world!");
        let t0 = Instant::now();

        assert_eq!(f.submit(t0), SubmitOutcome::Started);
        assert!(f.is_submitting());
        assert!(!f.insert_char(FormField::Name, 'x'));
        assert_eq!(f.submit(t0), SubmitOutcome::Ignored);

        assert_eq!(f.tick(t0 + Duration::from_millis(1499), &SimulatedSender), None);
        let t1 = t0 + Duration::from_millis(1500);
        assert_eq!(f.tick(t1, &SimulatedSender), Some(FormEvent::Sent));
        assert!(f.is_succeeded());
        assert_eq!(f.fields, FormFields::default());

        assert_eq!(f.tick(t1 + Duration::from_millis(2999), &SimulatedSender), None);
        assert_eq!(
            f.tick(t1 + Duration::from_millis(3000), &SimulatedSender),
            Some(FormEvent::Reset)
        );
        assert_eq!(f.status, SubmissionStatus::Idle);
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        let mut f = ContactForm::default();
        f.insert_str(FormField::Name, "Zoe\u{301}");
        assert!(f.backspace(FormField::Name));
        assert_eq!(f.fields.name, "Zo");
        f.fields.name.clear();
        assert!(!f.backspace(FormField::Name));
    }
}
