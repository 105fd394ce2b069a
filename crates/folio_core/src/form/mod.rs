//! Contact form validation.
//!
//! # Responsibility
//! - Validate the three contact fields and produce per-field inline messages.
//! - Support both full-form submit validation and single-field live checks.
//!
//! # Invariants
//! - Validation failure is a normal result value, never an error type, and
//!   never blocks other components.
//! - Messages are fixed strings; the boundary layer writes them verbatim
//!   into the per-field error elements.

use once_cell::sync::Lazy;
use regex::Regex;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email";
pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters";

/// Minimum trimmed message length accepted on submit.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// How long the success notice stays visible before auto-dismissal.
pub const SUCCESS_NOTICE_MS: u32 = 5_000;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// The three contact form fields, used to address live per-field checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// Raw user input as read from the form controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Per-field outcome of a submit-time validation pass.
///
/// `None` per field means the field is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl ValidationReport {
    /// Whether submission may proceed.
    pub fn is_valid(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    /// Message for one field, if any.
    pub fn field(&self, field: ContactField) -> Option<&'static str> {
        match field {
            ContactField::Name => self.name,
            ContactField::Email => self.email,
            ContactField::Message => self.message,
        }
    }
}

/// Validates the whole form for submission.
pub fn validate(input: &ContactInput) -> ValidationReport {
    ValidationReport {
        name: validate_field(ContactField::Name, &input.name),
        email: validate_field(ContactField::Email, &input.email),
        message: validate_field(ContactField::Message, &input.message),
    }
}

/// Validates a single field, as used by live (per-keystroke) checks.
///
/// Returns the inline message to display, or `None` to clear it.
pub fn validate_field(field: ContactField, value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    match field {
        ContactField::Name => {
            if trimmed.is_empty() {
                Some(NAME_REQUIRED)
            } else {
                None
            }
        }
        ContactField::Email => {
            if trimmed.is_empty() {
                Some(EMAIL_REQUIRED)
            } else if !EMAIL_RE.is_match(trimmed) {
                Some(EMAIL_INVALID)
            } else {
                None
            }
        }
        ContactField::Message => {
            if trimmed.is_empty() {
                Some(MESSAGE_REQUIRED)
            } else if trimmed.chars().count() < MIN_MESSAGE_CHARS {
                Some(MESSAGE_TOO_SHORT)
            } else {
                None
            }
        }
    }
}
