use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const MESSAGE_MIN_LENGTH: usize = 10;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

pub const CONTACT_FIELDS: [FieldSpec; 4] = [
    FieldSpec { name: "name", label: "Your Name", kind: FieldKind::Text, required: true },
    FieldSpec { name: "email", label: "Email Address", kind: FieldKind::Email, required: true },
    FieldSpec { name: "subject", label: "Subject", kind: FieldKind::Text, required: false },
    FieldSpec { name: "message", label: "Message", kind: FieldKind::TextArea, required: true },
];

/// Messages are shown to the visitor verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(String),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Message must be at least {min} characters long")]
    MessageTooShort { min: usize },
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn validate_field(field: &FieldSpec, raw: &str) -> Result<(), FieldError> {
    let value = raw.trim();

    // Leaving any field empty is flagged; `ContactDraft::validate` only
    // consults required fields.
    if value.is_empty() {
        return Err(FieldError::Required(capitalize(field.name)));
    }
    if field.kind == FieldKind::Email && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    if field.name == "message" && value.chars().count() < MESSAGE_MIN_LENGTH {
        return Err(FieldError::MessageTooShort { min: MESSAGE_MIN_LENGTH });
    }
    Ok(())
}

/// Current values of the contact form, keyed by field name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactDraft {
    values: BTreeMap<&'static str, String>,
}

impl ContactDraft {
    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: &'static str, value: String) {
        self.values.insert(field, value);
    }

    /// Errors for every required field, keyed by field name. Empty when the
    /// draft can be sent.
    pub fn validate(&self) -> BTreeMap<&'static str, FieldError> {
        CONTACT_FIELDS
            .iter()
            .filter(|field| field.required)
            .filter_map(|field| {
                validate_field(field, self.value(field.name))
                    .err()
                    .map(|err| (field.name, err))
            })
            .collect()
    }
}
