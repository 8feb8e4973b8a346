//! Declarative field rules for the booking and contact forms.
//!
//! Rules are evaluated in declaration order and each field reports at most one
//! error: an empty (trimmed) value fails as "required" before the email shape
//! is ever checked. The same rules run in the browser and on the server's
//! submission endpoint.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::INVALID_EMAIL_MESSAGE;

/// Raw field values keyed by input id, as read from the form.
pub type FieldValues = BTreeMap<String, String>;

/// Which form a value, error or banner belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Booking,
    Contact,
}

impl FormKind {
    pub const ALL: [Self; 2] = [Self::Booking, Self::Contact];

    /// Type tag handed to the submission collaborator.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Booking => "booking",
            Self::Contact => "contact",
        }
    }

    /// Ordered rules for this form.
    #[must_use]
    pub fn fields(self) -> &'static [FieldRule] {
        match self {
            Self::Booking => BOOKING_FIELDS,
            Self::Contact => CONTACT_FIELDS,
        }
    }

    /// Rule for the input with `id`, if this form declares one.
    #[must_use]
    pub fn field(self, id: &str) -> Option<&'static FieldRule> {
        self.fields().iter().find(|rule| rule.id == id)
    }

    /// Banner text shown after a successful submission.
    #[must_use]
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Booking => {
                "Thank you! Your consultation request has been submitted. We'll contact you within 24 hours."
            }
            Self::Contact => "Thank you for your message! We'll get back to you as soon as possible.",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a single field is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required,
    RequiredEmail,
}

/// One `(field id, label, rule)` declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub id: &'static str,
    pub label: &'static str,
    pub rule: Rule,
}

pub const BOOKING_FIELDS: &[FieldRule] = &[
    FieldRule { id: "fullName", label: "Full Name", rule: Rule::Required },
    FieldRule { id: "email", label: "Email Address", rule: Rule::RequiredEmail },
];

pub const CONTACT_FIELDS: &[FieldRule] = &[
    FieldRule { id: "contactName", label: "Name", rule: Rule::Required },
    FieldRule { id: "contactEmail", label: "Email", rule: Rule::RequiredEmail },
    FieldRule { id: "message", label: "Message", rule: Rule::Required },
];

/// A failed rule, ready to be rendered next to its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldRule {
    /// Check one raw value against this rule.
    ///
    /// # Errors
    ///
    /// Returns the field's error when the trimmed value is empty, or when an
    /// email field does not have the `local@domain.tld` shape.
    pub fn check(&self, raw: &str) -> Result<(), FieldError> {
        let value = trim_blank(raw);
        if value.is_empty() {
            return Err(FieldError { field: self.id, message: format!("{} is required", self.label) });
        }
        if self.rule == Rule::RequiredEmail && !is_valid_email(value) {
            return Err(FieldError { field: self.id, message: INVALID_EMAIL_MESSAGE.to_owned() });
        }
        Ok(())
    }
}

/// Whitespace as browsers define it for `trim()` and `\s`: Unicode
/// whitespace plus the byte order mark.
#[must_use]
pub fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

#[must_use]
pub fn trim_blank(value: &str) -> &str {
    value.trim_matches(is_blank)
}

/// Simple `local@domain.tld` shape check.
///
/// No whitespace anywhere, exactly one `@` with text on both sides, and a `.`
/// inside the domain with text on both sides of it. Not RFC 5322.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(is_blank) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Data handed to the submission collaborator once every rule passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(rename = "type")]
    pub kind: FormKind,
    pub fields: BTreeMap<String, String>,
}

/// Evaluate every rule of `kind` in order against `values`.
///
/// Missing keys count as empty. On success the submission carries every
/// supplied value trimmed, not only the ruled fields.
///
/// # Errors
///
/// Returns all failing fields, in rule order.
pub fn validate(kind: FormKind, values: &FieldValues) -> Result<Submission, Vec<FieldError>> {
    let errors: Vec<FieldError> = kind
        .fields()
        .iter()
        .filter_map(|rule| {
            let raw = values.get(rule.id).map_or("", String::as_str);
            rule.check(raw).err()
        })
        .collect();
    if !errors.is_empty() {
        return Err(errors);
    }
    let fields = values
        .iter()
        .map(|(id, value)| (id.clone(), trim_blank(value).to_owned()))
        .collect();
    Ok(Submission { kind, fields })
}
