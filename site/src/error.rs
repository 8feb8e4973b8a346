//! Error types for the site core.

use crate::form::FormKind;

/// Failures surfaced by configuration parsing and host-supplied identifiers.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unknown field `{field}` on {form} form")]
    UnknownField { form: FormKind, field: String },
}

/// Outcome of a failed external submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("submission rejected with status {status}")]
    Rejected { status: u16 },
    #[error("submission transport failed: {0}")]
    Transport(String),
}
