//! Host-side DOM errors.
//!
//! Element lookups return `Result<_, DomError>` instead of silently doing
//! nothing; the host logs each failure and moves on to the next action.

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("element not found: {0}")]
    Missing(String),
    #[error("element `{0}` is not a {1}")]
    WrongType(String, &'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
