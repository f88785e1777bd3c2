/// Error type shared by the storefront controllers
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UiError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("no element matches `{0}`")]
    MissingElement(String),

    #[error("no category section for key {0:?}")]
    NoMatchingSection(String),

    #[error("failed to read file: {0}")]
    Decode(String),

    #[error("invalid config: {0}")]
    Config(String),

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Js(describe(&value))
    }
}

impl From<UiError> for JsValue {
    fn from(error: UiError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}

/// Readable text for a thrown JS value
pub fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
