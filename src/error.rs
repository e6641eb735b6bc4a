use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InteractionError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("DOM call failed: {0}")]
    Js(String),
    #[error("invalid options: {0}")]
    Config(String),
}

impl From<JsValue> for InteractionError {
    fn from(value: JsValue) -> Self {
        match value.as_string() {
            Some(message) => InteractionError::Js(message),
            None => InteractionError::Js(format!("{:?}", value)),
        }
    }
}

impl From<InteractionError> for JsValue {
    fn from(err: InteractionError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T, E = InteractionError> = std::result::Result<T, E>;
