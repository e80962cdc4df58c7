//! Errors raised while wiring the overlay into the page
use pz3d_core::ConfigurationError;
use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("element #{0} is not an <img>")]
    NotAnImage(String),
    #[error("failed to register `{0}` listener")]
    Listener(&'static str),
    #[error(transparent)]
    Config(#[from] ConfigurationError),
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
