use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SiteError {
    #[error("no drawable surface for the canvas")]
    SurfaceUnavailable,

    #[error("browser call failed: {0}")]
    Dom(String),

    #[error("invalid site content: {0}")]
    InvalidContent(String),

    #[error("malformed site content: {0}")]
    Json(String),
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        SiteError::Json(err.to_string())
    }
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
