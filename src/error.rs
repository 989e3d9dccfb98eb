use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum TravelMapError {
    #[error("failed to parse location dataset: {0}")]
    Dataset(#[from] serde_json::Error),

    #[error("javascript error: {0}")]
    Js(String),

    #[error("no global window/document available")]
    MissingDocument,
}

impl From<JsValue> for TravelMapError {
    fn from(value: JsValue) -> Self {
        TravelMapError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

pub type Result<T> = std::result::Result<T, TravelMapError>;
