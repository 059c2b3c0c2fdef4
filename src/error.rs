use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum FrontendError {
    #[error("browser window is unavailable")]
    MissingWindow,

    #[error("document is unavailable")]
    MissingDocument,

    #[error("missing #{0} mount point")]
    MissingMountPoint(String),

    #[error("canvas element is not mounted")]
    CanvasNotMounted,

    #[error("2d canvas context is unavailable")]
    CanvasContextUnavailable,

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for FrontendError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Js(message)
    }
}
