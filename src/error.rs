//! Error types for the navigation widget

use thiserror::Error;

/// Failures at the edges of the widget (host messaging and payload decoding).
///
/// None of these reach the user; callers log them and fall back to an empty
/// tree or drop the outbound message.
#[derive(Error, Debug)]
pub enum NavError {
    #[error("No global `window` available")]
    NoWindow,

    #[error("Widget is not embedded in a parent frame")]
    NoParentFrame,

    #[error("postMessage to host failed: {0}")]
    PostMessage(String),

    #[error("Render payload could not be decoded: {0}")]
    Payload(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<serde_wasm_bindgen::Error> for NavError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        NavError::Payload(err.to_string())
    }
}

/// Result type for widget edge operations
pub type NavResult<T> = Result<T, NavError>;
