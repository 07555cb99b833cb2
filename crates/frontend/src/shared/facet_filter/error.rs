use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while attaching a filter widget to the page.
///
/// Filtering itself never fails; these only surface from mounting and are
/// logged, never raised to the user.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("document is not available")]
    NoDocument,

    #[error("invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("failed to attach `{event}` listener: {message}")]
    Listener { event: String, message: String },

    #[error("invalid filter config: {0}")]
    Config(#[source] serde_json::Error),

    #[error("invalid posts data: {0}")]
    PostsData(#[source] serde_json::Error),

    #[error("mount point `#{0}` not found")]
    NoMountPoint(String),

    #[error("mount point `{0}` is not an HTML element")]
    NotHtmlElement(String),
}

/// Render a JS exception for log output
pub fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
