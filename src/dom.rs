//! Thin fallible wrappers over the browser APIs the site touches.
//!
//! Callers in the UI log the error and carry on; none of these failures
//! should take the page down.

use crate::scroll::ScrollMetrics;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomError {
    #[error("window is not available")]
    WindowUnavailable,
    #[error("document element is not available")]
    DocumentUnavailable,
    #[error("browser history is not available")]
    HistoryUnavailable,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

fn window() -> Result<web_sys::Window, DomError> {
    web_sys::window().ok_or(DomError::WindowUnavailable)
}

/// Step back one entry in the browser history.
///
/// This is not router-aware: with no earlier entry inside the site the
/// browser leaves it.
pub fn go_back() -> Result<(), DomError> {
    let history = window()?
        .history()
        .map_err(|_| DomError::HistoryUnavailable)?;
    history.back()?;
    Ok(())
}

/// Current URL fragment, including the leading `#` when present
pub fn current_hash() -> Result<String, DomError> {
    Ok(window()?.location().hash()?)
}

/// Set the URL fragment, pushing a history entry.
pub fn set_hash(hash: &str) -> Result<(), DomError> {
    window()?.location().set_hash(hash)?;
    Ok(())
}

/// Swap the URL fragment in place without a new history entry.
pub fn replace_hash(hash: &str) -> Result<(), DomError> {
    let location = window()?.location();
    let href = location.href()?;
    let base = href.split('#').next().unwrap_or_default();
    location.replace(&format!("{}{}", base, hash))?;
    Ok(())
}

pub fn scroll_to_top() -> Result<(), DomError> {
    window()?.scroll_to_with_x_and_y(0.0, 0.0);
    Ok(())
}

pub fn scroll_metrics() -> Result<ScrollMetrics, DomError> {
    let window = window()?;
    let scroll_y = window.scroll_y()?;
    let viewport_height = window.inner_height()?.as_f64().unwrap_or(0.0);
    let root = window
        .document()
        .and_then(|doc| doc.document_element())
        .ok_or(DomError::DocumentUnavailable)?;

    Ok(ScrollMetrics {
        scroll_y,
        scroll_height: root.scroll_height() as f64,
        viewport_height,
    })
}
