//! Browser side effects: clipboard writes and file downloads.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these helpers for the copy and export actions. Failures are
//! returned to the caller, which logs them; they never surface to the user.
//! Outside the browser (SSR, native tests) every call reports `Unavailable`.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

/// Errors from browser APIs.
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    #[error("browser APIs are unavailable in this environment")]
    Unavailable,
    #[error("clipboard access is not supported")]
    NoClipboard,
    #[error("browser call failed: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for BrowserError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns an error when no window or clipboard is available, or when the
/// browser rejects the write (permission denied, insecure context).
pub async fn write_clipboard(text: &str) -> Result<(), BrowserError> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or(BrowserError::Unavailable)?;
        let clipboard = window.navigator().clipboard().ok_or(BrowserError::NoClipboard)?;
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text)).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err(BrowserError::Unavailable)
    }
}

/// Offer `contents` to the user as a downloaded file named `filename`.
///
/// # Errors
///
/// Returns an error when the document is unavailable or a DOM call fails.
pub fn save_text(filename: &str, mime: &str, contents: &str) -> Result<(), BrowserError> {
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(BrowserError::Unavailable)?;

        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(contents));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)?;

        let anchor = document
            .create_element("a")?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| BrowserError::Js("anchor element cast failed".to_owned()))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();

        // Revoking in the same tick can cancel the download in some browsers.
        gloo_timers::callback::Timeout::new(0, move || {
            let _ = web_sys::Url::revoke_object_url(&url);
        })
        .forget();
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, mime, contents);
        Err(BrowserError::Unavailable)
    }
}
