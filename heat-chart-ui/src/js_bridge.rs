//! Browser interop via `web-sys`.
//!
//! The temperature CSV is served next to the WASM bundle and fetched once at
//! startup.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Fetch a text resource relative to the page.
///
/// Network failures and non-2xx responses are returned as errors.
pub async fn fetch_text(url: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or("No browser window available")?;
    let request: js_sys::Promise = window.fetch_with_str(url);
    let response: Response = JsFuture::from(request)
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;

    if !response.ok() {
        return Err(format!(
            "HTTP {} {} while fetching {}",
            response.status(),
            response.status_text(),
            url
        ));
    }

    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let text = body
        .as_string()
        .ok_or_else(|| format!("Response from {} is not text", url))?;
    log::info!("js_bridge: fetched {} ({} bytes)", url, text.len());
    Ok(text)
}
