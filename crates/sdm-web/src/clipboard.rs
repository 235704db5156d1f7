//! Clipboard access via the Web Clipboard API.

/// Write `text` to the system clipboard.
///
/// The write is not awaited by callers: a failed write (denied permission,
/// unsupported platform) is logged to the console and nothing else happens.
#[cfg(feature = "hydrate")]
pub fn write_text(text: &str) {
    use wasm_bindgen_futures::JsFuture;

    let Some(window) = web_sys::window() else {
        return;
    };
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            web_sys::console::error_1(&format!("clipboard write failed: {:?}", e).into());
        }
    });
}
