//! Hand downloaded bytes to the user as a file.

/// Offer `bytes` as a browser download named `filename`.
///
/// Builds a blob, points a temporary anchor at its object URL, clicks it,
/// and revokes the URL. Failures are silent; there is nothing useful the
/// caller can do about a blocked download.
#[cfg(feature = "csr")]
pub fn save_bytes(filename: &str, bytes: &[u8]) {
    use wasm_bindgen::JsCast;

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes).into());
    let Ok(blob) = web_sys::Blob::new_with_u8_array_sequence(&parts) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };

    if let Ok(el) = doc.create_element("a") {
        if let Ok(anchor) = el.dyn_into::<web_sys::HtmlAnchorElement>() {
            anchor.set_href(&url);
            anchor.set_download(filename);
            anchor.click();
        }
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}

#[cfg(not(feature = "csr"))]
pub fn save_bytes(filename: &str, bytes: &[u8]) {
    let _ = (filename, bytes);
}
