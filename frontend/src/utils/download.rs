//! Browser downloads for generated files.

pub const PDF_MIME: &str = "application/pdf";

/// Lower-cased, dash-separated file stem safe for the `download` attribute.
pub fn sanitize_file_stem(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut last_dash = true;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }
    let trimmed = out.trim_end_matches('-');
    if trimmed.is_empty() {
        "document".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(target_arch = "wasm32")]
pub fn trigger_download(filename: &str, mime: &str, bytes: &[u8]) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&array, &options)
        .map_err(|_| "Failed to create blob".to_string())?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Failed to create object URL".to_string())?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;
    let element = document
        .create_element("a")
        .map_err(|_| "Failed to create link".to_string())?;
    let a = element
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "Failed to cast anchor".to_string())?;
    a.set_href(&url);
    a.set_download(filename);
    a.style().set_property("display", "none").ok();
    document
        .body()
        .ok_or("No body")?
        .append_child(&a)
        .map_err(|_| "Append failed".to_string())?;
    a.click();
    a.remove();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn trigger_download(filename: &str, mime: &str, bytes: &[u8]) -> Result<(), String> {
    log::debug!("download {} ({}, {} bytes) skipped outside the browser", filename, mime, bytes.len());
    Ok(())
}
