//! Signature image uploads, stored by the API as base64 data URLs.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::api::ApiError;

pub const MAX_SIGNATURE_BYTES: usize = 2 * 1024 * 1024;
pub const SIGNATURE_MIME_TYPES: &[&str] = &["image/png", "image/jpeg"];

pub fn validate_signature(mime: &str, size: usize) -> Result<(), ApiError> {
    if !SIGNATURE_MIME_TYPES.contains(&mime) {
        return Err(ApiError::validation("Signature must be a PNG or JPEG image."));
    }
    if size == 0 {
        return Err(ApiError::validation("Signature file is empty."));
    }
    if size > MAX_SIGNATURE_BYTES {
        return Err(ApiError::validation("Signature must be 2 MB or smaller."));
    }
    Ok(())
}

pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Splits a `data:<mime>;base64,<payload>` URL. Bare base64 is accepted with an unknown mime.
pub fn decode_data_url(raw: &str) -> Option<(Option<String>, Vec<u8>)> {
    let raw = raw.trim();
    let (mime, payload) = match raw.strip_prefix("data:") {
        Some(rest) => {
            let (header, payload) = rest.split_once(',')?;
            let mime = header.strip_suffix(";base64")?;
            (Some(mime.to_string()).filter(|m| !m.is_empty()), payload)
        }
        None => (None, raw),
    };
    STANDARD.decode(payload.trim()).ok().map(|bytes| (mime, bytes))
}

#[cfg(target_arch = "wasm32")]
pub async fn read_signature_file(file: web_sys::File) -> Result<String, ApiError> {
    let mime = file.type_();
    validate_signature(&mime, file.size() as usize)?;
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| ApiError::unknown("Failed to read the selected file."))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(to_data_url(&mime, &bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_signature_checks_type_and_size() {
        assert!(validate_signature("image/png", 1024).is_ok());
        assert!(validate_signature("image/gif", 1024).is_err());
        assert!(validate_signature("image/jpeg", MAX_SIGNATURE_BYTES + 1).is_err());
        assert!(validate_signature("image/jpeg", 0).is_err());
    }

    #[test]
    fn data_url_decodes_back_to_bytes() {
        let url = to_data_url("image/png", &[1, 2, 3]);
        assert!(url.starts_with("data:image/png;base64,"));
        let (mime, bytes) = decode_data_url(&url).unwrap();
        assert_eq!(mime.as_deref(), Some("image/png"));
        assert_eq!(bytes, vec![1, 2, 3]);
    }

    #[test]
    fn bare_base64_and_garbage() {
        let (mime, bytes) = decode_data_url("AQID").unwrap();
        assert!(mime.is_none());
        assert_eq!(bytes, vec![1, 2, 3]);
        assert!(decode_data_url("data:image/png,plain").is_none());
        assert!(decode_data_url("***").is_none());
    }
}
