//! Printable PDF copies of approved requests, generated in the browser.

mod forms;
pub mod image;
pub mod sheet;

use thiserror::Error;

use crate::api::{ApiError, HeadPosition, RequestRecord, RequestStatus};
use crate::utils::{download::sanitize_file_stem, file::decode_data_url};

use self::forms::Signer;
use self::image::SignatureImage;
use self::sheet::Sheet;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExportError {
    #[error("{0} is not approved yet")]
    NotApproved(String),
    #[error("unsupported signature image: {0}")]
    UnsupportedImage(&'static str),
    #[error("signature image could not be decoded: {0}")]
    ImageDecode(String),
    #[error("download failed: {0}")]
    Download(String),
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::NotApproved(_) => ApiError::validation(err.to_string()),
            _ => ApiError::unknown(err.to_string()),
        }
    }
}

/// Decodes the signatory's stored signature. A missing or unusable image only
/// drops the picture from the document.
fn signature_image(signer: Option<&HeadPosition>) -> Option<SignatureImage> {
    let raw = signer?.signature.as_deref()?;
    let (_, bytes) = decode_data_url(raw)?;
    match image::parse(bytes) {
        Ok(image) => Some(image),
        Err(err) => {
            log::warn!("signature of head position {:?} skipped: {}", signer.map(|h| h.id), err);
            None
        }
    }
}

/// Renders the form for an approved record. Output depends only on the inputs.
pub fn render(record: &RequestRecord, signer: Option<&HeadPosition>) -> Result<Vec<u8>, ExportError> {
    if record.status() != Some(RequestStatus::Approved) {
        return Err(ExportError::NotApproved(record.key()));
    }
    let image = signature_image(signer);
    let mut sheet = Sheet::new();
    forms::draw(
        &mut sheet,
        record,
        &Signer {
            head: signer,
            image: image.as_ref(),
        },
    );
    let title = format!("{} {}", record.kind().label(), record.key());
    Ok(sheet.finish(&title, image.as_ref()))
}

pub fn file_name(record: &RequestRecord) -> String {
    let requester = record.requester_names().first().cloned().unwrap_or_default();
    format!("{}.pdf", sanitize_file_stem(&format!("{} {}", record.key(), requester)))
}

/// Renders and hands the file to the browser.
pub fn export_record(record: &RequestRecord, signer: Option<&HeadPosition>) -> Result<String, ExportError> {
    let bytes = render(record, signer)?;
    let name = file_name(record);
    crate::utils::download::trigger_download(&name, crate::utils::download::PDF_MIME, &bytes)
        .map_err(ExportError::Download)?;
    log::info!("exported {} ({} bytes)", name, bytes.len());
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::records::fixtures::{official_business, pass_slip, travel_order};
    use crate::api::EmployeeRef;
    use crate::pages::requests::dispatch::fixtures::head;
    use crate::api::HeadPositionKind;
    use crate::utils::file::to_data_url;

    fn contains(bytes: &[u8], needle: &str) -> bool {
        bytes
            .windows(needle.len())
            .any(|window| window == needle.as_bytes())
    }

    #[test]
    fn travel_order_text_layer_has_literal_values() {
        let bytes = render(&travel_order(1, "approved"), None).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(contains(&bytes, "(Lapasan)"));
        assert!(contains(&bytes, "(Juan Dela Cruz)"));
        assert!(contains(&bytes, "(TRAVEL ORDER)"));
        assert!(contains(&bytes, "(MOOE)"));
    }

    #[test]
    fn each_kind_uses_its_own_form() {
        let ob = render(&official_business(3, "approved"), None).unwrap();
        assert!(contains(&ob, "(AUTHORITY FOR OFFICIAL BUSINESS)"));
        assert!(contains(&ob, "(Place:)"));

        let ps = render(&pass_slip(4, "approved"), None).unwrap();
        assert!(contains(&ps, "(PASS SLIP)"));
        assert!(contains(&ps, "(Bank)"));
        assert!(contains(&ps, "(Time out)"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let record = travel_order(1, "approved");
        assert_eq!(render(&record, None).unwrap(), render(&record, None).unwrap());
    }

    #[test]
    fn refuses_records_that_are_not_approved() {
        let err = render(&travel_order(1, "pendingAdmin"), None).unwrap_err();
        assert_eq!(err, ExportError::NotApproved("TO-1".into()));
        assert!(ApiError::from(err).is_validation());
    }

    #[test]
    fn embeds_jpeg_signature_and_signatory_name() {
        let mut director = head(1, HeadPositionKind::RegionalDirector, None);
        director.name = "Dir. Reyes".into();
        director.signature = Some(to_data_url("image/jpeg", &image::samples::jpeg()));
        let bytes = render(&travel_order(1, "approved"), Some(&director)).unwrap();
        assert!(contains(&bytes, "/DCTDecode"));
        assert!(contains(&bytes, "(DIR. REYES)"));
    }

    #[test]
    fn transparent_png_signature_is_embedded_with_a_mask() {
        let mut director = head(1, HeadPositionKind::RegionalDirector, None);
        director.signature = Some(to_data_url("image/png", &image::samples::png_rgba()));
        let bytes = render(&travel_order(1, "approved"), Some(&director)).unwrap();
        assert!(contains(&bytes, "/FlateDecode"));
        assert!(contains(&bytes, "/SMask 7 0 R"));
        assert!(contains(&bytes, "/Sig Do"));
    }

    #[test]
    fn palette_png_signature_is_embedded() {
        let mut director = head(1, HeadPositionKind::RegionalDirector, None);
        director.signature = Some(to_data_url("image/png", &image::samples::png_palette()));
        let bytes = render(&travel_order(1, "approved"), Some(&director)).unwrap();
        assert!(contains(&bytes, "/Sig Do"));
        assert!(!contains(&bytes, "/SMask"));
    }

    #[test]
    fn unusable_signature_is_left_out() {
        let mut director = head(1, HeadPositionKind::RegionalDirector, None);
        director.signature = Some(to_data_url("image/png", b"\x89PNG broken"));
        let bytes = render(&travel_order(1, "approved"), Some(&director)).unwrap();
        assert!(!contains(&bytes, "/Sig"));
    }

    #[test]
    fn long_personnel_lists_continue_on_another_page() {
        let mut record = travel_order(1, "approved");
        if let RequestRecord::TravelOrder(order) = &mut record {
            order.employees = (0..40)
                .map(|i| EmployeeRef {
                    id: i,
                    name: format!("Employee {}", i),
                    position: None,
                })
                .collect();
        }
        let bytes = render(&record, None).unwrap();
        assert!(contains(&bytes, "/Count 2"));
        assert!(contains(&bytes, "(Employee 39)"));
    }

    #[test]
    fn file_name_uses_key_and_first_requester() {
        assert_eq!(file_name(&pass_slip(4, "approved")), "ps-4-pedro-lim.pdf");
    }
}
