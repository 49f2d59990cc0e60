//! Certificate documents.
//!
//! Every certificate downloads as the same minimal PDF; only the
//! [`MISSING_CERTIFICATE_ID`] sentinel is reported as absent.

use crate::error::TaxprepError;

/// Media type of certificate downloads.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Certificate id that never resolves to a document.
pub const MISSING_CERTIFICATE_ID: &str = "missing";

/// Minimal PDF (empty page tree) served for every certificate.
pub const CERTIFICATE_PDF: &[u8] = b"%PDF-1.4\n\
1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n\
2 0 obj\n<< /Type /Pages /Kids [] /Count 0 >>\nendobj\n\
trailer\n<< /Root 1 0 R >>\n\
%%EOF\n";

/// Resolves the PDF for `certificate_id`.
///
/// # Errors
///
/// Returns a `NotFound` error for the missing-certificate sentinel.
pub fn certificate_document(certificate_id: &str) -> Result<&'static [u8], TaxprepError> {
    if certificate_id == MISSING_CERTIFICATE_ID {
        return Err(TaxprepError::not_found("Certificate not found")
            .with_context(format!("id: {certificate_id}")));
    }
    Ok(CERTIFICATE_PDF)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn any_id_resolves_to_same_pdf() {
        let a = certificate_document("123").expect("doc");
        let b = certificate_document("cert-001").expect("doc");
        assert_eq!(a, b);
        assert!(a.starts_with(b"%PDF"));
        assert!(a.ends_with(b"%%EOF\n"));
    }

    #[test]
    fn missing_sentinel_is_not_found() {
        let err = certificate_document("missing").unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[test]
    fn sentinel_match_is_exact() {
        assert!(certificate_document("Missing").is_ok());
        assert!(certificate_document("missing ").is_ok());
    }
}
