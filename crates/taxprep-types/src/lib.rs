//! # taxprep-types
//!
//! Domain types for the taxprep API.
//! This crate contains pure data types and the canned catalogs; its only
//! dependencies are serde and chrono.

pub mod catalog;
pub mod document;
pub mod error;
pub mod license;

// Re-exports for convenience.
pub use catalog::{badges, certificates, Badge, Certificate};
pub use document::{certificate_document, MISSING_CERTIFICATE_ID, PDF_MEDIA_TYPE};
pub use error::{ErrorKind, TaxprepError};
pub use license::{
    verify_license, License, LicenseStatus, LicenseType, PendingLicense, PurchaseRequest,
    VerifiedLicense, VerifyRequest, DEFAULT_VALID_LICENSE_ID,
};
