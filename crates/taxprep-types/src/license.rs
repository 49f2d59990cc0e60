//! License records, purchase orders and verification.

use std::fmt;
use std::num::NonZeroU64;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TaxprepError;

/// License id accepted by verification when nothing else is configured.
pub const DEFAULT_VALID_LICENSE_ID: &str = "valid-license";

/// Id assigned to every purchase order. Orders are never stored.
pub const PENDING_LICENSE_ID: u64 = 1;

const CURRENT_LICENSE_ID: &str = "license-001";
const CURRENT_ISSUED_AT: NaiveDate = date(2024, 1, 1);
const CURRENT_EXPIRES_AT: NaiveDate = date(2099, 12, 31);

/// Builds a calendar date at compile time.
pub(crate) const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(d) => d,
        None => panic!("invalid calendar date"),
    }
}

/// Tier of a purchasable license.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseType {
    Affiliate,
    Reseller,
    Enterprise,
}

impl LicenseType {
    /// Returns the wire name of the tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Affiliate => "affiliate",
            Self::Reseller => "reseller",
            Self::Enterprise => "enterprise",
        }
    }
}

impl fmt::Display for LicenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle label reported alongside a license.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseStatus {
    Active,
    Pending,
    Verified,
}

/// The license held by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    pub id: String,
    pub status: LicenseStatus,
    pub issued_at: NaiveDate,
    pub expires_at: NaiveDate,
}

impl License {
    /// The static license returned by `GET /licenses/current`.
    pub fn current() -> Self {
        Self {
            id: CURRENT_LICENSE_ID.to_string(),
            status: LicenseStatus::Active,
            issued_at: CURRENT_ISSUED_AT,
            expires_at: CURRENT_EXPIRES_AT,
        }
    }
}

/// Body of `POST /licenses/purchase`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub license_type: LicenseType,
    /// Seat count; zero is rejected during deserialization.
    #[serde(default)]
    pub seats: Option<NonZeroU64>,
}

/// A purchase order, built fresh per request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingLicense {
    pub id: u64,
    pub license_type: LicenseType,
    pub seats: Option<NonZeroU64>,
    pub status: LicenseStatus,
}

impl From<PurchaseRequest> for PendingLicense {
    fn from(req: PurchaseRequest) -> Self {
        Self {
            id: PENDING_LICENSE_ID,
            license_type: req.license_type,
            seats: req.seats,
            status: LicenseStatus::Pending,
        }
    }
}

/// Body of `POST /licenses/verify`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub license_id: String,
}

/// Result of a successful verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedLicense {
    pub id: String,
    pub status: LicenseStatus,
}

/// Checks `req.license_id` against the accepted id (case-sensitive).
///
/// # Errors
///
/// Returns a `Forbidden` error if the ids differ.
pub fn verify_license(
    req: VerifyRequest,
    expected: &str,
) -> Result<VerifiedLicense, TaxprepError> {
    if req.license_id != expected {
        return Err(TaxprepError::forbidden("License is not valid"));
    }
    Ok(VerifiedLicense {
        id: req.license_id,
        status: LicenseStatus::Verified,
    })
}
