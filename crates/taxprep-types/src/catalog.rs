//! Fixed badge and certificate catalogs.
//!
//! Both catalogs are constant for the process lifetime and are returned
//! in insertion order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::license::date;

/// An achievement badge shown on a preparer profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// A certificate earned by the preparer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,
    pub name: String,
    pub issued_at: NaiveDate,
    pub expires_at: NaiveDate,
}

const BADGES: [(&str, &str, &str); 2] = [
    (
        "badge-001",
        "Certified Preparer",
        "Completed the annual tax preparer certification.",
    ),
    (
        "badge-002",
        "E-File Specialist",
        "Filed more than 100 returns electronically.",
    ),
];

const CERTIFICATES: [(&str, &str, NaiveDate, NaiveDate); 2] = [
    (
        "cert-001",
        "Annual Filing Season Program",
        date(2024, 1, 15),
        date(2024, 12, 31),
    ),
    (
        "cert-002",
        "Continuing Education Credits",
        date(2024, 3, 1),
        date(2025, 2, 28),
    ),
];

/// Returns the badge catalog.
pub fn badges() -> Vec<Badge> {
    BADGES
        .iter()
        .map(|(id, name, description)| Badge {
            id: (*id).to_string(),
            name: (*name).to_string(),
            description: (*description).to_string(),
        })
        .collect()
}

/// Returns the certificate catalog.
pub fn certificates() -> Vec<Certificate> {
    CERTIFICATES
        .iter()
        .map(|(id, name, issued_at, expires_at)| Certificate {
            id: (*id).to_string(),
            name: (*name).to_string(),
            issued_at: *issued_at,
            expires_at: *expires_at,
        })
        .collect()
}
