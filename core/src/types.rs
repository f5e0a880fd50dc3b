//! Domain DTOs for the donation API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined
//! independently, so the client's wire shape never couples to Axum
//! internals. Integration tests catch any schema drift between the two
//! crates. `date` is a `NaiveDate`, which chrono serializes as the
//! `YYYY-MM-DD` string the backend's `<input type="date">` contract uses.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category of a donation, serialized lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationType {
    Money,
    Food,
    Clothing,
    Other,
}

impl fmt::Display for DonationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DonationType::Money => "money",
            DonationType::Food => "food",
            DonationType::Clothing => "clothing",
            DonationType::Other => "other",
        };
        f.write_str(s)
    }
}

impl FromStr for DonationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "money" => Ok(DonationType::Money),
            "food" => Ok(DonationType::Food),
            "clothing" => Ok(DonationType::Clothing),
            "other" => Ok(DonationType::Other),
            other => Err(format!(
                "unknown donation type {other:?}; expected money, food, clothing or other"
            )),
        }
    }
}

/// A single donation record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Donation {
    /// Server-assigned, immutable, unique across the collection.
    pub id: i64,
    pub donor_name: String,
    pub donation_type: DonationType,
    pub quantity_or_amount: u32,
    pub date: NaiveDate,
}

/// Write payload shared by create and update: every field except `id`.
///
/// Update is full-record replace, so the same shape serves both operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DonationPayload {
    pub donor_name: String,
    pub donation_type: DonationType,
    pub quantity_or_amount: u32,
    pub date: NaiveDate,
}
