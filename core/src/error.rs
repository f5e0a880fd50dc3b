//! Error types for the donation API client.
//!
//! # Design
//! Every non-2xx response collapses into a single `Fetch` variant carrying a
//! static per-operation message ("Failed to list donations", ...). No detail
//! from the response body or status code is preserved — callers only learn
//! that the operation failed, which is all the view surfaces to the user.
//! Serde failures get their own variants because Rust forces them into the
//! open; they share the generic failure path at the view level.

use std::fmt;

/// Static failure message for the list operation.
pub const LIST_FAILED: &str = "Failed to list donations";
/// Static failure message for the create operation.
pub const CREATE_FAILED: &str = "Failed to create donation";
/// Static failure message for the update operation.
pub const UPDATE_FAILED: &str = "Failed to update donation";
/// Static failure message for the delete operation.
pub const DELETE_FAILED: &str = "Failed to delete donation";

/// Errors returned by `DonationClient` parse methods and `DonationsView`
/// mutations.
#[derive(Debug)]
pub enum ApiError {
    /// The operation failed: a non-2xx response, or the host's transport
    /// reported an error before a response arrived. Carries the static
    /// per-operation message.
    Fetch(&'static str),

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Fetch(msg) => write!(f, "{msg}"),
            ApiError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ApiError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
