//! Stateless HTTP request builder and response parser for the donation API.
//!
//! # Design
//! `DonationClient` holds only a `base_url` and carries no mutable state
//! between calls. Each CRUD operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The host executes the actual HTTP round-trip, keeping the
//! core deterministic and free of I/O dependencies.
//!
//! Any non-2xx response parses to `ApiError::Fetch` with a static
//! per-operation message; nothing from the response body survives into the
//! error.

use crate::error::{ApiError, CREATE_FAILED, DELETE_FAILED, LIST_FAILED, UPDATE_FAILED};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Donation, DonationPayload};

/// Synchronous, stateless client for the donation API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The host is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct DonationClient {
    base_url: String,
}

impl DonationClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_donations(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/api/donations", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_donation(&self, payload: &DonationPayload) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/api/donations", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_update_donation(&self, id: i64, payload: &DonationPayload) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/api/donations/{id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_donation(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/api/donations/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_donations(&self, response: HttpResponse) -> Result<Vec<Donation>, ApiError> {
        check_success(&response, LIST_FAILED)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_create_donation(&self, response: HttpResponse) -> Result<Donation, ApiError> {
        check_success(&response, CREATE_FAILED)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    pub fn parse_update_donation(&self, response: HttpResponse) -> Result<Donation, ApiError> {
        check_success(&response, UPDATE_FAILED)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Delete has no body to parse; success is any 2xx status.
    pub fn parse_delete_donation(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_success(&response, DELETE_FAILED)
    }
}

/// Collapse any non-2xx status into `Fetch` with the operation's message.
fn check_success(response: &HttpResponse, failure: &'static str) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Fetch(failure))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::types::DonationType;

    fn client() -> DonationClient {
        DonationClient::new("http://localhost:8000")
    }

    fn payload() -> DonationPayload {
        DonationPayload {
            donor_name: "Alice".to_string(),
            donation_type: DonationType::Food,
            quantity_or_amount: 3,
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        }
    }

    #[test]
    fn build_list_donations_produces_correct_request() {
        let req = client().build_list_donations();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8000/api/donations");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_donation_produces_correct_request() {
        let req = client().build_create_donation(&payload()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8000/api/donations");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["donor_name"], "Alice");
        assert_eq!(body["donation_type"], "food");
        assert_eq!(body["quantity_or_amount"], 3);
        assert_eq!(body["date"], "2024-05-01");
        assert!(body.get("id").is_none());
    }

    #[test]
    fn build_update_donation_produces_correct_request() {
        let req = client().build_update_donation(12, &payload()).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:8000/api/donations/12");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["donor_name"], "Alice");
        assert!(body.get("id").is_none());
    }

    #[test]
    fn build_delete_donation_produces_correct_request() {
        let req = client().build_delete_donation(5);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:8000/api/donations/5");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_donations_success() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"[{"id":1,"donor_name":"Alice","donation_type":"food","quantity_or_amount":3,"date":"2024-05-01"}]"#.to_string(),
        };
        let donations = client().parse_list_donations(response).unwrap();
        assert_eq!(donations.len(), 1);
        assert_eq!(donations[0].id, 1);
        assert_eq!(donations[0].donor_name, "Alice");
    }

    #[test]
    fn parse_list_donations_empty_collection() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "[]".to_string(),
        };
        let donations = client().parse_list_donations(response).unwrap();
        assert!(donations.is_empty());
    }

    #[test]
    fn parse_list_donations_failure_uses_static_message() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: "internal error".to_string(),
        };
        let err = client().parse_list_donations(response).unwrap_err();
        assert!(matches!(err, ApiError::Fetch("Failed to list donations")));
    }

    #[test]
    fn parse_create_donation_accepts_201() {
        let response = HttpResponse {
            status: 201,
            headers: Vec::new(),
            body: r#"{"id":9,"donor_name":"Alice","donation_type":"food","quantity_or_amount":3,"date":"2024-05-01"}"#.to_string(),
        };
        let donation = client().parse_create_donation(response).unwrap();
        assert_eq!(donation.id, 9);
    }

    #[test]
    fn parse_create_donation_failure_uses_static_message() {
        let response = HttpResponse {
            status: 400,
            headers: Vec::new(),
            body: r#"{"description":"donor_name must be a non-empty string"}"#.to_string(),
        };
        let err = client().parse_create_donation(response).unwrap_err();
        // The body's detail is discarded; only the static message survives.
        assert!(matches!(err, ApiError::Fetch("Failed to create donation")));
    }

    #[test]
    fn parse_update_donation_success() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"id":12,"donor_name":"Bob","donation_type":"money","quantity_or_amount":50,"date":"2024-06-15"}"#.to_string(),
        };
        let donation = client().parse_update_donation(response).unwrap();
        assert_eq!(donation.donor_name, "Bob");
        assert_eq!(donation.quantity_or_amount, 50);
    }

    #[test]
    fn parse_update_donation_not_found_is_generic_failure() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: String::new(),
        };
        let err = client().parse_update_donation(response).unwrap_err();
        assert!(matches!(err, ApiError::Fetch("Failed to update donation")));
    }

    #[test]
    fn parse_delete_donation_accepts_204_empty_body() {
        let response = HttpResponse {
            status: 204,
            headers: Vec::new(),
            body: String::new(),
        };
        assert!(client().parse_delete_donation(response).is_ok());
    }

    #[test]
    fn parse_delete_donation_failure_uses_static_message() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: String::new(),
        };
        let err = client().parse_delete_donation(response).unwrap_err();
        assert!(matches!(err, ApiError::Fetch("Failed to delete donation")));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = DonationClient::new("http://localhost:8000/");
        let req = client.build_list_donations();
        assert_eq!(req.path, "http://localhost:8000/api/donations");
    }

    #[test]
    fn parse_list_donations_bad_json() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "not json".to_string(),
        };
        let err = client().parse_list_donations(response).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
