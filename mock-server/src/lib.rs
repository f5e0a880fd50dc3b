//! In-memory donation inventory backend used by integration tests.
//!
//! Implements the same REST contract as the production backend: integer ids
//! assigned from a counter, list ordered newest first (id descending),
//! 201 on create, full-record replace on PUT, 204 with an empty body on
//! delete, 404 for unknown ids.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DonationType {
    Money,
    Food,
    Clothing,
    Other,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Donation {
    pub id: i64,
    pub donor_name: String,
    pub donation_type: DonationType,
    pub quantity_or_amount: u32,
    pub date: NaiveDate,
}

/// Write payload for both create and replace. All fields required; a body
/// missing any of them is rejected by the JSON extractor.
#[derive(Deserialize)]
pub struct DonationPayload {
    pub donor_name: String,
    pub donation_type: DonationType,
    pub quantity_or_amount: u32,
    pub date: NaiveDate,
}

#[derive(Default)]
pub struct Store {
    next_id: i64,
    donations: BTreeMap<i64, Donation>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/health", get(health))
        .route("/api/donations", get(list_donations).post(create_donation))
        .route(
            "/api/donations/{id}",
            axum::routing::put(update_donation).delete(delete_donation),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "ok": true }))
}

/// Newest first: descending id order.
async fn list_donations(State(db): State<Db>) -> Json<Vec<Donation>> {
    let store = db.read().await;
    Json(store.donations.values().rev().cloned().collect())
}

async fn create_donation(
    State(db): State<Db>,
    Json(input): Json<DonationPayload>,
) -> (StatusCode, Json<Donation>) {
    let mut store = db.write().await;
    store.next_id += 1;
    let donation = Donation {
        id: store.next_id,
        donor_name: input.donor_name,
        donation_type: input.donation_type,
        quantity_or_amount: input.quantity_or_amount,
        date: input.date,
    };
    store.donations.insert(donation.id, donation.clone());
    (StatusCode::CREATED, Json(donation))
}

async fn update_donation(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<DonationPayload>,
) -> Result<Json<Donation>, StatusCode> {
    let mut store = db.write().await;
    let donation = store.donations.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    donation.donor_name = input.donor_name;
    donation.donation_type = input.donation_type;
    donation.quantity_or_amount = input.quantity_or_amount;
    donation.date = input.date;
    Ok(Json(donation.clone()))
}

async fn delete_donation(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .donations
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}
