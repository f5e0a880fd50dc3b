//! Synchronous client core for the donation inventory service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), plus the view/controller
//! state machine that drives the four CRUD operations and renders the
//! donation table.
//!
//! # Design
//! - `DonationClient` is stateless — it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `DonationsView` owns the list, the edit/create form, and the
//!   loading/error flags; it reaches the network only through the
//!   `Transport` trait, so tests can feed it canned responses.
//! - The displayed list is never patched locally: every mutation is
//!   followed by a full re-fetch, so the view always shows the server's
//!   state as of the last refresh.

pub mod client;
pub mod error;
pub mod http;
pub mod render;
pub mod types;
pub mod view;

pub use client::DonationClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use render::render_table;
pub use types::{Donation, DonationPayload, DonationType};
pub use view::{DonationForm, DonationsView, Transport};
