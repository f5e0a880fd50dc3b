//! View/controller state for the donation inventory frontend.
//!
//! # Design
//! `DonationsView` mirrors the frontend component's local state: the fetched
//! donation list, the edit/create form, and the loading/error flags. It
//! never touches the network directly — every operation goes through the
//! `Transport` seam, so the host decides how requests are executed and tests
//! can inject canned responses.
//!
//! Failure handling is deliberately asymmetric, matching the contract this
//! component reimplements: `refresh` catches any failure and surfaces it as
//! the `error` string, while `submit` and `delete` return their failure to
//! the caller and leave the form state untouched (in the original frontend
//! these were unhandled promise rejections). Callers own the decision of
//! what to do with a failed mutation.

use std::io;

use chrono::NaiveDate;

use crate::client::DonationClient;
use crate::error::{ApiError, CREATE_FAILED, DELETE_FAILED, LIST_FAILED, UPDATE_FAILED};
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Donation, DonationPayload, DonationType};

/// Executes one HTTP round-trip on behalf of the core.
///
/// An `Err` means the transport itself failed (connection refused, timeout);
/// non-2xx responses must be returned as `Ok` data so the client's status
/// handling applies.
pub trait Transport {
    fn execute(&mut self, request: HttpRequest) -> io::Result<HttpResponse>;
}

impl<F> Transport for F
where
    F: FnMut(HttpRequest) -> io::Result<HttpResponse>,
{
    fn execute(&mut self, request: HttpRequest) -> io::Result<HttpResponse> {
        self(request)
    }
}

/// Draft values of the donation form, one field per widget.
///
/// `quantity_or_amount` stays a string here because that is what a number
/// widget holds; `submit` coerces it. `date` is already a date because the
/// date widget cannot produce anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonationForm {
    pub donor_name: String,
    pub donation_type: DonationType,
    pub quantity_or_amount: String,
    pub date: NaiveDate,
}

impl DonationForm {
    /// The form's default state: empty donor, type money, quantity 1,
    /// date set to the caller's notion of today.
    pub fn empty(today: NaiveDate) -> Self {
        Self {
            donor_name: String::new(),
            donation_type: DonationType::Money,
            quantity_or_amount: "1".to_string(),
            date: today,
        }
    }

    fn seeded_from(donation: &Donation) -> Self {
        Self {
            donor_name: donation.donor_name.clone(),
            donation_type: donation.donation_type,
            quantity_or_amount: donation.quantity_or_amount.to_string(),
            date: donation.date,
        }
    }

    /// Build the write payload: trim the donor name, coerce the quantity.
    ///
    /// The number widget keeps the quantity field numeric in practice; a
    /// value that still fails to parse means the payload cannot be formed.
    fn to_payload(&self) -> Result<DonationPayload, ApiError> {
        let quantity = self
            .quantity_or_amount
            .trim()
            .parse::<u32>()
            .map_err(|e| ApiError::Serialization(format!("quantity_or_amount: {e}")))?;
        Ok(DonationPayload {
            donor_name: self.donor_name.trim().to_string(),
            donation_type: self.donation_type,
            quantity_or_amount: quantity,
            date: self.date,
        })
    }
}

/// In-memory state of the donation list view.
///
/// The donation list is only ever replaced wholesale by `refresh`; mutations
/// never patch it locally, so what is displayed is always the server's state
/// as of the last successful refresh.
#[derive(Debug)]
pub struct DonationsView {
    client: DonationClient,
    pub donations: Vec<Donation>,
    pub editing: Option<Donation>,
    pub form: DonationForm,
    pub loading: bool,
    pub error: Option<String>,
}

impl DonationsView {
    pub fn new(client: DonationClient, today: NaiveDate) -> Self {
        Self {
            client,
            donations: Vec::new(),
            editing: None,
            form: DonationForm::empty(today),
            loading: false,
            error: None,
        }
    }

    /// Re-fetch the full donation list from the server.
    ///
    /// On failure the previous list is kept and `error` is set to the
    /// failure message; `loading` is cleared regardless of outcome.
    pub fn refresh<T: Transport>(&mut self, transport: &mut T) {
        self.loading = true;
        self.error = None;
        match self.fetch_list(transport) {
            Ok(donations) => self.donations = donations,
            Err(err) => self.error = Some(err.to_string()),
        }
        self.loading = false;
    }

    fn fetch_list<T: Transport>(&self, transport: &mut T) -> Result<Vec<Donation>, ApiError> {
        let request = self.client.build_list_donations();
        let response = transport
            .execute(request)
            .map_err(|_| ApiError::Fetch(LIST_FAILED))?;
        self.client.parse_list_donations(response)
    }

    /// Enter edit mode for `donation`, seeding the form with its fields.
    pub fn start_edit(&mut self, donation: &Donation) {
        self.editing = Some(donation.clone());
        self.form = DonationForm::seeded_from(donation);
    }

    /// Leave edit mode and reset the form to its defaults.
    pub fn cancel_edit(&mut self, today: NaiveDate) {
        self.editing = None;
        self.form = DonationForm::empty(today);
    }

    /// Submit the form: update the donation being edited, or create a new
    /// one. On success the form resets and the list refreshes; on failure
    /// the error is returned to the caller and the form (including edit
    /// mode) is left exactly as it was.
    pub fn submit<T: Transport>(
        &mut self,
        transport: &mut T,
        today: NaiveDate,
    ) -> Result<(), ApiError> {
        let payload = self.form.to_payload()?;
        match &self.editing {
            Some(donation) => {
                let request = self.client.build_update_donation(donation.id, &payload)?;
                let response = transport
                    .execute(request)
                    .map_err(|_| ApiError::Fetch(UPDATE_FAILED))?;
                self.client.parse_update_donation(response)?;
            }
            None => {
                let request = self.client.build_create_donation(&payload)?;
                let response = transport
                    .execute(request)
                    .map_err(|_| ApiError::Fetch(CREATE_FAILED))?;
                self.client.parse_create_donation(response)?;
            }
        }
        self.cancel_edit(today);
        self.refresh(transport);
        Ok(())
    }

    /// Delete the donation with `id`, then refresh the list. Failure is
    /// returned to the caller; the refresh is skipped in that case.
    pub fn delete<T: Transport>(&mut self, transport: &mut T, id: i64) -> Result<(), ApiError> {
        let request = self.client.build_delete_donation(id);
        let response = transport
            .execute(request)
            .map_err(|_| ApiError::Fetch(DELETE_FAILED))?;
        self.client.parse_delete_donation(response)?;
        self.refresh(transport);
        Ok(())
    }
}
