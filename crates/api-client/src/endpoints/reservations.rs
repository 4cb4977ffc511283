//! Table reservations
//!
//! Submissions go to a form web app as a URL-encoded POST. The app replies
//! with `{"ok": true}` on success or `{"ok": false, "error": "..."}`.

use crate::client::CafeClient;
use crate::error::{ApiError, ApiResult, FieldError};
use chrono::{Local, NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::fmt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

/// Party size the form starts with.
pub const DEFAULT_GUESTS: u32 = 2;

/// A table reservation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Guest name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Day of the visit
    pub date: Option<NaiveDate>,
    /// Arrival time, `HH:MM`
    pub time: String,
    /// Party size
    pub guests: u32,
    /// Free-text requests
    #[serde(default)]
    pub special_requests: String,
}

impl Default for Reservation {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            date: None,
            time: String::new(),
            guests: DEFAULT_GUESTS,
            special_requests: String::new(),
        }
    }
}

impl Reservation {
    /// Problems with the form as of `today`, one per field at most.
    pub fn field_errors(&self, today: NaiveDate, max_guests: u32) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "Name is required"));
        }

        if self.email.trim().is_empty() {
            errors.push(FieldError::new("email", "Email is required"));
        } else if !EMAIL.is_match(&self.email) {
            errors.push(FieldError::new("email", "Invalid email format"));
        }

        if self.phone.trim().is_empty() {
            errors.push(FieldError::new("phone", "Phone number is required"));
        }

        match self.date {
            None => errors.push(FieldError::new("date", "Date is required")),
            Some(date) if date < today => errors.push(FieldError::new("date", "Please select a future date")),
            Some(_) => {}
        }

        if self.time.trim().is_empty() {
            errors.push(FieldError::new("time", "Time is required"));
        } else if NaiveTime::parse_from_str(self.time.trim(), "%H:%M").is_err() {
            errors.push(FieldError::new("time", "Use a 24-hour time like 19:30"));
        }

        if !(1..=max_guests).contains(&self.guests) {
            errors.push(FieldError::new(
                "guests",
                format!("Guests must be between 1 and {max_guests}"),
            ));
        }

        errors
    }

    /// Checks the form as of `today`.
    pub fn validate(&self, today: NaiveDate, max_guests: u32) -> ApiResult<()> {
        let errors = self.field_errors(today, max_guests);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(errors))
        }
    }

    fn form(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("email", self.email.clone()),
            ("phone", self.phone.clone()),
            ("date", self.date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()),
            ("time", self.time.clone()),
            ("guests", self.guests.to_string()),
            ("specialRequests", self.special_requests.clone()),
        ]
    }
}

/// What the guest is told after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    /// Party size
    pub guests: u32,
    /// Day of the visit
    pub date: NaiveDate,
    /// Arrival time
    pub time: String,
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Table for {} on {} at {}. We'll send you a confirmation email shortly.",
            self.guests,
            self.date.format("%Y-%m-%d"),
            self.time
        )
    }
}

#[derive(Debug, Default, Deserialize)]
struct FormReply {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Reservations API interface
#[derive(Clone)]
pub struct ReservationsApi {
    client: CafeClient,
}

impl ReservationsApi {
    /// Create a new reservations API interface
    pub(crate) fn new(client: CafeClient) -> Self {
        Self { client }
    }

    /// Validates and submits a reservation.
    pub async fn submit(&self, reservation: &Reservation) -> ApiResult<Confirmation> {
        self.submit_with_cancel(reservation, &CancellationToken::new()).await
    }

    /// Like [`submit`](Self::submit), abandoning the request once `cancel`
    /// fires.
    #[instrument(skip_all, fields(guests = reservation.guests))]
    pub async fn submit_with_cancel(
        &self,
        reservation: &Reservation,
        cancel: &CancellationToken,
    ) -> ApiResult<Confirmation> {
        let config = self.client.config();
        let today = Local::now().date_naive();
        reservation.validate(today, config.max_guests)?;

        let endpoint = config
            .reservations_url
            .as_deref()
            .ok_or_else(|| ApiError::config("reservations endpoint is not set (CAFE_RESERVATIONS_URL)"))?;

        let (request, request_id) = self.client.request_builder(Method::POST, endpoint);
        let request = request.form(&reservation.form());
        debug!(request_id = %request_id, "Submitting reservation");

        self.client
            .run(&request_id, config.reservations_timeout, cancel, async move {
                let response = request.send().await?;
                let status = response.status().as_u16();
                let body = response.text().await?;
                check_reply(status, &body)
            })
            .await?;

        Ok(Confirmation {
            guests: reservation.guests,
            // Validation guarantees a date
            date: reservation.date.unwrap_or(today),
            time: reservation.time.trim().to_string(),
        })
    }
}

/// Success needs a 2xx status and `ok: true`. An unreadable body counts as
/// `ok: false`.
fn check_reply(status: u16, body: &str) -> ApiResult<()> {
    let reply: FormReply = serde_json::from_str(body).unwrap_or_default();
    if (200..300).contains(&status) && reply.ok {
        return Ok(());
    }
    let message = reply
        .error
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| format!("Failed to save (status {status})"));
    Err(ApiError::Rejected(message))
}
