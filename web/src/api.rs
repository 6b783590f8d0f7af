//! The single outbound call this site makes: handing a booking request to
//! the backend. The endpoint is operated separately and only its wire
//! contract is known here.

use shared_types::{BookingRequest, BookingResponse};
use thiserror::Error;

pub const SUBMIT_BOOKING_PATH: &str = "/api/submit-booking";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("booking endpoint returned {0}")]
    Status(reqwest::StatusCode),
}

/// Resolve the endpoint against the page origin. In the browser the site
/// and the booking backend share an origin; the localhost fallback only
/// matters outside one.
fn submit_url() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(origin) = web_sys::window().and_then(|w| w.location().origin().ok()) {
            return format!("{origin}{SUBMIT_BOOKING_PATH}");
        }
    }
    format!("http://127.0.0.1:3000{SUBMIT_BOOKING_PATH}")
}

/// Send one booking request. No retries and no explicit timeout; the
/// transport default applies. A non-2xx status is an error here and is
/// folded into the same user-facing notice as a transport failure.
pub async fn submit_booking(request: &BookingRequest) -> Result<BookingResponse, SubmitError> {
    let response = reqwest::Client::new()
        .post(submit_url())
        .json(request)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(SubmitError::Status(status));
    }

    Ok(response.json::<BookingResponse>().await?)
}
