use gloo_timers::future::TimeoutFuture;
use log::debug;
use thiserror::Error;

use super::validation::ContactDraft;
use crate::config::{SUBMISSION_DELAY_MS, SUBMISSION_FAILURE_RATE};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! We'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Simulated network error")]
    Network,
}

/// Maps a uniform roll in `[0, 1)` to an outcome; rolls at or below
/// `failure_rate` fail.
pub fn outcome(roll: f64, failure_rate: f64) -> Result<(), SubmitError> {
    if roll > failure_rate {
        Ok(())
    } else {
        Err(SubmitError::Network)
    }
}

/// Stands in for a real API call: waits, then succeeds most of the time.
pub async fn submit(draft: ContactDraft) -> Result<(), SubmitError> {
    debug!("Submitting contact form from {}", draft.value("email"));
    TimeoutFuture::new(SUBMISSION_DELAY_MS).await;
    outcome(web_sys::js_sys::Math::random(), SUBMISSION_FAILURE_RATE)
}
