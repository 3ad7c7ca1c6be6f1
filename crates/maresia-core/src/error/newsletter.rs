//! Newsletter submission errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a newsletter signup did not go through.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum NewsletterError {
    /// Address does not look like an email
    #[error("Invalid email address: {email:?}")]
    InvalidEmail {
        /// Trimmed input that was rejected
        email: String,
    },

    /// Subscriber backend reported a failure
    #[error("Subscription failed: {message}")]
    SubmissionFailed {
        /// Description of the failure
        message: String,
    },

    /// Another submission is still pending
    #[error("A submission is already in progress")]
    AlreadyPending,
}
