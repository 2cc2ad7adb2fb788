use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::FormData;

/// Failure of the delivery itself, as opposed to a field validation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportError {
    #[error("Your message could not be sent ({0}). Please try again.")]
    Delivery(String),
    #[error("Sending your message timed out. Please try again.")]
    Timeout,
}

/// Whatever actually delivers a contact message.
///
/// Implementations resolve exactly once per call.
pub trait Transport {
    fn send(&self, data: FormData) -> impl Future<Output = Result<(), TransportError>>;
}
