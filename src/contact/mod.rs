mod controller;
mod schema;
mod transport;

pub use controller::{ContactForm, Submission, SubmissionState, SubmitOutcome};
pub use schema::{Field, FieldErrors, FieldRule, FormData, Rule, Schema};
pub use transport::{Transport, TransportError};
