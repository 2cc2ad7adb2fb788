use super::{Field, FieldErrors, FormData, Schema, Transport, TransportError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Delivered; the form has been reset.
    Sent,
    /// Validation failed; see [`ContactForm::errors`].
    Invalid,
    /// Delivery failed; the user's input is kept.
    Failed(TransportError),
    /// A submission is already in flight. Nothing changed.
    Busy,
}

/// A validated payload handed out by [`ContactForm::begin_submit`].
///
/// The form stays [`SubmissionState::Submitting`] until the ticket is given
/// back through [`ContactForm::finish_submit`].
#[derive(Debug)]
#[must_use]
pub struct Submission {
    data: FormData,
}

impl Submission {
    pub fn data(&self) -> &FormData {
        &self.data
    }
}

/// State behind the contact form: field values, per-field errors and the
/// submission lifecycle.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    data: FormData,
    errors: FieldErrors,
    state: SubmissionState,
    submit_error: Option<TransportError>,
    schema: Schema,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema(schema: Schema) -> Self {
        Self {
            schema,
            ..Self::default()
        }
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn value(&self, field: Field) -> &str {
        self.data.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Last delivery failure, kept until the next submission starts.
    pub fn submit_error(&self) -> Option<&TransportError> {
        self.submit_error.as_ref()
    }

    /// Stores a raw value. Any error shown for the field is dropped without
    /// re-validating; validation only happens on submit.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.data.set(field, value.into());
        if self.errors.clear(field) {
            log::debug!("cleared {field} error on edit");
        }
    }

    /// First half of a submission: guards against re-entry, then validates.
    ///
    /// On `Err` the lifecycle is already over and the form is idle again.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitOutcome> {
        if self.is_submitting() {
            log::debug!("submit ignored, already submitting");
            return Err(SubmitOutcome::Busy);
        }
        self.state = SubmissionState::Submitting;
        self.submit_error = None;

        let errors = self.schema.validate(&self.data);
        if !errors.is_empty() {
            log::debug!("contact form invalid: {} field(s)", errors.len());
            self.errors = errors;
            self.state = SubmissionState::Idle;
            return Err(SubmitOutcome::Invalid);
        }

        log::debug!("contact form valid, sending");
        Ok(Submission {
            data: self.data.clone(),
        })
    }

    /// Second half of a submission: applies the transport's result and
    /// returns the form to idle.
    pub fn finish_submit(
        &mut self,
        _submission: Submission,
        result: Result<(), TransportError>,
    ) -> SubmitOutcome {
        self.state = SubmissionState::Idle;
        match result {
            Ok(()) => {
                log::debug!("contact message sent");
                self.data = FormData::default();
                self.errors = FieldErrors::default();
                SubmitOutcome::Sent
            }
            Err(e) => {
                log::warn!("contact message failed: {e:?}");
                self.submit_error = Some(e.clone());
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Validates and, when valid, sends the form through `transport` once.
    ///
    /// The form is back to idle when this returns, or when the future is
    /// dropped before completing.
    pub async fn submit<T: Transport>(&mut self, transport: &T) -> SubmitOutcome {
        let submission = match self.begin_submit() {
            Ok(s) => s,
            Err(outcome) => return outcome,
        };
        let in_flight = InFlight { form: self };
        let result = transport.send(submission.data().clone()).await;
        in_flight.form.finish_submit(submission, result)
    }
}

struct InFlight<'a> {
    form: &'a mut ContactForm,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.form.is_submitting() {
            log::debug!("submission abandoned before completing");
            self.form.state = SubmissionState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::future::Future;
    use std::time::Duration;

    #[derive(Default)]
    struct MockTransport {
        sent: RefCell<Vec<FormData>>,
        fail_with: Option<TransportError>,
    }

    impl MockTransport {
        fn failing(e: TransportError) -> Self {
            Self {
                fail_with: Some(e),
                ..Self::default()
            }
        }

        fn calls(&self) -> usize {
            self.sent.borrow().len()
        }
    }

    impl Transport for MockTransport {
        async fn send(&self, data: FormData) -> Result<(), TransportError> {
            self.sent.borrow_mut().push(data);
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    struct NeverTransport;

    impl Transport for NeverTransport {
        fn send(&self, _data: FormData) -> impl Future<Output = Result<(), TransportError>> {
            std::future::pending()
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, "Jo");
        form.set_field(Field::Email, "jo@x.com");
        form.set_field(Field::Subject, "Hello there");
        form.set_field(Field::Message, "This is a test message");
        form
    }

    #[tokio::test]
    async fn test_valid_submission_end_to_end() {
        let mut form = filled();
        let expected = form.data().clone();
        let transport = MockTransport::default();

        let outcome = form.submit(&transport).await;

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(*transport.sent.borrow(), vec![expected]);
        assert_eq!(*form.data(), FormData::default());
        assert!(form.errors().is_empty());
        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(form.submit_error().is_none());
    }

    #[tokio::test]
    async fn test_invalid_submission_skips_transport() {
        let mut form = filled();
        form.set_field(Field::Name, "A");
        let before = form.data().clone();
        let transport = MockTransport::default();

        let outcome = form.submit(&transport).await;

        assert_eq!(outcome, SubmitOutcome::Invalid);
        assert_eq!(transport.calls(), 0);
        assert_eq!(*form.data(), before);
        assert_eq!(
            form.errors().iter().collect::<Vec<_>>(),
            vec![(Field::Name, "Name must be at least 2 characters")]
        );
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_empty_form_reports_all_fields() {
        let mut form = ContactForm::new();
        let transport = MockTransport::default();

        assert_eq!(form.submit(&transport).await, SubmitOutcome::Invalid);
        assert_eq!(form.errors().len(), 4);
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_input() {
        let mut form = filled();
        let before = form.data().clone();
        let transport = MockTransport::failing(TransportError::Timeout);

        let outcome = form.submit(&transport).await;

        assert_eq!(outcome, SubmitOutcome::Failed(TransportError::Timeout));
        assert_eq!(transport.calls(), 1);
        assert_eq!(*form.data(), before);
        assert!(form.errors().is_empty());
        assert_eq!(form.submit_error(), Some(&TransportError::Timeout));
        assert_eq!(form.state(), SubmissionState::Idle);

        // a retry starts clean
        let outcome = form.submit(&MockTransport::default()).await;
        assert_eq!(outcome, SubmitOutcome::Sent);
        assert!(form.submit_error().is_none());
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_rejected() {
        let mut form = filled();
        let transport = MockTransport::default();

        let submission = form.begin_submit().expect("form is valid");
        assert!(form.is_submitting());

        assert_eq!(form.submit(&transport).await, SubmitOutcome::Busy);
        assert_eq!(transport.calls(), 0);
        assert!(form.is_submitting());

        assert_eq!(form.finish_submit(submission, Ok(())), SubmitOutcome::Sent);
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_dropped_submission_returns_to_idle() {
        let mut form = filled();
        let before = form.data().clone();

        let res =
            tokio::time::timeout(Duration::from_millis(10), form.submit(&NeverTransport)).await;

        assert!(res.is_err());
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(*form.data(), before);
    }

    #[test]
    fn test_edit_clears_error_without_revalidating() {
        let mut form = ContactForm::new();
        form.set_field(Field::Email, "not-an-email");
        assert!(form.begin_submit().is_err());
        assert!(form.error(Field::Email).is_some());

        form.set_field(Field::Email, "still-not-an-email");
        assert_eq!(form.error(Field::Email), None);
        // other errors are left alone
        assert!(form.error(Field::Name).is_some());
        assert_eq!(form.errors().len(), 3);
    }

    #[test]
    fn test_set_field_is_idempotent() {
        let mut form = ContactForm::new();
        assert!(form.begin_submit().is_err());

        form.set_field(Field::Name, "Bob");
        form.set_field(Field::Name, "Bob");

        assert_eq!(form.value(Field::Name), "Bob");
        assert_eq!(form.errors().len(), 3);
        assert!(!form.errors().contains(Field::Name));
    }

    #[test]
    fn test_invalid_begin_leaves_form_idle() {
        let mut form = ContactForm::new();
        assert_eq!(form.begin_submit().unwrap_err(), SubmitOutcome::Invalid);
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_custom_schema() {
        let mut form = ContactForm::with_schema(Schema::new(Vec::new()));
        let submission = form.begin_submit().expect("empty schema accepts anything");
        assert_eq!(*submission.data(), FormData::default());
        let outcome = form.finish_submit(
            submission,
            Err(TransportError::Delivery("offline".to_string())),
        );
        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    }
}
