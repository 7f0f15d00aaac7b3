use async_trait::async_trait;
use site_widgets::core::form::{
    ContactFormController, EMAIL_ERROR_MESSAGE, FAILURE_MESSAGE, SUCCESS_MESSAGE,
};
use site_widgets::{FormData, FormSurface, Result, StatusKind, SubmitOutcome, Transport, WidgetError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct MockFormSurface {
    cleared: usize,
    field_errors: Vec<(String, String)>,
    statuses: Vec<(StatusKind, String)>,
    submitting_calls: Vec<bool>,
    resets: usize,
}

impl FormSurface for MockFormSurface {
    fn clear_feedback(&mut self) {
        self.cleared += 1;
    }

    fn show_field_error(&mut self, field: &str, message: &str) {
        self.field_errors.push((field.to_string(), message.to_string()));
    }

    fn show_status(&mut self, kind: StatusKind, message: &str) {
        self.statuses.push((kind, message.to_string()));
    }

    fn set_submitting(&mut self, submitting: bool) {
        self.submitting_calls.push(submitting);
    }

    fn reset_fields(&mut self) {
        self.resets += 1;
    }
}

struct CountingTransport {
    calls: Arc<AtomicUsize>,
    succeed: bool,
}

#[async_trait]
impl Transport for CountingTransport {
    async fn deliver(&self, _destination: &str, _form: &FormData) -> Result<serde_json::Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.succeed {
            Ok(serde_json::json!({ "ok": true }))
        } else {
            Err(WidgetError::SubmissionError {
                message: "destination rejected submission: 500".to_string(),
            })
        }
    }
}

fn controller(
    succeed: bool,
) -> (
    ContactFormController<MockFormSurface, CountingTransport>,
    Arc<AtomicUsize>,
) {
    let calls = Arc::new(AtomicUsize::new(0));
    let transport = CountingTransport {
        calls: calls.clone(),
        succeed,
    };
    let controller = ContactFormController::new(
        MockFormSurface::default(),
        transport,
        "https://example.com/contact".to_string(),
    );
    (controller, calls)
}

fn form(email: &str) -> FormData {
    FormData::new()
        .with_field("name", "Ada")
        .with_field("email", email)
        .with_field("message", "hello there")
}

#[tokio::test]
async fn test_invalid_email_never_reaches_the_network() {
    let (mut c, calls) = controller(true);

    let outcome = c.submit(form("not-an-email")).await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(c.surface().cleared, 1);
    assert_eq!(
        c.surface().field_errors,
        vec![("email".to_string(), EMAIL_ERROR_MESSAGE.to_string())]
    );
    // the submit control was never disabled
    assert!(c.surface().submitting_calls.is_empty());
    assert_eq!(c.surface().resets, 0);
}

#[tokio::test]
async fn test_successful_submission_resets_fields() {
    let (mut c, calls) = controller(true);

    let outcome = c.submit(form("user@example.com")).await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Delivered);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        c.surface().statuses,
        vec![(StatusKind::Success, SUCCESS_MESSAGE.to_string())]
    );
    assert_eq!(c.surface().resets, 1);
    // disabled for the duration, re-enabled as the final step
    assert_eq!(c.surface().submitting_calls, vec![true, false]);
    assert!(!c.is_submitting());
}

#[tokio::test]
async fn test_failed_submission_leaves_fields_untouched() {
    let (mut c, calls) = controller(false);

    let outcome = c.submit(form("user@example.com")).await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        c.surface().statuses,
        vec![(StatusKind::Error, FAILURE_MESSAGE.to_string())]
    );
    assert_eq!(c.surface().resets, 0);
    assert_eq!(c.surface().submitting_calls, vec![true, false]);
    assert!(!c.is_submitting());
}

#[tokio::test]
async fn test_email_is_trimmed_before_validation() {
    let (mut c, calls) = controller(true);

    let outcome = c.submit(form("  user@example.com  ")).await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Delivered);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_manual_retry_after_failure_is_a_fresh_attempt() {
    site_widgets::utils::logger::init_logger(true);
    let (mut c, calls) = controller(false);

    assert_eq!(c.submit(form("user@example.com")).await.unwrap(), SubmitOutcome::Failed);
    assert_eq!(c.submit(form("user@example.com")).await.unwrap(), SubmitOutcome::Failed);

    // one call per submit, no automatic retries in between
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(c.surface().cleared, 2);
    assert_eq!(c.surface().statuses.len(), 2);
}
