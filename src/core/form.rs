use crate::domain::model::{FormData, StatusKind, SubmitOutcome, EMAIL_FIELD};
use crate::domain::ports::{FormSurface, Transport};
use crate::utils::error::Result;
use crate::utils::validation::is_valid_email;

pub const EMAIL_ERROR_MESSAGE: &str = "please enter a valid email address";
pub const PENDING_LABEL: &str = "sending...";
pub const SUCCESS_MESSAGE: &str = "thanks for your message! i'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "oops! something went wrong. please try again.";

/// Submission lifecycle for the contact form: validate, deliver once,
/// reflect the outcome inline. One attempt per submit, no retries.
pub struct ContactFormController<S: FormSurface, T: Transport> {
    surface: S,
    transport: T,
    destination: String,
    submitting: bool,
}

impl<S: FormSurface, T: Transport> ContactFormController<S, T> {
    pub fn new(surface: S, transport: T, destination: String) -> Self {
        Self {
            surface,
            transport,
            destination,
            submitting: false,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Handle a submit event. The default browser submission is already
    /// suppressed by the host; this drives everything that replaces it.
    ///
    /// Every path leaves the form re-interactable: the submit control is
    /// re-enabled with its original label as the final step of an attempt.
    pub async fn submit(&mut self, form: FormData) -> Result<SubmitOutcome> {
        // The submit control is disabled while a request is pending, so a
        // second submit event can only arrive through a stale handle.
        if self.submitting {
            tracing::warn!("submit ignored: a submission is already pending");
            return Ok(SubmitOutcome::Rejected);
        }

        self.surface.clear_feedback();

        let email = form.email().trim();
        if !is_valid_email(email) {
            tracing::debug!("rejected submission with invalid email");
            self.surface.show_field_error(EMAIL_FIELD, EMAIL_ERROR_MESSAGE);
            return Ok(SubmitOutcome::Rejected);
        }

        self.submitting = true;
        self.surface.set_submitting(true);

        let outcome = match self.transport.deliver(&self.destination, &form).await {
            Ok(_) => {
                tracing::info!("contact form delivered to {}", self.destination);
                self.surface
                    .show_status(StatusKind::Success, SUCCESS_MESSAGE);
                self.surface.reset_fields();
                SubmitOutcome::Delivered
            }
            Err(e) => {
                tracing::warn!("contact form delivery failed: {}", e);
                self.surface.show_status(StatusKind::Error, FAILURE_MESSAGE);
                SubmitOutcome::Failed
            }
        };

        self.surface.set_submitting(false);
        self.submitting = false;

        Ok(outcome)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
