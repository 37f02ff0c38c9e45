use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

use crate::domain::{ContactFormData, ContactSubmission, ValidationError};
use crate::page::{ContactPage, ScrollTarget, SubmitButton, BUSY_LABEL};
use crate::transport::SubmissionTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// What a single call to [`FormSubmissionController::submit`] ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Validation failed; the transport was never called.
    Rejected(ValidationError),
    Delivered,
    /// The transport reported an error. The cause has been logged.
    Failed,
    /// A submission was already in flight, so this one was dropped.
    Ignored,
}

struct FormState {
    page: ContactPage,
    state: SubmissionState,
}

/// Drives one contact form through validate → submit → present-result.
///
/// The form is only locked for the synchronous steps around the transport
/// call, so the page can be inspected while a submission is in flight.
pub struct FormSubmissionController {
    transport: Arc<dyn SubmissionTransport>,
    form: Mutex<FormState>,
}

impl FormSubmissionController {
    pub fn new(transport: Arc<dyn SubmissionTransport>, page: ContactPage) -> Self {
        Self {
            transport,
            form: Mutex::new(FormState {
                page,
                state: SubmissionState::Idle,
            }),
        }
    }

    /// A snapshot of the current presentation state.
    pub fn page(&self) -> ContactPage {
        self.lock().page.clone()
    }

    pub fn state(&self) -> SubmissionState {
        self.lock().state
    }

    /// Applies visitor edits to the form fields.
    pub fn edit_fields(&self, edit: impl FnOnce(&mut ContactFormData)) {
        edit(&mut self.lock().page.fields);
    }

    pub fn into_page(self) -> ContactPage {
        self.form
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .page
    }

    #[tracing::instrument(
        name = "Submitting the contact form",
        skip(self),
        fields(submission_id = %Uuid::new_v4())
    )]
    pub async fn submit(&self) -> SubmissionOutcome {
        let (submission, restore) = match self.begin() {
            Ok(started) => started,
            Err(outcome) => return outcome,
        };

        let result = self.transport.submit(&submission).await;

        let mut form = self.lock();
        let outcome = match result {
            Ok(()) => {
                form.page.success_banner.visible = true;
                form.page.reset();
                form.page.scroll_target = Some(ScrollTarget::SuccessBanner);
                form.state = SubmissionState::Succeeded;
                tracing::info!("Contact submission delivered");
                SubmissionOutcome::Delivered
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to deliver the contact submission"
                );
                form.page.error_banner.visible = true;
                form.state = SubmissionState::Failed;
                SubmissionOutcome::Failed
            }
        };
        restore.restore(&mut form);
        outcome
    }

    /// Validates the current fields and, if they pass, switches the form into
    /// its busy presentation.
    fn begin(&self) -> Result<(ContactSubmission, RestoreOnExit<'_>), SubmissionOutcome> {
        let mut form = self.lock();
        if form.state == SubmissionState::Submitting {
            tracing::debug!("A submission is already in flight, ignoring submit");
            return Err(SubmissionOutcome::Ignored);
        }

        form.state = SubmissionState::Validating;
        let submission = match ContactSubmission::try_from(&form.page.fields) {
            Ok(submission) => submission,
            Err(e) => {
                tracing::debug!(error = ?e, "Contact form failed validation");
                form.page.alert = Some(e.to_string());
                form.state = SubmissionState::Idle;
                return Err(SubmissionOutcome::Rejected(e));
            }
        };

        form.page.alert = None;
        form.page.success_banner.visible = false;
        form.page.error_banner.visible = false;
        form.page.scroll_target = None;
        let label = std::mem::replace(&mut form.page.submit_button.label, BUSY_LABEL.to_string());
        form.page.submit_button.disabled = true;
        form.state = SubmissionState::Submitting;

        Ok((
            submission,
            RestoreOnExit {
                form: &self.form,
                label: Some(label),
            },
        ))
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        lock(&self.form)
    }
}

fn lock(form: &Mutex<FormState>) -> MutexGuard<'_, FormState> {
    form.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Re-enables the submit control and returns the form to `Idle`, either through
/// [`RestoreOnExit::restore`] or, if the submission future is dropped
/// mid-flight, when the guard itself is dropped.
struct RestoreOnExit<'a> {
    form: &'a Mutex<FormState>,
    label: Option<String>,
}

impl RestoreOnExit<'_> {
    /// Restores the form the caller has already locked, so the outcome and
    /// the restored button become visible together.
    fn restore(mut self, form: &mut FormState) {
        if let Some(label) = self.label.take() {
            restore_button(form, label);
        }
    }
}

impl Drop for RestoreOnExit<'_> {
    fn drop(&mut self) {
        if let Some(label) = self.label.take() {
            restore_button(&mut lock(self.form), label);
        }
    }
}

fn restore_button(form: &mut FormState, label: String) {
    form.page.submit_button = SubmitButton {
        label,
        disabled: false,
    };
    form.state = SubmissionState::Idle;
}
