//! Submission coordinator
//!
//! One submit attempt: refuse while loading, otherwise validate, store the
//! error map on the form and hand the request to the handler only when the
//! map is empty.

use chrono::NaiveDateTime;
use medsched_core::{AppointmentRequest, Clock, ValidationErrors, ValidationPolicy};
use tracing::{debug, info};

use crate::form::AppointmentForm;

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form is loading; nothing was validated
    Disabled,
    /// Validation failed; the same map is stored on the form
    Rejected(ValidationErrors),
    /// Validation passed
    Submitted(AppointmentRequest),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

/// Receiver of submitted appointments
#[cfg_attr(test, mockall::automock)]
pub trait OnSubmit {
    fn on_submit(&mut self, request: AppointmentRequest);
}

impl<F> OnSubmit for F
where
    F: FnMut(AppointmentRequest),
{
    fn on_submit(&mut self, request: AppointmentRequest) {
        self(request)
    }
}

impl AppointmentForm {
    /// Validate and compose the request as of `now`.
    pub fn submit(&mut self, now: NaiveDateTime, policy: &ValidationPolicy) -> SubmitOutcome {
        if self.is_loading() {
            debug!("Submit ignored while loading");
            return SubmitOutcome::Disabled;
        }

        if self.validate(now, policy) {
            SubmitOutcome::Submitted(self.draft().to_request())
        } else {
            debug!("Submit rejected: {} field error(s)", self.errors().len());
            SubmitOutcome::Rejected(self.errors().clone())
        }
    }
}

/// Run a submit attempt and call `handler` exactly once if it succeeds.
///
/// The clock is not consulted while the form is loading.
pub fn submit_with<C, H>(
    form: &mut AppointmentForm,
    clock: &C,
    policy: &ValidationPolicy,
    handler: &mut H,
) -> SubmitOutcome
where
    C: Clock + ?Sized,
    H: OnSubmit + ?Sized,
{
    if form.is_loading() {
        debug!("Submit ignored while loading");
        return SubmitOutcome::Disabled;
    }

    let outcome = form.submit(clock.now(), policy);
    if let SubmitOutcome::Submitted(request) = &outcome {
        info!(
            "Appointment submitted for doctor '{}' at {}",
            request.doctor_id, request.date
        );
        handler.on_submit(request.clone());
    }
    outcome
}
