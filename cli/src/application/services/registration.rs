//! Application service: onboarding steps and registration form state.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! Presentation reaches the user through the injected `Acknowledger` and the
//! optional `Navigator`.

use civitas_common::{Field, RegistrationForm, ValidationErrors};

use crate::application::ports::{Acknowledger, Destination, Navigator};
use crate::domain::error::FlowError;
use crate::domain::onboarding::{APP_NAME, OnboardingStep};
use crate::domain::schema::RegistrationSchema;

pub const REVIEW_TITLE: &str = "Review Needed";
pub const REVIEW_BODY: &str = "Some fields do not meet the security requirements.";
pub const SUCCESS_TITLE: &str = "Success";

/// Body of the success acknowledgment.
#[must_use]
pub fn success_body() -> String {
    format!("Welcome to {APP_NAME}. Your identity has been registered.")
}

/// Outcome of a submit on the form step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form passed validation; carries the validated copy.
    Accepted(RegistrationForm),
    /// Validation failed on `fields` distinct fields.
    Rejected { fields: usize },
}

/// Step and form state for one onboarding session.
pub struct RegistrationFlow {
    step: OnboardingStep,
    form: RegistrationForm,
    errors: ValidationErrors,
    schema: RegistrationSchema,
    navigator: Option<Box<dyn Navigator>>,
    completed: bool,
}

impl RegistrationFlow {
    /// Start a flow on the first intro step.
    #[must_use]
    pub fn new(schema: RegistrationSchema) -> Self {
        Self {
            step: OnboardingStep::default(),
            form: RegistrationForm::default(),
            errors: ValidationErrors::new(),
            schema,
            navigator: None,
            completed: false,
        }
    }

    /// Attach the navigation callback fired when the form is reached.
    #[must_use]
    pub fn with_navigator(mut self, navigator: impl Navigator + 'static) -> Self {
        self.navigator = Some(Box::new(navigator));
        self
    }

    #[must_use]
    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    #[must_use]
    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    /// Errors from the last submit; empty before the first one.
    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Inline message for `field`, if the last submit rejected it.
    #[must_use]
    pub fn first_error(&self, field: Field) -> Option<&str> {
        self.errors.first(field)
    }

    /// `true` once a submit has been accepted.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// "Continue" on an intro step.
    pub fn continue_onboarding(&mut self) -> OnboardingStep {
        self.move_to(self.step.advance())
    }

    /// "Skip" on an intro step.
    pub fn skip_onboarding(&mut self) -> OnboardingStep {
        self.move_to(self.step.skip())
    }

    /// Replace one field. Stored errors stay until the next submit.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Mutable access to one field, for in-place editing.
    pub fn field_mut(&mut self, field: Field) -> &mut String {
        self.form.get_mut(field)
    }

    /// Validate the form and acknowledge the result once.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::FormNotReached` when called on an intro step.
    pub fn submit(&mut self, ack: &impl Acknowledger) -> Result<SubmitOutcome, FlowError> {
        if !self.step.is_form() {
            return Err(FlowError::FormNotReached {
                step: self.step.number(),
            });
        }

        match self.schema.validate(&self.form) {
            Ok(form) => {
                self.errors = ValidationErrors::new();
                self.completed = true;
                tracing::debug!(email = %form.email, "registration accepted");
                ack.acknowledge(SUCCESS_TITLE, &success_body());
                Ok(SubmitOutcome::Accepted(form))
            }
            Err(errors) => {
                let fields = errors.field_count();
                tracing::debug!(
                    fields = ?errors.fields().map(Field::as_str).collect::<Vec<_>>(),
                    "registration rejected"
                );
                self.errors = errors;
                ack.acknowledge(REVIEW_TITLE, REVIEW_BODY);
                Ok(SubmitOutcome::Rejected { fields })
            }
        }
    }

    fn move_to(&mut self, next: OnboardingStep) -> OnboardingStep {
        let prev = self.step;
        if next != prev {
            self.step = next;
            tracing::debug!(from = prev.number(), to = next.number(), "onboarding step");
            if next.is_form()
                && let Some(navigator) = &self.navigator
            {
                navigator.navigate(Destination::Register);
            }
        }
        self.step
    }
}
