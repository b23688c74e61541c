//! `civitas register`: line-oriented registration.
//!
//! Values come from flags (passwords also from the environment); anything
//! missing is prompted for. The email goes through the same debounced
//! availability check as the interactive flow before the form is submitted.

use std::process::ExitCode;

use anyhow::{Context, Result};
use civitas_common::Field;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::{EmailAvailability, EmailAvailabilityCheck};
use crate::application::services::email_check::EmailCheckDebouncer;
use crate::application::services::registration::{RegistrationFlow, SubmitOutcome};
use crate::domain::schema::RegistrationSchema;
use crate::infra::email_check::SimulatedEmailCheck;
use crate::output::{SilentAcknowledger, TerminalAcknowledger, json, progress};

/// Arguments for the register command.
#[derive(Args, Debug, Default)]
pub struct RegisterArgs {
    /// Full name, e.g. "María Fernanda Reyes"
    #[arg(long)]
    pub full_name: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Password (prefer the environment variable over the flag)
    #[arg(long, env = "CIVITAS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Password confirmation
    #[arg(long, env = "CIVITAS_CONFIRM_PASSWORD", hide_env_values = true)]
    pub confirm_password: Option<String>,

    /// Skip the email availability check
    #[arg(long)]
    pub no_email_check: bool,
}

impl RegisterArgs {
    fn take(&mut self, field: Field) -> Option<String> {
        match field {
            Field::FullName => self.full_name.take(),
            Field::Email => self.email.take(),
            Field::Password => self.password.take(),
            Field::ConfirmPassword => self.confirm_password.take(),
        }
    }
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::FullName => "e.g. María Fernanda Reyes",
        Field::Email => "name@citizen.com",
        Field::Password | Field::ConfirmPassword => "",
    }
}

/// Run the register command.
///
/// Exits with code 1 when the form is rejected.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or a prompt fails.
pub async fn run(app: &AppContext, mut args: RegisterArgs) -> Result<ExitCode> {
    let config = app.config()?;

    let mut flow = RegistrationFlow::new(RegistrationSchema::new(config.schema_options()));
    flow.skip_onboarding();

    if !app.is_json() {
        app.output.header("Citizen Registration");
    }
    for field in Field::ALL {
        let value = match args.take(field) {
            Some(value) => value,
            None if field.is_secret() => app.prompt_secret(field.label())?,
            None => app.prompt_text(field.label(), placeholder(field))?,
        };
        flow.update_field(field, value);
    }

    if !args.no_email_check {
        let mut debouncer = EmailCheckDebouncer::new(
            SimulatedEmailCheck,
            config.email_check_trigger(),
            config.debounce_delay(),
        );
        check_email(app, &mut debouncer, &flow.form().email).await?;
    }

    let outcome = if app.is_json() {
        flow.submit(&SilentAcknowledger)?
    } else {
        flow.submit(&TerminalAcknowledger::new(&app.output))?
    };

    match outcome {
        SubmitOutcome::Accepted(form) => {
            if app.is_json() {
                println!("{}", json::format_accepted(&form)?);
            } else {
                app.output
                    .success(&format!("Registered {} <{}>", form.full_name, form.email));
            }
            Ok(ExitCode::SUCCESS)
        }
        SubmitOutcome::Rejected { .. } => {
            if app.is_json() {
                println!("{}", json::format_rejected(flow.errors())?);
            } else {
                println!();
                for (field, messages) in flow.errors().iter() {
                    if let Some(first) = messages.first() {
                        app.output.field_error(field.label(), first);
                    }
                }
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Feed `email` to the debouncer and wait for the lookup it schedules.
///
/// A taken or unconfirmed address is reported as a warning but never blocks
/// the submit. Returns `None` when the input does not qualify for a lookup or
/// the lookup failed.
pub async fn check_email<C: EmailAvailabilityCheck>(
    app: &AppContext,
    debouncer: &mut EmailCheckDebouncer<C>,
    email: &str,
) -> Result<Option<EmailAvailability>> {
    debouncer.on_input(email);
    if !debouncer.is_validating() {
        tracing::debug!("email input does not trigger an availability check");
        return Ok(None);
    }

    let show_spinner = app.output.show_progress() && !app.is_json();
    let pb = if show_spinner {
        progress::spinner("Checking email availability...")
    } else {
        progress::hidden()
    };

    let mut rx = debouncer.subscribe();
    let outcome = rx
        .wait_for(|s| !s.is_validating())
        .await
        .context("email check was dropped before completing")?
        .outcome();

    let notice = match outcome {
        Some(EmailAvailability::Available) => None,
        Some(EmailAvailability::Taken) => Some("Email already registered"),
        None => Some("Email availability could not be confirmed"),
    };
    match notice {
        None => progress::finish_ok(&pb, "Email available"),
        Some(msg) if show_spinner => progress::finish_warn(&pb, msg),
        Some(msg) => {
            pb.finish_and_clear();
            if !app.is_json() {
                app.output.warn(msg);
            }
        }
    }
    Ok(outcome)
}
