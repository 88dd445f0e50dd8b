//! Terminal rendering of field errors and alerts.

use eduinsight_core::form::{AlertKind, AlertState, Outcome, ScraperForm};
use eduinsight_core::validate::FieldErrors;
use std::process::ExitCode;

/// One `Label: message` line per failing field, in form order.
pub fn field_error_lines(errors: &FieldErrors) -> Vec<String> {
    errors
        .iter()
        .map(|(field, message)| format!("{}: {}", field.label(), message))
        .collect()
}

pub fn alert_line(alert: &AlertState) -> Option<String> {
    match alert.kind {
        AlertKind::Empty => None,
        AlertKind::Success => Some(format!("success: {}", alert.message)),
        AlertKind::Error => Some(format!("error: {}", alert.message)),
    }
}

pub fn print_field_errors(errors: &FieldErrors) {
    for line in field_error_lines(errors) {
        eprintln!("{line}");
    }
}

/// Prints the form's state after a submit and maps the outcome to an exit code.
pub fn print_result(form: &ScraperForm, outcome: &Outcome) -> ExitCode {
    match outcome {
        Outcome::Invalid => {
            print_field_errors(form.errors());
            ExitCode::FAILURE
        }
        Outcome::Saved(path) => {
            if let Some(line) = alert_line(form.alert()) {
                println!("{line}");
            }
            println!("saved: {}", path.display());
            ExitCode::SUCCESS
        }
        Outcome::Acknowledged => {
            if let Some(line) = alert_line(form.alert()) {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Outcome::Failed => {
            if let Some(line) = alert_line(form.alert()) {
                eprintln!("{line}");
            }
            ExitCode::FAILURE
        }
    }
}
