//! Tests for the submit and check subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use eduinsight_core::config::InsightConfig;
use eduinsight_core::form::Field;
use eduinsight_core::validate::{validate_form, USN_MESSAGE};

const PORTAL: &str = "https://results.vtu.ac.in/DJcbcs25/index.php";

#[test]
fn cli_parse_submit() {
    match parse(&[
        "eduinsight",
        "submit",
        "--usn",
        "2AG21CS001",
        "--range",
        "1-60",
        "--url",
        PORTAL,
    ]) {
        CliCommand::Submit {
            form,
            output_dir,
            overwrite,
            endpoint,
        } => {
            assert_eq!(form.usn, "2AG21CS001");
            assert_eq!(form.range, "1-60");
            assert_eq!(form.url, PORTAL);
            assert!(!form.reval);
            assert!(output_dir.is_none());
            assert!(!overwrite);
            assert!(endpoint.is_none());
        }
        _ => panic!("expected Submit"),
    }
}

#[test]
fn cli_parse_submit_options() {
    match parse(&[
        "eduinsight",
        "submit",
        "--usn",
        "2AG21CS",
        "--range",
        "1,5,9",
        "--url",
        PORTAL,
        "--reval",
        "--output-dir",
        "/tmp/results",
        "--overwrite",
        "--endpoint",
        "http://127.0.0.1:8000/",
    ]) {
        CliCommand::Submit {
            form,
            output_dir,
            overwrite,
            endpoint,
        } => {
            assert!(form.reval);
            assert_eq!(
                output_dir.as_deref(),
                Some(std::path::Path::new("/tmp/results"))
            );
            assert!(overwrite);
            assert_eq!(endpoint.as_deref(), Some("http://127.0.0.1:8000/"));
        }
        _ => panic!("expected Submit with options"),
    }
}

#[test]
fn cli_parse_submit_requires_all_fields() {
    assert!(Cli::try_parse_from(["eduinsight", "submit", "--usn", "2AG21CS"]).is_err());
    assert!(Cli::try_parse_from(["eduinsight", "submit", "--range", "1-60", "--url", PORTAL]).is_err());
}

#[test]
fn cli_parse_check() {
    match parse(&[
        "eduinsight",
        "check",
        "--usn",
        "2AG21CS",
        "--range",
        "1-60",
        "--url",
        PORTAL,
    ]) {
        CliCommand::Check { form } => {
            assert_eq!(form.usn, "2AG21CS");
            assert!(!form.reval);
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn form_args_fill_form_fields() {
    let form = match parse(&[
        "eduinsight",
        "check",
        "--usn",
        "2AG21CS001",
        "--range",
        "1-60",
        "--url",
        "https://results.vtu.ac.in/JJRVcbcs24/index.php",
    ]) {
        CliCommand::Check { form } => form,
        _ => panic!("expected Check"),
    };
    let form = form.into_form(&InsightConfig::default());
    assert_eq!(form.data().usn, "2AG21CS001");
    assert_eq!(form.data().range, "1-60");
    assert!(form.data().is_reval, "RV in the URL marks revaluation");
    assert!(form.errors().get(Field::Usn).is_none());
}

#[test]
fn reval_flag_forces_revaluation() {
    let form = match parse(&[
        "eduinsight",
        "check",
        "--usn",
        "2AG21CS",
        "--range",
        "1-60",
        "--url",
        PORTAL,
        "--reval",
    ]) {
        CliCommand::Check { form } => form,
        _ => panic!("expected Check"),
    };
    assert!(form.into_form(&InsightConfig::default()).data().is_reval);
}

#[test]
fn overlong_usn_reaches_validation_untouched() {
    let form = match parse(&[
        "eduinsight",
        "check",
        "--usn",
        "2AG21CS0019",
        "--range",
        "1-60",
        "--url",
        PORTAL,
    ]) {
        CliCommand::Check { form } => form,
        _ => panic!("expected Check"),
    };
    let form = form.into_form(&InsightConfig::default());
    assert_eq!(form.data().usn, "2AG21CS0019");
    let errors = validate_form(form.data());
    assert_eq!(errors.get(Field::Usn), Some(USN_MESSAGE));
}
