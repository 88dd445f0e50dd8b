//! Tests for usn, config, completions and man.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;

#[test]
fn cli_parse_usn() {
    match parse(&["eduinsight", "usn", "2AG21CS001"]) {
        CliCommand::Usn { usn } => assert_eq!(usn, "2AG21CS001"),
        _ => panic!("expected Usn"),
    }
}

#[test]
fn cli_parse_config() {
    match parse(&["eduinsight", "config"]) {
        CliCommand::Config => {}
        _ => panic!("expected Config"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["eduinsight", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
    assert!(Cli::try_parse_from(["eduinsight", "completions", "tcsh"]).is_err());
}

#[test]
fn cli_parse_man() {
    match parse(&["eduinsight", "man"]) {
        CliCommand::Man => {}
        _ => panic!("expected Man"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}
