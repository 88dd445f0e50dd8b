//! `eduinsight completions <shell>` and `eduinsight man`.

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io;
use std::process::ExitCode;

use crate::cli::Cli;

pub fn run_completions(shell: Shell) -> Result<ExitCode> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "eduinsight", &mut io::stdout());
    Ok(ExitCode::SUCCESS)
}

pub fn run_man() -> Result<ExitCode> {
    clap_mangen::Man::new(Cli::command()).render(&mut io::stdout())?;
    Ok(ExitCode::SUCCESS)
}
