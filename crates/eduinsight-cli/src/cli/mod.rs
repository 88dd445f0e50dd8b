//! CLI for EduInsight.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use eduinsight_core::config::{self, InsightConfig};
use eduinsight_core::form::{Field, ScraperForm};
use std::path::PathBuf;
use std::process::ExitCode;

use commands::{run_check, run_completions, run_config, run_man, run_submit, run_usn};

/// Top-level CLI for EduInsight.
#[derive(Debug, Parser)]
#[command(name = "eduinsight", version)]
#[command(about = "EduInsight: fetch VTU results for a range of students as a spreadsheet", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// The three form fields plus the revaluation override.
#[derive(Debug, Clone, Args)]
pub struct FormArgs {
    /// USN prefix or full USN (e.g. 2AG21CS or 2AG21CS001).
    #[arg(long)]
    pub usn: String,

    /// Seat numbers to fetch (e.g. 1-60 or 1,5,9).
    #[arg(long)]
    pub range: String,

    /// Results portal page (e.g. https://results.vtu.ac.in/DJcbcs25/index.php).
    #[arg(long)]
    pub url: String,

    /// Treat the page as revaluation results even if its URL has no "RV".
    #[arg(long)]
    pub reval: bool,
}

impl FormArgs {
    /// Fills a form the way a user would, field by field.
    pub fn into_form(self, cfg: &InsightConfig) -> ScraperForm {
        let mut form = ScraperForm::new(cfg);
        form.set_field(Field::Usn, &self.usn);
        form.set_field(Field::Range, &self.range);
        form.set_field(Field::Url, &self.url);
        if self.reval {
            form.set_reval(true);
        }
        form
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Validate the fields, send the scrape request, and save the spreadsheet.
    Submit {
        #[command(flatten)]
        form: FormArgs,

        /// Directory to save the spreadsheet in (default: current directory).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Replace an existing spreadsheet of the same name.
        #[arg(long)]
        overwrite: bool,

        /// Scraping service URL (overrides the config file).
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,
    },

    /// Validate the fields without sending anything.
    Check {
        #[command(flatten)]
        form: FormArgs,
    },

    /// Decode a USN into college, batch and branch.
    Usn {
        /// USN prefix or full USN.
        usn: String,
    },

    /// Show the config file location and its current values.
    Config,

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff) to stdout.
    Man,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<ExitCode> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Submit {
                form,
                output_dir,
                overwrite,
                endpoint,
            } => {
                let mut cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                if let Some(endpoint) = endpoint {
                    cfg.endpoint = endpoint;
                    cfg.validate()?;
                }
                let output_dir = match output_dir {
                    Some(dir) => dir,
                    None => std::env::current_dir()?,
                };
                run_submit(&cfg, form, output_dir, overwrite).await
            }
            CliCommand::Check { form } => Ok(run_check(form)),
            CliCommand::Usn { usn } => run_usn(&usn),
            CliCommand::Config => run_config(),
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man(),
        }
    }
}

#[cfg(test)]
mod tests;
