//! `eduinsight submit` – send the scrape request and save the spreadsheet.

use anyhow::{Context, Result};
use eduinsight_core::config::InsightConfig;
use eduinsight_core::range::expand_range;
use eduinsight_core::storage::DirectorySink;
use eduinsight_core::transport::CurlTransport;
use eduinsight_core::validate::validate_form;
use std::path::PathBuf;
use std::process::ExitCode;

use super::report;
use crate::cli::FormArgs;

pub async fn run_submit(
    cfg: &InsightConfig,
    args: FormArgs,
    output_dir: PathBuf,
    overwrite: bool,
) -> Result<ExitCode> {
    let mut form = args.into_form(cfg);

    // The form validates again on submit; this only decides whether to announce work.
    if validate_form(form.data()).is_empty() {
        match expand_range(&form.data().range) {
            Ok(seats) => println!(
                "Processing {} seat(s) via {} ...",
                seats.len(),
                form.endpoint()
            ),
            Err(e) => eprintln!("warning: {e}; the service may reject this range"),
        }
    }

    let transport = CurlTransport::new(cfg);
    let mut sink = DirectorySink::new(output_dir, overwrite);
    let (form, outcome) = tokio::task::spawn_blocking(move || {
        let outcome = form.submit(&transport, &mut sink);
        (form, outcome)
    })
    .await
    .context("submit task failed")?;

    tracing::debug!(?outcome, "submit finished");
    Ok(report::print_result(&form, &outcome))
}
