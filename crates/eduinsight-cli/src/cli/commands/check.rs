//! `eduinsight check` – validate the fields without sending anything.

use eduinsight_core::config::InsightConfig;
use eduinsight_core::range::expand_range;
use eduinsight_core::usn::Usn;
use eduinsight_core::validate::validate_form;
use std::process::ExitCode;

use super::report;
use crate::cli::FormArgs;

pub fn run_check(args: FormArgs) -> ExitCode {
    let form = args.into_form(&InsightConfig::default());
    let errors = validate_form(form.data());
    if !errors.is_empty() {
        report::print_field_errors(&errors);
        return ExitCode::FAILURE;
    }

    let data = form.data();
    println!("ok: all fields valid");
    if let Ok(usn) = Usn::parse(&data.usn) {
        println!("usn: {} (batch {}, branch {})", usn, usn.batch_year, usn.branch);
    }
    match expand_range(&data.range) {
        Ok(seats) => println!("seats: {}", seats.len()),
        Err(e) => println!("note: {e}; the service may reject this range"),
    }
    println!("revaluation: {}", if data.is_reval { "yes" } else { "no" });
    ExitCode::SUCCESS
}
