//! `eduinsight usn <USN>` – decode a seat number.

use anyhow::Result;
use eduinsight_core::usn::Usn;
use std::process::ExitCode;

pub fn run_usn(input: &str) -> Result<ExitCode> {
    let usn = Usn::parse(input)?;
    for line in describe(&usn) {
        println!("{line}");
    }
    Ok(ExitCode::SUCCESS)
}

fn describe(usn: &Usn) -> Vec<String> {
    let mut lines = vec![
        format!("usn:     {usn}"),
        format!("prefix:  {}", usn.prefix()),
        format!("region:  {}", usn.region),
        format!("college: {}", usn.college),
        format!("batch:   {}", usn.batch_year),
    ];
    lines.push(match usn.branch_name() {
        Some(name) => format!("branch:  {} ({name})", usn.branch),
        None => format!("branch:  {}", usn.branch),
    });
    if let Some(roll) = usn.roll {
        lines.push(format!("roll:    {roll:03}"));
    }
    lines
}
