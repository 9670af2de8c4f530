//! Console report of upcoming passes.

use crate::domain::entities::{PassList, PassRecord};
use chrono::{DateTime, Utc};
use std::io::{self, Write};

/// Render a rise time as a UTC wall clock, e.g. `Fri Jan 01 2021 00:00:00 UTC`.
pub fn format_risetime(risetime: i64) -> Option<String> {
    let at = DateTime::<Utc>::from_timestamp(risetime, 0)?;
    Some(at.format("%a %b %d %Y %H:%M:%S UTC").to_string())
}

/// One line per pass. Missing fields print as `unknown`.
pub fn format_pass(pass: &PassRecord) -> String {
    let at = pass
        .risetime
        .and_then(format_risetime)
        .unwrap_or_else(|| "unknown".to_string());
    let duration = pass
        .duration
        .map(|d| d.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    format!("Next pass at {} for {} seconds!", at, duration)
}

pub fn write_pass_times<W: Write>(out: &mut W, passes: &PassList) -> io::Result<()> {
    if passes.is_empty() {
        writeln!(out, "No upcoming passes.")?;
    }
    for pass in passes {
        writeln!(out, "{}", format_pass(pass))?;
    }
    out.flush()
}

/// Print the report to stdout.
pub fn print_pass_times(passes: &PassList) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_pass_times(&mut handle, passes)
}
