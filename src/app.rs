// src/app.rs
use crate::config::Config;
use crate::error::Result;
use crate::presentation;
use std::io::Write;

/// Count everything `config` names, report errors to `err` and counts to `out`.
///
/// Returns `true` when every input could be read.
///
/// # Errors
/// Returns an error if the input list cannot be read or writing output fails.
pub fn execute<W: Write, E: Write>(config: &Config, out: &mut W, err: &mut E) -> Result<bool> {
    let result = rwc_engine::run(config)?;

    for e in result.errors() {
        writeln!(err, "wc: {e}")?;
    }

    presentation::write_report(out, &result, config)?;
    out.flush()?;

    Ok(!result.has_errors())
}
