// crates/engine/src/lib.rs
pub mod config;
pub mod error;
pub mod input;
pub mod options;
pub mod processor;
pub mod stats;

use crate::config::Config;
use crate::error::Result;
use crate::input::Input;
use crate::stats::{Outcome, RunResult};
use rwc_core::CountConfig;

/// Count every input named by `config`.
///
/// Inputs that cannot be read are recorded as [`Outcome::Failed`] and do not
/// stop the run; outcomes keep the order in which inputs were given.
///
/// # Errors
///
/// Returns an error only when the `--files0-from` list itself cannot be read.
pub fn run(config: &Config) -> Result<RunResult> {
    let entries = resolve_inputs(config)?;
    let count_config = config.selection.or_default_set().count_config();

    let outcomes = count_all(entries, &count_config, config.jobs);
    Ok(RunResult { outcomes })
}

fn resolve_inputs(config: &Config) -> Result<Vec<Result<Input>>> {
    if let Some(list) = &config.files0_from {
        return input::read_files0(list);
    }
    if config.inputs.is_empty() {
        return Ok(vec![Ok(Input::implicit_stdin())]);
    }
    Ok(config.inputs.iter().cloned().map(Ok).collect())
}

fn count_one(entry: Result<Input>, config: &CountConfig) -> Outcome {
    match entry.and_then(|input| processor::process_input(&input, config)) {
        Ok(stats) => Outcome::Counted(stats),
        Err(e) => {
            log::debug!("input failed: {e}");
            Outcome::Failed(e)
        }
    }
}

#[cfg(feature = "parallel")]
fn count_all(entries: Vec<Result<Input>>, config: &CountConfig, jobs: Option<usize>) -> Vec<Outcome> {
    use rayon::prelude::*;

    if entries.len() < 2 || jobs == Some(1) {
        return entries.into_iter().map(|e| count_one(e, config)).collect();
    }

    let count = || {
        entries
            .into_par_iter()
            .map(|e| count_one(e, config))
            .collect::<Vec<_>>()
    };

    match jobs.map(|n| rayon::ThreadPoolBuilder::new().num_threads(n).build()) {
        Some(Ok(pool)) => pool.install(count),
        Some(Err(e)) => {
            log::warn!("falling back to the global thread pool: {e}");
            count()
        }
        None => count(),
    }
}

#[cfg(not(feature = "parallel"))]
fn count_all(entries: Vec<Result<Input>>, config: &CountConfig, _jobs: Option<usize>) -> Vec<Outcome> {
    entries.into_iter().map(|e| count_one(e, config)).collect()
}
