use clap::Parser;
use rwc::cli::Args;
use rwc::config::Config;
use rwc::{app, logging};
use std::io::{self, BufWriter};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init();

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("wc: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<bool> {
    let config = Config::try_from(args)?;
    tracing::debug!(?config, "resolved configuration");

    let mut out = BufWriter::new(io::stdout().lock());
    let mut err = io::stderr().lock();

    Ok(app::execute(&config, &mut out, &mut err)?)
}
