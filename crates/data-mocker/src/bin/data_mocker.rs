//! Prints mock values from the command line.
//!
//! This binary delegates to `data_mocker::mock_cli` for parsing and
//! generation, keeping the CLI behaviour testable without spawning a process.
//! Diagnostics go to stderr, filtered by `RUST_LOG`; stdout carries only the
//! generated values.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use data_mocker::mock_cli::{Category, CliError, ParseOutcome, generate, parse_args};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            print_usage(io::stdout().lock());
            Ok(())
        }
        ParseOutcome::Options(options) => {
            debug!(
                category = %options.category(),
                count = options.count(),
                "generating values"
            );
            let lines = generate(&options)?;
            write_lines(io::stdout().lock(), &lines);
            Ok(())
        }
    }
}

fn print_usage(mut out: impl Write) {
    let categories = Category::ALL
        .into_iter()
        .map(Category::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    let usage = format!(
        concat!(
            "Usage: data-mocker <category> [options]\n",
            "\n",
            "Categories: {}\n",
            "\n",
            "Options:\n",
            "  --count <n>          Number of values to print (defaults to 1)\n",
            "  --seed <seed>        RNG seed for reproducible output\n",
            "  --country <code>     Country for address, phone, company and business-email\n",
            "  --region <region>    Name region: nigerian, arabic, western, asian, european\n",
            "  --config <path>      JSON configuration file\n",
            "  -h, --help           Print this help output\n",
        ),
        categories
    );
    if let Err(err) = out.write_all(usage.as_bytes()) {
        drop(err);
    }
}

fn write_lines(mut out: impl Write, lines: &[String]) {
    for line in lines {
        if let Err(err) = writeln!(out, "{line}") {
            drop(err);
            return;
        }
    }
}
