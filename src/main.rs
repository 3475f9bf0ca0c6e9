//! importmap - generate a lazy-loading import map from a route table.

#![allow(dead_code)]

mod cli;
mod config;
mod generator;
mod logger;
mod route;

use anyhow::{Context, Result, bail};
use clap::{ColorChoice, Parser};
use cli::{Cli, RunMode};
use config::GeneratorConfig;
use generator::Freshness;
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            logger::log_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = GeneratorConfig::load(cli).context("failed to load configuration")?;
    let paths = &config.paths;
    debug!("config"; "root {}", config.get_root().display());

    match cli.mode() {
        RunMode::Write => {
            let report = generator::generate(&paths.routes, &paths.output, &config.render)?;
            log!("importmap"; "generated {} ({} routes)",
                config.root_relative(&report.output).display(), report.routes);
        }
        RunMode::Dry => {
            let artifact = generator::prepare(&paths.routes, &config.render)?;
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(artifact.source.as_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to print import map")?;
        }
        RunMode::Check => {
            let output = config.root_relative(&paths.output);
            match generator::check(&paths.routes, &paths.output, &config.render)? {
                Freshness::UpToDate => log!("importmap"; "{} is up to date", output.display()),
                Freshness::Stale => {
                    bail!("{} is out of date, rerun without --check", output.display())
                }
                Freshness::Missing => {
                    bail!("{} does not exist, rerun without --check", output.display())
                }
            }
        }
    }

    Ok(())
}
