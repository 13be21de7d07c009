// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! `regmap`: inspect the S32K118 peripheral map from the command line.
//!
//! ```text
//! regmap list            memory map sorted by address
//! regmap show LPUART0    one peripheral instance
//! regmap irqs            vector table with the peripherals behind each line
//! regmap audit           cross-check the catalog
//! ```

mod audit;
mod error;
mod render;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};

use s32k118::interrupts::IRQ_NAMES;
use s32k118::peripherals::{self, PERIPHERALS};

use crate::error::Error;

#[derive(Parser)]
#[command(name = "regmap", version, about = "S32K118 peripheral map inspector")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable coloured output.
    #[arg(long, env = "REGMAP_NO_COLOR", global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every peripheral instance sorted by base address.
    List,
    /// Print the details of one peripheral instance.
    Show {
        /// Instance name, e.g. LPUART0 or porta.
        name: String,
    },
    /// Print the interrupt vector table.
    Irqs,
    /// Check the catalog for overlaps, bad interrupt numbers and PCC clashes.
    Audit,
}

/// Log level used when `REGMAP_LOG` is not set.
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn run<W: Write>(command: &Command, out: &mut W) -> Result<(), Error> {
    match command {
        Command::List => render::list(out, PERIPHERALS)?,
        Command::Show { name } => {
            let p = peripherals::find(name).ok_or_else(|| Error::UnknownPeripheral(name.clone()))?;
            render::show(out, p)?;
        }
        Command::Irqs => render::irqs(out)?,
        Command::Audit => {
            let problems = audit::audit(PERIPHERALS, &IRQ_NAMES);
            render::problems(out, &problems)?;
            if !problems.is_empty() {
                return Err(Error::AuditFailed(problems.len()));
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::new().filter_or("REGMAP_LOG", default_filter(cli.verbose)),
    )
    .init();
    if cli.no_color {
        colored::control::set_override(false);
    }
    info!("{} peripheral instances in catalog", PERIPHERALS.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&cli.command, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("command failed: {:?}", err);
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses() {
        let cli = Cli::try_parse_from(["regmap", "-vv", "show", "lpit0"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Show { ref name } if name == "lpit0"));
        assert!(Cli::try_parse_from(["regmap"]).is_err());
    }

    #[test]
    fn unknown_peripheral_is_an_error() {
        let mut out = Vec::new();
        let err = run(&Command::Show { name: "UART9".into() }, &mut out).unwrap_err();
        assert!(matches!(err, Error::UnknownPeripheral(ref n) if n == "UART9"));
    }

    #[test]
    fn audit_passes_for_the_chip() {
        let mut out = Vec::new();
        run(&Command::Audit, &mut out).unwrap();
    }

    #[test]
    fn verbosity() {
        assert_eq!(default_filter(0), "warn");
        assert_eq!(default_filter(5), "trace");
    }
}
