use core::error::Error;
use std::sync::LazyLock;

use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::CompleteEnv;
use colored::{ColoredString, Colorize};
use netip::{Formatted, Ipv6Addr};
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use args::{CheckCmd, ModeCmd, NtopCmd, OutputFormat, PtonCmd};

mod args;
mod check;
mod logging;
mod octets;

static PASS: LazyLock<ColoredString> = LazyLock::new(|| "ok".bright_green());
static FAIL: LazyLock<ColoredString> = LazyLock::new(|| "FAILED".bold().bright_red());

/// IPv6 address text codec for 6LoWPAN nodes.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
#[command(flatten_help = true)]
pub struct Cmd {
    #[clap(subcommand)]
    pub mode: ModeCmd,
    /// Log verbosity level.
    #[clap(short, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Error returned when the self-check finds a failing case.
#[derive(Debug, thiserror::Error)]
#[error("{failures} of {tests} checks failed")]
pub struct CheckFailed {
    pub tests: usize,
    pub failures: usize,
}

#[derive(Serialize)]
struct NtopJson {
    text: String,
    written: usize,
    capacity: usize,
    truncated: bool,
}

#[derive(Serialize)]
struct PtonJson {
    canonical: String,
    octets: String,
}

#[derive(Tabled)]
struct CaseRow {
    #[tabled(rename = "Case")]
    name: String,
    #[tabled(rename = "Text")]
    text: String,
    #[tabled(rename = "Written")]
    written: usize,
    #[tabled(rename = "Round trip")]
    round_trip: String,
    #[tabled(rename = "Backwards parse")]
    reparse: String,
    #[tabled(rename = "Capacity")]
    capacity_safe: String,
}

fn verdict(ok: bool) -> String {
    if ok { PASS.to_string() } else { FAIL.to_string() }
}

fn run(cmd: Cmd) -> Result<(), Box<dyn Error>> {
    match cmd.mode {
        ModeCmd::Ntop(cmd) => ntop(cmd),
        ModeCmd::Pton(cmd) => pton(cmd),
        ModeCmd::Check(cmd) => check(cmd),
    }
}

fn ntop(cmd: NtopCmd) -> Result<(), Box<dyn Error>> {
    let addr = Ipv6Addr::from_octets(cmd.octets);
    let capacity = usize::from(cmd.capacity);

    let mut buf = vec![0; capacity];
    let res = netip::format_into(&addr, &mut buf);
    let text = core::str::from_utf8(&buf[..res.len()])?.to_owned();
    log::debug!("formatted {} into {capacity} bytes: {res:?}", octets::format_octets(&cmd.octets));

    match cmd.format {
        OutputFormat::Json => {
            let out = NtopJson {
                text,
                written: res.len(),
                capacity,
                truncated: res.is_truncated(),
            };
            println!("{}", serde_json::to_string(&out)?);
        }
        OutputFormat::Text => match res {
            Formatted::Complete(len) => println!("{len} {text}"),
            Formatted::Truncated(len) => println!(
                "{len} {text} {}",
                format!("(truncated, capacity {capacity})").yellow()
            ),
        },
    }

    Ok(())
}

fn pton(cmd: PtonCmd) -> Result<(), Box<dyn Error>> {
    let addr: Ipv6Addr = cmd.text.parse()?;
    let octets = octets::format_octets(addr.as_octets());

    match cmd.format {
        OutputFormat::Json => {
            let out = PtonJson {
                canonical: addr.to_string(),
                octets,
            };
            println!("{}", serde_json::to_string(&out)?);
        }
        OutputFormat::Text => {
            println!("{octets}");
            println!("{}: {}", "canonical".bright_green(), addr.to_string().yellow());
        }
    }

    Ok(())
}

fn check(cmd: CheckCmd) -> Result<(), Box<dyn Error>> {
    let summary = check::run();

    match cmd.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&summary)?),
        OutputFormat::Text => {
            let rows = summary
                .cases
                .iter()
                .map(|c| CaseRow {
                    name: c.name.to_owned(),
                    text: c.text.clone(),
                    written: c.written,
                    round_trip: verdict(c.round_trip),
                    reparse: verdict(c.reparse),
                    capacity_safe: verdict(c.capacity_safe),
                })
                .collect::<Vec<_>>();

            println!("{}", Table::new(rows).with(Style::rounded()));
            println!("{}/{} tests succeeded", summary.succeeded(), summary.tests);
        }
    }

    if summary.failures > 0 {
        return Err(CheckFailed {
            tests: summary.tests,
            failures: summary.failures,
        }
        .into());
    }

    Ok(())
}

pub fn main() {
    CompleteEnv::with_factory(Cmd::command).complete();
    let cmd = Cmd::parse();
    logging::init(cmd.verbose).expect("initialize logging");

    if let Err(err) = run(cmd) {
        log::error!("run failed: {err}");
        std::process::exit(1);
    }
}
