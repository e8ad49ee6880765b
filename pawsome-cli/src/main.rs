use std::{
    io::{self, ErrorKind},
    path::PathBuf,
    process,
};

use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use pawsome_lib::{Decision, Error, MatchSession, Result, config::CoreConfig};
use sysexits::ExitCode;
use tracing::{Level, error};

mod matches;
mod output;
mod playdate;
mod swipe;

#[derive(Parser, Debug)]
#[command(name = "pawsome")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Start from this seed file instead of the configured one
    #[arg(short, long, global = true)]
    seed: Option<PathBuf>,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Decide on profiles in order, e.g. `swipe like pass like`
    Swipe {
        #[arg(required = true)]
        decisions: Vec<Decision>,
    },
    /// Browse profiles interactively
    Browse,
    /// Operate on matches
    #[command(subcommand)]
    Matches(matches::Command),
    /// Operate on playdates
    #[command(subcommand)]
    Playdate(playdate::Command),
}

fn main() -> process::ExitCode {
    // Human friendly panicking in release mode
    human_panic::setup_panic!();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(match cli.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        })
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::Ok.into(),
        Err(err) => {
            error!("{err:?}");
            eprintln!("{} {err}", "error:".red().bold());
            exit_code(&err).into()
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut cfg = CoreConfig::load()?;
    if let Some(seed) = &cli.seed {
        cfg.seed_path = Some(seed.clone());
    }

    let mut session = MatchSession::from_config(&cfg)?;
    let mut out = io::stdout().lock();

    match &cli.command {
        Command::Swipe { decisions } => swipe::handle(&mut session, decisions, &mut out),
        Command::Browse => swipe::browse(&mut session, io::stdin().lock(), &mut out),
        Command::Matches(cmd) => matches::handle(&session, cmd, &mut out),
        Command::Playdate(cmd) => playdate::handle(&mut session, cmd, &mut out),
    }
}

fn exit_code(err: &Error) -> ExitCode {
    match err {
        Error::EmptyField(_) | Error::InvalidDate { .. } => ExitCode::DataErr,
        Error::NoProfiles | Error::De(_) | Error::Ser(_) => ExitCode::Config,
        Error::Io(e) if e.kind() == ErrorKind::NotFound => ExitCode::NoInput,
        Error::Io(_) => ExitCode::IoErr,
        Error::NoHomeDir => ExitCode::OsFile,
    }
}
