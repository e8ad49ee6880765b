use std::io::Write;

use clap::Subcommand;
use pawsome_lib::{MatchSession, Result};

use crate::output;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List matches
    List,
    /// Show every post made by your matches
    Posts,
}

pub fn handle(session: &MatchSession, cmd: &Command, out: &mut impl Write) -> Result<()> {
    match cmd {
        Command::List => output::matches(out, session.matches())?,
        Command::Posts => output::posts(out, session)?,
    }

    Ok(())
}
