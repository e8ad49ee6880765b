use std::io::{self, Write};

use clap::Subcommand;
use colored::Colorize;
use pawsome_lib::{MatchSession, NewPlaydate, Result, entities::PlaydateField};
use strum::IntoEnumIterator;

use crate::output;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List playdates
    List,
    /// Host a new playdate as the current user
    Host {
        #[arg(short, long)]
        location: String,
        /// Calendar date, YYYY-MM-DD
        #[arg(short, long)]
        date: String,
        #[arg(short = 'D', long)]
        description: String,
    },
}

pub fn handle(session: &mut MatchSession, cmd: &Command, out: &mut impl Write) -> Result<()> {
    match cmd {
        Command::List => output::playdates(out, session.playdates())?,
        Command::Host {
            location,
            date,
            description,
        } => {
            let new_playdate = NewPlaydate::new(location, date, description);
            new_playdate.validate()?;

            let id = session.create_playdate(new_playdate);
            writeln!(out, "{} #{id}", "Created playdate".green())?;
            writeln!(out)?;
            output::playdates(out, session.playdates())?;
        }
    }

    Ok(())
}

/// Prompt for each field of a new playdate, one line of `lines` per field. Invalid input is
/// reported and nothing is created.
pub fn host_interactive(
    session: &mut MatchSession,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    out: &mut impl Write,
) -> Result<()> {
    let mut new_playdate = NewPlaydate::default();

    for field in PlaydateField::iter() {
        write!(out, "{field}: ")?;
        out.flush()?;

        match lines.next() {
            Some(line) => *new_playdate.field_mut(field) = line?.trim().to_string(),
            None => return Ok(()),
        }
    }

    match new_playdate.validate() {
        Ok(()) => {
            let id = session.create_playdate(new_playdate);
            writeln!(out, "{} #{id}", "Created playdate".green())?;
        }
        Err(err) => writeln!(out, "{} {err}", "Not created:".red())?,
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use pawsome_lib::{CurrentUser, Error, PlaydateId, Seed};

    use super::*;

    fn session() -> MatchSession {
        MatchSession::new(Seed::builtin().unwrap(), CurrentUser::default()).unwrap()
    }

    #[test]
    fn test_host() {
        let mut session = session();
        let mut out = Vec::new();

        handle(
            &mut session,
            &Command::Host {
                location: "Dog Park".into(),
                date: "2024-01-01".into(),
                description: "Fun".into(),
            },
            &mut out,
        )
        .unwrap();

        let playdate = session.playdates().last().unwrap();
        assert_eq!(playdate.id(), PlaydateId::from(3));
        assert_eq!(playdate.host_name(), "You");
    }

    #[test]
    fn test_host_invalid() {
        let mut session = session();
        let mut out = Vec::new();

        let result = handle(
            &mut session,
            &Command::Host {
                location: "Dog Park".into(),
                date: "someday".into(),
                description: "Fun".into(),
            },
            &mut out,
        );

        assert!(matches!(result, Err(Error::InvalidDate { .. })));
        assert_eq!(session.playdates().len(), 2);
    }

    #[test]
    fn test_host_interactive_rejects_empty() {
        let mut session = session();
        let mut out = Vec::new();
        let mut lines = ["Dog Park", "  ", "Fun"].map(|s| Ok(s.to_string())).into_iter();

        host_interactive(&mut session, &mut lines, &mut out).unwrap();

        assert_eq!(session.playdates().len(), 2);
        assert!(String::from_utf8(out).unwrap().contains("date must not be empty"));
    }
}
