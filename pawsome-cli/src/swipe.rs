use std::io::{self, BufRead, Write};

use colored::Colorize;
use pawsome_lib::{Decision, MatchSession, Result};
use tracing::debug;

use crate::{output, playdate};

const PROMPT: &str = "[y]es [n]o [m]atches [p]laydates [g]allery [h]ost [q]uit > ";

/// Apply `decisions` in order, then show where the session ended up.
pub fn handle(
    session: &mut MatchSession,
    decisions: &[Decision],
    out: &mut impl Write,
) -> Result<()> {
    for decision in decisions {
        decide(session, *decision, out)?;
    }

    writeln!(out)?;
    output::matches(out, session.matches())?;
    writeln!(out)?;
    if let Some(profile) = session.current_profile() {
        write!(out, "Up next: ")?;
        output::profile(out, profile)?;
    }

    Ok(())
}

/// Interactive browsing. Reads one command per line from `input` until it runs out or the
/// user quits.
pub fn browse(session: &mut MatchSession, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut lines = input.lines();
    let mut show_card = true;

    loop {
        if show_card && let Some(profile) = session.current_profile() {
            writeln!(out)?;
            output::profile(out, profile)?;
        }
        show_card = false;

        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match line.trim() {
            "q" | "quit" => break,
            "m" | "matches" => output::matches(out, session.matches())?,
            "p" | "playdates" => output::playdates(out, session.playdates())?,
            "g" | "gallery" => output::posts(out, session)?,
            "h" | "host" => playdate::host_interactive(session, &mut lines, out)?,
            "" => {}
            command => match command.parse::<Decision>() {
                Ok(decision) => {
                    decide(session, decision, out)?;
                    show_card = true;
                }
                Err(_) => {
                    debug!("Unknown browse command: {command}");
                    writeln!(out, "{} '{command}'", "Unknown command".yellow())?;
                }
            },
        }
    }

    writeln!(out)?;
    Ok(())
}

fn decide(session: &mut MatchSession, decision: Decision, out: &mut impl Write) -> io::Result<()> {
    let name = session
        .current_profile()
        .map(|profile| profile.name().clone())
        .unwrap_or_default();

    match session.decide(decision.liked()) {
        Some(new_match) => writeln!(out, "{} {}", "Matched with".green(), new_match.name()),
        None => writeln!(out, "{} {name}", "Passed on".red()),
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use pawsome_lib::{CurrentUser, Seed};

    use super::*;

    fn session() -> MatchSession {
        MatchSession::new(Seed::builtin().unwrap(), CurrentUser::default()).unwrap()
    }

    #[test]
    fn test_handle() {
        colored::control::set_override(false);
        let mut session = session();
        let mut out = Vec::new();

        handle(
            &mut session,
            &[Decision::Like, Decision::Pass, Decision::Like, Decision::Like],
            &mut out,
        )
        .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Matched with Buddy"));
        assert!(out.contains("Passed on Luna"));
        assert!(out.contains("Up next: Buddy, 3"));
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.matches().len(), 5);
    }

    #[test]
    fn test_browse() {
        colored::control::set_override(false);
        let mut session = session();
        let mut out = Vec::new();

        browse(&mut session, Cursor::new("n\ny\nwoof\nm\nq\ny\n"), &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Passed on Buddy"));
        assert!(out.contains("Matched with Luna"));
        assert!(out.contains("Unknown command 'woof'"));
        assert!(out.contains("Your Matches"));
        // Nothing after "q" is read
        assert_eq!(session.cursor(), 2);
        assert_eq!(session.matches().len(), 3);
    }

    #[test]
    fn test_browse_host() {
        colored::control::set_override(false);
        let mut session = session();
        let mut out = Vec::new();

        browse(
            &mut session,
            Cursor::new("h\nDog Park\n2024-01-01\nFun\n"),
            &mut out,
        )
        .unwrap();

        assert_eq!(session.playdates().len(), 3);
        assert_eq!(
            session.playdates().last().map(|p| p.host_name().as_str()),
            Some("You")
        );
    }
}
