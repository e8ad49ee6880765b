use std::io::{self, Write};

use colored::Colorize;
use pawsome_lib::{Match, MatchSession, Playdate, Profile};

pub fn profile(out: &mut impl Write, profile: &Profile) -> io::Result<()> {
    writeln!(
        out,
        "{}, {} ({})",
        profile.name().bold(),
        profile.age(),
        profile.breed()
    )?;
    writeln!(out, "  {}", profile.image_url().dimmed())
}

pub fn matches(out: &mut impl Write, matches: &[Match]) -> io::Result<()> {
    writeln!(out, "{}", "Your Matches".underline())?;
    for m in matches {
        writeln!(out, "* {} {}", m.name(), format!("#{}", m.id()).dimmed())?;
    }
    Ok(())
}

pub fn playdates(out: &mut impl Write, playdates: &[Playdate]) -> io::Result<()> {
    writeln!(out, "{}", "Nearby Playdates".underline())?;
    for playdate in playdates {
        writeln!(
            out,
            "{} {} @ {}",
            format!("#{}", playdate.id()).dimmed(),
            playdate.date().cyan(),
            playdate.location().bold()
        )?;
        writeln!(out, "    {}", playdate.description())?;
        writeln!(out, "    Hosted by: {}", playdate.host_name())?;
    }
    Ok(())
}

pub fn posts(out: &mut impl Write, session: &MatchSession) -> io::Result<()> {
    writeln!(out, "{}", "Match Posts".underline())?;

    let mut empty = true;
    for post in session.posts() {
        empty = false;
        writeln!(out, "* {}: {}", post.author.bold(), post.url)?;
    }
    if empty {
        writeln!(out, "  No posts yet")?;
    }

    Ok(())
}
