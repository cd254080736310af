use std::{
    convert::Infallible,
    io::{self, Write},
};

use eyre::{Result, WrapErr};
use huisbot_model::parse_huis_mods;
use huisbot_util::osu::GameMods;
use serde::Serialize;

use crate::core::AppConfig;

mod adjust;
mod attribute;
mod beatmap;

#[derive(clap::Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand)]
pub enum Command {
    /// Adjust all attributes of a beatmap
    Adjust(adjust::Args),
    /// Adjust a single attribute value
    Attribute(attribute::Args),
    /// Adjust the attributes of a beatmap from an osu!api v1 response
    Beatmap(beatmap::Args),
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Adjust(args) => adjust::run(args),
        Command::Attribute(args) => attribute::run(args),
        Command::Beatmap(args) => beatmap::run(args),
    }
}

#[derive(clap::Args)]
struct ModsArgs {
    /// Mods such as `HRDT`, `+hdnc`, or `HR, DT, CL`
    #[arg(short, long, value_parser = parse_mods)]
    mods: Option<GameMods>,
}

impl ModsArgs {
    fn resolve(self) -> GameMods {
        self.mods
            .unwrap_or_else(|| AppConfig::get().default_mods.clone())
    }
}

fn parse_mods(s: &str) -> Result<GameMods, Infallible> {
    Ok(mods_from_input(s))
}

/// Accepts `HRDT`, `+hrdt`, and comma separated lists like `HR, DT, CL`.
pub(crate) fn mods_from_input(s: &str) -> GameMods {
    let s = s.trim().trim_start_matches('+').to_ascii_uppercase();

    if s.contains(',') {
        parse_huis_mods(&s)
    } else {
        GameMods::parse(&s)
    }
}

/// `NM` for no mods, `+HRDT` otherwise
struct ModsLabel<'m>(&'m GameMods);

impl std::fmt::Display for ModsLabel<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            f.write_str("NM")
        } else {
            write!(f, "+{}", self.0)
        }
    }
}

#[derive(clap::Args)]
struct OutputArgs {
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();

    serde_json::to_writer_pretty(&mut stdout, value).wrap_err("failed to serialize output")?;
    writeln!(stdout).wrap_err("failed to write output")
}

fn print_lines<I, L>(lines: I) -> Result<()>
where
    I: IntoIterator<Item = L>,
    L: std::fmt::Display,
{
    let mut stdout = io::stdout().lock();

    for line in lines {
        writeln!(stdout, "{line}").wrap_err("failed to write output")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> GameMods {
        match parse_mods(s) {
            Ok(mods) => mods,
            Err(never) => match never {},
        }
    }

    #[test]
    fn mods_argument() {
        assert_eq!(parse("HRDT"), GameMods::parse("HRDT"));
        assert_eq!(parse("+hrdt"), GameMods::parse("HRDT"));
        assert_eq!(parse(" HR, DT, CL "), GameMods::parse("HRDT"));
        assert!(parse("").is_empty());
    }

    #[test]
    fn mods_argument_without_spaces() {
        assert_eq!(parse("HR,DT"), GameMods::parse("HRDT"));
        assert_eq!(parse("hr ,dt"), GameMods::parse("HRDT"));
        assert_eq!(parse("+nc,hr"), GameMods::parse("HRDT"));
        assert!(parse("HR,DT").double_time());
    }

    #[test]
    fn mods_label() {
        assert_eq!(ModsLabel(&GameMods::new()).to_string(), "NM");
        assert_eq!(ModsLabel(&GameMods::parse("NCHR")).to_string(), "+HRDT");
    }
}
