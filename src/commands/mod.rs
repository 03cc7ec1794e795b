//! Command implementations for the NHL stats CLI
//!
//! A prompt line is parsed into a [`Command`] before anything touches the
//! network, so argument mistakes are reported without a request being made.

pub mod common;
pub mod draft;
pub mod roster;
pub mod standings;
pub mod stats;
pub mod teams;
pub mod today;

#[cfg(test)]
mod tests;

use crate::{
    cli::types::{DraftYear, PlayerId, Season, TeamId},
    error::NhlError,
    Result,
};

pub use common::{CommandContext, Flow};

/// Parameters of the `draft` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftQuery {
    pub year: DraftYear,
    /// 1-based round number.
    pub round: u8,
    /// Maximum number of picks to list.
    pub picks: usize,
}

impl Default for DraftQuery {
    fn default() -> Self {
        Self {
            year: DraftYear::default(),
            round: 1,
            picks: 25,
        }
    }
}

/// One validated prompt command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Standings { season: Option<Season> },
    Draft(DraftQuery),
    Today,
    Teams,
    Roster { team: TeamId, season: Option<Season> },
    Stats { player: PlayerId, season: Option<Season> },
    Help,
    Quit,
    /// Any other first word; the prompt ignores these.
    Unrecognized(String),
}

impl Command {
    /// Parse one prompt line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match name {
            "standings" => {
                expect_at_most("standings", &args, 1)?;
                Command::Standings {
                    season: optional_season(args.first())?,
                }
            }
            "draft" => {
                expect_at_most("draft", &args, 3)?;
                Command::Draft(parse_draft(&args)?)
            }
            "today" => {
                expect_at_most("today", &args, 0)?;
                Command::Today
            }
            "teams" => {
                expect_at_most("teams", &args, 0)?;
                Command::Teams
            }
            "roster" => {
                expect_at_most("roster", &args, 2)?;
                let team = args.first().ok_or(NhlError::MissingArgument {
                    command: "roster",
                    name: "team id",
                })?;
                Command::Roster {
                    team: team.parse()?,
                    season: optional_season(args.get(1))?,
                }
            }
            "stats" => {
                expect_at_most("stats", &args, 2)?;
                let player = args.first().ok_or(NhlError::MissingArgument {
                    command: "stats",
                    name: "player id",
                })?;
                Command::Stats {
                    player: player.parse()?,
                    season: optional_season(args.get(1))?,
                }
            }
            "help" | "description" => Command::Help,
            "quit" => Command::Quit,
            other => Command::Unrecognized(other.to_string()),
        };

        Ok(Some(command))
    }

    pub fn name(&self) -> &str {
        match self {
            Command::Standings { .. } => "standings",
            Command::Draft(_) => "draft",
            Command::Today => "today",
            Command::Teams => "teams",
            Command::Roster { .. } => "roster",
            Command::Stats { .. } => "stats",
            Command::Help => "help",
            Command::Quit => "quit",
            Command::Unrecognized(name) => name,
        }
    }
}

fn expect_at_most(command: &'static str, args: &[&str], max: usize) -> Result<()> {
    if args.len() > max {
        Err(NhlError::TooManyArguments { command, max })
    } else {
        Ok(())
    }
}

fn optional_season(arg: Option<&&str>) -> Result<Option<Season>> {
    arg.map(|s| s.parse()).transpose()
}

/// Positional `[year] [round] [picks]`, each falling back to its default.
fn parse_draft(args: &[&str]) -> Result<DraftQuery> {
    let mut query = DraftQuery::default();

    if let Some(year) = args.first() {
        query.year = year.parse()?;
    }
    if let Some(round) = args.get(1) {
        query.round = match round.parse::<u8>() {
            Ok(r) if r >= 1 => r,
            _ => {
                return Err(NhlError::InvalidArgument {
                    name: "draft round",
                    value: round.to_string(),
                })
            }
        };
    }
    if let Some(picks) = args.get(2) {
        query.picks = picks.parse().map_err(|_| NhlError::InvalidArgument {
            name: "pick count",
            value: picks.to_string(),
        })?;
    }

    Ok(query)
}
