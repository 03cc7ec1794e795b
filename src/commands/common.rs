//! Shared command context and dispatch.

use std::io::Write;

use tracing::debug;

use super::{draft, roster, standings, stats, teams, today, Command};
use crate::{core::TeamCache, format::HELP, nhl::NhlClient, Result};

/// What the prompt should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Resources every command may need: the API client and the team cache
/// loaded at startup.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub client: NhlClient,
    pub teams: TeamCache,
}

impl CommandContext {
    pub fn new(client: NhlClient, teams: TeamCache) -> Self {
        Self { client, teams }
    }

    /// Build the context, filling the team cache with one `/teams` request.
    pub async fn load(client: NhlClient) -> Result<Self> {
        let teams = TeamCache::load(&client).await?;
        Ok(Self::new(client, teams))
    }

    /// Run one command, writing its output to `out`.
    pub async fn execute<W: Write>(&self, command: &Command, out: &mut W) -> Result<Flow> {
        debug!(command = command.name(), "executing");

        match command {
            Command::Standings { season } => {
                standings::handle_standings(self, season.as_ref(), out).await?
            }
            Command::Draft(query) => draft::handle_draft(self, query, out).await?,
            Command::Today => today::handle_today(self, out).await?,
            Command::Teams => teams::handle_teams(self, out)?,
            Command::Roster { team, season } => {
                roster::handle_roster(self, *team, season.as_ref(), out).await?
            }
            Command::Stats { player, season } => {
                stats::handle_stats(self, *player, season.as_ref(), out).await?
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Unrecognized(name) => debug!(command = %name, "ignoring unrecognized command"),
        }

        Ok(Flow::Continue)
    }
}

pub(crate) fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
