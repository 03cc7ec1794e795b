//! Roster command implementation

use std::io::Write;

use tracing::debug;

use super::{common::write_lines, CommandContext};
use crate::{
    cli::types::{Season, TeamId},
    format::{roster_banner, roster_lines},
    Result,
};

/// Print a team's roster for `season`, or for the current season.
pub async fn handle_roster<W: Write>(
    ctx: &CommandContext,
    team: TeamId,
    season: Option<&Season>,
    out: &mut W,
) -> Result<()> {
    let roster = ctx.client.fetch_roster(team, season).await?;
    let team_name = team_name(ctx, team).await?;

    writeln!(out, "{}", roster_banner(season))?;
    write_lines(out, &roster_lines(&team_name, &roster))
}

/// Resolve through the team cache; ids it doesn't know (relocated or
/// defunct franchises) cost one `/teams/{id}` request.
async fn team_name(ctx: &CommandContext, team: TeamId) -> Result<String> {
    if let Some(name) = ctx.teams.name_of(team) {
        return Ok(name.to_string());
    }
    debug!(%team, "team not cached, fetching name");
    ctx.client.fetch_team_name(team).await
}
