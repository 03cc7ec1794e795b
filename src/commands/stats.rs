//! Player stats command implementation

use std::io::Write;

use tracing::debug;

use super::{common::write_lines, CommandContext};
use crate::{
    cli::types::{PlayerId, Position, Season},
    format::player_stats_lines,
    nhl::types::PlayerStat,
    Result,
};

/// Print one player's single-season stats, goalie or skater layout.
pub async fn handle_stats<W: Write>(
    ctx: &CommandContext,
    player: PlayerId,
    season: Option<&Season>,
    out: &mut W,
) -> Result<()> {
    let split = ctx.client.fetch_player_stats(player, season).await?;
    let person = ctx.client.fetch_person(player).await?;

    let abbreviation = &person.primary_position.abbreviation;
    let goalie = match abbreviation.parse::<Position>() {
        Ok(position) => position.is_goalie(),
        Err(e) => {
            debug!(%player, error = %e, "unknown position, showing skater stats");
            false
        }
    };

    let stat = PlayerStat::from_split(&person, goalie, split)?;
    write_lines(out, &player_stats_lines(&stat))
}
