//! Standings command implementation

use std::io::Write;

use super::{common::write_lines, CommandContext};
use crate::{
    cli::types::Season,
    format::{standings_banner, standings_lines},
    Result,
};

/// Print the standings of `season`, or of the current season.
pub async fn handle_standings<W: Write>(
    ctx: &CommandContext,
    season: Option<&Season>,
    out: &mut W,
) -> Result<()> {
    let divisions = ctx.client.fetch_standings(season).await?;

    writeln!(out, "{}", standings_banner(season))?;
    write_lines(out, &standings_lines(&divisions))
}
