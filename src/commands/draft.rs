//! Draft command implementation

use std::io::Write;

use super::{common::write_lines, CommandContext, DraftQuery};
use crate::{format::draft_lines, Result};

/// Print up to `query.picks` picks of one draft round.
pub async fn handle_draft<W: Write>(
    ctx: &CommandContext,
    query: &DraftQuery,
    out: &mut W,
) -> Result<()> {
    let round_picks = ctx
        .client
        .fetch_draft_round(query.year, query.round)
        .await?;

    write_lines(
        out,
        &draft_lines(query.year, query.round, query.picks, &round_picks),
    )
}
