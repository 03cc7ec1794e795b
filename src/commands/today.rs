//! Today's games command implementation

use std::io::Write;

use super::{common::write_lines, CommandContext};
use crate::{format::today_lines, Result};

pub async fn handle_today<W: Write>(ctx: &CommandContext, out: &mut W) -> Result<()> {
    let schedule = ctx.client.fetch_schedule().await?;
    write_lines(out, &today_lines(&schedule))
}
