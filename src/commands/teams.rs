//! Teams command implementation

use std::io::Write;

use super::{common::write_lines, CommandContext};
use crate::{format::teams_lines, Result};

/// Print the cached team table; no request is made.
pub fn handle_teams<W: Write>(ctx: &CommandContext, out: &mut W) -> Result<()> {
    write_lines(out, &teams_lines(ctx.teams.iter()))
}
