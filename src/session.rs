//! The interactive prompt.
//!
//! Reads one command per line until `quit` or end of input. A failing command
//! prints its error and the prompt carries on; only a broken output stream
//! ends the session early.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::{
    commands::{Command, CommandContext, Flow},
    error::NhlError,
    format::HELP,
    Result,
};

pub async fn run<R: BufRead, W: Write>(ctx: &CommandContext, input: R, out: &mut W) -> Result<()> {
    writeln!(out, "{HELP}")?;
    writeln!(out, "\n Choice?")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if step(ctx, &line, out).await? == Flow::Quit {
            debug!("quit requested");
            break;
        }
        writeln!(out, "\n Next choice?")?;
        out.flush()?;
    }

    Ok(())
}

/// Parse and run a single line, reporting command failures to `out`.
pub async fn step<W: Write>(ctx: &CommandContext, line: &str, out: &mut W) -> Result<Flow> {
    let outcome = match Command::parse(line) {
        Ok(Some(command)) => ctx.execute(&command, out).await,
        Ok(None) => Ok(Flow::Continue),
        Err(e) => Err(e),
    };

    match outcome {
        Ok(flow) => Ok(flow),
        Err(NhlError::Io(e)) => Err(NhlError::Io(e)),
        Err(e) => {
            debug!(error = ?e, line, "command failed");
            writeln!(out, "There was a problem: {e}")?;
            Ok(Flow::Continue)
        }
    }
}
