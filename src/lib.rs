//! NHL stats CLI library
//!
//! An interactive terminal client for the public NHL statistics API:
//! standings, rosters, draft results, today's games and player stats,
//! formatted as plain text.
//!
//! ## Features
//!
//! - **Team Cache**: all teams are fetched once at startup and reused for display
//! - **Typed Commands**: prompt lines are validated into [`Command`] values before any request
//! - **Text Layouts**: fixed-width renderers for every command in [`format`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nhl_stats::{session, CommandContext, NhlClient, DEFAULT_BASE_URL};
//!
//! # async fn example() -> nhl_stats::Result<()> {
//! let client = NhlClient::new(DEFAULT_BASE_URL)?;
//! let ctx = CommandContext::load(client).await?;
//!
//! let input = std::io::Cursor::new("standings 20162017\nquit\n");
//! session::run(&ctx, input, &mut std::io::stdout()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the client at another API host (a mirror or a local mock):
//! ```bash
//! export NHL_API_BASE_URL=http://localhost:8080/api/v1
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod format;
pub mod nhl;
pub mod session;

// Re-export commonly used types
pub use cli::types::{DraftYear, PlayerId, Position, Season, TeamId};
pub use commands::{Command, CommandContext, DraftQuery, Flow};
pub use crate::core::TeamCache;
pub use error::{NhlError, Result};
pub use nhl::{NhlClient, DEFAULT_BASE_URL};

pub const BASE_URL_ENV_VAR: &str = "NHL_API_BASE_URL";
