//! CLI argument definitions and parsing.

pub mod types;

use clap::Parser;

use crate::{nhl::http::DEFAULT_BASE_URL, BASE_URL_ENV_VAR};

/// Interactive client for the NHL statistics API.
///
/// Commands are typed at the prompt once the team list has loaded; the
/// flags below only configure the session.
#[derive(Debug, Parser)]
#[clap(name = "nhl-stats", about = "NHL statistics in your terminal", version)]
pub struct NhlCli {
    /// Base URL of the NHL stats API (or set `NHL_API_BASE_URL`).
    #[clap(long, env = BASE_URL_ENV_VAR, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Log every request URL and response status to stderr.
    #[clap(long)]
    pub debug: bool,
}
