//! ID types for NHL teams and players.

use crate::error::{NhlError, Result};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for NHL team IDs.
///
/// Team IDs are the only stable key the API offers for teams; the team cache,
/// roster lookups and team listings are all keyed by it.
///
/// # Examples
///
/// ```rust
/// use nhl_stats::TeamId;
///
/// let team_id: TeamId = "6".parse().unwrap();
/// assert_eq!(team_id.as_u32(), 6);
/// assert_eq!(team_id.to_string(), "6");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub struct TeamId(pub u32);

impl TeamId {
    /// Create a new TeamId from a u32 value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = NhlError;

    fn from_str(s: &str) -> Result<Self> {
        parse_positive(s, "team id").map(Self)
    }
}

/// Type-safe wrapper for Player IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = NhlError;

    fn from_str(s: &str) -> Result<Self> {
        parse_positive(s, "player id").map(Self)
    }
}

fn parse_positive<T>(s: &str, name: &'static str) -> Result<T>
where
    T: FromStr + Default + PartialEq,
{
    match s.parse::<T>() {
        Ok(id) if id != T::default() => Ok(id),
        _ => Err(NhlError::InvalidArgument {
            name,
            value: s.to_string(),
        }),
    }
}
