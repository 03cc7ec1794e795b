//! Hockey player positions.

use crate::error::NhlError;
use std::fmt;
use std::str::FromStr;

/// Hockey player positions as abbreviated by the NHL API
/// (`primaryPosition.abbreviation`).
///
/// Stat display branches on [`Position::is_goalie`]: goaltenders get the
/// record/save-percentage block, every other position is a skater.
///
/// # Examples
///
/// ```rust
/// use nhl_stats::Position;
///
/// let goalie: Position = "G".parse().unwrap();
/// assert!(goalie.is_goalie());
/// assert_eq!(Position::LeftWing.to_string(), "LW");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Center,
    LeftWing,
    RightWing,
    Defense,
    Goalie,
}

impl Position {
    pub fn is_goalie(&self) -> bool {
        matches!(self, Position::Goalie)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::Center => "C",
            Position::LeftWing => "LW",
            Position::RightWing => "RW",
            Position::Defense => "D",
            Position::Goalie => "G",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = NhlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "C" | "CENTER" => Ok(Position::Center),
            "LW" | "LEFT WING" => Ok(Position::LeftWing),
            "RW" | "RIGHT WING" => Ok(Position::RightWing),
            "D" | "DEFENSEMAN" => Ok(Position::Defense),
            "G" | "GOALIE" => Ok(Position::Goalie),
            _ => Err(NhlError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
