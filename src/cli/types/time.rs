//! Time-related types for NHL seasons and draft years.

use crate::error::{NhlError, Result};
use std::fmt;
use std::str::FromStr;

/// An NHL season code: two consecutive years concatenated, e.g. `20162017`.
///
/// Only the shape is validated (exactly 8 ASCII digits); the API decides
/// whether the season exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Season(String);

impl Season {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Season {
    type Err = NhlError;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s.to_string()))
        } else {
            Err(NhlError::InvalidSeason {
                value: s.to_string(),
            })
        }
    }
}

/// Draft year accepted by the `draft` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DraftYear(u16);

impl DraftYear {
    pub const FIRST: u16 = 1981;
    pub const LATEST: u16 = 2018;

    pub fn new(year: u16) -> Result<Self> {
        if (Self::FIRST..=Self::LATEST).contains(&year) {
            Ok(Self(year))
        } else {
            Err(NhlError::InvalidDraftYear {
                year,
                min: Self::FIRST,
                max: Self::LATEST,
            })
        }
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for DraftYear {
    fn default() -> Self {
        Self(Self::LATEST)
    }
}

impl fmt::Display for DraftYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DraftYear {
    type Err = NhlError;

    fn from_str(s: &str) -> Result<Self> {
        let year = s.parse::<u16>().map_err(|_| NhlError::InvalidArgument {
            name: "draft year",
            value: s.to_string(),
        })?;
        Self::new(year)
    }
}
