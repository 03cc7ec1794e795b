//! Type-safe wrappers and enums for NHL API data.

pub mod ids;
pub mod position;
pub mod time;

pub use ids::{PlayerId, TeamId};
pub use position::Position;
pub use time::{DraftYear, Season};
