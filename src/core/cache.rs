//! In-memory team cache.
//!
//! Filled once from `/teams` before the prompt starts and never refreshed
//! afterwards. Commands that need to show a team by id look it up here.

use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    cli::types::TeamId,
    nhl::{types::Team, NhlClient},
    Result,
};

#[derive(Debug, Clone, Default)]
pub struct TeamCache {
    teams: BTreeMap<TeamId, Team>,
}

impl TeamCache {
    /// Fetch every team once and index it by id.
    pub async fn load(client: &NhlClient) -> Result<Self> {
        let teams = client.fetch_teams().await?;
        let cache = Self::from_teams(teams);
        debug!(teams = cache.len(), "team cache loaded");
        Ok(cache)
    }

    /// Later duplicates of an id replace earlier ones.
    pub fn from_teams(teams: impl IntoIterator<Item = Team>) -> Self {
        Self {
            teams: teams.into_iter().map(|t| (t.id, t)).collect(),
        }
    }

    pub fn get(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(&id)
    }

    pub fn name_of(&self, id: TeamId) -> Option<&str> {
        self.get(id).map(|t| t.name.as_str())
    }

    /// Teams in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.values()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}
