//! HTTP client for the NHL stats API.
//!
//! Every endpoint is a single GET awaited to completion; there are no retries
//! and no timeouts beyond reqwest's defaults.

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    cli::types::{DraftYear, PlayerId, Season, TeamId},
    error::NhlError,
    nhl::types::{
        DraftEnvelope, DraftPick, PeopleEnvelope, Person, RosterEnvelope, RosterEntry, Schedule,
        ScheduleEnvelope, StandingsDivision, StandingsEnvelope, StatSplit, StatsEnvelope, Team,
        TeamNameEnvelope, TeamsEnvelope,
    },
    Result,
};


/// Base path for the NHL stats v1 API.
pub const DEFAULT_BASE_URL: &str = "https://statsapi.web.nhl.com/api/v1";

const USER_AGENT: &str = concat!("nhl-stats/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct NhlClient {
    http: Client,
    base_url: String,
}

impl NhlClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?query, "GET");

        let response = self.http.get(&url).query(query).send().await?;
        debug!(status = %response.status(), %url, "response");

        let body = response.error_for_status()?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// `/teams`: every active franchise.
    pub async fn fetch_teams(&self) -> Result<Vec<Team>> {
        let envelope: TeamsEnvelope = self.get_json("/teams", &[]).await?;
        Ok(envelope.teams.into_iter().map(Team::from).collect())
    }

    /// `/teams/{id}`: just the team's display name.
    pub async fn fetch_team_name(&self, team: TeamId) -> Result<String> {
        let envelope: TeamNameEnvelope = self.get_json(&format!("/teams/{team}"), &[]).await?;
        envelope
            .teams
            .into_iter()
            .next()
            .map(|t| t.name)
            .ok_or_else(|| NhlError::no_data(format!("team {team}")))
    }

    /// `/teams/{id}?expand=team.roster[&season=]`
    pub async fn fetch_roster(
        &self,
        team: TeamId,
        season: Option<&Season>,
    ) -> Result<Vec<RosterEntry>> {
        let mut query = vec![("expand", "team.roster")];
        if let Some(season) = season {
            query.push(("season", season.as_str()));
        }

        let envelope: RosterEnvelope = self.get_json(&format!("/teams/{team}"), &query).await?;
        let team_roster = envelope
            .teams
            .into_iter()
            .next()
            .ok_or_else(|| NhlError::no_data(format!("roster for team {team}")))?;

        Ok(team_roster
            .roster
            .roster
            .into_iter()
            .map(RosterEntry::from)
            .collect())
    }

    /// `/standings[?season=]`, one block per division in API order.
    pub async fn fetch_standings(&self, season: Option<&Season>) -> Result<Vec<StandingsDivision>> {
        let query: Vec<(&str, &str)> = season.map(|s| ("season", s.as_str())).into_iter().collect();
        let envelope: StandingsEnvelope = self.get_json("/standings", &query).await?;
        Ok(envelope.into_divisions())
    }

    /// `/draft/{year}`, narrowed to one round (1-based).
    pub async fn fetch_draft_round(&self, year: DraftYear, round: u8) -> Result<Vec<DraftPick>> {
        let envelope: DraftEnvelope = self.get_json(&format!("/draft/{year}"), &[]).await?;
        let draft = envelope
            .drafts
            .into_iter()
            .next()
            .ok_or_else(|| NhlError::no_data(format!("{year} draft")))?;

        let index = usize::from(round.saturating_sub(1));
        let picks = draft
            .rounds
            .into_iter()
            .nth(index)
            .ok_or(NhlError::DraftRoundNotFound {
                year: year.as_u16(),
                round,
            })?
            .picks;

        Ok(picks.into_iter().map(DraftPick::from).collect())
    }

    /// `/schedule`: today's games.
    pub async fn fetch_schedule(&self) -> Result<Schedule> {
        let envelope: ScheduleEnvelope = self.get_json("/schedule", &[]).await?;
        Ok(Schedule::from(envelope))
    }

    /// `/people/{id}`
    pub async fn fetch_person(&self, player: PlayerId) -> Result<Person> {
        let envelope: PeopleEnvelope = self.get_json(&format!("/people/{player}"), &[]).await?;
        envelope
            .people
            .into_iter()
            .next()
            .ok_or_else(|| NhlError::no_data(format!("player {player}")))
    }

    /// `/people/{id}/stats?stats=statsSingleSeason[&season=]`, first split only.
    pub async fn fetch_player_stats(
        &self,
        player: PlayerId,
        season: Option<&Season>,
    ) -> Result<StatSplit> {
        let mut query = vec![("stats", "statsSingleSeason")];
        if let Some(season) = season {
            query.push(("season", season.as_str()));
        }

        let envelope: StatsEnvelope = self
            .get_json(&format!("/people/{player}/stats"), &query)
            .await?;

        envelope
            .stats
            .into_iter()
            .next()
            .and_then(|group| group.splits.into_iter().next())
            .ok_or_else(|| NhlError::no_data(format!("season stats for player {player}")))
    }
}
