//! Response envelopes and domain records for the NHL stats API.

use crate::cli::types::{PlayerId, TeamId};
use serde::{de::Error, Deserialize, Deserializer};
use serde_json::{Number, Value};


/// The API sends some numbers as strings (`"firstYearOfPlay": "1917"`)
/// and others as bare numbers; accept both.
fn de_u16_from_str_or_number<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => s.trim().parse::<u16>().map_err(D::Error::custom),
        Value::Number(n) => n
            .as_u64()
            .and_then(|v| u16::try_from(v).ok())
            .ok_or_else(|| D::Error::custom(format!("number out of range: {n}"))),
        other => Err(D::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

/// Draft rounds come back as `"1"` while picks are numbers.
fn de_u8_from_str_or_number<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = de_u16_from_str_or_number(deserializer)?;
    u8::try_from(value).map_err(D::Error::custom)
}

/// Any object that carries a display `name` (team, conference, division).
#[derive(Debug, Clone, Deserialize)]
pub struct Named {
    pub name: String,
}

// ---------------------------------------------------------------------------
// /teams and /teams/{id}
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct TeamsEnvelope {
    pub teams: Vec<ApiTeam>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiTeam {
    pub id: TeamId,
    pub name: String,
    pub abbreviation: String,
    #[serde(rename = "firstYearOfPlay", deserialize_with = "de_u16_from_str_or_number")]
    pub first_year_of_play: u16,
    pub conference: Named,
    pub division: Named,
}

/// Team metadata held by the team cache for the whole session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub abbreviation: String,
    pub first_year: u16,
    pub conference: String,
    pub division: String,
}

impl From<ApiTeam> for Team {
    fn from(t: ApiTeam) -> Self {
        Self {
            id: t.id,
            name: t.name,
            abbreviation: t.abbreviation,
            first_year: t.first_year_of_play,
            conference: t.conference.name,
            division: t.division.name,
        }
    }
}

/// `/teams/{id}` only needs to yield a name.
#[derive(Debug, Deserialize)]
pub struct TeamNameEnvelope {
    pub teams: Vec<Named>,
}

// ---------------------------------------------------------------------------
// /teams/{id}?expand=team.roster
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct RosterEnvelope {
    pub teams: Vec<TeamWithRoster>,
}

#[derive(Debug, Deserialize)]
pub struct TeamWithRoster {
    pub roster: RosterList,
}

#[derive(Debug, Deserialize)]
pub struct RosterList {
    pub roster: Vec<ApiRosterEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ApiRosterEntry {
    pub person: PersonRef,
    pub position: PositionRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonRef {
    pub id: PlayerId,
    #[serde(rename = "fullName")]
    pub full_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PositionRef {
    pub name: String,
    pub abbreviation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub id: PlayerId,
    pub full_name: String,
    pub position: String,
}

impl From<ApiRosterEntry> for RosterEntry {
    fn from(e: ApiRosterEntry) -> Self {
        Self {
            id: e.person.id,
            full_name: e.person.full_name,
            position: e.position.name,
        }
    }
}

// ---------------------------------------------------------------------------
// /standings
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct StandingsEnvelope {
    pub records: Vec<DivisionRecord>,
}

#[derive(Debug, Deserialize)]
pub struct DivisionRecord {
    pub division: Named,
    #[serde(rename = "teamRecords")]
    pub team_records: Vec<ApiTeamRecord>,
}

#[derive(Debug, Deserialize)]
pub struct ApiTeamRecord {
    pub team: Named,
    #[serde(rename = "clinchIndicator", default)]
    pub clinch_indicator: Option<String>,
    pub points: u32,
    #[serde(rename = "leagueRecord")]
    pub league_record: LeagueRecord,
}

#[derive(Debug, Deserialize)]
pub struct LeagueRecord {
    pub wins: u32,
    pub losses: u32,
    pub ot: u32,
}

/// One team's line in the standings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsRecord {
    pub division_name: String,
    pub team_name: String,
    pub clinch_indicator: Option<String>,
    pub points: u32,
    pub wins: u32,
    pub losses: u32,
    pub overtime_losses: u32,
}

/// A division block in API order. `teams` may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsDivision {
    pub name: String,
    pub teams: Vec<StandingsRecord>,
}

impl From<DivisionRecord> for StandingsDivision {
    fn from(division: DivisionRecord) -> Self {
        let name = division.division.name;
        let teams = division
            .team_records
            .into_iter()
            .map(|r| StandingsRecord {
                division_name: name.clone(),
                team_name: r.team.name,
                clinch_indicator: r.clinch_indicator,
                points: r.points,
                wins: r.league_record.wins,
                losses: r.league_record.losses,
                overtime_losses: r.league_record.ot,
            })
            .collect();
        Self { name, teams }
    }
}

impl StandingsEnvelope {
    pub fn into_divisions(self) -> Vec<StandingsDivision> {
        self.records.into_iter().map(StandingsDivision::from).collect()
    }
}

// ---------------------------------------------------------------------------
// /draft/{year}
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct DraftEnvelope {
    pub drafts: Vec<Draft>,
}

#[derive(Debug, Deserialize)]
pub struct Draft {
    pub rounds: Vec<DraftRound>,
}

#[derive(Debug, Deserialize)]
pub struct DraftRound {
    pub picks: Vec<ApiDraftPick>,
}

#[derive(Debug, Deserialize)]
pub struct ApiDraftPick {
    #[serde(deserialize_with = "de_u8_from_str_or_number")]
    pub round: u8,
    #[serde(rename = "pickInRound")]
    pub pick_in_round: u16,
    pub prospect: Prospect,
    pub team: Named,
}

#[derive(Debug, Deserialize)]
pub struct Prospect {
    #[serde(rename = "fullName")]
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftPick {
    pub round: u8,
    pub pick_in_round: u16,
    pub prospect_name: String,
    pub team_name: String,
}

impl From<ApiDraftPick> for DraftPick {
    fn from(p: ApiDraftPick) -> Self {
        Self {
            round: p.round,
            pick_in_round: p.pick_in_round,
            prospect_name: p.prospect.full_name,
            team_name: p.team.name,
        }
    }
}

// ---------------------------------------------------------------------------
// /schedule
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ScheduleEnvelope {
    #[serde(rename = "totalGames")]
    pub total_games: u32,
    #[serde(default)]
    pub dates: Vec<ScheduleDate>,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleDate {
    pub date: String,
    pub games: Vec<ApiGame>,
}

#[derive(Debug, Deserialize)]
pub struct ApiGame {
    pub teams: GameTeams,
    pub status: GameStatus,
}

#[derive(Debug, Deserialize)]
pub struct GameTeams {
    pub away: GameSide,
    pub home: GameSide,
}

#[derive(Debug, Deserialize)]
pub struct GameSide {
    pub team: Named,
    pub score: u32,
}

#[derive(Debug, Deserialize)]
pub struct GameStatus {
    #[serde(rename = "abstractGameState")]
    pub abstract_game_state: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub away_team: String,
    pub home_team: String,
    pub away_score: u32,
    pub home_score: u32,
    pub status: String,
}

impl From<ApiGame> for GameSummary {
    fn from(g: ApiGame) -> Self {
        Self {
            away_team: g.teams.away.team.name,
            home_team: g.teams.home.team.name,
            away_score: g.teams.away.score,
            home_score: g.teams.home.score,
            status: g.status.abstract_game_state,
        }
    }
}

/// A day's schedule: the first listed date, if any games are scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub total_games: u32,
    pub date: Option<String>,
    pub games: Vec<GameSummary>,
}

impl From<ScheduleEnvelope> for Schedule {
    fn from(s: ScheduleEnvelope) -> Self {
        match s.dates.into_iter().next() {
            Some(day) => Self {
                total_games: s.total_games,
                date: Some(day.date),
                games: day.games.into_iter().map(GameSummary::from).collect(),
            },
            None => Self {
                total_games: s.total_games,
                date: None,
                games: Vec::new(),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// /people/{id} and /people/{id}/stats
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct PeopleEnvelope {
    pub people: Vec<Person>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    pub id: PlayerId,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(rename = "primaryPosition")]
    pub primary_position: PositionRef,
}

#[derive(Debug, Deserialize)]
pub struct StatsEnvelope {
    pub stats: Vec<StatGroup>,
}

#[derive(Debug, Deserialize)]
pub struct StatGroup {
    pub splits: Vec<StatSplit>,
}

/// A single-season split; `stat` is decoded later once the player's
/// position is known.
#[derive(Debug, Deserialize)]
pub struct StatSplit {
    pub season: String,
    pub stat: Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkaterStats {
    pub games: u32,
    pub goals: u32,
    pub assists: u32,
    pub points: u32,
    pub plus_minus: i32,
    pub game_winning_goals: u32,
    pub short_handed_goals: u32,
    pub power_play_goals: u32,
    pub power_play_points: u32,
    pub pim: u32,
    pub time_on_ice_per_game: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalieStats {
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub ot: u32,
    pub shutouts: u32,
    /// Kept as sent so whole values still print as `1.0`.
    pub save_percentage: Number,
    #[serde(rename = "goalAgainstAverage")]
    pub goals_against_average: Number,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatLine {
    Skater(SkaterStats),
    Goalie(GoalieStats),
}

/// Player header plus the position-dependent stat block.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStat {
    pub name: String,
    pub position: String,
    pub season: String,
    pub stats: StatLine,
}

impl PlayerStat {
    /// Decode `split.stat` as a goalie or skater block.
    pub fn from_split(
        person: &Person,
        goalie: bool,
        split: StatSplit,
    ) -> serde_json::Result<Self> {
        let stats = if goalie {
            StatLine::Goalie(serde_json::from_value(split.stat)?)
        } else {
            StatLine::Skater(serde_json::from_value(split.stat)?)
        };
        Ok(Self {
            name: person.full_name.clone(),
            position: person.primary_position.abbreviation.clone(),
            season: split.season,
            stats,
        })
    }
}
