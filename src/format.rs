//! Plain-text renderers for each command's output.
//!
//! Every function returns the lines to print, without trailing newlines, so
//! the layouts can be checked without a terminal.

use crate::{
    cli::types::{DraftYear, Season},
    nhl::types::{
        DraftPick, PlayerStat, RosterEntry, Schedule, StandingsDivision, StandingsRecord, StatLine,
        Team,
    },
};


pub const HELP: &str = " Welcome. Supported calls: \n \
- today : get today's games \n \
- standings [season] : print the standings \n \
- teams : print teams with some infos (including ids, useful for roster) \n \
- roster teamid [season] : print roster of specified team (useful for stats) \n \
- stats playerid [season] : print player stats \n \
- draft [year] [round] [picks] : print the draft results \n \
- help : print this description \n \
- quit : to quit \n\
[] = optional argument";

const ROSTER_WIDTH: usize = 47;
const DRAFT_FRAME: usize = 46;
const TODAY_FRAME: usize = 60;
const TEAMS_FRAME: usize = 55;

pub fn standings_banner(season: Option<&Season>) -> String {
    match season {
        Some(season) => format!("Season: {season}"),
        None => "Season : current".to_string(),
    }
}

/// Division name, then one indented line per team, for every division.
pub fn standings_lines(divisions: &[StandingsDivision]) -> Vec<String> {
    let mut lines = Vec::new();
    for division in divisions {
        lines.push(division.name.clone());
        lines.extend(division.teams.iter().map(standings_line));
    }
    lines
}

pub fn standings_line(record: &StandingsRecord) -> String {
    let name = match &record.clinch_indicator {
        Some(indicator) => format!("{} ({})", record.team_name, indicator),
        None => record.team_name.clone(),
    };
    format!(
        "   {:<25}{}pt  {}-{}-{}",
        name, record.points, record.wins, record.losses, record.overtime_losses
    )
}

pub fn teams_lines<'a>(teams: impl IntoIterator<Item = &'a Team>) -> Vec<String> {
    let frame = "*".repeat(TEAMS_FRAME);
    let mut lines = vec![
        format!("ID Name{}Abbr 1stY Conf    Div", " ".repeat(18)),
        frame.clone(),
    ];
    lines.extend(teams.into_iter().map(|t| {
        format!(
            "{:<3}{:<22}{}  {} {} {}",
            t.id.to_string(),
            t.name,
            t.abbreviation,
            t.first_year,
            t.conference,
            t.division
        )
    }));
    lines.push(frame);
    lines
}

pub fn roster_banner(season: Option<&Season>) -> String {
    match season {
        Some(season) => format!("{season} roster"),
        None => "Current season roster".to_string(),
    }
}

pub fn roster_lines(team_name: &str, roster: &[RosterEntry]) -> Vec<String> {
    let mut lines = Vec::with_capacity(roster.len() + 2);
    lines.push(centre_in_hashes(team_name, ROSTER_WIDTH));
    lines.extend(
        roster
            .iter()
            .map(|p| format!("{:<25}{:<15}{}", p.full_name, p.position, p.id)),
    );
    lines.push("#".repeat(ROSTER_WIDTH));
    lines
}

/// Centre `text` in a run of `#`. An odd leftover `#` goes on the left;
/// text wider than `width` is returned as is.
fn centre_in_hashes(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.chars().count());
    let left = pad.div_ceil(2);
    let right = pad - left;
    format!("{}{}{}", "#".repeat(left), text, "#".repeat(right))
}

pub fn today_lines(schedule: &Schedule) -> Vec<String> {
    let header = match &schedule.date {
        Some(date) => format!("{} game(s) today ({})", schedule.total_games, date),
        None => format!("{} game(s) today", schedule.total_games),
    };
    let frame = "#".repeat(TODAY_FRAME);

    let mut lines = Vec::with_capacity(schedule.games.len() + 3);
    lines.push(header);
    lines.push(frame.clone());
    lines.extend(schedule.games.iter().map(|g| {
        format!(
            "{:>22}  {}-{}  {:<22}({})",
            g.away_team, g.away_score, g.home_score, g.home_team, g.status
        )
    }));
    lines.push(frame);
    lines
}

/// At most `picks` picks are listed; a shorter round is listed whole.
pub fn draft_lines(
    year: DraftYear,
    round: u8,
    picks: usize,
    round_picks: &[DraftPick],
) -> Vec<String> {
    let frame = "#".repeat(DRAFT_FRAME);

    let mut lines = vec![
        format!("{year} Draft ! Round n°{round} Picks:{picks}"),
        frame.clone(),
    ];
    lines.extend(round_picks.iter().take(picks).map(|p| {
        let info = format!("{}-{} {}", p.round, p.pick_in_round, p.prospect_name);
        format!("{:<25}{:<25}", info, p.team_name)
    }));
    lines.push(frame);
    lines
}

pub fn player_stats_lines(stat: &PlayerStat) -> Vec<String> {
    let mut lines = vec![format!(
        "###### {} - {} ({} stats)",
        stat.name, stat.position, stat.season
    )];

    match &stat.stats {
        StatLine::Skater(s) => {
            lines.push(format!("Games : {}", s.games));
            lines.push(format!(
                "goals-assists-points : {}-{}-({})",
                s.goals, s.assists, s.points
            ));
            lines.push(format!("+/- : {}", s.plus_minus));
            lines.push(format!("GWG : {}", s.game_winning_goals));
            lines.push(format!("SHG : {}", s.short_handed_goals));
            lines.push(format!(
                "PPGoals - PPPoints : {}-{}",
                s.power_play_goals, s.power_play_points
            ));
            lines.push(format!("Pims : {}", s.pim));
            lines.push(format!("TOI : {}", s.time_on_ice_per_game));
        }
        StatLine::Goalie(g) => {
            lines.push(format!("Games : {}", g.games));
            lines.push(format!("W-L-OT : {} - {} - {}", g.wins, g.losses, g.ot));
            lines.push(format!("SO : {}", g.shutouts));
            lines.push(format!("Save %: {}", g.save_percentage));
            lines.push(format!("GAA : {}", g.goals_against_average));
        }
    }
    lines
}
