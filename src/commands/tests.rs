//! Tests for command parsing and dispatch

use super::*;

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_blank_line_is_none() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   \t ").unwrap(), None);
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse("today"), Command::Today);
        assert_eq!(parse("teams"), Command::Teams);
        assert_eq!(parse("help"), Command::Help);
        assert_eq!(parse("description"), Command::Help);
        assert_eq!(parse("  quit  "), Command::Quit);
    }

    #[test]
    fn test_unrecognized_is_kept() {
        assert_eq!(parse("score 6"), Command::Unrecognized("score".to_string()));
        // Commands are case sensitive
        assert_eq!(parse("Today"), Command::Unrecognized("Today".to_string()));
    }

    #[test]
    fn test_standings_season() {
        assert_eq!(parse("standings"), Command::Standings { season: None });
        assert_eq!(
            parse("standings 20162017"),
            Command::Standings {
                season: Some("20162017".parse().unwrap())
            }
        );
    }

    #[test]
    fn test_standings_bad_season() {
        for line in ["standings 2016", "standings 2016201", "standings current"] {
            match Command::parse(line) {
                Err(NhlError::InvalidSeason { .. }) => (),
                other => panic!("Expected InvalidSeason for {line:?}, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_standings_too_many_args() {
        match Command::parse("standings 20162017 20172018") {
            Err(NhlError::TooManyArguments { command, max }) => {
                assert_eq!((command, max), ("standings", 1));
            }
            other => panic!("Expected TooManyArguments, got {:?}", other),
        }
    }

    #[test]
    fn test_today_rejects_args() {
        assert!(matches!(
            Command::parse("today tomorrow"),
            Err(NhlError::TooManyArguments { command: "today", max: 0 })
        ));
    }

    #[test]
    fn test_draft_defaults() {
        assert_eq!(parse("draft"), Command::Draft(DraftQuery::default()));
        assert_eq!(
            DraftQuery::default(),
            DraftQuery {
                year: DraftYear::new(2018).unwrap(),
                round: 1,
                picks: 25
            }
        );
    }

    #[test]
    fn test_draft_positional_overloads() {
        assert_eq!(
            parse("draft 2005"),
            Command::Draft(DraftQuery {
                year: DraftYear::new(2005).unwrap(),
                round: 1,
                picks: 25
            })
        );
        assert_eq!(
            parse("draft 2005 2"),
            Command::Draft(DraftQuery {
                year: DraftYear::new(2005).unwrap(),
                round: 2,
                picks: 25
            })
        );
        assert_eq!(
            parse("draft 2005 2 10"),
            Command::Draft(DraftQuery {
                year: DraftYear::new(2005).unwrap(),
                round: 2,
                picks: 10
            })
        );
    }

    #[test]
    fn test_draft_invalid_args() {
        assert!(matches!(
            Command::parse("draft 1975"),
            Err(NhlError::InvalidDraftYear { year: 1975, .. })
        ));
        assert!(matches!(
            Command::parse("draft 2019"),
            Err(NhlError::InvalidDraftYear { year: 2019, .. })
        ));
        assert!(matches!(
            Command::parse("draft 2010 0"),
            Err(NhlError::InvalidArgument { name: "draft round", .. })
        ));
        assert!(matches!(
            Command::parse("draft 2010 1 many"),
            Err(NhlError::InvalidArgument { name: "pick count", .. })
        ));
        assert!(matches!(
            Command::parse("draft 2010 1 5 extra"),
            Err(NhlError::TooManyArguments { command: "draft", max: 3 })
        ));
    }

    #[test]
    fn test_roster_args() {
        assert_eq!(
            parse("roster 6"),
            Command::Roster {
                team: TeamId::new(6),
                season: None
            }
        );
        assert_eq!(
            parse("roster 6 20112012"),
            Command::Roster {
                team: TeamId::new(6),
                season: Some("20112012".parse().unwrap())
            }
        );
    }

    #[test]
    fn test_roster_requires_team() {
        match Command::parse("roster") {
            Err(NhlError::MissingArgument { command, name }) => {
                assert_eq!((command, name), ("roster", "team id"));
            }
            other => panic!("Expected MissingArgument, got {:?}", other),
        }
        assert!(matches!(
            Command::parse("roster bruins"),
            Err(NhlError::InvalidArgument { name: "team id", .. })
        ));
        assert!(matches!(
            Command::parse("roster 6 2011"),
            Err(NhlError::InvalidSeason { .. })
        ));
    }

    #[test]
    fn test_stats_args() {
        assert_eq!(
            parse("stats 8471675"),
            Command::Stats {
                player: PlayerId::new(8471675),
                season: None
            }
        );
        assert!(matches!(
            Command::parse("stats"),
            Err(NhlError::MissingArgument { command: "stats", .. })
        ));
    }

    #[test]
    fn test_command_names() {
        assert_eq!(parse("draft").name(), "draft");
        assert_eq!(parse("roster 1").name(), "roster");
        assert_eq!(parse("whatever").name(), "whatever");
    }
}

#[cfg(test)]
mod execute_tests {
    use super::*;
    use crate::{
        core::TeamCache,
        nhl::{types::Team, NhlClient},
    };
    use serde_json::json;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn bruins() -> Team {
        Team {
            id: TeamId::new(6),
            name: "Boston Bruins".to_string(),
            abbreviation: "BOS".to_string(),
            first_year: 1924,
            conference: "Eastern".to_string(),
            division: "Atlantic".to_string(),
        }
    }

    fn context(server: &MockServer) -> CommandContext {
        CommandContext::new(
            NhlClient::new(server.uri()).unwrap(),
            TeamCache::from_teams(vec![bruins()]),
        )
    }

    async fn run(ctx: &CommandContext, line: &str) -> (Result<Flow>, String) {
        let command = Command::parse(line).unwrap().unwrap();
        let mut out = Vec::new();
        let flow = ctx.execute(&command, &mut out).await;
        (flow, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_teams_uses_cache_only() {
        let server = MockServer::start().await;
        let ctx = context(&server);

        let (flow, output) = run(&ctx, "teams").await;
        assert_eq!(flow.unwrap(), Flow::Continue);
        assert!(output.contains("6  Boston Bruins         BOS  1924 Eastern Atlantic"));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_quit_and_unrecognized() {
        let server = MockServer::start().await;
        let ctx = context(&server);

        let (flow, output) = run(&ctx, "quit").await;
        assert_eq!(flow.unwrap(), Flow::Quit);
        assert!(output.is_empty());

        let (flow, output) = run(&ctx, "scores").await;
        assert_eq!(flow.unwrap(), Flow::Continue);
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn test_help_prints_banner() {
        let server = MockServer::start().await;
        let (flow, output) = run(&context(&server), "description").await;
        assert_eq!(flow.unwrap(), Flow::Continue);
        assert!(output.starts_with(" Welcome."));
    }

    #[tokio::test]
    async fn test_roster_name_from_cache() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/teams/6"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "teams": [{ "roster": { "roster": [{
                    "person": { "id": 8470638, "fullName": "Patrice Bergeron" },
                    "position": { "name": "Center", "abbreviation": "C" }
                }]}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (flow, output) = run(&context(&server), "roster 6").await;
        flow.unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Current season roster",
                "#################Boston Bruins#################",
                "Patrice Bergeron         Center         8470638",
                "###############################################",
            ]
        );
    }

    #[tokio::test]
    async fn test_roster_unknown_team_fetches_name() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/teams/13"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "teams": [{ "name": "Florida Panthers", "roster": { "roster": [] } }]
            })))
            .expect(2)
            .mount(&server)
            .await;

        let (flow, output) = run(&context(&server), "roster 13 20152016").await;
        flow.unwrap();
        assert!(output.starts_with("20152016 roster\n"));
        assert!(output.contains("################Florida Panthers###############"));
    }

    #[tokio::test]
    async fn test_stats_goalie_layout() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/people/8471679/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "stats": [{ "splits": [{
                    "season": "20182019",
                    "stat": {
                        "games": 66, "wins": 35, "losses": 24, "ot": 6, "shutouts": 4,
                        "savePercentage": 1.0, "goalAgainstAverage": 0.0
                    }
                }]}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/people/8471679"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "people": [{
                    "id": 8471679,
                    "fullName": "Carey Price",
                    "primaryPosition": { "name": "Goalie", "abbreviation": "G" }
                }]
            })))
            .mount(&server)
            .await;

        let (flow, output) = run(&context(&server), "stats 8471679").await;
        flow.unwrap();
        assert!(output.starts_with("###### Carey Price - G (20182019 stats)\n"));
        assert!(output.contains("W-L-OT : 35 - 24 - 6\n"));
        assert!(output.contains("Save %: 1.0\nGAA : 0.0\n"));
        assert!(!output.contains("PPGoals"));
    }

    #[tokio::test]
    async fn test_stats_skater_missing_field_fails_without_output() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/people/8478402/stats"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "stats": [{ "splits": [{ "season": "20182019", "stat": { "games": 78 } }]}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/people/8478402"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "people": [{
                    "id": 8478402,
                    "fullName": "Connor McDavid",
                    "primaryPosition": { "name": "Center", "abbreviation": "C" }
                }]
            })))
            .mount(&server)
            .await;

        let (flow, output) = run(&context(&server), "stats 8478402").await;
        assert!(matches!(flow, Err(NhlError::Json(_))));
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn test_standings_http_failure_prints_nothing() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/standings"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let (flow, output) = run(&context(&server), "standings").await;
        assert!(matches!(flow, Err(NhlError::Http(_))));
        assert!(output.is_empty());
    }
}
