use baseball_schedule::data_fetcher::api::create_http_client_with_timeout;
use baseball_schedule::{
    DayFetcher, DurableCache, JsonScheduleWriter, RunOptions, create_schedules, lookup_team,
};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use serde_json::{Value, json};
use std::path::Path;
use std::sync::Arc;
use tempfile::{TempDir, tempdir};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SCHEDULE_PATH: &str = "/api/v1/schedule/games/";

fn may(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
}

/// Noon in Boston on 2024-05-05.
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 5, 16, 0, 0).unwrap()
}

fn feed_game(home: u32, away: u32, start: &str, abstract_state: &str, detailed: &str) -> Value {
    json!({
        "gameDate": start,
        "gameType": "R",
        "status": {"abstractGameState": abstract_state, "detailedState": detailed},
        "teams": {
            "home": {"team": {"id": home}, "score": 0},
            "away": {"team": {"id": away}, "score": 0}
        }
    })
}

fn feed_body(date: &str, games: Vec<Value>) -> Value {
    json!({"dates": [{"date": date, "games": games}]})
}

/// Answers the first request for one date with `games`, ahead of any
/// catch-all mock.
async fn mount_date(server: &MockServer, query_date: &str, iso_date: &str, games: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path(SCHEDULE_PATH))
        .and(query_param("date", query_date))
        .respond_with(ResponseTemplate::new(200).set_body_json(feed_body(iso_date, games)))
        .with_priority(1)
        .up_to_n_times(1)
        .expect(1)
        .mount(server)
        .await;
}

/// Answers every other date with no games.
async fn mount_empty_days(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(SCHEDULE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"dates": []})))
        .expect(expected_calls)
        .mount(server)
        .await;
}

struct Harness {
    dir: TempDir,
    cache: Arc<DurableCache>,
    fetcher: DayFetcher,
    writer: JsonScheduleWriter,
}

impl Harness {
    fn new(server: &MockServer) -> Self {
        let dir = tempdir().unwrap();
        let cache = Arc::new(DurableCache::empty(dir.path().join("cache.json")));
        let client = create_http_client_with_timeout(5).unwrap();
        let fetcher = DayFetcher::new(client, server.uri(), cache.clone());
        let writer = JsonScheduleWriter::new(dir.path().join("teams"));
        Self {
            dir,
            cache,
            fetcher,
            writer,
        }
    }

    fn cache_path(&self) -> &Path {
        self.cache.path()
    }

    fn read_output(&self, key: &str) -> Value {
        let path = self.dir.path().join("teams").join(format!("{key}.json"));
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }
}

fn pinned(force: bool) -> RunOptions {
    RunOptions {
        force,
        print: false,
        reference_date: Some(may(5)),
    }
}

fn items(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[tokio::test]
async fn test_window_is_ordered_around_team_local_today() {
    let server = MockServer::start().await;
    mount_date(
        &server,
        "05/05/2024",
        "2024-05-05",
        vec![feed_game(111, 147, "2024-05-05T17:35:00Z", "Final", "Final")],
    )
    .await;
    mount_empty_days(&server, 6).await;
    let harness = Harness::new(&server);
    let bos = lookup_team("BOS").unwrap();

    // 01:00 UTC on the 6th is still the 5th in Boston
    let late_evening = Utc.with_ymd_and_hms(2024, 5, 6, 1, 0, 0).unwrap();
    let today = baseball_schedule::data_fetcher::processors::local_date(late_evening, bos.time_zone);
    assert_eq!(today, may(5));

    let days = harness
        .fetcher
        .get_team_games(bos.abbreviation, today, late_evening)
        .await;

    let dates: Vec<String> = days
        .iter()
        .map(|day| format!("{}-{}-{}", day.year, day.month, day.day))
        .collect();
    assert_eq!(
        dates,
        vec![
            "2024-05-03", "2024-05-04", "2024-05-05", "2024-05-06", "2024-05-07", "2024-05-08",
            "2024-05-09"
        ]
    );
    assert_eq!(days[2].games[0].status, "Final");
    assert_eq!(days[2].games[0].home_time.as_deref(), Some("1:35 PM"));
    assert!(days.iter().enumerate().all(|(i, day)| i == 2 || day.games[0].is_off()));
}

#[tokio::test]
async fn test_doubleheader_keeps_feed_order() {
    let server = MockServer::start().await;
    mount_date(
        &server,
        "05/06/2024",
        "2024-05-06",
        vec![
            feed_game(147, 111, "2024-05-06T17:05:00Z", "Preview", "Scheduled"),
            feed_game(136, 119, "2024-05-06T20:10:00Z", "Preview", "Scheduled"),
            feed_game(147, 111, "2024-05-06T23:05:00Z", "Preview", "Scheduled"),
        ],
    )
    .await;
    mount_empty_days(&server, 6).await;
    let harness = Harness::new(&server);

    let days = harness.fetcher.get_team_games("BOS", may(5), now()).await;

    let doubleheader = &days[3].games;
    assert_eq!(doubleheader.len(), 2);
    assert_eq!(doubleheader[0].away_time.as_deref(), Some("1:05 PM"));
    assert_eq!(doubleheader[1].away_time.as_deref(), Some("7:05 PM"));
    assert!(doubleheader.iter().all(|game| game.away_name_abbrev == "BOS"));
}

#[tokio::test]
async fn test_teams_sharing_dates_fetch_each_date_once() {
    let server = MockServer::start().await;
    mount_empty_days(&server, 7).await;
    let harness = Harness::new(&server);

    let ok = create_schedules(
        &harness.fetcher,
        &harness.writer,
        &items(&["BOS", "NYY", "fenway"]),
        pinned(false),
        now(),
    )
    .await;

    assert!(ok);
    for key in ["BOS", "NYY", "FENWAY"] {
        let written = harness.read_output(key);
        assert_eq!(written["team"], key);
        assert_eq!(written["days"].as_array().unwrap().len(), 7);
    }
}

#[tokio::test]
async fn test_feed_outage_renders_off_days() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SCHEDULE_PATH))
        .respond_with(ResponseTemplate::new(503))
        .expect(7)
        .mount(&server)
        .await;
    let harness = Harness::new(&server);

    let ok = create_schedules(
        &harness.fetcher,
        &harness.writer,
        &items(&["SEA"]),
        pinned(false),
        now(),
    )
    .await;

    assert!(ok);
    let written = harness.read_output("SEA");
    for day in written["days"].as_array().unwrap() {
        assert_eq!(day["games"].as_array().unwrap().len(), 1);
        assert_eq!(day["games"][0]["status"], "Off");
    }
    // Failed dates are cached as empty so the feed is not hammered
    assert_eq!(harness.cache.len().await, 7);
}

#[tokio::test]
async fn test_cache_survives_reload_and_prunes_expired_dates() {
    let server = MockServer::start().await;
    mount_date(
        &server,
        "05/05/2024",
        "2024-05-05",
        vec![feed_game(111, 147, "2024-05-05T14:05:00Z", "Live", "In Progress")],
    )
    .await;
    mount_empty_days(&server, 6).await;
    let harness = Harness::new(&server);

    harness.fetcher.get_team_games("BOS", may(5), now()).await;

    let reloaded = DurableCache::load_at(harness.cache_path(), now() + Duration::minutes(5)).await;
    assert_eq!(reloaded.len().await, 7);
    assert!(reloaded.get("2024_05_05", now() + Duration::minutes(5)).await.is_some());

    // The live day expires after ten minutes, the empty days after a week
    let later = now() + Duration::hours(1);
    let reloaded = DurableCache::load_at(harness.cache_path(), later).await;
    assert_eq!(reloaded.len().await, 6);
    assert!(reloaded.get("2024_05_05", later).await.is_none());
}

#[tokio::test]
async fn test_second_run_skips_fresh_items() {
    let server = MockServer::start().await;
    mount_empty_days(&server, 7).await;
    let harness = Harness::new(&server);
    let names = items(&["LAD"]);

    assert!(create_schedules(&harness.fetcher, &harness.writer, &names, pinned(false), now()).await);
    let first = harness.read_output("LAD");

    let a_minute_later = now() + Duration::minutes(1);
    assert!(
        create_schedules(&harness.fetcher, &harness.writer, &names, pinned(false), a_minute_later)
            .await
    );
    assert_eq!(harness.read_output("LAD"), first);

    // Forcing rebuilds from the still-fresh cache without new requests
    assert!(
        create_schedules(&harness.fetcher, &harness.writer, &names, pinned(true), a_minute_later)
            .await
    );
    assert_eq!(
        harness.read_output("LAD")["generated_at"],
        "2024-05-05T16:01:00Z"
    );
}

#[tokio::test]
async fn test_expired_date_triggers_rebuild() {
    let server = MockServer::start().await;
    mount_date(
        &server,
        "05/05/2024",
        "2024-05-05",
        vec![feed_game(111, 147, "2024-05-05T14:05:00Z", "Live", "In Progress")],
    )
    .await;
    mount_empty_days(&server, 7).await;
    let harness = Harness::new(&server);
    let names = items(&["BOS"]);

    assert!(create_schedules(&harness.fetcher, &harness.writer, &names, pinned(false), now()).await);
    assert!(harness.fetcher.is_cache_current(may(5), now() + Duration::minutes(9)).await);
    assert!(!harness.fetcher.is_cache_current(may(5), now() + Duration::minutes(10)).await);

    // The live day has expired; the catch-all now answers it with no games
    let later = now() + Duration::minutes(11);
    assert!(create_schedules(&harness.fetcher, &harness.writer, &names, pinned(false), later).await);
    let written = harness.read_output("BOS");
    assert_eq!(written["generated_at"], "2024-05-05T16:11:00Z");
    assert_eq!(written["days"][2]["games"][0]["status"], "Off");
}

#[tokio::test]
async fn test_unknown_item_fails_run_but_others_are_built() {
    let server = MockServer::start().await;
    mount_empty_days(&server, 7).await;
    let harness = Harness::new(&server);

    let ok = create_schedules(
        &harness.fetcher,
        &harness.writer,
        &items(&["XYZ", "BOS"]),
        pinned(false),
        now(),
    )
    .await;

    assert!(!ok);
    assert_eq!(harness.read_output("BOS")["team"], "BOS");
    assert!(!harness.dir.path().join("teams").join("XYZ.json").exists());
}
