// End-to-end tests: log practice to disk, then derive metrics and advice

use std::fs::OpenOptions;
use std::io::Write;

use chrono::NaiveDate;
use rangebook::practice::{category, detail};
use rangebook::profile::ShaftFlex;
use rangebook::{
    Club, CoachMode, EventLog, JsonLinesEventLog, Mode, PracticeEvent, Profile, ProfileStore,
    SessionType, SkillTier, SwingClubCategory, SwingMeasurement, analyze_swing_data,
    compute_metrics, recommend_for_club, recommend_next_session, resolve_benchmarks,
};
use tempfile::TempDir;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 5).unwrap()
}

fn range(category: &str, detail: &str, club: Club) -> PracticeEvent {
    PracticeEvent::new(date(), SessionType::Range, category, detail).with_club(club)
}

#[test]
fn test_logged_session_drives_recommendations() {
    let temp_dir = TempDir::new().unwrap();
    let mut log = JsonLinesEventLog::new(temp_dir.path()).unwrap();

    for _ in 0..4 {
        log.append(&range(category::DRIVER_MISS, detail::SLICE, Club::Driver)).unwrap();
    }
    log.append(&range(category::DRIVER_MISS, detail::NEUTRAL, Club::Driver)).unwrap();
    for _ in 0..7 {
        log.append(&range(category::STRIKE_PATTERN, detail::CENTER, Club::Iron7)).unwrap();
    }
    log.append(&range(category::STRIKE_PATTERN, detail::TOE, Club::Iron7)).unwrap();
    log.append(&range(category::STRIKE_PATTERN, detail::TOE, Club::Iron7)).unwrap();
    log.append(&range(category::STRIKE_PATTERN, detail::HEEL, Club::Iron7)).unwrap();

    let events = log.read_all().unwrap();
    assert_eq!(events.len(), 15);

    let metrics = compute_metrics(&events, Some(Club::Iron7));
    assert!((metrics.clean_rate.unwrap() - 0.7).abs() < 1e-9);

    let metrics = compute_metrics(&events, None);
    assert!((metrics.driver_slice_rate.unwrap() - 0.8).abs() < 1e-9);
    assert_eq!(metrics.driver_hook_rate, Some(0.));

    let profile = Profile {
        handicap: 18.,
        ..Profile::default()
    };
    let items = recommend_next_session(&events, &profile);
    assert!(items.len() <= 3);
    assert_eq!(items[0].title, "Reduce the slice (driver)");
    assert!(items.iter().all(|item| item.title != "Reduce the hook (driver)"));

    let iron_items = recommend_for_club(&events, &profile, Club::Iron7, Mode::Simple);
    assert!(iron_items.iter().all(|item| item.title != "Center strike & start line"));
}

#[test]
fn test_log_tolerates_foreign_rows() {
    let temp_dir = TempDir::new().unwrap();
    let mut log = JsonLinesEventLog::new(temp_dir.path()).unwrap();
    log.append(&range(category::STRIKE_PATTERN, detail::CENTER, Club::Iron7)).unwrap();

    let mut file = OpenOptions::new().append(true).open(log.path()).unwrap();
    writeln!(file, "{{\"date\": \"not a date\"}}").unwrap();
    writeln!(file).unwrap();
    writeln!(
        file,
        r#"{{"date":"2024-10-05","session_type":"Range","category":"Strike Pattern","detail":"Toe","club":"Putter"}}"#
    )
    .unwrap();
    writeln!(
        file,
        r#"{{"date":"2024-10-05","session_type":"Range","category":"Bunker","detail":"Out"}}"#
    )
    .unwrap();
    drop(file);

    let events = log.read_all().unwrap();
    assert_eq!(events.len(), 3);
    assert_eq!(events[1].club, None);
    assert_eq!(events[1].value, 0.);

    // the clubless toe strike counts in the overall rate, the unknown category is ignored
    let metrics = compute_metrics(&events, None);
    assert!((metrics.clean_rate.unwrap() - 0.5).abs() < 1e-9);
    assert_eq!(compute_metrics(&events, Some(Club::Iron7)).clean_rate, Some(1.));
}

#[test]
fn test_profile_round_trip_changes_tier_and_mode() {
    let temp_dir = TempDir::new().unwrap();
    let store = ProfileStore::new(temp_dir.path());

    let profile = store.load().unwrap();
    assert!(store.path().exists());
    assert_eq!(profile, Profile::default());
    assert_eq!(resolve_benchmarks(&profile).0, SkillTier::Beginner);

    let updated = Profile {
        handicap: 9.5,
        coach_mode: CoachMode::Auto,
        shaft_flex: ShaftFlex::S,
        ..profile
    };
    store.save(&updated).unwrap();

    let reloaded = store.load().unwrap();
    assert_eq!(reloaded, updated);
    assert_eq!(resolve_benchmarks(&reloaded).0, SkillTier::Pro);
    assert_eq!(rangebook::resolve_coach_mode(&reloaded), Mode::Advanced);
}

#[test]
fn test_swing_analysis_with_partial_reading() {
    let reading = SwingMeasurement {
        ball_speed: 158.,
        launch: 10.,
        ..SwingMeasurement::default()
    };
    let tips = analyze_swing_data(&reading, SwingClubCategory::Driver, Mode::Simple);
    assert_eq!(tips.len(), 1);
    assert!(tips[0].contains("~14°"));
}
