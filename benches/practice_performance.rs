use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rangebook::metrics::stats;
use rangebook::practice::{category, detail};
use rangebook::{
    Club, PracticeEvent, Profile, SessionType, compute_metrics, recommend_for_club,
    recommend_next_session, resolve_coach_mode,
};
use std::time::Duration;

fn create_sample_event(event_no: usize) -> PracticeEvent {
    let date = NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.checked_add_days(chrono::Days::new((event_no / 50) as u64)))
        .unwrap();
    let club = Club::ALL[event_no % Club::ALL.len()];

    match event_no % 6 {
        0 => PracticeEvent::new(date, SessionType::Range, category::STRIKE_PATTERN, detail::CENTER).with_club(club),
        1 => PracticeEvent::new(date, SessionType::Range, category::STRIKE_PATTERN, detail::TOE).with_club(club),
        2 => PracticeEvent::new(date, SessionType::Range, category::CONTACT, detail::FLUSH).with_club(club),
        3 => PracticeEvent::new(date, SessionType::Range, category::DISTANCE_CONTROL, detail::CARRY)
            .with_club(club)
            .with_value(100. + (event_no % 40) as f64),
        4 => PracticeEvent::new(date, SessionType::Range, category::DRIVER_MISS, detail::SLICE).with_club(Club::Driver),
        _ => PracticeEvent::new(date, SessionType::ShortGame, category::CHIPPING, detail::WITHIN_2M),
    }
}

fn create_sample_log(size: usize) -> Vec<PracticeEvent> {
    (0..size).map(create_sample_event).collect()
}

fn bench_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");

    let events = create_sample_log(5000);

    group.bench_function("compute_metrics_5000_events", |b| {
        b.iter(|| black_box(compute_metrics(black_box(&events), None)));
    });

    group.bench_function("compute_metrics_club_filtered", |b| {
        b.iter(|| black_box(compute_metrics(black_box(&events), Some(Club::Iron7))));
    });

    group.bench_function("carry_trend_5000_events", |b| {
        b.iter(|| black_box(stats::carry_trend(black_box(&events), Club::Iron7)));
    });

    group.finish();
}

fn bench_recommendations(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommendations");

    let events = create_sample_log(5000);
    let profile = Profile::default();

    group.bench_function("next_session_5000_events", |b| {
        b.iter(|| black_box(recommend_next_session(black_box(&events), &profile)));
    });

    group.bench_function("every_club_5000_events", |b| {
        let mode = resolve_coach_mode(&profile);
        b.iter(|| {
            for club in Club::ALL {
                black_box(recommend_for_club(&events, &profile, *club, mode));
            }
        });
    });

    group.finish();
}

fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialization");

    let event = create_sample_event(3);

    group.bench_function("serialize_event", |b| {
        b.iter(|| black_box(serde_json::to_string(&event).unwrap()));
    });

    let json = serde_json::to_string(&event).unwrap();
    group.bench_function("deserialize_event", |b| {
        b.iter(|| black_box(serde_json::from_str::<PracticeEvent>(&json).unwrap()));
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .sample_size(100);
    targets = bench_metrics, bench_recommendations, bench_serialization
}
criterion_main!(benches);
