pub mod stats;

use std::collections::BTreeMap;
use std::fmt;

use itertools::Itertools;
use log::debug;

use crate::practice::{Club, PracticeEvent, SessionType, category, detail};

/// Fewest positive carries needed before a spread is reported.
pub const MIN_CARRY_SAMPLES: usize = 3;

/// Names of the statistics derived from the practice log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetricKey {
    CleanRate,
    ToeRate,
    HeelRate,
    ThinRate,
    FatRate,
    FlushRate,
    DriverSliceRate,
    DriverHookRate,
    CarryStd(Club),
    ChipWithin2Rate,
    PitchWithin5Rate,
    ShortPuttMake,
    LongPuttAvg,
}

/// How a metric is computed, which decides how missing data is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// matching events / category events
    Rate,
    /// sample standard deviation, needs `MIN_CARRY_SAMPLES`
    Spread,
    /// present or absent
    Signal,
    /// plain mean of logged values
    Average,
}

impl MetricKey {
    pub fn kind(&self) -> MetricKind {
        match self {
            MetricKey::CarryStd(_) => MetricKind::Spread,
            MetricKey::ShortPuttMake => MetricKind::Signal,
            MetricKey::LongPuttAvg => MetricKind::Average,
            _ => MetricKind::Rate,
        }
    }

    /// Render a value for display: rates as percentages, carry spreads in
    /// metres, and `-` when the metric is undefined.
    pub fn format_value(&self, value: Option<f64>) -> String {
        match (self.kind(), value) {
            (_, None) => "-".to_string(),
            (MetricKind::Rate, Some(v)) => format!("{:.0}%", v * 100.),
            (MetricKind::Spread, Some(v)) => format!("{v:.1} m"),
            (MetricKind::Signal | MetricKind::Average, Some(v)) => format!("{v:.2}"),
        }
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricKey::CleanRate => write!(f, "clean_rate"),
            MetricKey::ToeRate => write!(f, "toe_rate"),
            MetricKey::HeelRate => write!(f, "heel_rate"),
            MetricKey::ThinRate => write!(f, "thin_rate"),
            MetricKey::FatRate => write!(f, "fat_rate"),
            MetricKey::FlushRate => write!(f, "flush_rate"),
            MetricKey::DriverSliceRate => write!(f, "driver_slice_rate"),
            MetricKey::DriverHookRate => write!(f, "driver_hook_rate"),
            MetricKey::CarryStd(club) => write!(f, "carry_std_{}", club.code()),
            MetricKey::ChipWithin2Rate => write!(f, "chip_within2_rate"),
            MetricKey::PitchWithin5Rate => write!(f, "pitch_within5_rate"),
            MetricKey::ShortPuttMake => write!(f, "short_putt_make"),
            MetricKey::LongPuttAvg => write!(f, "long_putt_avg"),
        }
    }
}

/// Statistics computed from one snapshot of the practice log.
///
/// `None` always means "not enough data"; it is never a stand-in for zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricSet {
    pub clean_rate: Option<f64>,
    pub toe_rate: Option<f64>,
    pub heel_rate: Option<f64>,
    pub thin_rate: Option<f64>,
    pub fat_rate: Option<f64>,
    pub flush_rate: Option<f64>,
    pub driver_slice_rate: Option<f64>,
    pub driver_hook_rate: Option<f64>,
    /// Every club with at least one positive carry; `None` below
    /// `MIN_CARRY_SAMPLES`.
    pub carry_std: BTreeMap<Club, Option<f64>>,
    pub chip_within2_rate: Option<f64>,
    pub pitch_within5_rate: Option<f64>,
    /// 1.0 once any short putt has been holed. Misses are not logged, so this
    /// is not a make percentage.
    pub short_putt_make: Option<f64>,
    pub long_putt_avg: Option<f64>,
}

impl MetricSet {
    pub fn get(&self, key: MetricKey) -> Option<f64> {
        match key {
            MetricKey::CleanRate => self.clean_rate,
            MetricKey::ToeRate => self.toe_rate,
            MetricKey::HeelRate => self.heel_rate,
            MetricKey::ThinRate => self.thin_rate,
            MetricKey::FatRate => self.fat_rate,
            MetricKey::FlushRate => self.flush_rate,
            MetricKey::DriverSliceRate => self.driver_slice_rate,
            MetricKey::DriverHookRate => self.driver_hook_rate,
            MetricKey::CarryStd(club) => self.carry_std.get(&club).copied().flatten(),
            MetricKey::ChipWithin2Rate => self.chip_within2_rate,
            MetricKey::PitchWithin5Rate => self.pitch_within5_rate,
            MetricKey::ShortPuttMake => self.short_putt_make,
            MetricKey::LongPuttAvg => self.long_putt_avg,
        }
    }

    /// All metrics in display order, carry spreads in bag order.
    pub fn entries(&self) -> Vec<(MetricKey, Option<f64>)> {
        let mut keys = vec![
            MetricKey::CleanRate,
            MetricKey::ToeRate,
            MetricKey::HeelRate,
            MetricKey::ThinRate,
            MetricKey::FatRate,
            MetricKey::FlushRate,
            MetricKey::DriverSliceRate,
            MetricKey::DriverHookRate,
        ];
        keys.extend(self.carry_std.keys().map(|club| MetricKey::CarryStd(*club)));
        keys.extend([
            MetricKey::ChipWithin2Rate,
            MetricKey::PitchWithin5Rate,
            MetricKey::ShortPuttMake,
            MetricKey::LongPuttAvg,
        ]);
        keys.into_iter().map(|key| (key, self.get(key))).collect()
    }
}

/// Share of `events` whose detail is `detail`; `None` when `events` is empty.
fn detail_rate(events: &[&PracticeEvent], detail: &str) -> Option<f64> {
    if events.is_empty() {
        return None;
    }
    let matching = events.iter().filter(|e| e.has_detail(detail)).count();
    Some(matching as f64 / events.len() as f64)
}

/// Sample standard deviation; `None` below `MIN_CARRY_SAMPLES` values.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < MIN_CARRY_SAMPLES {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.);
    Some(variance.sqrt())
}

fn is_range(event: &PracticeEvent, category: &str) -> bool {
    event.session_type == SessionType::Range && event.in_category(category)
}

/// Reduce the practice log to a [`MetricSet`].
///
/// With a `club_filter`, strike, contact and carry metrics only look at
/// events logged with that club, and the driver miss rates are only computed
/// when the filter is the driver. Short-game metrics are never club filtered.
/// Events with unrecognised categories or details are ignored.
pub fn compute_metrics(events: &[PracticeEvent], club_filter: Option<Club>) -> MetricSet {
    let club_matches = |event: &PracticeEvent| club_filter.is_none_or(|club| event.club == Some(club));

    let strikes: Vec<&PracticeEvent> = events
        .iter()
        .filter(|e| is_range(e, category::STRIKE_PATTERN) && club_matches(e))
        .collect();
    let contacts: Vec<&PracticeEvent> = events
        .iter()
        .filter(|e| is_range(e, category::CONTACT) && club_matches(e))
        .collect();

    // driver misses are implicitly driver shots whatever club the row carries
    let driver_misses: Vec<&PracticeEvent> = if club_filter.is_none_or(|club| club == Club::Driver) {
        events
            .iter()
            .filter(|e| is_range(e, category::DRIVER_MISS) || is_range(e, category::DRIVER))
            .collect()
    } else {
        Vec::new()
    };

    let carry_std: BTreeMap<Club, Option<f64>> = events
        .iter()
        .filter(|e| {
            is_range(e, category::DISTANCE_CONTROL)
                && e.has_detail(detail::CARRY)
                && e.value.is_finite()
                && e.value > 0.
                && club_matches(e)
        })
        .filter_map(|e| e.club.map(|club| (club, e.value)))
        .into_group_map()
        .into_iter()
        .map(|(club, carries)| (club, sample_std(&carries)))
        .collect();

    let chips: Vec<&PracticeEvent> = events
        .iter()
        .filter(|e| e.in_category(category::CHIPPING))
        .collect();
    let pitches: Vec<&PracticeEvent> = events
        .iter()
        .filter(|e| e.in_category(category::PITCHING))
        .collect();

    let short_putt_make = events
        .iter()
        .any(|e| e.in_category(category::PUTTING) && e.has_detail(detail::MADE_SHORT_PUTT))
        .then_some(1.);

    let long_putts: Vec<f64> = events
        .iter()
        .filter(|e| {
            e.in_category(category::PUTTING)
                && e.has_detail(detail::LONG_PUTT_AVG)
                && e.value.is_finite()
                && e.value >= 0.
        })
        .map(|e| e.value)
        .collect();
    let long_putt_avg =
        (!long_putts.is_empty()).then(|| long_putts.iter().sum::<f64>() / long_putts.len() as f64);

    debug!(
        "Computing metrics (club {:?}): {} strikes, {} contacts, {} driver misses, {} clubs with carries, {} chips",
        club_filter,
        strikes.len(),
        contacts.len(),
        driver_misses.len(),
        carry_std.len(),
        chips.len()
    );

    MetricSet {
        clean_rate: detail_rate(&strikes, detail::CENTER),
        toe_rate: detail_rate(&strikes, detail::TOE),
        heel_rate: detail_rate(&strikes, detail::HEEL),
        thin_rate: detail_rate(&contacts, detail::THIN),
        fat_rate: detail_rate(&contacts, detail::FAT),
        flush_rate: detail_rate(&contacts, detail::FLUSH),
        driver_slice_rate: detail_rate(&driver_misses, detail::SLICE),
        driver_hook_rate: detail_rate(&driver_misses, detail::HOOK),
        carry_std,
        chip_within2_rate: detail_rate(&chips, detail::WITHIN_2M),
        pitch_within5_rate: detail_rate(&pitches, detail::WITHIN_5M),
        short_putt_make,
        long_putt_avg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 14).unwrap()
    }

    fn range(category: &str, detail: &str, club: Club) -> PracticeEvent {
        PracticeEvent::new(date(), SessionType::Range, category, detail).with_club(club)
    }

    fn carry(club: Club, meters: f64) -> PracticeEvent {
        range(category::DISTANCE_CONTROL, detail::CARRY, club).with_value(meters)
    }

    fn short_game(category: &str, detail: &str) -> PracticeEvent {
        PracticeEvent::new(date(), SessionType::ShortGame, category, detail)
    }

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("metric should be defined");
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }

    #[test]
    fn test_empty_log_has_no_metrics() {
        let metrics = compute_metrics(&[], None);
        assert_eq!(metrics, MetricSet::default());
        assert!(metrics.entries().iter().all(|(_, v)| v.is_none()));
    }

    #[test]
    fn test_club_filtered_strike_pattern() {
        let mut events = Vec::new();
        events.extend((0..7).map(|_| range(category::STRIKE_PATTERN, detail::CENTER, Club::Iron7)));
        events.extend((0..2).map(|_| range(category::STRIKE_PATTERN, detail::TOE, Club::Iron7)));
        events.push(range(category::STRIKE_PATTERN, detail::HEEL, Club::Iron7));
        // other club must not leak into the filtered rates
        events.push(range(category::STRIKE_PATTERN, detail::TOE, Club::Iron5));

        let metrics = compute_metrics(&events, Some(Club::Iron7));
        assert_close(metrics.clean_rate, 0.7);
        assert_close(metrics.toe_rate, 0.2);
        assert_close(metrics.heel_rate, 0.1);

        let all = compute_metrics(&events, None);
        assert_close(all.clean_rate, 7. / 11.);
    }

    #[test]
    fn test_strike_pattern_requires_range_session() {
        let events = vec![PracticeEvent::new(
            date(),
            SessionType::Course,
            category::STRIKE_PATTERN,
            detail::CENTER,
        )];
        assert_eq!(compute_metrics(&events, None).clean_rate, None);
    }

    #[test]
    fn test_contact_rates() {
        let events = vec![
            range(category::CONTACT, detail::THIN, Club::Iron8),
            range(category::CONTACT, detail::FAT, Club::Iron8),
            range(category::CONTACT, detail::FLUSH, Club::Iron8),
            range(category::CONTACT, detail::FLUSH, Club::Iron8),
        ];
        let metrics = compute_metrics(&events, Some(Club::Iron8));
        assert_close(metrics.thin_rate, 0.25);
        assert_close(metrics.fat_rate, 0.25);
        assert_close(metrics.flush_rate, 0.5);
    }

    #[test]
    fn test_driver_miss_rates() {
        let mut events: Vec<PracticeEvent> = (0..4)
            .map(|_| range(category::DRIVER_MISS, detail::SLICE, Club::Driver))
            .collect();
        events.push(range(category::DRIVER_MISS, detail::NEUTRAL, Club::Driver));

        let metrics = compute_metrics(&events, None);
        assert_close(metrics.driver_slice_rate, 0.8);
        assert_close(metrics.driver_hook_rate, 0.);

        let driver = compute_metrics(&events, Some(Club::Driver));
        assert_close(driver.driver_slice_rate, 0.8);

        let iron = compute_metrics(&events, Some(Club::Iron7));
        assert_eq!(iron.driver_slice_rate, None);
        assert_eq!(iron.driver_hook_rate, None);
    }

    #[test]
    fn test_legacy_driver_category_counts() {
        let events = vec![
            range(category::DRIVER, detail::HOOK, Club::Driver),
            range(category::DRIVER, detail::NEUTRAL, Club::Driver),
        ];
        assert_close(compute_metrics(&events, None).driver_hook_rate, 0.5);
    }

    #[test]
    fn test_carry_std_needs_three_samples() {
        let events = vec![carry(Club::Driver, 150.), carry(Club::Driver, 155.)];
        let metrics = compute_metrics(&events, None);
        assert_eq!(metrics.get(MetricKey::CarryStd(Club::Driver)), None);
        assert!(metrics.carry_std.contains_key(&Club::Driver));
    }

    #[test]
    fn test_carry_std_sample_deviation() {
        let events = vec![
            carry(Club::Iron7, 140.),
            carry(Club::Iron7, 150.),
            carry(Club::Iron7, 160.),
            carry(Club::Iron7, 0.),
            carry(Club::PitchingWedge, 100.),
        ];
        let metrics = compute_metrics(&events, None);
        assert_close(metrics.get(MetricKey::CarryStd(Club::Iron7)), 10.);
        assert_eq!(metrics.get(MetricKey::CarryStd(Club::PitchingWedge)), None);

        let filtered = compute_metrics(&events, Some(Club::PitchingWedge));
        assert!(!filtered.carry_std.contains_key(&Club::Iron7));
    }

    #[test]
    fn test_carry_without_club_is_ignored() {
        let events: Vec<PracticeEvent> = (0..5)
            .map(|i| {
                PracticeEvent::new(date(), SessionType::Range, category::DISTANCE_CONTROL, detail::CARRY)
                    .with_value(100. + i as f64)
            })
            .collect();
        assert!(compute_metrics(&events, None).carry_std.is_empty());
    }

    #[test]
    fn test_short_game_metrics() {
        let events = vec![
            short_game(category::CHIPPING, detail::WITHIN_2M),
            short_game(category::CHIPPING, detail::OUTSIDE_2M),
            short_game(category::CHIPPING, detail::OUTSIDE_2M),
            short_game(category::CHIPPING, detail::WITHIN_2M),
            short_game(category::PITCHING, detail::WITHIN_5M),
            short_game(category::PUTTING, detail::LONG_PUTT_AVG).with_value(1.5),
            short_game(category::PUTTING, detail::LONG_PUTT_AVG).with_value(2.5),
        ];
        let metrics = compute_metrics(&events, Some(Club::Iron7));
        assert_close(metrics.chip_within2_rate, 0.5);
        assert_close(metrics.pitch_within5_rate, 1.);
        assert_close(metrics.long_putt_avg, 2.);
        assert_eq!(metrics.short_putt_make, None);
    }

    #[test]
    fn test_single_short_putt_make_is_a_signal() {
        let events = vec![short_game(category::PUTTING, detail::MADE_SHORT_PUTT)];
        assert_eq!(compute_metrics(&events, None).short_putt_make, Some(1.));
    }

    #[test]
    fn test_unknown_labels_are_ignored() {
        let events = vec![
            range("Tempo", "70% clean", Club::Iron7),
            range(category::STRIKE_PATTERN, detail::CENTER, Club::Iron7),
        ];
        let metrics = compute_metrics(&events, None);
        assert_close(metrics.clean_rate, 1.);
    }

    #[test]
    fn test_metric_names() {
        assert_eq!(MetricKey::CleanRate.to_string(), "clean_rate");
        assert_eq!(MetricKey::CarryStd(Club::Iron7).to_string(), "carry_std_7i");
        assert_eq!(MetricKey::CarryStd(Club::Driver).to_string(), "carry_std_driver");
        assert_eq!(MetricKey::CarryStd(Club::Driver).kind(), MetricKind::Spread);
        assert_eq!(MetricKey::ChipWithin2Rate.kind(), MetricKind::Rate);
    }

    #[test]
    fn test_format_value_follows_metric_kind() {
        assert_eq!(MetricKey::CleanRate.format_value(Some(0.6)), "60%");
        assert_eq!(MetricKey::CarryStd(Club::Iron7).format_value(Some(4.26)), "4.3 m");
        assert_eq!(MetricKey::LongPuttAvg.format_value(Some(2.)), "2.00");
        assert_eq!(MetricKey::ShortPuttMake.format_value(None), "-");
    }

    fn strike_detail() -> impl Strategy<Value = &'static str> {
        prop_oneof![
            Just(detail::CENTER),
            Just(detail::TOE),
            Just(detail::HEEL),
            Just("Shank"),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_clean_rate_is_a_fraction(details in prop::collection::vec(strike_detail(), 0..60)) {
            let events: Vec<PracticeEvent> = details
                .iter()
                .map(|d| range(category::STRIKE_PATTERN, d, Club::Iron6))
                .collect();
            let metrics = compute_metrics(&events, None);

            if events.is_empty() {
                prop_assert!(metrics.clean_rate.is_none());
            } else {
                let rate = metrics.clean_rate.unwrap();
                prop_assert!((0.0..=1.0).contains(&rate));
            }
        }

        #[test]
        fn prop_carry_std_defined_from_three_samples(carries in prop::collection::vec(-20.0f64..250.0, 0..12)) {
            let events: Vec<PracticeEvent> = carries.iter().map(|c| carry(Club::Iron9, *c)).collect();
            let positive = carries.iter().filter(|c| **c > 0.).count();
            let std = compute_metrics(&events, None).get(MetricKey::CarryStd(Club::Iron9));

            if positive < MIN_CARRY_SAMPLES {
                prop_assert!(std.is_none());
            } else {
                prop_assert!(std.unwrap() >= 0.);
            }
        }
    }
}
