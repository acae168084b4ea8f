// Descriptive history statistics for charts and summaries

use std::collections::BTreeMap;

use chrono::NaiveDate;
use itertools::Itertools;
use simple_moving_average::{SMA, SumTreeSMA};

use crate::practice::{Club, PracticeEvent, SessionType, category, detail};

/// Number of practice days averaged by the carry trend.
pub const CARRY_TREND_WINDOW: usize = 3;

/// Mean carry of one practice day for one club.
#[derive(Debug, Clone, PartialEq)]
pub struct CarryTrendPoint {
    pub date: NaiveDate,
    pub samples: usize,
    pub mean_carry: f64,
    /// Average of the daily means over the last `CARRY_TREND_WINDOW` days
    pub rolling_mean: f64,
}

/// Course round tallies for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundCounts {
    pub fairways_hit: u32,
    pub greens_in_regulation: u32,
    pub putts: u32,
}

/// Range strike-pattern outcomes per day, keyed by the logged detail.
pub fn daily_strike_counts(events: &[PracticeEvent]) -> BTreeMap<NaiveDate, BTreeMap<String, u32>> {
    let mut counts: BTreeMap<NaiveDate, BTreeMap<String, u32>> = BTreeMap::new();
    for event in events
        .iter()
        .filter(|e| e.session_type == SessionType::Range && e.in_category(category::STRIKE_PATTERN))
    {
        *counts
            .entry(event.date)
            .or_default()
            .entry(event.detail.clone())
            .or_insert(0) += 1;
    }
    counts
}

/// Per-day carry means for `club`, oldest first.
pub fn carry_trend(events: &[PracticeEvent], club: Club) -> Vec<CarryTrendPoint> {
    let daily = events
        .iter()
        .filter(|e| {
            e.session_type == SessionType::Range
                && e.in_category(category::DISTANCE_CONTROL)
                && e.has_detail(detail::CARRY)
                && e.club == Some(club)
                && e.value.is_finite()
                && e.value > 0.
        })
        .map(|e| (e.date, e.value))
        .into_group_map();

    let mut window = SumTreeSMA::<f64, f64, CARRY_TREND_WINDOW>::new();
    daily
        .into_iter()
        .sorted_by_key(|(date, _)| *date)
        .map(|(date, carries)| {
            let mean_carry = carries.iter().sum::<f64>() / carries.len() as f64;
            window.add_sample(mean_carry);
            CarryTrendPoint {
                date,
                samples: carries.len(),
                mean_carry,
                rolling_mean: window.get_average(),
            }
        })
        .collect()
}

/// Short putts holed per day.
pub fn short_putts_per_day(events: &[PracticeEvent]) -> BTreeMap<NaiveDate, u32> {
    events
        .iter()
        .filter(|e| e.in_category(category::PUTTING) && e.has_detail(detail::MADE_SHORT_PUTT))
        .map(|e| e.date)
        .counts()
        .into_iter()
        .map(|(date, count)| (date, count as u32))
        .collect()
}

/// Fairways, greens in regulation and putts logged on the course, per day.
pub fn round_counts(events: &[PracticeEvent]) -> BTreeMap<NaiveDate, RoundCounts> {
    let mut rounds: BTreeMap<NaiveDate, RoundCounts> = BTreeMap::new();
    for event in events
        .iter()
        .filter(|e| e.session_type == SessionType::Course && e.in_category(category::ROUND))
    {
        let day = rounds.entry(event.date).or_default();
        if event.has_detail(detail::FAIRWAY_HIT) {
            day.fairways_hit += 1;
        } else if event.has_detail(detail::GREEN_IN_REGULATION) {
            day.greens_in_regulation += 1;
        } else if event.has_detail(detail::PUTT) {
            day.putts += 1;
        }
    }
    rounds
}
