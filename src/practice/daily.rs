use std::collections::HashMap;

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use super::{PracticeEvent, normalize_label};

/// Today's tally of logged outcomes.
///
/// The caller owns this value and passes it back in on every use. Counts are
/// keyed by `(category, detail)` after [`normalize_label`], the same way
/// metrics match labels, so `"Strike Pattern"` and `"strike pattern"` share a
/// bucket. They are cleared the first time a later date is seen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyCounters {
    last_reset: Option<NaiveDate>,
    counts: HashMap<String, HashMap<String, u32>>,
}

impl DailyCounters {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            last_reset: Some(today),
            counts: HashMap::new(),
        }
    }

    pub fn last_reset(&self) -> Option<NaiveDate> {
        self.last_reset
    }

    /// Clear the counters if `today` is after the last reset. Returns whether
    /// a reset happened.
    pub fn reset_if_new_day(&mut self, today: NaiveDate) -> bool {
        match self.last_reset {
            Some(last) if last >= today => false,
            _ => {
                debug!("Resetting daily counters for {today}");
                self.counts.clear();
                self.last_reset = Some(today);
                true
            }
        }
    }

    /// Count an event against its date. Events older than the current day are
    /// ignored.
    pub fn record(&mut self, event: &PracticeEvent) {
        self.reset_if_new_day(event.date);
        if self.last_reset != Some(event.date) {
            return;
        }
        *self
            .counts
            .entry(normalize_label(&event.category))
            .or_default()
            .entry(normalize_label(&event.detail))
            .or_insert(0) += 1;
    }

    pub fn count(&self, category: &str, detail: &str) -> u32 {
        self.counts
            .get(&normalize_label(category))
            .and_then(|details| details.get(&normalize_label(detail)))
            .copied()
            .unwrap_or(0)
    }

    pub fn category_total(&self, category: &str) -> u32 {
        self.counts
            .get(&normalize_label(category))
            .map(|details| details.values().sum())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice::{SessionType, category, detail};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn center(date: NaiveDate) -> PracticeEvent {
        PracticeEvent::new(date, SessionType::Range, category::STRIKE_PATTERN, detail::CENTER)
    }

    #[test]
    fn test_record_counts_same_day_events() {
        let mut counters = DailyCounters::new(day(1));
        counters.record(&center(day(1)));
        counters.record(&center(day(1)));
        assert_eq!(counters.count(category::STRIKE_PATTERN, detail::CENTER), 2);
        assert_eq!(counters.category_total(category::STRIKE_PATTERN), 2);
    }

    #[test]
    fn test_label_spellings_share_a_count() {
        let mut counters = DailyCounters::new(day(1));
        counters.record(&center(day(1)));
        counters.record(&PracticeEvent::new(day(1), SessionType::Range, "strike pattern", "center"));
        counters.record(&PracticeEvent::new(day(1), SessionType::Range, "STRIKE_PATTERN", "Toe"));

        assert_eq!(counters.count(category::STRIKE_PATTERN, detail::CENTER), 2);
        assert_eq!(counters.count("strike-pattern", "CENTER"), 2);
        assert_eq!(counters.category_total(category::STRIKE_PATTERN), 3);

        // metrics read the same events the same way
        let events = [
            center(day(1)),
            PracticeEvent::new(day(1), SessionType::Range, "strike pattern", "center"),
        ];
        let metrics = crate::metrics::compute_metrics(&events, None);
        assert_eq!(metrics.get(crate::metrics::MetricKey::CleanRate), Some(1.));
    }

    #[test]
    fn test_new_day_resets_counts() {
        let mut counters = DailyCounters::new(day(1));
        counters.record(&center(day(1)));

        assert!(counters.reset_if_new_day(day(2)));
        assert_eq!(counters.count(category::STRIKE_PATTERN, detail::CENTER), 0);
        assert_eq!(counters.last_reset(), Some(day(2)));

        // same day again is a no-op
        assert!(!counters.reset_if_new_day(day(2)));
    }

    #[test]
    fn test_record_with_later_date_resets_first() {
        let mut counters = DailyCounters::new(day(1));
        counters.record(&center(day(1)));
        counters.record(&center(day(3)));
        assert_eq!(counters.count(category::STRIKE_PATTERN, detail::CENTER), 1);
        assert_eq!(counters.last_reset(), Some(day(3)));
    }

    #[test]
    fn test_older_events_are_ignored() {
        let mut counters = DailyCounters::new(day(5));
        counters.record(&center(day(4)));
        assert_eq!(counters.category_total(category::STRIKE_PATTERN), 0);
    }

    #[test]
    fn test_default_counters_reset_on_first_use() {
        let mut counters = DailyCounters::default();
        assert_eq!(counters.last_reset(), None);
        counters.record(&center(day(1)));
        assert_eq!(counters.count(category::STRIKE_PATTERN, detail::CENTER), 1);
    }
}
