use std::collections::{HashMap, HashSet};

use log::debug;

use crate::benchmarks::{Targets, resolve_benchmarks};
use crate::metrics::{MetricKey, MetricSet, compute_metrics};
use crate::practice::{Club, ClubGroup, PracticeEvent};
use crate::profile::{Mode, Profile, resolve_coach_mode};

pub mod playbook;

/// Most items returned as a next-session suggestion.
pub const MAX_SESSION_ITEMS: usize = 3;

/// Thin or fat share above which contact advice fires, whatever the tier.
pub const CONTACT_FAULT_LIMIT: f64 = 0.25;

/// A piece of practice advice, ready to show to the player.
///
/// Items come out of [`RecommendationEngine`] already ordered by priority.
/// The steps are worded for the resolved coach mode, so the same advice reads
/// shorter in simple mode than in advanced mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationItem {
    pub title: String,
    /// Why this matters
    pub rationale: String,
    /// Ordered action steps, worded for the coach mode
    pub steps: Vec<String>,
}

/// Everything the engine can advise.
///
/// Each variant has exactly one playbook entry. The `Log*` variants ask for
/// more data rather than pointing at a fault, and `Maintenance` is the
/// fallback when nothing else fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Advice {
    CenterStrike,
    ThinContact,
    FatContact,
    CarrySpread,
    DriverSlice,
    DriverHook,
    ChipAccuracy,
    ShortPutting,
    IronShaping,
    SweepContact,
    WedgeMatrix,
    LandingSpot,
    LogRangeStrikes,
    LogDriverMisses,
    LogChips,
    LogShortPutts,
    Maintenance,
}

/// Result of comparing one metric with its target.
///
/// Keeping "no data" apart from "met" lets the next-session list ask for
/// data while the per-club list stays quiet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gap {
    /// Defined and on the wrong side of the target
    Miss,
    /// Not enough data to say
    NoData,
    /// Defined and on the right side of the target, or exactly on it
    Met,
}

/// A rule that fired, optionally about a specific club.
///
/// Firings are the engine's intermediate output. They are sorted by the
/// priority of their playbook entry and deduplicated by title before
/// becoming [`RecommendationItem`]s. `club` is set for carry spread, whose
/// title names the club.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Firing {
    pub advice: Advice,
    pub club: Option<Club>,
}

impl Firing {
    fn new(advice: Advice) -> Self {
        Self { advice, club: None }
    }

    fn for_club(advice: Advice, club: Club) -> Self {
        Self {
            advice,
            club: Some(club),
        }
    }
}

/// Compare a benchmarked metric with its tier target.
pub fn benchmark_gap(metrics: &MetricSet, targets: &Targets, key: MetricKey) -> Gap {
    match metrics.get(key) {
        None => Gap::NoData,
        value if targets.misses(key, value) => Gap::Miss,
        Some(_) => Gap::Met,
    }
}

/// Compare a metric with a fixed upper limit.
fn limit_gap(metrics: &MetricSet, key: MetricKey, limit: f64) -> Gap {
    match metrics.get(key) {
        None => Gap::NoData,
        Some(value) if value > limit => Gap::Miss,
        Some(_) => Gap::Met,
    }
}

/// Turns metrics and targets into advice items.
///
/// The engine owns a playbook that maps every [`Advice`] to its title,
/// rationale, priority and steps for each coach mode. Recommending is done
/// in two passes. Rules are evaluated independently into [`Firing`]s, then
/// the firings are ranked, deduplicated and rendered.
///
/// In the next-session variant a rate metric with no data at all fires its
/// data-collection advice instead of being skipped. Carry spread is handled
/// separately and only fires on a miss, so a spread under the sample minimum
/// never produces advice.
pub struct RecommendationEngine {
    playbook: HashMap<Advice, playbook::Entry>,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self {
            playbook: playbook::build_playbook(),
        }
    }

    /// Rules for the whole log, most important first.
    pub fn session_firings(&self, metrics: &MetricSet, targets: &Targets) -> Vec<Firing> {
        let mut firings = Vec::new();

        let rate_rules = [
            (
                benchmark_gap(metrics, targets, MetricKey::CleanRate),
                Advice::CenterStrike,
                Advice::LogRangeStrikes,
            ),
            (
                limit_gap(metrics, MetricKey::ThinRate, CONTACT_FAULT_LIMIT),
                Advice::ThinContact,
                Advice::LogRangeStrikes,
            ),
            (
                limit_gap(metrics, MetricKey::FatRate, CONTACT_FAULT_LIMIT),
                Advice::FatContact,
                Advice::LogRangeStrikes,
            ),
            (
                benchmark_gap(metrics, targets, MetricKey::DriverSliceRate),
                Advice::DriverSlice,
                Advice::LogDriverMisses,
            ),
            (
                benchmark_gap(metrics, targets, MetricKey::DriverHookRate),
                Advice::DriverHook,
                Advice::LogDriverMisses,
            ),
        ];
        for (gap, on_miss, on_no_data) in rate_rules {
            match gap {
                Gap::Miss => firings.push(Firing::new(on_miss)),
                Gap::NoData => firings.push(Firing::new(on_no_data)),
                Gap::Met => {}
            }
        }

        firings.extend(self.carry_spread_firings(metrics, targets));

        let short_game_rules = [
            (MetricKey::ChipWithin2Rate, Advice::ChipAccuracy, Advice::LogChips),
            (MetricKey::ShortPuttMake, Advice::ShortPutting, Advice::LogShortPutts),
        ];
        for (key, on_miss, on_no_data) in short_game_rules {
            match benchmark_gap(metrics, targets, key) {
                Gap::Miss => firings.push(Firing::new(on_miss)),
                Gap::NoData => firings.push(Firing::new(on_no_data)),
                Gap::Met => {}
            }
        }

        firings
    }

    /// Rules for a single club: general faults with data, then the drills of
    /// the club's group.
    pub fn club_firings(&self, metrics: &MetricSet, targets: &Targets, club: Club) -> Vec<Firing> {
        let mut firings = Vec::new();

        if benchmark_gap(metrics, targets, MetricKey::CleanRate) == Gap::Miss {
            firings.push(Firing::new(Advice::CenterStrike));
        }
        if limit_gap(metrics, MetricKey::ThinRate, CONTACT_FAULT_LIMIT) == Gap::Miss {
            firings.push(Firing::new(Advice::ThinContact));
        }
        if limit_gap(metrics, MetricKey::FatRate, CONTACT_FAULT_LIMIT) == Gap::Miss {
            firings.push(Firing::new(Advice::FatContact));
        }
        if benchmark_gap(metrics, targets, MetricKey::CarryStd(club)) == Gap::Miss {
            firings.push(Firing::for_club(Advice::CarrySpread, club));
        }

        match club.group() {
            ClubGroup::Driver => {
                if benchmark_gap(metrics, targets, MetricKey::DriverSliceRate) == Gap::Miss {
                    firings.push(Firing::new(Advice::DriverSlice));
                }
                if benchmark_gap(metrics, targets, MetricKey::DriverHookRate) == Gap::Miss {
                    firings.push(Firing::new(Advice::DriverHook));
                }
            }
            ClubGroup::Iron => firings.push(Firing::new(Advice::IronShaping)),
            ClubGroup::Fairway | ClubGroup::Hybrid => firings.push(Firing::new(Advice::SweepContact)),
            ClubGroup::Wedge => {
                if benchmark_gap(metrics, targets, MetricKey::ChipWithin2Rate) == Gap::Miss {
                    firings.push(Firing::new(Advice::ChipAccuracy));
                }
                firings.push(Firing::new(Advice::WedgeMatrix));
                firings.push(Firing::new(Advice::LandingSpot));
            }
        }

        firings
    }

    fn carry_spread_firings(&self, metrics: &MetricSet, targets: &Targets) -> Vec<Firing> {
        metrics
            .carry_std
            .keys()
            .filter(|club| benchmark_gap(metrics, targets, MetricKey::CarryStd(**club)) == Gap::Miss)
            .map(|club| Firing::for_club(Advice::CarrySpread, *club))
            .collect()
    }

    /// Order by priority (stable, so rule order breaks ties), drop duplicate
    /// titles and fall back to maintenance when nothing fired.
    pub fn render(&self, firings: Vec<Firing>, mode: Mode) -> Vec<RecommendationItem> {
        let mut firings = firings;
        firings.sort_by_key(|firing| std::cmp::Reverse(self.entry(firing.advice).priority));

        let mut seen = HashSet::new();
        let mut items: Vec<RecommendationItem> = firings
            .into_iter()
            .map(|firing| self.item(firing, mode))
            .filter(|item| seen.insert(item.title.clone()))
            .collect();

        if items.is_empty() {
            items.push(self.item(Firing::new(Advice::Maintenance), mode));
        }
        items
    }

    fn entry(&self, advice: Advice) -> &playbook::Entry {
        self.playbook.get(&advice).unwrap_or(&playbook::MAINTENANCE)
    }

    /// Advice text for one firing in the given mode.
    pub fn item(&self, firing: Firing, mode: Mode) -> RecommendationItem {
        let entry = self.entry(firing.advice);
        let title = match firing.club {
            Some(club) => format!("{} ({})", entry.title, club),
            None => entry.title.to_string(),
        };
        let steps = match mode {
            Mode::Simple => entry.simple_steps,
            Mode::Advanced => entry.advanced_steps,
        };
        RecommendationItem {
            title,
            rationale: entry.rationale.to_string(),
            steps: steps.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// At most three items for the next practice session.
    pub fn next_session(&self, events: &[PracticeEvent], profile: &Profile) -> Vec<RecommendationItem> {
        let metrics = compute_metrics(events, None);
        let (tier, targets) = resolve_benchmarks(profile);
        let mode = resolve_coach_mode(profile);

        let firings = self.session_firings(&metrics, &targets);
        debug!("Next session ({tier}, {mode}): fired {:?}", firings);

        let mut items = self.render(firings, mode);
        items.truncate(MAX_SESSION_ITEMS);
        items
    }

    /// Full advice list for one club.
    pub fn for_club(
        &self,
        events: &[PracticeEvent],
        profile: &Profile,
        club: Club,
        mode: Mode,
    ) -> Vec<RecommendationItem> {
        let metrics = compute_metrics(events, Some(club));
        let (tier, targets) = resolve_benchmarks(profile);

        let firings = self.club_firings(&metrics, &targets, club);
        debug!("Club {club} ({tier}, {mode}): fired {:?}", firings);

        self.render(firings, mode)
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Up to three things to work on next, worded for the profile's coach mode.
pub fn recommend_next_session(events: &[PracticeEvent], profile: &Profile) -> Vec<RecommendationItem> {
    RecommendationEngine::new().next_session(events, profile)
}

/// Every applicable piece of advice for `club`.
pub fn recommend_for_club(
    events: &[PracticeEvent],
    profile: &Profile,
    club: Club,
    mode: Mode,
) -> Vec<RecommendationItem> {
    RecommendationEngine::new().for_club(events, profile, club, mode)
}
