use std::fmt;

use crate::metrics::MetricKey;
use crate::practice::{Club, ClubGroup};
use crate::profile::Profile;

/// Highest handicap still rated `Pro`.
const PRO_MAX_HANDICAP: f64 = 12.;
/// Highest handicap still rated `Advanced`.
const ADVANCED_MAX_HANDICAP: f64 = 28.;

/// Coarse skill bracket used to scale targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillTier {
    Pro,
    Advanced,
    Beginner,
}

impl SkillTier {
    /// Tier for a handicap. Values outside 0-54 are not rejected; they just
    /// land in the nearest tier.
    pub fn from_handicap(handicap: f64) -> Self {
        if handicap <= PRO_MAX_HANDICAP {
            SkillTier::Pro
        } else if handicap <= ADVANCED_MAX_HANDICAP {
            SkillTier::Advanced
        } else {
            SkillTier::Beginner
        }
    }
}

impl fmt::Display for SkillTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillTier::Pro => write!(f, "Pro"),
            SkillTier::Advanced => write!(f, "Advanced"),
            SkillTier::Beginner => write!(f, "Beginner"),
        }
    }
}

/// Which side of the target is good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

impl Direction {
    /// Whether `value` is on the wrong side of `target`. Meeting the target
    /// exactly is not a miss.
    pub fn misses(&self, value: f64, target: f64) -> bool {
        match self {
            Direction::HigherIsBetter => value < target,
            Direction::LowerIsBetter => value > target,
        }
    }
}

/// Metrics that have a tier target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BenchmarkMetric {
    CleanRate,
    DriverSliceRate,
    DriverHookRate,
    /// Carry spread target used for every non-driver club
    CarryStdIron,
    CarryStdDriver,
    ChipWithin2Rate,
    ShortPuttMake,
}

/// (metric, Pro, Advanced, Beginner, direction)
const BENCHMARK_TABLE: [(BenchmarkMetric, f64, f64, f64, Direction); 7] = [
    (BenchmarkMetric::CleanRate, 0.65, 0.50, 0.35, Direction::HigherIsBetter),
    (BenchmarkMetric::DriverSliceRate, 0.12, 0.18, 0.25, Direction::LowerIsBetter),
    (BenchmarkMetric::DriverHookRate, 0.12, 0.18, 0.25, Direction::LowerIsBetter),
    (BenchmarkMetric::CarryStdIron, 6., 9., 13., Direction::LowerIsBetter),
    (BenchmarkMetric::CarryStdDriver, 10., 15., 22., Direction::LowerIsBetter),
    (BenchmarkMetric::ChipWithin2Rate, 0.60, 0.45, 0.30, Direction::HigherIsBetter),
    (BenchmarkMetric::ShortPuttMake, 0.90, 0.80, 0.60, Direction::HigherIsBetter),
];

impl BenchmarkMetric {
    pub const ALL: [BenchmarkMetric; 7] = [
        BenchmarkMetric::CleanRate,
        BenchmarkMetric::DriverSliceRate,
        BenchmarkMetric::DriverHookRate,
        BenchmarkMetric::CarryStdIron,
        BenchmarkMetric::CarryStdDriver,
        BenchmarkMetric::ChipWithin2Rate,
        BenchmarkMetric::ShortPuttMake,
    ];

    fn row(&self) -> &'static (BenchmarkMetric, f64, f64, f64, Direction) {
        BENCHMARK_TABLE
            .iter()
            .find(|(metric, ..)| metric == self)
            .unwrap_or(&BENCHMARK_TABLE[0])
    }

    pub fn direction(&self) -> Direction {
        self.row().4
    }

    pub fn target_for(&self, tier: SkillTier) -> f64 {
        let (_, pro, advanced, beginner, _) = *self.row();
        match tier {
            SkillTier::Pro => pro,
            SkillTier::Advanced => advanced,
            SkillTier::Beginner => beginner,
        }
    }

    /// The benchmark a computed metric is judged against, if any.
    pub fn for_metric(key: MetricKey) -> Option<BenchmarkMetric> {
        match key {
            MetricKey::CleanRate => Some(BenchmarkMetric::CleanRate),
            MetricKey::DriverSliceRate => Some(BenchmarkMetric::DriverSliceRate),
            MetricKey::DriverHookRate => Some(BenchmarkMetric::DriverHookRate),
            MetricKey::CarryStd(club) => Some(BenchmarkMetric::carry_std_for(club)),
            MetricKey::ChipWithin2Rate => Some(BenchmarkMetric::ChipWithin2Rate),
            MetricKey::ShortPuttMake => Some(BenchmarkMetric::ShortPuttMake),
            _ => None,
        }
    }

    /// Driver carries use the driver target, every other club the 7-iron one.
    pub fn carry_std_for(club: Club) -> BenchmarkMetric {
        match club.group() {
            ClubGroup::Driver => BenchmarkMetric::CarryStdDriver,
            _ => BenchmarkMetric::CarryStdIron,
        }
    }
}

impl fmt::Display for BenchmarkMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchmarkMetric::CleanRate => write!(f, "clean_rate"),
            BenchmarkMetric::DriverSliceRate => write!(f, "driver_slice_rate"),
            BenchmarkMetric::DriverHookRate => write!(f, "driver_hook_rate"),
            BenchmarkMetric::CarryStdIron => write!(f, "carry_std_7i"),
            BenchmarkMetric::CarryStdDriver => write!(f, "carry_std_driver"),
            BenchmarkMetric::ChipWithin2Rate => write!(f, "chip_within2_rate"),
            BenchmarkMetric::ShortPuttMake => write!(f, "short_putt_make"),
        }
    }
}

/// Target values for one tier.
///
/// A thin handle over the fixed benchmark table. Lookups go through
/// [`Targets::get`], and [`Targets::misses`] decides whether a computed value
/// sits on the wrong side of its target. An undefined value never misses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Targets {
    tier: SkillTier,
}

impl Targets {
    pub fn for_tier(tier: SkillTier) -> Self {
        Self { tier }
    }

    pub fn tier(&self) -> SkillTier {
        self.tier
    }

    pub fn get(&self, metric: BenchmarkMetric) -> f64 {
        metric.target_for(self.tier)
    }

    /// Target for a computed metric, `None` when it has no benchmark.
    pub fn for_metric(&self, key: MetricKey) -> Option<f64> {
        BenchmarkMetric::for_metric(key).map(|metric| self.get(metric))
    }

    /// Whether a metric value misses its target. Undefined values and
    /// metrics without a benchmark never miss.
    pub fn misses(&self, key: MetricKey, value: Option<f64>) -> bool {
        match (BenchmarkMetric::for_metric(key), value) {
            (Some(metric), Some(value)) => metric.direction().misses(value, self.get(metric)),
            _ => false,
        }
    }

    pub fn entries(&self) -> Vec<(BenchmarkMetric, f64)> {
        BenchmarkMetric::ALL
            .iter()
            .map(|metric| (*metric, self.get(*metric)))
            .collect()
    }
}

/// Tier and targets for the profile's handicap.
pub fn resolve_benchmarks(profile: &Profile) -> (SkillTier, Targets) {
    let tier = SkillTier::from_handicap(profile.handicap);
    (tier, Targets::for_tier(tier))
}
