// Library interface for rangebook
// This allows integration tests and the CLI to share the core

pub mod benchmarks;
pub mod errors;
pub mod glossary;
pub mod metrics;
pub mod practice;
pub mod profile;
pub mod recommendations;
pub mod swing_feedback;

// Re-export commonly used types
pub use benchmarks::{SkillTier, Targets, resolve_benchmarks};
pub use errors::RangebookError;
pub use metrics::{MetricKey, MetricSet, compute_metrics};
pub use practice::{Club, ClubGroup, EventLog, JsonLinesEventLog, PracticeEvent, SessionType, club_group};
pub use profile::{CoachMode, Mode, Profile, ProfileStore, resolve_coach_mode};
pub use recommendations::{RecommendationItem, recommend_for_club, recommend_next_session};
pub use swing_feedback::{SwingClubCategory, SwingMeasurement, analyze_swing_data};
