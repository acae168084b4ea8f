pub mod equipment;

use std::fmt;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use uom::si::f64::Velocity;
use uom::si::velocity::{meter_per_second, mile_per_hour};

use crate::errors::RangebookError;
use crate::practice::label_matches;

pub use equipment::{ShaftSuggestion, suggest_shaft_flex};

const PROFILE_FILE_NAME: &str = "profile.json";
const APP_DIR_NAME: &str = "rangebook";

/// Handicap at or above which `Auto` coach mode resolves to `Simple`.
const SIMPLE_MODE_MIN_HANDICAP: f64 = 28.;

/// The user's stored coach-mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CoachMode {
    #[default]
    Auto,
    Simple,
    Advanced,
}

impl fmt::Display for CoachMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoachMode::Auto => write!(f, "Auto"),
            CoachMode::Simple => write!(f, "Simple"),
            CoachMode::Advanced => write!(f, "Advanced"),
        }
    }
}

impl FromStr for CoachMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [CoachMode::Auto, CoachMode::Simple, CoachMode::Advanced]
            .into_iter()
            .find(|mode| label_matches(s, &mode.to_string()))
            .ok_or_else(|| format!("unknown coach mode {s:?}: expected auto, simple or advanced"))
    }
}

/// Effective detail level of generated advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Concrete physical cues
    Simple,
    /// Numeric and technical cues (angles, face-to-path deltas)
    Advanced,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Simple => write!(f, "Simple"),
            Mode::Advanced => write!(f, "Advanced"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Mode::Simple, Mode::Advanced]
            .into_iter()
            .find(|mode| label_matches(s, &mode.to_string()))
            .ok_or_else(|| format!("unknown mode {s:?}: expected simple or advanced"))
    }
}

/// Practice goal picked during onboarding. Shown to the user, not used by
/// the metrics or recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Goal {
    #[default]
    BalanceAndStrike,
    LessSliceHook,
    BetterShortGame,
    LongerDriver,
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::BalanceAndStrike => write!(f, "Balance & strike pattern"),
            Goal::LessSliceHook => write!(f, "Less slice/hook"),
            Goal::BetterShortGame => write!(f, "Better short game"),
            Goal::LongerDriver => write!(f, "Longer with driver"),
        }
    }
}

impl FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let goal = match s.trim().to_lowercase().as_str() {
            "balance" | "strike" | "balance & strike pattern" => Goal::BalanceAndStrike,
            "slice" | "hook" | "less slice/hook" => Goal::LessSliceHook,
            "short-game" | "short game" | "better short game" => Goal::BetterShortGame,
            "driver" | "distance" | "longer with driver" => Goal::LongerDriver,
            _ => {
                return Err(format!(
                    "unknown goal {s:?}: expected balance, slice, short-game or driver"
                ));
            }
        };
        Ok(goal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpeedUnit {
    #[default]
    #[serde(rename = "mph")]
    Mph,
    #[serde(rename = "m/s")]
    MetersPerSecond,
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeedUnit::Mph => write!(f, "mph"),
            SpeedUnit::MetersPerSecond => write!(f, "m/s"),
        }
    }
}

impl FromStr for SpeedUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mph" => Ok(SpeedUnit::Mph),
            "m/s" | "mps" => Ok(SpeedUnit::MetersPerSecond),
            _ => Err(format!("unknown speed unit {s:?}: expected mph or m/s")),
        }
    }
}

/// Driver swing speed as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwingSpeed {
    pub value: f64,
    pub unit: SpeedUnit,
}

impl SwingSpeed {
    pub fn new(value: f64, unit: SpeedUnit) -> Self {
        Self { value, unit }
    }

    fn velocity(&self) -> Velocity {
        match self.unit {
            SpeedUnit::Mph => Velocity::new::<mile_per_hour>(self.value),
            SpeedUnit::MetersPerSecond => Velocity::new::<meter_per_second>(self.value),
        }
    }

    pub fn as_mph(&self) -> f64 {
        self.velocity().get::<mile_per_hour>()
    }

    pub fn as_mps(&self) -> f64 {
        self.velocity().get::<meter_per_second>()
    }
}

impl Default for SwingSpeed {
    fn default() -> Self {
        Self {
            value: 95.,
            unit: SpeedUnit::Mph,
        }
    }
}

/// Shows the stored value first and the other unit in brackets, e.g.
/// `95.0 mph (42.5 m/s)`.
impl fmt::Display for SwingSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            SpeedUnit::Mph => write!(f, "{:.1} mph ({:.1} m/s)", self.value, self.as_mps()),
            SpeedUnit::MetersPerSecond => write!(f, "{:.1} m/s ({:.1} mph)", self.value, self.as_mph()),
        }
    }
}

/// Driver shaft stiffness, softest to stiffest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum ShaftFlex {
    /// Ladies
    L,
    /// Senior
    A,
    /// Regular
    #[default]
    R,
    /// Stiff
    S,
    /// Extra stiff
    X,
}

impl fmt::Display for ShaftFlex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaftFlex::L => write!(f, "L"),
            ShaftFlex::A => write!(f, "A"),
            ShaftFlex::R => write!(f, "R"),
            ShaftFlex::S => write!(f, "S"),
            ShaftFlex::X => write!(f, "X"),
        }
    }
}

impl FromStr for ShaftFlex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "L" => Ok(ShaftFlex::L),
            "A" => Ok(ShaftFlex::A),
            "R" => Ok(ShaftFlex::R),
            "S" => Ok(ShaftFlex::S),
            "X" => Ok(ShaftFlex::X),
            _ => Err(format!("unknown shaft flex {s:?}: expected L, A, R, S or X")),
        }
    }
}

/// The single user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub handicap: f64,
    pub coach_mode: CoachMode,
    pub goal: Goal,
    pub swing_speed: SwingSpeed,
    pub shaft_flex: ShaftFlex,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            handicap: 36.,
            coach_mode: CoachMode::Auto,
            goal: Goal::default(),
            swing_speed: SwingSpeed::default(),
            shaft_flex: ShaftFlex::R,
        }
    }
}

impl Profile {
    /// Check a user-entered handicap. The core itself accepts any value.
    pub fn validate_handicap(handicap: f64) -> Result<f64, RangebookError> {
        if !(0.0..=54.0).contains(&handicap) {
            return Err(RangebookError::InvalidUserInput {
                field: "handicap".to_string(),
                reason: format!("{handicap} is outside 0-54"),
            });
        }
        Ok(handicap)
    }
}

/// Resolve the effective advice mode from the profile.
///
/// An explicit `Simple` or `Advanced` preference wins; `Auto` picks `Simple`
/// for handicaps of 28 and above.
pub fn resolve_coach_mode(profile: &Profile) -> Mode {
    match profile.coach_mode {
        CoachMode::Simple => Mode::Simple,
        CoachMode::Advanced => Mode::Advanced,
        CoachMode::Auto if profile.handicap >= SIMPLE_MODE_MIN_HANDICAP => Mode::Simple,
        CoachMode::Auto => Mode::Advanced,
    }
}

/// Default data directory, `<platform data dir>/rangebook`.
pub fn default_data_dir() -> Result<PathBuf, RangebookError> {
    Ok(dirs::data_dir()
        .ok_or(RangebookError::NoDataDir)?
        .join(APP_DIR_NAME))
}

/// JSON file holding the profile.
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(PROFILE_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the profile, writing the defaults on first access. A file that
    /// cannot be parsed falls back to the defaults without overwriting it.
    pub fn load(&self) -> Result<Profile, RangebookError> {
        if !self.path.exists() {
            info!("No profile at {:?}, creating default profile", self.path);
            let profile = Profile::default();
            self.save(&profile)?;
            return Ok(profile);
        }

        let file = File::open(&self.path).map_err(|e| RangebookError::ProfileIOError { source: e })?;
        match serde_json::from_reader(file) {
            Ok(profile) => {
                debug!("Loaded profile from {:?}", self.path);
                Ok(profile)
            }
            Err(e) => {
                warn!("Could not parse profile {:?}, using defaults: {}", self.path, e);
                Ok(Profile::default())
            }
        }
    }

    /// Replace the stored profile.
    pub fn save(&self, profile: &Profile) -> Result<(), RangebookError> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| RangebookError::ProfileIOError { source: e })?;
        }

        let file = File::create(&self.path).map_err(|e| RangebookError::ProfileIOError { source: e })?;
        serde_json::to_writer_pretty(file, profile)
            .map_err(|e| RangebookError::ProfileSerializeError { source: e })
    }
}
