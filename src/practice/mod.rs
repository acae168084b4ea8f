pub mod daily;
pub mod event_log;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use daily::DailyCounters;
pub use event_log::{EventLog, JsonLinesEventLog};

/// Category labels written by the logging front-end.
///
/// Labels are free-form on disk; these are the spellings the metrics
/// recognise. Matching goes through [`label_matches`], so `"StrikePattern"`
/// and `"strike pattern"` are the same label.
pub mod category {
    pub const STRIKE_PATTERN: &str = "Strike Pattern";
    pub const CONTACT: &str = "Contact";
    pub const DRIVER_MISS: &str = "Driver Miss";
    /// Older logs recorded driver misses under a bare "Driver" category.
    pub const DRIVER: &str = "Driver";
    pub const SHAPE: &str = "Shape";
    pub const DISTANCE_CONTROL: &str = "DistanceControl";
    pub const PUTTING: &str = "Putting";
    pub const CHIPPING: &str = "Chipping";
    pub const PITCHING: &str = "Pitching";
    pub const LAUNCH_MONITOR: &str = "LaunchMonitor";
    pub const ROUND: &str = "Round";
    pub const SESSION: &str = "Session";
    pub const NOTE: &str = "Note";
}

/// Outcome labels within a category.
pub mod detail {
    pub const CENTER: &str = "Center";
    pub const TOE: &str = "Toe";
    pub const HEEL: &str = "Heel";
    pub const THIN: &str = "Thin";
    pub const FAT: &str = "Fat";
    pub const FLUSH: &str = "Flush";
    pub const SLICE: &str = "Slice";
    pub const HOOK: &str = "Hook";
    pub const NEUTRAL: &str = "Neutral";
    pub const CARRY: &str = "Carry";
    pub const WITHIN_2M: &str = "Within2m";
    pub const OUTSIDE_2M: &str = "Outside2m";
    pub const WITHIN_5M: &str = "Within5m";
    pub const OUTSIDE_5M: &str = "Outside5m";
    pub const MADE_SHORT_PUTT: &str = "MadeShortPutt";
    pub const LONG_PUTT_AVG: &str = "LongPuttAvg";
    pub const FAIRWAY_HIT: &str = "FairwayHit";
    pub const GREEN_IN_REGULATION: &str = "GIR";
    pub const PUTT: &str = "Putt";
    pub const COMMENT: &str = "Comment";
}

/// Lowercase `label` and strip spaces, dashes and underscores, so
/// `"Strike Pattern"` and `"strike_pattern"` both become `"strikepattern"`.
pub fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare two free-form labels ignoring case, spaces, dashes and underscores.
pub fn label_matches(label: &str, expected: &str) -> bool {
    normalize_label(label) == normalize_label(expected)
}

/// The kind of practice session an event was logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SessionType {
    #[default]
    Range,
    ShortGame,
    Course,
    System,
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionType::Range => write!(f, "Range"),
            SessionType::ShortGame => write!(f, "Short Game"),
            SessionType::Course => write!(f, "Course"),
            SessionType::System => write!(f, "System"),
        }
    }
}

impl FromStr for SessionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            SessionType::Range,
            SessionType::ShortGame,
            SessionType::Course,
            SessionType::System,
        ]
        .into_iter()
        .find(|session| label_matches(s, &session.to_string()))
        .ok_or_else(|| format!("unknown session type {s:?}: expected range, short-game, course or system"))
    }
}

/// Coarse club family used to pick club-specific advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClubGroup {
    Driver,
    Fairway,
    Hybrid,
    Wedge,
    Iron,
}

impl fmt::Display for ClubGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClubGroup::Driver => write!(f, "driver"),
            ClubGroup::Fairway => write!(f, "fairway"),
            ClubGroup::Hybrid => write!(f, "hybrid"),
            ClubGroup::Wedge => write!(f, "wedge"),
            ClubGroup::Iron => write!(f, "iron"),
        }
    }
}

/// Classify any club name into its [`ClubGroup`].
///
/// This is the only place club names are interpreted. Names that are not in
/// the bag (hand-typed or from older logs) fall through the same substring
/// rules, ending at `Iron`.
pub fn club_group(name: &str) -> ClubGroup {
    let name = name.trim().to_lowercase();
    // two-character codes like "3w" or "4h"
    let is_code = |suffix: char| name.len() == 2 && name.ends_with(suffix);

    if name == "driver" || name == "dr" {
        ClubGroup::Driver
    } else if ["pw", "gw", "sw", "lw"].iter().any(|w| name.contains(w)) {
        ClubGroup::Wedge
    } else if name.contains("wood") || name.contains("tra") || is_code('w') {
        ClubGroup::Fairway
    } else if name.contains("hybrid") || is_code('h') {
        ClubGroup::Hybrid
    } else {
        ClubGroup::Iron
    }
}

/// A club from the practice bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Club {
    Driver,
    Wood3,
    Wood5,
    Hybrid3,
    Hybrid4,
    Iron4,
    Iron5,
    Iron6,
    Iron7,
    Iron8,
    Iron9,
    PitchingWedge,
    GapWedge,
    SandWedge,
    LobWedge,
}

impl Club {
    /// All clubs in bag order.
    pub const ALL: &[Club] = &[
        Club::Driver,
        Club::Wood3,
        Club::Wood5,
        Club::Hybrid3,
        Club::Hybrid4,
        Club::Iron4,
        Club::Iron5,
        Club::Iron6,
        Club::Iron7,
        Club::Iron8,
        Club::Iron9,
        Club::PitchingWedge,
        Club::GapWedge,
        Club::SandWedge,
        Club::LobWedge,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Club::Driver => "Driver",
            Club::Wood3 => "3-Wood",
            Club::Wood5 => "5-Wood",
            Club::Hybrid3 => "Hybrid 3",
            Club::Hybrid4 => "Hybrid 4",
            Club::Iron4 => "4i",
            Club::Iron5 => "5i",
            Club::Iron6 => "6i",
            Club::Iron7 => "7i",
            Club::Iron8 => "8i",
            Club::Iron9 => "9i",
            Club::PitchingWedge => "PW",
            Club::GapWedge => "GW",
            Club::SandWedge => "SW",
            Club::LobWedge => "LW",
        }
    }

    /// Short code used in metric names, e.g. `carry_std_7i`.
    pub fn code(&self) -> &'static str {
        match self {
            Club::Driver => "driver",
            Club::Wood3 => "3w",
            Club::Wood5 => "5w",
            Club::Hybrid3 => "3h",
            Club::Hybrid4 => "4h",
            Club::Iron4 => "4i",
            Club::Iron5 => "5i",
            Club::Iron6 => "6i",
            Club::Iron7 => "7i",
            Club::Iron8 => "8i",
            Club::Iron9 => "9i",
            Club::PitchingWedge => "pw",
            Club::GapWedge => "gw",
            Club::SandWedge => "sw",
            Club::LobWedge => "lw",
        }
    }

    /// Parse a club name or code. Loft suffixes such as `"PW (48deg)"` are
    /// ignored. Returns `None` for empty or unknown names.
    pub fn from_name(name: &str) -> Option<Club> {
        let name = name.split('(').next().unwrap_or_default().trim();
        if name.is_empty() {
            return None;
        }
        Club::ALL.iter().copied().find(|club| {
            label_matches(name, club.name())
                || label_matches(name, club.code())
                || label_matches(name, &club.legacy_name())
        })
    }

    /// Names used by the first versions of the logging front-end.
    fn legacy_name(&self) -> String {
        match self {
            Club::Wood3 => "Tra-3".to_string(),
            Club::Wood5 => "Tra-5".to_string(),
            Club::Driver => "DR".to_string(),
            other => other.name().to_uppercase(),
        }
    }

    pub fn group(&self) -> ClubGroup {
        club_group(self.name())
    }
}

impl fmt::Display for Club {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Club {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Club::from_name(s).ok_or_else(|| {
            format!(
                "unknown club {s:?}: expected one of {}",
                Club::ALL.iter().map(Club::name).collect::<Vec<_>>().join(", ")
            )
        })
    }
}

/// Serializes an optional club as its name, `""` meaning no club. Unknown
/// names read back as `None` so that schema drift never fails a load.
mod club_field {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Club;

    pub fn serialize<S: Serializer>(club: &Option<Club>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(club.map(|c| c.name()).unwrap_or_default())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Club>, D::Error> {
        let name = Option::<String>::deserialize(deserializer)?;
        Ok(name.as_deref().and_then(Club::from_name))
    }
}

/// One logged practice action.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PracticeEvent {
    pub date: NaiveDate,
    pub session_type: SessionType,
    pub category: String,
    pub detail: String,
    #[serde(default, with = "club_field")]
    pub club: Option<Club>,
    /// 1 for discrete makes/misses, meters for carry and long-putt averages
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub note: String,
}

impl PracticeEvent {
    /// A discrete outcome (value 1, no club, no note).
    pub fn new(date: NaiveDate, session_type: SessionType, category: &str, detail: &str) -> Self {
        Self {
            date,
            session_type,
            category: category.to_string(),
            detail: detail.to_string(),
            club: None,
            value: 1.,
            note: String::new(),
        }
    }

    pub fn with_club(mut self, club: Club) -> Self {
        self.club = Some(club);
        self
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = note.to_string();
        self
    }

    pub fn in_category(&self, category: &str) -> bool {
        label_matches(&self.category, category)
    }

    pub fn has_detail(&self, detail: &str) -> bool {
        label_matches(&self.detail, detail)
    }
}
