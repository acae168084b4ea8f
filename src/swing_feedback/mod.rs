use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::practice::{ClubGroup, label_matches};
use crate::profile::Mode;

/// Tip returned when no rule fires.
pub const ALL_GOOD_TIP: &str = "Numbers look reasonable. Keep going!";

/// Extra tip appended in advanced mode.
pub const VIDEO_TIP: &str = "Advanced: film from behind (Down The Line) and from the front (Face On) and compare sequence and release with the drill.";

/// Driver launch may sit this far below the ideal.
const DRIVER_LAUNCH_BELOW_TOLERANCE_DEG: f64 = 2.;
/// Driver launch may sit this far above the ideal.
const DRIVER_LAUNCH_ABOVE_TOLERANCE_DEG: f64 = 3.;
const DRIVER_SPIN_HIGH_RPM: f64 = 3000.;
const DRIVER_SPIN_LOW_RPM: f64 = 1600.;
const DRIVER_MIN_ATTACK_ANGLE_DEG: f64 = -1.;
/// Path and face-to-path both beyond this (same sign) means a curve risk.
const DRIVER_CURVE_LIMIT_DEG: f64 = 2.;

const IRON_MIN_LAUNCH_DEG: f64 = 14.;
const IRON_MAX_LAUNCH_DEG: f64 = 22.;
const IRON_SPIN_LOW_RPM: f64 = 5000.;
const IRON_MIN_APEX_M: f64 = 18.;
const IRON_MAX_FACE_TO_PATH_DEG: f64 = 2.5;

/// One launch monitor reading. A zero in any field means "not measured".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SwingMeasurement {
    /// mph
    pub ball_speed: f64,
    /// degrees
    pub launch: f64,
    /// rpm
    pub spin: f64,
    /// meters
    pub apex: f64,
    /// degrees, positive is upward
    pub attack_angle: f64,
    /// degrees, positive is in-to-out
    pub club_path: f64,
    /// degrees, positive is closed to the path
    pub face_to_path: f64,
}

fn measured(value: f64) -> bool {
    value != 0. && value.is_finite()
}

/// Which rule set a measurement is judged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwingClubCategory {
    Driver,
    Iron,
}

impl SwingClubCategory {
    /// Driver rules for the driver, iron rules for everything else.
    pub fn for_group(group: ClubGroup) -> Self {
        match group {
            ClubGroup::Driver => SwingClubCategory::Driver,
            _ => SwingClubCategory::Iron,
        }
    }
}

impl fmt::Display for SwingClubCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwingClubCategory::Driver => write!(f, "Driver"),
            SwingClubCategory::Iron => write!(f, "Iron"),
        }
    }
}

impl FromStr for SwingClubCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if label_matches(s, "driver") {
            Ok(SwingClubCategory::Driver)
        } else if label_matches(s, "iron") {
            Ok(SwingClubCategory::Iron)
        } else {
            Err(format!("unknown club category {s:?}: expected driver or iron"))
        }
    }
}

/// Something a swing rule noticed about one reading.
///
/// Findings carry only what the tip text needs. The driver launch variants
/// keep the ideal launch so the tip can quote it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwingFinding {
    DriverLaunchLow { ideal: f64 },
    DriverLaunchHigh { ideal: f64 },
    DriverSpinHigh,
    DriverSpinLow,
    DriverAttackDownward,
    SliceRisk,
    HookRisk,
    IronLaunchLow,
    IronLaunchHigh,
    IronSpinLow,
    IronApexLow,
    FaceToPathWide,
}

impl fmt::Display for SwingFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwingFinding::DriverLaunchLow { ideal } => write!(
                f,
                "Raise the launch: tee higher, ball further forward, more tilt (target ~{ideal}°)."
            ),
            SwingFinding::DriverLaunchHigh { ideal } => write!(
                f,
                "Lower the launch: lower tee or neutral loft (target ~{ideal}°)."
            ),
            SwingFinding::DriverSpinHigh => write!(
                f,
                "High spin: hit more upward (positive Angle of Attack) or reduce loft."
            ),
            SwingFinding::DriverSpinLow => write!(
                f,
                "Very low spin: more loft or a less upward swing to control height."
            ),
            SwingFinding::DriverAttackDownward => write!(
                f,
                "Negative Angle of Attack: practice hitting up on it (ball forward, tee high)."
            ),
            SwingFinding::SliceRisk => write!(
                f,
                "Out-to-in path with an open face means slice risk: stronger grip and swing from the inside."
            ),
            SwingFinding::HookRisk => write!(
                f,
                "In-to-out path with a closed face means hook risk: neutralise face and release."
            ),
            SwingFinding::IronLaunchLow => write!(
                f,
                "Low launch: controlled shaft lean and clean contact after the ball."
            ),
            SwingFinding::IronLaunchHigh => write!(
                f,
                "High launch: reduce dynamic loft and strike down through the ball."
            ),
            SwingFinding::IronSpinLow => write!(
                f,
                "Low spin for an iron: cleaner contact and the right ball and loft."
            ),
            SwingFinding::IronApexLow => write!(
                f,
                "Low apex: aim for ~25-35 m with a 7i, keep the tempo and a full finish."
            ),
            SwingFinding::FaceToPathWide => write!(
                f,
                "Large gap between face and swing direction: work towards a more neutral face to path."
            ),
        }
    }
}

/// Ideal driver launch for a ball speed in mph.
pub fn ideal_driver_launch(ball_speed: f64) -> f64 {
    if ball_speed < 150. {
        12.
    } else if ball_speed < 165. {
        14.
    } else {
        15.5
    }
}

/// Rule set for one club category.
///
/// Implementations look at a single [`SwingMeasurement`] and return their
/// findings in rule order. A field that is zero counts as not measured, so
/// rules that need it stay silent.
pub trait SwingAnalyzer {
    fn analyze(&self, measurement: &SwingMeasurement) -> Vec<SwingFinding>;
}

pub struct DriverAnalyzer;

impl SwingAnalyzer for DriverAnalyzer {
    fn analyze(&self, m: &SwingMeasurement) -> Vec<SwingFinding> {
        let mut findings = Vec::new();

        // the ideal depends on ball speed, so both must be present
        if measured(m.ball_speed) && measured(m.launch) {
            let ideal = ideal_driver_launch(m.ball_speed);
            if m.launch < ideal - DRIVER_LAUNCH_BELOW_TOLERANCE_DEG {
                findings.push(SwingFinding::DriverLaunchLow { ideal });
            } else if m.launch > ideal + DRIVER_LAUNCH_ABOVE_TOLERANCE_DEG {
                findings.push(SwingFinding::DriverLaunchHigh { ideal });
            }
        }

        if m.spin > DRIVER_SPIN_HIGH_RPM {
            findings.push(SwingFinding::DriverSpinHigh);
        } else if m.spin > 0. && m.spin < DRIVER_SPIN_LOW_RPM {
            findings.push(SwingFinding::DriverSpinLow);
        }

        if m.attack_angle < DRIVER_MIN_ATTACK_ANGLE_DEG {
            findings.push(SwingFinding::DriverAttackDownward);
        }

        if m.club_path < -DRIVER_CURVE_LIMIT_DEG && m.face_to_path < -DRIVER_CURVE_LIMIT_DEG {
            findings.push(SwingFinding::SliceRisk);
        } else if m.club_path > DRIVER_CURVE_LIMIT_DEG && m.face_to_path > DRIVER_CURVE_LIMIT_DEG {
            findings.push(SwingFinding::HookRisk);
        }

        findings
    }
}

pub struct IronAnalyzer;

impl SwingAnalyzer for IronAnalyzer {
    fn analyze(&self, m: &SwingMeasurement) -> Vec<SwingFinding> {
        let mut findings = Vec::new();

        if measured(m.launch) {
            if m.launch < IRON_MIN_LAUNCH_DEG {
                findings.push(SwingFinding::IronLaunchLow);
            } else if m.launch > IRON_MAX_LAUNCH_DEG {
                findings.push(SwingFinding::IronLaunchHigh);
            }
        }
        if m.spin > 0. && m.spin < IRON_SPIN_LOW_RPM {
            findings.push(SwingFinding::IronSpinLow);
        }
        if measured(m.apex) && m.apex < IRON_MIN_APEX_M {
            findings.push(SwingFinding::IronApexLow);
        }
        if m.face_to_path.abs() > IRON_MAX_FACE_TO_PATH_DEG {
            findings.push(SwingFinding::FaceToPathWide);
        }

        findings
    }
}

/// Findings for a measurement, in rule order.
pub fn swing_findings(measurement: &SwingMeasurement, category: SwingClubCategory) -> Vec<SwingFinding> {
    let analyzer: &dyn SwingAnalyzer = match category {
        SwingClubCategory::Driver => &DriverAnalyzer,
        SwingClubCategory::Iron => &IronAnalyzer,
    };
    analyzer.analyze(measurement)
}

/// Tips for one launch monitor reading. Never empty.
pub fn analyze_swing_data(measurement: &SwingMeasurement, category: SwingClubCategory, mode: Mode) -> Vec<String> {
    let findings = swing_findings(measurement, category);
    debug!("{category} swing findings: {:?}", findings);

    let mut tips: Vec<String> = findings.iter().map(ToString::to_string).collect();
    if tips.is_empty() {
        tips.push(ALL_GOOD_TIP.to_string());
    }
    if mode == Mode::Advanced {
        tips.push(VIDEO_TIP.to_string());
    }
    tips
}
