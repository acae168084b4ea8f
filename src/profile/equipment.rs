use super::{Profile, ShaftFlex};

/// Upper swing-speed bound (mph, exclusive) for each flex below X.
const FLEX_SPEED_BANDS_MPH: [(f64, ShaftFlex); 4] = [
    (75., ShaftFlex::L),
    (85., ShaftFlex::A),
    (95., ShaftFlex::R),
    (105., ShaftFlex::S),
];

/// A driver shaft flex suggestion for the current profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaftSuggestion {
    pub swing_speed_mph: f64,
    pub suggested: ShaftFlex,
    pub current: ShaftFlex,
}

impl ShaftSuggestion {
    pub fn matches_current(&self) -> bool {
        self.suggested == self.current
    }

    pub fn summary(&self) -> String {
        if self.matches_current() {
            format!(
                "{} flex suits a {:.0} mph swing.",
                self.current, self.swing_speed_mph
            )
        } else if self.suggested > self.current {
            format!(
                "A {:.0} mph swing usually fits {} flex; your {} shaft may be too soft (high, hooking ball flight).",
                self.swing_speed_mph, self.suggested, self.current
            )
        } else {
            format!(
                "A {:.0} mph swing usually fits {} flex; your {} shaft may be too stiff (low, weak-right ball flight).",
                self.swing_speed_mph, self.suggested, self.current
            )
        }
    }
}

/// Suggest a driver shaft flex from the profile's swing speed.
pub fn suggest_shaft_flex(profile: &Profile) -> ShaftSuggestion {
    let swing_speed_mph = profile.swing_speed.as_mph();
    let suggested = FLEX_SPEED_BANDS_MPH
        .iter()
        .find(|(upper, _)| swing_speed_mph < *upper)
        .map(|(_, flex)| *flex)
        .unwrap_or(ShaftFlex::X);

    ShaftSuggestion {
        swing_speed_mph,
        suggested,
        current: profile.shaft_flex,
    }
}
