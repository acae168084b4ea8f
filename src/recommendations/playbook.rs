use std::collections::HashMap;

use super::Advice;

/// Fault-fixing advice
const PRIORITY_FAULT: u8 = 5;
/// Club-group drills
const PRIORITY_DRILL: u8 = 3;
/// Data-collection nudges
const PRIORITY_COLLECT: u8 = 2;
const PRIORITY_MAINTENANCE: u8 = 1;

/// Text and ordering for one kind of advice. Both step lists describe the
/// same fault; only the vocabulary changes.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub title: &'static str,
    pub rationale: &'static str,
    pub simple_steps: &'static [&'static str],
    pub advanced_steps: &'static [&'static str],
    /// 1-5, highest first
    pub priority: u8,
}

pub const MAINTENANCE: Entry = Entry {
    title: "Maintenance",
    rationale: "Everything looks stable. Keep the feel with a short routine.",
    simple_steps: &[
        "10-15 minutes of any drill you like.",
        "Set a small target and log how it went.",
    ],
    advanced_steps: &[
        "10-15 minutes on one drill of your choice.",
        "Set one measurable target (e.g. 7 of 10 through a gate) and log the result.",
    ],
    priority: PRIORITY_MAINTENANCE,
};

pub fn build_playbook() -> HashMap<Advice, Entry> {
    let mut map = HashMap::new();

    map.insert(
        Advice::CenterStrike,
        Entry {
            title: "Center strike & start line",
            rationale: "More centered strikes reduce dispersion and make your distances repeatable.",
            simple_steps: &[
                "Set up a gate of two tees 2-3 m in front of the ball.",
                "Put a coin 3-5 cm in front of the ball and brush the grass after the ball.",
                "2 x 10 shots through the gate, touching the ground after the ball.",
            ],
            advanced_steps: &[
                "Start-line gate 2-3 m ahead, aim for a start direction within ±2°.",
                "Low point 3-5 cm past the ball with 5-8° forward shaft lean at impact.",
                "2 x 10 shots, log Center/Toe/Heel for every one.",
            ],
            priority: PRIORITY_FAULT,
        },
    );

    map.insert(
        Advice::ThinContact,
        Entry {
            title: "Stop the thin shots",
            rationale: "Thin strikes usually come from rising out of posture through impact.",
            simple_steps: &[
                "Keep your chest down over the ball until after impact.",
                "Hit the ground just after the ball.",
                "5 x 5 half swings, watch where the divot starts.",
            ],
            advanced_steps: &[
                "Hold spine angle through impact, no early extension.",
                "Iron attack angle -3 to -5° with the low point 3-5 cm past the ball.",
                "5 x 5 half swings, log Thin/Fat/Flush.",
            ],
            priority: PRIORITY_FAULT,
        },
    );

    map.insert(
        Advice::FatContact,
        Entry {
            title: "Stop the fat shots",
            rationale: "Fat strikes mean the low point is behind the ball.",
            simple_steps: &[
                "About 60% of your weight on the front foot.",
                "Keep your chest over the ball.",
                "Coin drill: grass after the ball, never before.",
            ],
            advanced_steps: &[
                "60-70% pressure on the lead side at impact.",
                "Move the low point 3-5 cm ahead of the ball.",
                "Coin drill, 10 shots, count strikes with turf after the ball.",
            ],
            priority: PRIORITY_FAULT,
        },
    );

    map.insert(
        Advice::CarrySpread,
        Entry {
            title: "Tighter distance control",
            rationale: "A smaller carry spread makes club selection easier.",
            simple_steps: &[
                "Same ball position and the same smooth tempo every shot.",
                "Distance ladder: 5 balls at 80%, 5 at 90%, 5 at 100%.",
                "Log every carry.",
            ],
            advanced_steps: &[
                "Fix ball position and a 3:1 backswing to downswing tempo.",
                "Distance ladder 5 x 80/90/100%, aim for a spread under your tier target.",
                "Log carries and watch the carry standard deviation trend.",
            ],
            priority: PRIORITY_FAULT,
        },
    );

    map.insert(
        Advice::DriverSlice,
        Entry {
            title: "Reduce the slice (driver)",
            rationale: "The slice costs you distance and control off the tee.",
            simple_steps: &[
                "Stronger grip (3-4 knuckles visible) and tee the ball higher.",
                "Place a tee outside and behind the ball and swing inside it.",
                "Start the ball slightly right and let the hands turn over.",
            ],
            advanced_steps: &[
                "Face 1-2° closed to the path at impact.",
                "Path +2 to +4° (in-to-out) with an attack angle around +2°.",
                "Start line slightly right of target.",
            ],
            priority: PRIORITY_FAULT,
        },
    );

    map.insert(
        Advice::DriverHook,
        Entry {
            title: "Reduce the hook (driver)",
            rationale: "The hook comes from too much release and a face shut to the path.",
            simple_steps: &[
                "Weaker grip (1-2 knuckles visible).",
                "Hold the face through impact, less hand roll.",
                "Start the ball straight or slightly left.",
            ],
            advanced_steps: &[
                "Face close to 0° to the path.",
                "Neutral path, 0 to +1°.",
                "Later release with the handle leading.",
            ],
            priority: PRIORITY_FAULT,
        },
    );

    map.insert(
        Advice::ChipAccuracy,
        Entry {
            title: "Chip it closer",
            rationale: "More chips finishing inside 2 m saves strokes around the green.",
            simple_steps: &[
                "Pick a landing spot about 1 m onto the green.",
                "Keep the same stroke and change the club for more or less roll.",
                "20 chips, count how many stop inside 2 m.",
            ],
            advanced_steps: &[
                "Landing spot 1 m on; carry to roll from 1:2 (PW) to 1:1 (SW).",
                "About 5° shaft lean, minimal wrist hinge, little bounce exposed.",
                "20 chips, compare the inside-2 m rate with your tier target.",
            ],
            priority: PRIORITY_FAULT,
        },
    );

    map.insert(
        Advice::ShortPutting,
        Entry {
            title: "Hole the short ones",
            rationale: "Short putts are the cheapest strokes to save.",
            simple_steps: &[
                "Clock drill: putts from 1-2 m all around the hole.",
                "Keep your head still until the ball is gone.",
                "Count how many you make in a row.",
            ],
            advanced_steps: &[
                "Clock drill at 1, 1.5 and 2 m.",
                "Face square within 1° at impact, check with a putting gate.",
                "Track makes out of 20 per distance.",
            ],
            priority: PRIORITY_FAULT,
        },
    );

    map.insert(
        Advice::IronShaping,
        Entry {
            title: "Shape draw and fade (irons)",
            rationale: "Controlling the shape gives better start lines and more greens hit.",
            simple_steps: &[
                "Draw: aim at the target, feet slightly right, gate on the right.",
                "Fade: aim at the target, feet slightly left, hold the face.",
                "10 balls of each shape, log them.",
            ],
            advanced_steps: &[
                "Draw: path +2 to +4°, face 1-2° closed to the path.",
                "Fade: path -2 to -4°, face 0-1° open to the path.",
                "Start-line gate 2-3 m ahead.",
            ],
            priority: PRIORITY_DRILL,
        },
    );

    map.insert(
        Advice::SweepContact,
        Entry {
            title: "Sweep drill",
            rationale: "A sweeping strike cuts down fat and thin shots with woods and hybrids.",
            simple_steps: &[
                "Tee the ball very low, or not at all.",
                "Brush the grass just after the ball.",
                "10 shots with a shallow strike.",
            ],
            advanced_steps: &[
                "Low tee or none.",
                "Brush the turf just after the ball.",
                "10 shots with attack angle near 0° (-1 to +1°).",
            ],
            priority: PRIORITY_DRILL,
        },
    );

    map.insert(
        Advice::WedgeMatrix,
        Entry {
            title: "Wedge matrix (clock system)",
            rationale: "Fixed distances from 30 to 90 m make decisions simple.",
            simple_steps: &[
                "Three backswing lengths: 8, 9 and 10 o'clock.",
                "5 shots per length, log them.",
                "Write down your distances.",
            ],
            advanced_steps: &[
                "Three backswing lengths (8/9/10 o'clock) with every wedge.",
                "5 shots per length, log carry.",
                "Build a wedge by length carry matrix, keep the spread under your target.",
            ],
            priority: PRIORITY_DRILL,
        },
    );

    map.insert(
        Advice::LandingSpot,
        Entry {
            title: "Landing spot drill",
            rationale: "A controlled landing gives the right amount of roll.",
            simple_steps: &[
                "Choose a landing target 2-3 m onto the green.",
                "10 shots, count the ones landing within 1 m of it.",
                "Pick loft to suit the lie.",
            ],
            advanced_steps: &[
                "Landing target 2-3 m on, note spin against roll-out.",
                "10 shots, count landings within 1 m of the target.",
                "Match bounce to the lie: more in soft sand, less on tight lies.",
            ],
            priority: PRIORITY_DRILL,
        },
    );

    map.insert(
        Advice::LogRangeStrikes,
        Entry {
            title: "Log your range strikes",
            rationale: "No strike or contact data yet, so strike quality can't be judged.",
            simple_steps: &[
                "At your next range session, log Center/Toe/Heel after each shot.",
                "Log Thin/Fat/Flush as well.",
                "Aim for at least 20 logged shots.",
            ],
            advanced_steps: &[
                "Log strike location and contact for every range shot.",
                "Tag each shot with the club used.",
                "At least 20 shots per club for a usable rate.",
            ],
            priority: PRIORITY_COLLECT,
        },
    );

    map.insert(
        Advice::LogDriverMisses,
        Entry {
            title: "Log your driver misses",
            rationale: "No driver shots logged yet, so slice and hook rates are unknown.",
            simple_steps: &[
                "Hit 10-15 drivers and log Slice, Hook or Neutral for each.",
                "Log every shot, good or bad.",
            ],
            advanced_steps: &[
                "10-15 drivers, log the curve of every shot (Slice/Hook/Neutral).",
                "Add launch monitor path and face numbers if you have them.",
            ],
            priority: PRIORITY_COLLECT,
        },
    );

    map.insert(
        Advice::LogChips,
        Entry {
            title: "Log your chips",
            rationale: "No chip results logged yet, so short game accuracy is unknown.",
            simple_steps: &[
                "Chip 20 balls and log whether each stops inside 2 m.",
                "Use the same hole for the whole set.",
            ],
            advanced_steps: &[
                "20 chips from one spot, log Within2m or Outside2m.",
                "Repeat from a second lie to compare.",
            ],
            priority: PRIORITY_COLLECT,
        },
    );

    map.insert(
        Advice::LogShortPutts,
        Entry {
            title: "Log your short putts",
            rationale: "No short putts logged yet.",
            simple_steps: &[
                "Putt from 1-2 m and log every one you hole.",
                "Do it at least once a week.",
            ],
            advanced_steps: &[
                "Log every holed putt from 1-2 m.",
                "Add a long putt average (distance left) for lag putts.",
            ],
            priority: PRIORITY_COLLECT,
        },
    );

    map.insert(Advice::Maintenance, MAINTENANCE);

    map
}
