use crate::practice::label_matches;

/// Terms that show up in advice and swing tips.
pub const GLOSSARY: [(&str, &str); 9] = [
    ("Down The Line", "Camera angle from behind the player, parallel to the target line."),
    ("Face On", "Camera angle from the front, facing the player."),
    ("Angle of Attack", "Vertical strike angle in degrees, upward (positive) or downward (negative)."),
    ("Club Path", "Swing direction of the club at impact (°). Minus is out-to-in, plus is in-to-out."),
    ("Face to Path", "Difference in degrees between where the clubface points and the swing direction."),
    ("Launch", "Starting angle of the ball (°)."),
    ("Spin", "Backspin in revolutions per minute."),
    ("Height", "Maximum height of the ball flight (meters)."),
    ("Handicap", "The player's playing handicap (HCP)."),
];

/// Definition of `term`, ignoring case and separators.
pub fn lookup(term: &str) -> Option<&'static str> {
    GLOSSARY
        .iter()
        .find(|(name, _)| label_matches(term, name))
        .map(|(_, definition)| *definition)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert!(lookup("face to path").is_some_and(|d| d.contains("clubface")));
        assert!(lookup("DOWN-THE-LINE").is_some());
        assert_eq!(lookup("Smash Factor"), None);
    }
}
