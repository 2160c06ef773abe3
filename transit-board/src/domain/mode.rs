//! Transport mode tokens.

use std::fmt;

/// A transport mode this board can display.
///
/// Each mode has a stable wire token (the string the TfL API uses and the
/// one stored in a [`Station`](super::Station)'s mode set) and a
/// human-readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Tube,
    Dlr,
    ElizabethLine,
    Overground,
    NationalRail,
    Tram,
    Bus,
}

impl Mode {
    /// Every mode, in display order.
    pub const ALL: [Mode; 7] = [
        Mode::Tube,
        Mode::Dlr,
        Mode::ElizabethLine,
        Mode::Overground,
        Mode::NationalRail,
        Mode::Tram,
        Mode::Bus,
    ];

    /// Parse a wire token.
    pub fn parse(token: &str) -> Option<Mode> {
        match token {
            "tube" => Some(Mode::Tube),
            "dlr" => Some(Mode::Dlr),
            "elizabeth-line" => Some(Mode::ElizabethLine),
            "overground" => Some(Mode::Overground),
            "national-rail" => Some(Mode::NationalRail),
            "tram" => Some(Mode::Tram),
            "bus" => Some(Mode::Bus),
            _ => None,
        }
    }

    /// The wire token.
    pub fn token(self) -> &'static str {
        match self {
            Mode::Tube => "tube",
            Mode::Dlr => "dlr",
            Mode::ElizabethLine => "elizabeth-line",
            Mode::Overground => "overground",
            Mode::NationalRail => "national-rail",
            Mode::Tram => "tram",
            Mode::Bus => "bus",
        }
    }

    /// The label shown to users.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Tube => "Tube",
            Mode::Dlr => "DLR",
            Mode::ElizabethLine => "Elizabeth line",
            Mode::Overground => "Overground",
            Mode::NationalRail => "National Rail",
            Mode::Tram => "Tram",
            Mode::Bus => "Bus",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Label for a free-text mode token, falling back to the token itself for
/// modes this build does not know about.
pub fn mode_label(token: &str) -> &str {
    match Mode::parse(token) {
        Some(mode) => mode.label(),
        None => token,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_roundtrip() {
        for mode in Mode::ALL {
            assert_eq!(Mode::parse(mode.token()), Some(mode));
        }
    }

    #[test]
    fn labels() {
        assert_eq!(Mode::ElizabethLine.label(), "Elizabeth line");
        assert_eq!(Mode::NationalRail.label(), "National Rail");
    }

    #[test]
    fn label_for_token() {
        assert_eq!(mode_label("tube"), "Tube");
        assert_eq!(mode_label("national-rail"), "National Rail");
        // Unknown tokens pass through untouched
        assert_eq!(mode_label("cable-car"), "cable-car");
    }

    #[test]
    fn display_is_the_token() {
        assert_eq!(Mode::ElizabethLine.to_string(), "elizabeth-line");
    }
}
