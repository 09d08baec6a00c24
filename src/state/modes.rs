//! Mode registry: the fixed focus and break presets

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::error::InvalidModeError;

/// Identifier of one of the three presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModeId {
    Focus,
    ShortBreak,
    LongBreak,
}

impl ModeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModeId::Focus => "focus",
            ModeId::ShortBreak => "short-break",
            ModeId::LongBreak => "long-break",
        }
    }

    /// Preset data for this identifier
    pub fn mode(&self) -> &'static Mode {
        match self {
            ModeId::Focus => &MODES[0],
            ModeId::ShortBreak => &MODES[1],
            ModeId::LongBreak => &MODES[2],
        }
    }
}

impl fmt::Display for ModeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModeId {
    type Err = InvalidModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "focus" => Ok(ModeId::Focus),
            "short-break" => Ok(ModeId::ShortBreak),
            "long-break" => Ok(ModeId::LongBreak),
            other => Err(InvalidModeError::new(other)),
        }
    }
}

/// A countdown preset. Accent colors are opaque CSS-like tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mode {
    pub id: ModeId,
    pub duration_secs: u32,
    pub label: &'static str,
    pub color: &'static str,
}

static MODES: [Mode; 3] = [
    Mode {
        id: ModeId::Focus,
        duration_secs: 25 * 60,
        label: "FOCUS",
        color: "#5e6ad2",
    },
    Mode {
        id: ModeId::ShortBreak,
        duration_secs: 5 * 60,
        label: "SHORT BREAK",
        color: "#2ecc71",
    },
    Mode {
        id: ModeId::LongBreak,
        duration_secs: 15 * 60,
        label: "LONG BREAK",
        color: "#e74c3c",
    },
];

/// Look up a preset by its textual identifier
pub fn get(id: &str) -> Result<&'static Mode, InvalidModeError> {
    id.parse::<ModeId>().map(|id| id.mode())
}

/// All presets in display order
pub fn all() -> &'static [Mode] {
    &MODES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_contents_are_fixed() {
        let focus = get("focus").unwrap();
        assert_eq!(focus.duration_secs, 1500);
        assert_eq!(focus.label, "FOCUS");
        assert_eq!(focus.color, "#5e6ad2");

        let short = get("short-break").unwrap();
        assert_eq!(short.duration_secs, 300);
        assert_eq!(short.label, "SHORT BREAK");
        assert_eq!(short.color, "#2ecc71");

        let long = get("long-break").unwrap();
        assert_eq!(long.duration_secs, 900);
        assert_eq!(long.label, "LONG BREAK");
        assert_eq!(long.color, "#e74c3c");
    }

    #[test]
    fn unknown_ids_are_rejected() {
        assert_eq!(get("bogus"), Err(InvalidModeError::new("bogus")));
        // ids are case sensitive
        assert!(get("Focus").is_err());
        assert!(get("").is_err());
    }

    #[test]
    fn ids_match_their_modes() {
        for mode in all() {
            assert_eq!(mode.id.mode(), mode);
            assert_eq!(get(mode.id.as_str()).unwrap(), mode);
        }
    }

    #[test]
    fn mode_ids_serialize_as_kebab_case() {
        let json = serde_json::to_string(&ModeId::ShortBreak).unwrap();
        assert_eq!(json, "\"short-break\"");
    }
}
