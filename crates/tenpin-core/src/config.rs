use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::frame::{PIN_COUNT, Pins};

/// Environment variable naming a lane rules TOML file.
pub const LANE_RULES_ENV: &str = "TENPIN_LANE_RULES";
/// Fallback location for the lane rules file.
pub const DEFAULT_LANE_RULES_PATH: &str = "config/lanes.toml";

/// Data-driven lane rules, loadable from TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaneRules {
    /// Pins racked per frame. A first ball equal to this is a strike.
    pub pin_count: Pins,
}

impl Default for LaneRules {
    fn default() -> Self {
        Self {
            pin_count: PIN_COUNT,
        }
    }
}

/// Why a lane rules file was rejected.
#[derive(Debug)]
pub enum LaneRulesError {
    Parse(toml::de::Error),
    /// `pin_count = 0` would make every first ball a strike.
    NoPins,
}

impl std::fmt::Display for LaneRulesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::NoPins => write!(f, "pin_count must be at least 1"),
        }
    }
}

impl std::error::Error for LaneRulesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::NoPins => None,
        }
    }
}

impl LaneRules {
    /// Load rules from the file named by `TENPIN_LANE_RULES`, or
    /// `config/lanes.toml`. Falls back to defaults if the file is missing
    /// or unparseable.
    pub fn load() -> Self {
        let path =
            std::env::var(LANE_RULES_ENV).unwrap_or_else(|_| DEFAULT_LANE_RULES_PATH.to_string());
        Self::load_from(Path::new(&path))
    }

    /// Load rules from `path`, falling back to defaults if the file is
    /// missing, unparseable, or rejected.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(rules) => rules,
                Err(e) => {
                    tracing::warn!("Failed to load {}: {e}, using defaults", path.display());
                    Self::default()
                },
            },
            Err(_) => Self::default(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, LaneRulesError> {
        let rules: Self = toml::from_str(content).map_err(LaneRulesError::Parse)?;
        if rules.pin_count == 0 {
            return Err(LaneRulesError::NoPins);
        }
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("tenpin-{}-{name}", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn defaults_to_ten_pins() {
        assert_eq!(LaneRules::default().pin_count, 10);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        assert_eq!(LaneRules::from_toml_str("").unwrap(), LaneRules::default());
    }

    #[test]
    fn parses_pin_count() {
        let rules = LaneRules::from_toml_str("pin_count = 9").unwrap();
        assert_eq!(rules.pin_count, 9);
    }

    #[test]
    fn rejects_out_of_range_pin_count() {
        assert!(LaneRules::from_toml_str("pin_count = 300").is_err());
    }

    #[test]
    fn rejects_empty_rack() {
        let err = LaneRules::from_toml_str("pin_count = 0").unwrap_err();
        assert!(matches!(err, LaneRulesError::NoPins));
        assert_eq!(err.to_string(), "pin_count must be at least 1");
    }

    #[test]
    fn parse_error_keeps_toml_source() {
        let err = LaneRules::from_toml_str("pin_count = \"ten\"").unwrap_err();
        assert!(matches!(err, LaneRulesError::Parse(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn empty_rack_file_falls_back() {
        // A zero rack turns every gutter ball into a strike
        let path = scratch_file("empty-rack.toml", "pin_count = 0\n");
        let rules = LaneRules::load_from(&path);
        std::fs::remove_file(&path).ok();
        assert_eq!(rules, LaneRules::default());
    }

    #[test]
    fn missing_file_falls_back() {
        let path = std::env::temp_dir().join("tenpin-does-not-exist/lanes.toml");
        assert_eq!(LaneRules::load_from(&path), LaneRules::default());
    }

    #[test]
    fn load_from_reads_file() {
        let path = scratch_file("lanes.toml", "pin_count = 5\n");
        let rules = LaneRules::load_from(&path);
        std::fs::remove_file(&path).ok();
        assert_eq!(rules.pin_count, 5);
    }

    #[test]
    fn unparseable_file_falls_back() {
        let path = scratch_file("broken.toml", "pin_count = \"ten\"\n");
        let rules = LaneRules::load_from(&path);
        std::fs::remove_file(&path).ok();
        assert_eq!(rules, LaneRules::default());
    }
}
