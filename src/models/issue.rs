//! Issue type enum.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Kind of civic issue a citizen can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    Town,
    Road,
    BusStop,
    WaterBody,
    BinInstall,
    BinUsage,
}

impl IssueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Town => "town",
            Self::Road => "road",
            Self::BusStop => "bus_stop",
            Self::WaterBody => "water_body",
            Self::BinInstall => "bin_install",
            Self::BinUsage => "bin_usage",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "town" => Some(Self::Town),
            "road" => Some(Self::Road),
            "bus_stop" => Some(Self::BusStop),
            "water_body" => Some(Self::WaterBody),
            "bin_install" => Some(Self::BinInstall),
            "bin_usage" => Some(Self::BinUsage),
            _ => None,
        }
    }
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for t in [
            IssueType::Town,
            IssueType::Road,
            IssueType::BusStop,
            IssueType::WaterBody,
            IssueType::BinInstall,
            IssueType::BinUsage,
        ] {
            assert_eq!(IssueType::parse(t.as_str()), Some(t));
        }
        assert_eq!(IssueType::parse("pothole"), None);
    }
}
