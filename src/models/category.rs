//! Category labels for choropleth coloring and ranking.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Coarse quality label attached to a district, assembly, or local body.
///
/// Entities without a curated category row render as `Normal`; emitted
/// documents never carry a null category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CategoryLabel {
    Perfect,
    Good,
    #[default]
    Normal,
}

impl CategoryLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Perfect => "Perfect",
            Self::Good => "Good",
            Self::Normal => "Normal",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Perfect" => Some(Self::Perfect),
            "Good" => Some(Self::Good),
            "Normal" => Some(Self::Normal),
            _ => None,
        }
    }
}

impl std::fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for label in [
            CategoryLabel::Perfect,
            CategoryLabel::Good,
            CategoryLabel::Normal,
        ] {
            assert_eq!(CategoryLabel::parse(label.as_str()), Some(label));
        }
        assert_eq!(CategoryLabel::parse("perfect"), None);
        assert_eq!(CategoryLabel::parse(""), None);
    }

    #[test]
    fn test_default_is_normal() {
        assert_eq!(CategoryLabel::default(), CategoryLabel::Normal);
    }
}
