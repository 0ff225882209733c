use super::super::tables::tier_description;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Moderate,
    Elevated,
    Structural,
}

impl RiskTier {
    pub const fn ordered() -> [Self; 4] {
        [Self::Low, Self::Moderate, Self::Elevated, Self::Structural]
    }

    /// Thresholds are inclusive on the lower bound: 40, 60 and 80 open the next tier.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Structural
        } else if score >= 60.0 {
            Self::Elevated
        } else if score >= 40.0 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::Elevated => "Elevated",
            Self::Structural => "Structural",
        }
    }

    pub const fn class(self) -> &'static str {
        match self {
            Self::Low => "tier-low",
            Self::Moderate => "tier-moderate",
            Self::Elevated => "tier-elevated",
            Self::Structural => "tier-structural",
        }
    }

    pub const fn description(self) -> &'static str {
        tier_description(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_open_the_next_tier_exactly() {
        assert_eq!(RiskTier::from_score(0.0), RiskTier::Low);
        assert_eq!(RiskTier::from_score(39.999), RiskTier::Low);
        assert_eq!(RiskTier::from_score(40.0), RiskTier::Moderate);
        assert_eq!(RiskTier::from_score(59.999), RiskTier::Moderate);
        assert_eq!(RiskTier::from_score(60.0), RiskTier::Elevated);
        assert_eq!(RiskTier::from_score(79.999), RiskTier::Elevated);
        assert_eq!(RiskTier::from_score(80.0), RiskTier::Structural);
        assert_eq!(RiskTier::from_score(100.0), RiskTier::Structural);
    }

    #[test]
    fn each_tier_has_a_distinct_description() {
        let descriptions: Vec<_> = RiskTier::ordered()
            .into_iter()
            .map(RiskTier::description)
            .collect();
        for (idx, description) in descriptions.iter().enumerate() {
            assert!(!description.is_empty());
            assert!(!descriptions[idx + 1..].contains(description));
        }
    }
}
