//! Fixed lookup tables behind the scoring and interpretation steps.

use super::domain::{BilingualExposure, FirmSize, HiringPressure, Region};
use super::scoring::RiskTier;
use serde::Serialize;

pub const BASE_SCORE: f64 = 50.0;

pub const fn firm_size_coefficient(size: FirmSize) -> f64 {
    match size {
        FirmSize::Small => 0.8,
        FirmSize::Medium => 1.0,
        FirmSize::Large => 1.2,
    }
}

pub const fn bilingual_coefficient(exposure: BilingualExposure) -> f64 {
    match exposure {
        BilingualExposure::Low => 0.7,
        BilingualExposure::Medium => 1.0,
        BilingualExposure::High => 1.4,
    }
}

pub const fn region_coefficient(region: Region) -> f64 {
    match region {
        Region::Brussels => 1.3,
        Region::Antwerp => 1.2,
        Region::Liege => 0.9,
        Region::Other => 1.0,
    }
}

pub const fn hiring_coefficient(pressure: HiringPressure) -> f64 {
    match pressure {
        HiringPressure::Stable => 0.8,
        HiringPressure::Moderate => 1.0,
        HiringPressure::Aggressive => 1.3,
    }
}

pub const fn firm_size_phrase(size: FirmSize) -> &'static str {
    match size {
        FirmSize::Small => "a small organisation",
        FirmSize::Medium => "a mid-sized organisation",
        FirmSize::Large => "a large organisation",
    }
}

pub const fn exposure_phrase(exposure: BilingualExposure) -> &'static str {
    match exposure {
        BilingualExposure::Low => "limited bilingual requirements",
        BilingualExposure::Medium => "a regular need for French/Dutch bilingual staff",
        BilingualExposure::High => "roles that are bilingual at their core",
    }
}

pub const fn region_phrase(region: Region) -> &'static str {
    match region {
        Region::Brussels => "the Brussels-Capital Region",
        Region::Antwerp => "the Antwerp area",
        Region::Liege => "the Liège area",
        Region::Other => "the rest of Belgium",
    }
}

pub const fn tier_description(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::Low => {
            "Bilingual hiring is unlikely to constrain you. Standard recruiting channels should cover most openings."
        }
        RiskTier::Moderate => {
            "Bilingual roles will take noticeably longer to fill. Plan searches early and budget for a modest language premium."
        }
        RiskTier::Elevated => {
            "Bilingual talent scarcity is likely to slow growth. Targeted sourcing and retention measures are needed now."
        }
        RiskTier::Structural => {
            "Bilingual scarcity is a structural constraint on your hiring. Local recruiting alone will not close the gap."
        }
    }
}

pub const fn tier_recommendations(tier: RiskTier) -> &'static [&'static str] {
    match tier {
        RiskTier::Low => &[
            "Keep language requirements explicit in job descriptions to avoid mismatched applicants.",
            "Offer internal French or Dutch courses to build bilingual depth over time.",
            "Review the assessment yearly or whenever hiring plans change.",
        ],
        RiskTier::Moderate => &[
            "Start bilingual searches four to six weeks earlier than monolingual ones.",
            "Budget a 5-10% salary premium for verified bilingual profiles.",
            "Partner with a recruiter specialised in the Belgian bilingual market.",
            "Pair monolingual hires with structured language training.",
        ],
        RiskTier::Elevated => &[
            "Build a standing talent pipeline for bilingual roles instead of hiring per vacancy.",
            "Use AI-assisted translation and drafting to reduce how many roles need full bilingualism.",
            "Consider an employer of record to hire bilingual talent based outside your region.",
            "Put retention bonuses in place for existing bilingual staff.",
        ],
        RiskTier::Structural => &[
            "Redesign roles so that only client-facing positions require both languages.",
            "Hire through an employer of record to reach bilingual candidates in other regions and countries.",
            "Invest in AI tooling for translation, first-line support and document drafting.",
        ],
    }
}

pub const RECOMMENDATIONS_HEADING: &str = "Recommended actions";

pub const MARKET_CONTEXT: &str = "Market context: around 60% of job postings in Brussels ask for both French and Dutch, while only about 9% of Brussels residents report being fully bilingual. Bilingual roles take on average 35% longer to fill, and employers typically pay a 10-15% premium for confirmed bilingual profiles.";

/// Labour-market tension band for a heatmap row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TensionLevel {
    Moderate,
    High,
    VeryHigh,
}

impl TensionLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very high",
        }
    }

    pub const fn class(self) -> &'static str {
        match self {
            Self::Moderate => "tension-moderate",
            Self::High => "tension-high",
            Self::VeryHigh => "tension-very-high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeatmapRow {
    pub region: &'static str,
    pub tension: &'static str,
    pub level: TensionLevel,
}

/// Regional bilingual labour-market tension. Independent of the answers.
pub const HEATMAP: [HeatmapRow; 4] = [
    HeatmapRow {
        region: "Brussels",
        tension: "Acute shortage of FR/NL bilingual profiles",
        level: TensionLevel::VeryHigh,
    },
    HeatmapRow {
        region: "Antwerp",
        tension: "Strong demand for French on top of Dutch",
        level: TensionLevel::High,
    },
    HeatmapRow {
        region: "Ghent",
        tension: "Growing demand in services and logistics",
        level: TensionLevel::High,
    },
    HeatmapRow {
        region: "Liège",
        tension: "Dutch speakers scarce but few roles require it",
        level: TensionLevel::Moderate,
    },
];
