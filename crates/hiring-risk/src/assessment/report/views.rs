use super::super::domain::Answers;
use super::super::interpretation::{interpret, Interpretation};
use super::super::scoring::{score, RiskIndicators, RiskResult, RiskTier};
use super::super::tables::{HeatmapRow, HEATMAP};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    BilingualPressure,
    ScarcityExposure,
    AiLeverage,
    EorFeasibility,
}

impl IndicatorKind {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::BilingualPressure,
            Self::ScarcityExposure,
            Self::AiLeverage,
            Self::EorFeasibility,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::BilingualPressure => "Bilingual pressure",
            Self::ScarcityExposure => "Scarcity exposure",
            Self::AiLeverage => "AI leverage",
            Self::EorFeasibility => "EOR feasibility",
        }
    }
}

impl RiskIndicators {
    pub fn value(&self, kind: IndicatorKind) -> f64 {
        match kind {
            IndicatorKind::BilingualPressure => self.bilingual_pressure,
            IndicatorKind::ScarcityExposure => self.scarcity_exposure,
            IndicatorKind::AiLeverage => self.ai_leverage,
            IndicatorKind::EorFeasibility => self.eor_feasibility,
        }
    }
}

/// Colour band of an indicator bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorBand {
    Low,
    Moderate,
    High,
}

impl IndicatorBand {
    pub fn from_value(value: f64) -> Self {
        if value < 40.0 {
            Self::Low
        } else if value < 70.0 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    pub const fn class(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorBar {
    pub kind: IndicatorKind,
    pub label: &'static str,
    pub value: f64,
    pub band: IndicatorBand,
    pub band_class: &'static str,
}

impl IndicatorBar {
    fn new(kind: IndicatorKind, indicators: &RiskIndicators) -> Self {
        let value = indicators.value(kind);
        let band = IndicatorBand::from_value(value);
        Self {
            kind,
            label: kind.label(),
            value,
            band,
            band_class: band.class(),
        }
    }
}

/// Everything the results step displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskReport {
    pub answers: Answers,
    pub raw_score: f64,
    pub score: f64,
    pub tier: RiskTier,
    pub tier_label: &'static str,
    pub tier_class: &'static str,
    pub tier_description: &'static str,
    pub indicators: Vec<IndicatorBar>,
    pub interpretation: Interpretation,
    pub interpretation_text: String,
    pub heatmap: Vec<HeatmapRow>,
}

impl RiskReport {
    pub fn build(answers: &Answers, result: &RiskResult, interpretation: Interpretation) -> Self {
        let indicators = IndicatorKind::ordered()
            .into_iter()
            .map(|kind| IndicatorBar::new(kind, &result.indicators))
            .collect();

        Self {
            answers: *answers,
            raw_score: result.raw_score,
            score: result.score,
            tier: result.tier,
            tier_label: result.tier.label(),
            tier_class: result.tier.class(),
            tier_description: result.description,
            indicators,
            interpretation_text: interpretation.to_string(),
            interpretation,
            heatmap: HEATMAP.to_vec(),
        }
    }

    /// Score, interpret and assemble in one pass.
    pub fn assess(answers: &Answers) -> Self {
        let result = score(answers);
        let interpretation = interpret(answers, &result);
        Self::build(answers, &result, interpretation)
    }
}
