mod rules;
mod tier;

pub use tier::RiskTier;

use super::domain::{AnswerSet, Answers, AssessmentError};
use serde::Serialize;

/// Auxiliary metrics shown next to the composite score, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskIndicators {
    pub bilingual_pressure: f64,
    pub scarcity_exposure: f64,
    pub ai_leverage: f64,
    pub eor_feasibility: f64,
}

/// Scoring output. Recomputed from the answers on every call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskResult {
    /// Coefficient product before clamping.
    pub raw_score: f64,
    pub score: f64,
    pub tier: RiskTier,
    pub description: &'static str,
    pub indicators: RiskIndicators,
}

impl RiskResult {
    pub fn was_clamped(&self) -> bool {
        self.raw_score != self.score
    }
}

pub fn score(answers: &Answers) -> RiskResult {
    let raw_score = rules::raw_score(answers);
    let score = rules::clamp_percent(raw_score);
    let tier = RiskTier::from_score(score);

    RiskResult {
        raw_score,
        score,
        tier,
        description: tier.description(),
        indicators: rules::indicators(answers, score),
    }
}

/// Score a partially collected answer set, rejecting it if any field is unset.
pub fn score_answer_set(answers: &AnswerSet) -> Result<RiskResult, AssessmentError> {
    let answers = answers.resolve()?;
    Ok(score(&answers))
}
