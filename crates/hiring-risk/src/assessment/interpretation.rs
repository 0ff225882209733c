use super::domain::Answers;
use super::scoring::RiskResult;
use super::tables::{
    exposure_phrase, firm_size_phrase, region_phrase, tier_recommendations, MARKET_CONTEXT,
    RECOMMENDATIONS_HEADING,
};
use serde::Serialize;
use std::fmt;

/// Human-readable guidance derived from a scoring result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    pub opening: String,
    pub recommendations_heading: &'static str,
    pub recommendations: Vec<&'static str>,
    pub market_context: &'static str,
}

pub fn interpret(answers: &Answers, result: &RiskResult) -> Interpretation {
    let opening = format!(
        "As {} with {} operating in {}, your bilingual hiring risk scores {:.0}/100, which places you in the {} tier. {}",
        firm_size_phrase(answers.firm_size),
        exposure_phrase(answers.bilingual_exposure),
        region_phrase(answers.region),
        result.score,
        result.tier.label(),
        result.description,
    );

    Interpretation {
        opening,
        recommendations_heading: RECOMMENDATIONS_HEADING,
        recommendations: tier_recommendations(result.tier).to_vec(),
        market_context: MARKET_CONTEXT,
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.opening)?;
        writeln!(f)?;
        writeln!(f, "{}:", self.recommendations_heading)?;
        for item in &self.recommendations {
            writeln!(f, "- {item}")?;
        }
        writeln!(f)?;
        write!(f, "{}", self.market_context)
    }
}
