use super::super::domain::{Answers, BilingualExposure, FirmSize, HiringPressure, Region};
use super::super::tables::{
    bilingual_coefficient, firm_size_coefficient, hiring_coefficient, region_coefficient,
    BASE_SCORE,
};
use super::RiskIndicators;

const BRUSSELS_PRESSURE_BONUS: f64 = 15.0;
const LARGE_FIRM_AI_BONUS: f64 = 20.0;

pub(crate) fn clamp_percent(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

pub(crate) fn raw_score(answers: &Answers) -> f64 {
    BASE_SCORE
        * firm_size_coefficient(answers.firm_size)
        * bilingual_coefficient(answers.bilingual_exposure)
        * region_coefficient(answers.region)
        * hiring_coefficient(answers.hiring_pressure)
}

pub(crate) fn indicators(answers: &Answers, score: f64) -> RiskIndicators {
    let brussels_bonus = if answers.region == Region::Brussels {
        BRUSSELS_PRESSURE_BONUS
    } else {
        0.0
    };
    let large_firm_bonus = if answers.firm_size == FirmSize::Large {
        LARGE_FIRM_AI_BONUS
    } else {
        0.0
    };
    let eor_base = if answers.bilingual_exposure == BilingualExposure::High {
        85.0
    } else {
        60.0
    };
    let eor_urgency = if answers.hiring_pressure == HiringPressure::Aggressive {
        15.0
    } else {
        0.0
    };

    RiskIndicators {
        bilingual_pressure: clamp_percent(score * 1.1 + brussels_bonus),
        scarcity_exposure: clamp_percent(score * 1.2),
        ai_leverage: clamp_percent(100.0 - score * 0.3 + large_firm_bonus),
        eor_feasibility: clamp_percent(eor_base + eor_urgency),
    }
}
