use super::common::*;
use crate::assessment::domain::{
    AnswerSet, Answers, AssessmentError, BilingualExposure, FirmSize, HiringPressure, Region,
};
use crate::assessment::scoring::{score, score_answer_set, RiskTier};

#[test]
fn every_combination_scores_within_bounds_deterministically() {
    for answers in Answers::all() {
        let first = score(&answers);
        let second = score(&answers);
        assert_eq!(first, second, "scoring must be deterministic for {answers:?}");
        assert!((0.0..=100.0).contains(&first.score));
        assert_eq!(first.tier, RiskTier::from_score(first.score));
        assert_eq!(first.description, first.tier.description());

        let indicators = first.indicators;
        for value in [
            indicators.bilingual_pressure,
            indicators.scarcity_exposure,
            indicators.ai_leverage,
            indicators.eor_feasibility,
        ] {
            assert!((0.0..=100.0).contains(&value), "{answers:?} -> {value}");
        }
    }
}

#[test]
fn saturated_answers_clamp_score_and_indicators() {
    let result = score(&saturated_answers());

    assert_close(result.raw_score, 141.96);
    assert_eq!(result.score, 100.0);
    assert!(result.was_clamped());
    assert_eq!(result.tier, RiskTier::Structural);
    assert_eq!(result.indicators.bilingual_pressure, 100.0);
    assert_eq!(result.indicators.scarcity_exposure, 100.0);
    assert_close(result.indicators.ai_leverage, 90.0);
    assert_eq!(result.indicators.eor_feasibility, 100.0);
}

#[test]
fn quiet_answers_land_in_low_tier() {
    let result = score(&quiet_answers());

    assert_close(result.raw_score, 20.16);
    assert_close(result.score, 20.16);
    assert!(!result.was_clamped());
    assert_eq!(result.tier, RiskTier::Low);
    assert_close(result.indicators.bilingual_pressure, 20.16 * 1.1);
    assert_close(result.indicators.scarcity_exposure, 20.16 * 1.2);
    assert_close(result.indicators.ai_leverage, 100.0 - 20.16 * 0.3);
    assert_eq!(result.indicators.eor_feasibility, 60.0);
}

#[test]
fn neutral_answers_score_fifty() {
    let result = score(&neutral_answers());

    assert_close(result.score, 50.0);
    assert_eq!(result.tier, RiskTier::Moderate);
    assert_close(result.indicators.bilingual_pressure, 55.0);
    assert_close(result.indicators.scarcity_exposure, 60.0);
    assert_close(result.indicators.ai_leverage, 85.0);
    assert_eq!(result.indicators.eor_feasibility, 60.0);
}

#[test]
fn brussels_adds_bilingual_pressure_bonus() {
    let result = score(&answers(
        FirmSize::Medium,
        BilingualExposure::Medium,
        Region::Brussels,
        HiringPressure::Moderate,
    ));

    assert_close(result.score, 65.0);
    assert_eq!(result.tier, RiskTier::Elevated);
    assert_close(result.indicators.bilingual_pressure, 65.0 * 1.1 + 15.0);
}

#[test]
fn large_firm_and_aggressive_hiring_adjust_side_indicators() {
    let result = score(&answers(
        FirmSize::Large,
        BilingualExposure::Low,
        Region::Liege,
        HiringPressure::Aggressive,
    ));

    let expected = 50.0 * 1.2 * 0.7 * 0.9 * 1.3;
    assert_close(result.score, expected);
    assert_close(result.score, 49.14);
    // 100 - 49.14 * 0.3 + 20 overshoots and is clamped on its own.
    assert_eq!(result.indicators.ai_leverage, 100.0);
    assert_close(result.indicators.scarcity_exposure, expected * 1.2);
    assert_eq!(result.indicators.eor_feasibility, 75.0);
}

#[test]
fn incomplete_answer_set_is_rejected() {
    let set = AnswerSet {
        firm_size: Some(FirmSize::Small),
        ..AnswerSet::default()
    };

    let err = score_answer_set(&set).expect_err("scoring requires every field");
    assert!(matches!(err, AssessmentError::IncompleteAnswers { ref missing } if missing.len() == 3));

    let complete = AnswerSet::from(neutral_answers());
    let result = score_answer_set(&complete).expect("complete set scores");
    assert_eq!(result, score(&neutral_answers()));
}
