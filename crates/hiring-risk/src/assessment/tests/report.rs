use super::common::*;
use crate::assessment::domain::Answers;
use crate::assessment::interpretation::interpret;
use crate::assessment::report::views::{IndicatorBand, IndicatorKind, RiskReport};
use crate::assessment::scoring::score;
use crate::assessment::tables::{TensionLevel, HEATMAP};

#[test]
fn band_edges_follow_forty_and_seventy() {
    assert_eq!(IndicatorBand::from_value(0.0), IndicatorBand::Low);
    assert_eq!(IndicatorBand::from_value(39.999), IndicatorBand::Low);
    assert_eq!(IndicatorBand::from_value(40.0), IndicatorBand::Moderate);
    assert_eq!(IndicatorBand::from_value(69.999), IndicatorBand::Moderate);
    assert_eq!(IndicatorBand::from_value(70.0), IndicatorBand::High);
    assert_eq!(IndicatorBand::High.class(), "high");
}

#[test]
fn report_lists_indicators_in_display_order() {
    let answers = quiet_answers();
    let report = RiskReport::assess(&answers);

    let kinds: Vec<_> = report.indicators.iter().map(|bar| bar.kind).collect();
    assert_eq!(kinds, IndicatorKind::ordered().to_vec());
    assert_eq!(report.tier_class, "tier-low");
    assert_eq!(report.indicators[0].band, IndicatorBand::Low);
    assert_eq!(report.indicators[2].band, IndicatorBand::High);
    assert_eq!(report.indicators[3].band_class, "moderate");
}

#[test]
fn build_matches_assess() {
    let answers = neutral_answers();
    let result = score(&answers);
    let built = RiskReport::build(&answers, &result, interpret(&answers, &result));

    assert_eq!(built, RiskReport::assess(&answers));
    assert_eq!(built.interpretation_text, built.interpretation.to_string());
}

#[test]
fn heatmap_is_identical_for_every_input() {
    for answers in Answers::all() {
        let report = RiskReport::assess(&answers);
        assert_eq!(report.heatmap, HEATMAP.to_vec());
    }
    assert_eq!(HEATMAP.len(), 4);
    assert_eq!(HEATMAP[0].level, TensionLevel::VeryHigh);
}

#[test]
fn report_serializes_with_snake_case_enums() {
    let report = RiskReport::assess(&saturated_answers());
    let value = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(value["tier"], "structural");
    assert_eq!(value["answers"]["region"], "brussels");
    assert_eq!(value["indicators"][3]["kind"], "eor_feasibility");
    assert_eq!(value["heatmap"][0]["level"], "very_high");
}
