use super::common::*;
use crate::assessment::domain::Answers;
use crate::assessment::interpretation::interpret;
use crate::assessment::scoring::{score, RiskTier};
use crate::assessment::tables::{
    exposure_phrase, firm_size_phrase, region_phrase, tier_recommendations, MARKET_CONTEXT,
};

#[test]
fn every_combination_embeds_labels_and_tier_list() {
    for answers in Answers::all() {
        let result = score(&answers);
        let interpretation = interpret(&answers, &result);
        let text = interpretation.to_string();

        assert!(interpretation
            .opening
            .contains(firm_size_phrase(answers.firm_size)));
        assert!(interpretation
            .opening
            .contains(exposure_phrase(answers.bilingual_exposure)));
        assert!(interpretation.opening.contains(region_phrase(answers.region)));
        assert!(interpretation.opening.contains(result.tier.label()));

        let expected = tier_recommendations(result.tier);
        assert_eq!(interpretation.recommendations, expected.to_vec());
        for item in expected {
            assert!(text.contains(&format!("- {item}")), "{answers:?} missing {item}");
        }
        assert!(text.ends_with(MARKET_CONTEXT));
    }
}

#[test]
fn recommendation_lists_hold_three_or_four_items() {
    for tier in RiskTier::ordered() {
        let count = tier_recommendations(tier).len();
        assert!((3..=4).contains(&count), "{tier:?} has {count} items");
    }
}

#[test]
fn opening_reports_rounded_score() {
    let answers = quiet_answers();
    let interpretation = interpret(&answers, &score(&answers));

    assert!(interpretation.opening.starts_with("As a small organisation"));
    assert!(interpretation.opening.contains("scores 20/100"));
    assert!(interpretation.opening.contains("the Low tier"));
}

#[test]
fn rendered_text_keeps_section_order() {
    let answers = saturated_answers();
    let text = interpret(&answers, &score(&answers)).to_string();

    let opening_end = text.find("\n\n").expect("blank line after opening");
    let heading = text.find("Recommended actions:").expect("heading present");
    let context = text.find("Market context:").expect("market context present");
    assert!(opening_end < heading);
    assert!(heading < context);
    assert!(MARKET_CONTEXT.contains('%'));
}
