use crate::assessment::domain::{
    Answer, Answers, BilingualExposure, FirmSize, HiringPressure, Region,
};
use crate::assessment::report::{RiskReport, WizardView};

pub(super) const EPSILON: f64 = 1e-9;

pub(super) fn answers(
    firm_size: FirmSize,
    bilingual_exposure: BilingualExposure,
    region: Region,
    hiring_pressure: HiringPressure,
) -> Answers {
    Answers {
        firm_size,
        bilingual_exposure,
        region,
        hiring_pressure,
    }
}

/// large / high / brussels / aggressive: raw 141.96, clamped to 100.
pub(super) fn saturated_answers() -> Answers {
    answers(
        FirmSize::Large,
        BilingualExposure::High,
        Region::Brussels,
        HiringPressure::Aggressive,
    )
}

/// small / low / liege / stable: raw 20.16.
pub(super) fn quiet_answers() -> Answers {
    answers(
        FirmSize::Small,
        BilingualExposure::Low,
        Region::Liege,
        HiringPressure::Stable,
    )
}

/// All coefficients at 1.0: raw 50.
pub(super) fn neutral_answers() -> Answers {
    answers(
        FirmSize::Medium,
        BilingualExposure::Medium,
        Region::Other,
        HiringPressure::Moderate,
    )
}

/// One answer per wizard step, in step order.
pub(super) fn step_answers(answers: &Answers) -> [Answer; 4] {
    [
        Answer::FirmSize(answers.firm_size),
        Answer::BilingualExposure(answers.bilingual_exposure),
        Answer::Region(answers.region),
        Answer::HiringPressure(answers.hiring_pressure),
    ]
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

#[derive(Debug, Clone, PartialEq)]
pub(super) enum ViewEvent {
    Step { step: u8, progress: f64 },
    Results { score: f64, tier: &'static str },
}

#[derive(Debug, Default)]
pub(super) struct RecordingView {
    pub(super) events: Vec<ViewEvent>,
}

impl WizardView for RecordingView {
    fn render_step(&mut self, step: u8, progress_percent: f64) {
        self.events.push(ViewEvent::Step {
            step,
            progress: progress_percent,
        });
    }

    fn render_results(&mut self, report: &RiskReport) {
        self.events.push(ViewEvent::Results {
            score: report.score,
            tier: report.tier_label,
        });
    }
}
