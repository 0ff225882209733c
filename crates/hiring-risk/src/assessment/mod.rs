pub mod domain;
pub mod interpretation;
pub mod matrix;
pub mod report;
pub mod scoring;
pub mod tables;
pub mod wizard;

#[cfg(test)]
mod tests;

pub use domain::{
    Answer, AnswerField, AnswerSet, Answers, AssessmentError, BilingualExposure, FirmSize,
    HiringPressure, ParseAnswerError, Region,
};
pub use interpretation::{interpret, Interpretation};
pub use matrix::{write_matrix, MatrixRow};
pub use report::views::{IndicatorBand, IndicatorBar, IndicatorKind, RiskReport};
pub use report::{WizardSession, WizardView};
pub use scoring::{score, score_answer_set, RiskIndicators, RiskResult, RiskTier};
pub use tables::{HeatmapRow, TensionLevel, HEATMAP};
pub use wizard::{BlockReason, StepStatus, Transition, WizardState, TOTAL_STEPS};
