//! Linear five-step questionnaire state.
//!
//! Steps 1 to 4 each collect one [`AnswerField`]; step 5 shows the results.
//! The state carries no display dependency: a session or test drives it
//! directly and inspects the returned [`StepStatus`] and [`Transition`] values.

use super::domain::{Answer, AnswerField, AnswerSet, Answers, AssessmentError};
use serde::Serialize;
use tracing::debug;

pub const TOTAL_STEPS: u8 = 5;
const FIRST_STEP: u8 = 1;

/// Whether the current step has everything it needs to move on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepStatus {
    pub step: u8,
    pub complete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockReason {
    FirstStep,
    FinalStep,
    StepIncomplete(AnswerField),
    AnswersIncomplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    Moved { from: u8, to: u8 },
    Blocked(BlockReason),
}

impl Transition {
    pub fn is_moved(&self) -> bool {
        matches!(self, Transition::Moved { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardState {
    current_step: u8,
    answers: AnswerSet,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            current_step: FIRST_STEP,
            answers: AnswerSet::default(),
        }
    }

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Field collected on the current step, `None` on the results step.
    pub fn current_field(&self) -> Option<AnswerField> {
        AnswerField::for_step(self.current_step)
    }

    pub fn is_step_complete(&self) -> bool {
        match self.current_field() {
            Some(field) => self.answers.is_set(field),
            None => self.answers.is_complete(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.answers.is_complete()
    }

    pub fn progress_percent(&self) -> f64 {
        f64::from(self.current_step) * 100.0 / f64::from(TOTAL_STEPS)
    }

    fn status(&self) -> StepStatus {
        StepStatus {
            step: self.current_step,
            complete: self.is_step_complete(),
        }
    }

    pub fn select_answer(&mut self, answer: Answer) -> StepStatus {
        self.answers.record(answer);
        debug!(
            step = self.current_step,
            field = %answer.field(),
            value = answer.key(),
            "answer recorded"
        );
        self.status()
    }

    pub fn clear_answer(&mut self, field: AnswerField) -> StepStatus {
        self.answers.clear(field);
        self.status()
    }

    fn advance_blocker(&self) -> Option<BlockReason> {
        if self.current_step >= TOTAL_STEPS {
            return Some(BlockReason::FinalStep);
        }
        if let Some(field) = self.current_field() {
            if !self.answers.is_set(field) {
                return Some(BlockReason::StepIncomplete(field));
            }
        }
        if self.current_step + 1 == TOTAL_STEPS && !self.is_complete() {
            return Some(BlockReason::AnswersIncomplete);
        }
        None
    }

    pub fn can_advance(&self) -> bool {
        self.advance_blocker().is_none()
    }

    pub fn advance(&mut self) -> Transition {
        if let Some(reason) = self.advance_blocker() {
            debug!(step = self.current_step, ?reason, "advance blocked");
            return Transition::Blocked(reason);
        }

        let from = self.current_step;
        self.current_step += 1;
        Transition::Moved {
            from,
            to: self.current_step,
        }
    }

    pub fn retreat(&mut self) -> Transition {
        if self.current_step <= FIRST_STEP {
            return Transition::Blocked(BlockReason::FirstStep);
        }

        let from = self.current_step;
        self.current_step -= 1;
        Transition::Moved {
            from,
            to: self.current_step,
        }
    }

    pub fn resolved_answers(&self) -> Result<Answers, AssessmentError> {
        self.answers.resolve()
    }
}
