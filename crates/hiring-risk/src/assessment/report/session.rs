use super::super::domain::Answer;
use super::super::wizard::{StepStatus, Transition, WizardState, TOTAL_STEPS};
use super::views::RiskReport;
use tracing::{debug, info, warn};

/// Display surface driven by a [`WizardSession`].
pub trait WizardView {
    /// Highlight `step`, reset scroll position and update the progress indicator.
    fn render_step(&mut self, step: u8, progress_percent: f64);
    fn render_results(&mut self, report: &RiskReport);
}

/// Routes input events to the wizard state and pushes updates to the view.
pub struct WizardSession<V> {
    state: WizardState,
    view: V,
    report: Option<RiskReport>,
}

impl<V: WizardView> WizardSession<V> {
    pub fn new(mut view: V) -> Self {
        let state = WizardState::new();
        view.render_step(state.current_step(), state.progress_percent());
        Self {
            state,
            view,
            report: None,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Report produced on the last arrival at the results step.
    pub fn report(&self) -> Option<&RiskReport> {
        self.report.as_ref()
    }

    /// Selections coming from a step other than the active one are ignored.
    pub fn on_answer_selected(&mut self, step: u8, answer: Answer) -> StepStatus {
        if step != self.state.current_step() {
            debug!(
                step,
                current = self.state.current_step(),
                "ignoring answer for inactive step"
            );
            return StepStatus {
                step: self.state.current_step(),
                complete: self.state.is_step_complete(),
            };
        }
        self.state.select_answer(answer)
    }

    pub fn on_advance(&mut self) -> Transition {
        let transition = self.state.advance();
        if let Transition::Moved { to, .. } = transition {
            self.view.render_step(to, self.state.progress_percent());
            if to == TOTAL_STEPS {
                self.publish_results();
            }
        }
        transition
    }

    pub fn on_retreat(&mut self) -> Transition {
        let transition = self.state.retreat();
        if let Transition::Moved { to, .. } = transition {
            self.view.render_step(to, self.state.progress_percent());
        }
        transition
    }

    fn publish_results(&mut self) {
        let answers = match self.state.resolved_answers() {
            Ok(answers) => answers,
            Err(err) => {
                warn!(%err, "results step reached without a complete answer set");
                return;
            }
        };

        let report = RiskReport::assess(&answers);
        info!(
            score = report.score,
            tier = report.tier_label,
            "assessment completed"
        );
        self.view.render_results(&report);
        self.report = Some(report);
    }
}
