use crate::assess::format_report;
use hiring_risk::assessment::{
    Answer, AnswerField, RiskReport, WizardSession, WizardView, TOTAL_STEPS,
};
use hiring_risk::error::AppError;
use std::io;

const BACK: &str = "back";

/// Renders wizard progress with cliclack log lines and the results as a note.
#[derive(Debug, Default)]
pub(crate) struct TerminalView;

impl WizardView for TerminalView {
    fn render_step(&mut self, step: u8, progress_percent: f64) {
        let _ = cliclack::log::step(format!(
            "Step {step} of {TOTAL_STEPS} ({progress_percent:.0}% complete)"
        ));
    }

    fn render_results(&mut self, report: &RiskReport) {
        let _ = cliclack::note(
            format!("{} risk", report.tier_label),
            format_report(report),
        );
    }
}

pub(crate) fn run_wizard() -> Result<(), AppError> {
    cliclack::intro("Bilingual hiring risk assessment")?;
    let mut session = WizardSession::new(TerminalView);

    while let Some(field) = session.state().current_field() {
        let step = session.state().current_step();
        let current = session.state().answers().get(field);

        let choice = match prompt(field, current, step > 1) {
            Ok(choice) => choice,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {
                cliclack::outro_cancel("Assessment cancelled")?;
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        match choice {
            Some(answer) => {
                session.on_answer_selected(step, answer);
                session.on_advance();
            }
            None => {
                session.on_retreat();
            }
        }
    }

    match session.report() {
        Some(report) => cliclack::outro(format!(
            "Score {:.0}/100, {} tier",
            report.score, report.tier_label
        ))?,
        None => cliclack::outro("Assessment finished without a result")?,
    }
    Ok(())
}

/// `Ok(None)` means the user asked to go back a step.
fn prompt(
    field: AnswerField,
    current: Option<Answer>,
    allow_back: bool,
) -> io::Result<Option<Answer>> {
    let mut select = cliclack::select(field.question());
    for answer in field.options() {
        select = select.item(answer.key(), answer.label(), "");
    }
    if allow_back {
        select = select.item(BACK, "Back to previous question", "");
    }
    if let Some(answer) = current {
        select = select.initial_value(answer.key());
    }

    let key = select.interact()?;
    if key == BACK {
        return Ok(None);
    }
    Answer::parse(field, key)
        .map(Some)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))
}
