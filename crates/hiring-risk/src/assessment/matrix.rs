//! CSV export of the score for every answer combination.

use super::domain::{Answers, BilingualExposure, FirmSize, HiringPressure, Region};
use super::scoring::{score, RiskTier};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixRow {
    pub firm_size: FirmSize,
    pub bilingual_exposure: BilingualExposure,
    pub region: Region,
    pub hiring_pressure: HiringPressure,
    pub raw_score: f64,
    pub score: f64,
    pub tier: RiskTier,
    pub bilingual_pressure: f64,
    pub scarcity_exposure: f64,
    pub ai_leverage: f64,
    pub eor_feasibility: f64,
}

impl MatrixRow {
    pub fn from_answers(answers: &Answers) -> Self {
        let result = score(answers);
        Self {
            firm_size: answers.firm_size,
            bilingual_exposure: answers.bilingual_exposure,
            region: answers.region,
            hiring_pressure: answers.hiring_pressure,
            raw_score: round2(result.raw_score),
            score: round2(result.score),
            tier: result.tier,
            bilingual_pressure: round2(result.indicators.bilingual_pressure),
            scarcity_exposure: round2(result.indicators.scarcity_exposure),
            ai_leverage: round2(result.indicators.ai_leverage),
            eor_feasibility: round2(result.indicators.eor_feasibility),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Write a header plus one row per combination, returning the number of data rows.
pub fn write_matrix<W: Write>(writer: W) -> Result<usize, csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut rows = 0;
    for answers in Answers::all() {
        csv_writer.serialize(MatrixRow::from_answers(&answers))?;
        rows += 1;
    }
    csv_writer.flush()?;
    Ok(rows)
}
