use clap::Args;
use hiring_risk::assessment::{
    write_matrix, AnswerSet, BilingualExposure, FirmSize, HiringPressure,
    Region, RiskReport,
};
use hiring_risk::error::AppError;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// Firm size: small, medium, or large
    #[arg(long)]
    pub(crate) firm_size: Option<FirmSize>,
    /// Bilingual exposure: low, medium, or high
    #[arg(long)]
    pub(crate) bilingual_exposure: Option<BilingualExposure>,
    /// Region: brussels, antwerp, liege, or other
    #[arg(long)]
    pub(crate) region: Option<Region>,
    /// Hiring pressure: stable, moderate, or aggressive
    #[arg(long)]
    pub(crate) hiring_pressure: Option<HiringPressure>,
    /// Print the full report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

impl AssessArgs {
    fn answer_set(&self) -> AnswerSet {
        AnswerSet {
            firm_size: self.firm_size,
            bilingual_exposure: self.bilingual_exposure,
            region: self.region,
            hiring_pressure: self.hiring_pressure,
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct MatrixArgs {
    /// Write the CSV to this path instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let answers = args.answer_set().resolve()?;
    let report = RiskReport::assess(&answers);

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("JSON report unavailable: {err}"),
        }
    } else {
        print!("{}", format_report(&report));
    }
    Ok(())
}

pub(crate) fn run_matrix(args: MatrixArgs) -> Result<(), AppError> {
    match args.output {
        Some(path) => {
            let file = File::create(&path)?;
            let rows = write_matrix(BufWriter::new(file))?;
            eprintln!("Wrote {rows} combinations to {}", path.display());
        }
        None => {
            write_matrix(io::stdout().lock())?;
        }
    }
    Ok(())
}

pub(crate) fn format_report(report: &RiskReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Bilingual hiring risk");
    let _ = writeln!(
        out,
        "Score: {:.0}/100 ({} tier)",
        report.score, report.tier_label
    );
    let _ = writeln!(out, "{}", report.tier_description);

    let _ = writeln!(out, "\nIndicators");
    for bar in &report.indicators {
        let _ = writeln!(
            out,
            "- {:<18} {:>3.0} {} [{}]",
            bar.label,
            bar.value,
            gauge(bar.value),
            bar.band_class
        );
    }

    let _ = writeln!(out, "\nInterpretation");
    let _ = writeln!(out, "{}", report.interpretation_text);

    let _ = writeln!(out, "\nRegional tension");
    for row in &report.heatmap {
        let _ = writeln!(
            out,
            "- {:<9} {:<10} {}",
            row.region,
            row.level.label(),
            row.tension
        );
    }
    out
}

fn gauge(value: f64) -> String {
    let filled = (value / 10.0).round().clamp(0.0, 10.0) as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(10 - filled))
}
