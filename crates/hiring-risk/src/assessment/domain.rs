use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Headcount band of the hiring firm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirmSize {
    Small,
    Medium,
    Large,
}

impl FirmSize {
    pub const fn ordered() -> [Self; 3] {
        [Self::Small, Self::Medium, Self::Large]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "Small (under 50 employees)",
            Self::Medium => "Medium (50 to 250 employees)",
            Self::Large => "Large (over 250 employees)",
        }
    }
}

/// How much of the role involves working in both French and Dutch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BilingualExposure {
    Low,
    Medium,
    High,
}

impl BilingualExposure {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Medium, Self::High]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low (occasional second-language contact)",
            Self::Medium => "Medium (regular bilingual exchanges)",
            Self::High => "High (client-facing in both languages)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Brussels,
    Antwerp,
    Liege,
    Other,
}

impl Region {
    pub const fn ordered() -> [Self; 4] {
        [Self::Brussels, Self::Antwerp, Self::Liege, Self::Other]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Brussels => "brussels",
            Self::Antwerp => "antwerp",
            Self::Liege => "liege",
            Self::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Brussels => "Brussels",
            Self::Antwerp => "Antwerp",
            Self::Liege => "Liège",
            Self::Other => "Other region",
        }
    }
}

/// Pace at which the firm needs to add headcount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HiringPressure {
    Stable,
    Moderate,
    Aggressive,
}

impl HiringPressure {
    pub const fn ordered() -> [Self; 3] {
        [Self::Stable, Self::Moderate, Self::Aggressive]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Moderate => "moderate",
            Self::Aggressive => "aggressive",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Stable => "Stable (replacement hiring only)",
            Self::Moderate => "Moderate (steady growth)",
            Self::Aggressive => "Aggressive (rapid expansion)",
        }
    }
}

/// The four questions, in wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerField {
    FirmSize,
    BilingualExposure,
    Region,
    HiringPressure,
}

impl AnswerField {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::FirmSize,
            Self::BilingualExposure,
            Self::Region,
            Self::HiringPressure,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::FirmSize => "firm_size",
            Self::BilingualExposure => "bilingual_exposure",
            Self::Region => "region",
            Self::HiringPressure => "hiring_pressure",
        }
    }

    pub const fn question(self) -> &'static str {
        match self {
            Self::FirmSize => "How large is your organisation?",
            Self::BilingualExposure => "How much French/Dutch bilingual work do the roles involve?",
            Self::Region => "Where are the roles based?",
            Self::HiringPressure => "How quickly do you need to hire?",
        }
    }

    /// Wizard step (1-based) on which this field is collected.
    pub const fn step(self) -> u8 {
        match self {
            Self::FirmSize => 1,
            Self::BilingualExposure => 2,
            Self::Region => 3,
            Self::HiringPressure => 4,
        }
    }

    pub fn for_step(step: u8) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|field| field.step() == step)
    }

    /// Every selectable answer for this field, in display order.
    pub fn options(self) -> Vec<Answer> {
        match self {
            Self::FirmSize => FirmSize::ordered().into_iter().map(Answer::FirmSize).collect(),
            Self::BilingualExposure => BilingualExposure::ordered()
                .into_iter()
                .map(Answer::BilingualExposure)
                .collect(),
            Self::Region => Region::ordered().into_iter().map(Answer::Region).collect(),
            Self::HiringPressure => HiringPressure::ordered()
                .into_iter()
                .map(Answer::HiringPressure)
                .collect(),
        }
    }
}

impl fmt::Display for AnswerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single selected value, tagged with the field it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Answer {
    FirmSize(FirmSize),
    BilingualExposure(BilingualExposure),
    Region(Region),
    HiringPressure(HiringPressure),
}

impl Answer {
    pub const fn field(self) -> AnswerField {
        match self {
            Self::FirmSize(_) => AnswerField::FirmSize,
            Self::BilingualExposure(_) => AnswerField::BilingualExposure,
            Self::Region(_) => AnswerField::Region,
            Self::HiringPressure(_) => AnswerField::HiringPressure,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::FirmSize(value) => value.key(),
            Self::BilingualExposure(value) => value.key(),
            Self::Region(value) => value.key(),
            Self::HiringPressure(value) => value.key(),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FirmSize(value) => value.label(),
            Self::BilingualExposure(value) => value.label(),
            Self::Region(value) => value.label(),
            Self::HiringPressure(value) => value.label(),
        }
    }

    /// Parse the raw `(field, value)` pair produced by form controls.
    pub fn parse(field: AnswerField, raw: &str) -> Result<Self, ParseAnswerError> {
        let answer = match field {
            AnswerField::FirmSize => Self::FirmSize(raw.parse()?),
            AnswerField::BilingualExposure => Self::BilingualExposure(raw.parse()?),
            AnswerField::Region => Self::Region(raw.parse()?),
            AnswerField::HiringPressure => Self::HiringPressure(raw.parse()?),
        };
        Ok(answer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {field} value '{value}'")]
pub struct ParseAnswerError {
    pub field: AnswerField,
    pub value: String,
}

fn parse_choice<T: Copy>(
    field: AnswerField,
    raw: &str,
    choices: &[T],
    key: fn(T) -> &'static str,
) -> Result<T, ParseAnswerError> {
    let normalized = raw.trim().to_ascii_lowercase();
    choices
        .iter()
        .copied()
        .find(|choice| key(*choice) == normalized)
        .ok_or_else(|| ParseAnswerError {
            field,
            value: raw.to_string(),
        })
}

impl FromStr for FirmSize {
    type Err = ParseAnswerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_choice(AnswerField::FirmSize, raw, &Self::ordered(), Self::key)
    }
}

impl FromStr for BilingualExposure {
    type Err = ParseAnswerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_choice(AnswerField::BilingualExposure, raw, &Self::ordered(), Self::key)
    }
}

impl FromStr for Region {
    type Err = ParseAnswerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_choice(AnswerField::Region, raw, &Self::ordered(), Self::key)
    }
}

impl FromStr for HiringPressure {
    type Err = ParseAnswerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        parse_choice(AnswerField::HiringPressure, raw, &Self::ordered(), Self::key)
    }
}

/// Answers collected so far; any field may still be unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerSet {
    pub firm_size: Option<FirmSize>,
    pub bilingual_exposure: Option<BilingualExposure>,
    pub region: Option<Region>,
    pub hiring_pressure: Option<HiringPressure>,
}

impl AnswerSet {
    pub fn record(&mut self, answer: Answer) {
        match answer {
            Answer::FirmSize(value) => self.firm_size = Some(value),
            Answer::BilingualExposure(value) => self.bilingual_exposure = Some(value),
            Answer::Region(value) => self.region = Some(value),
            Answer::HiringPressure(value) => self.hiring_pressure = Some(value),
        }
    }

    pub fn clear(&mut self, field: AnswerField) {
        match field {
            AnswerField::FirmSize => self.firm_size = None,
            AnswerField::BilingualExposure => self.bilingual_exposure = None,
            AnswerField::Region => self.region = None,
            AnswerField::HiringPressure => self.hiring_pressure = None,
        }
    }

    pub fn get(&self, field: AnswerField) -> Option<Answer> {
        match field {
            AnswerField::FirmSize => self.firm_size.map(Answer::FirmSize),
            AnswerField::BilingualExposure => self.bilingual_exposure.map(Answer::BilingualExposure),
            AnswerField::Region => self.region.map(Answer::Region),
            AnswerField::HiringPressure => self.hiring_pressure.map(Answer::HiringPressure),
        }
    }

    pub fn is_set(&self, field: AnswerField) -> bool {
        match field {
            AnswerField::FirmSize => self.firm_size.is_some(),
            AnswerField::BilingualExposure => self.bilingual_exposure.is_some(),
            AnswerField::Region => self.region.is_some(),
            AnswerField::HiringPressure => self.hiring_pressure.is_some(),
        }
    }

    /// Unset fields in wizard order.
    pub fn missing(&self) -> Vec<AnswerField> {
        AnswerField::ordered()
            .into_iter()
            .filter(|field| !self.is_set(*field))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    pub fn resolve(&self) -> Result<Answers, AssessmentError> {
        match (
            self.firm_size,
            self.bilingual_exposure,
            self.region,
            self.hiring_pressure,
        ) {
            (Some(firm_size), Some(bilingual_exposure), Some(region), Some(hiring_pressure)) => {
                Ok(Answers {
                    firm_size,
                    bilingual_exposure,
                    region,
                    hiring_pressure,
                })
            }
            _ => Err(AssessmentError::IncompleteAnswers {
                missing: self.missing(),
            }),
        }
    }
}

/// A fully answered questionnaire, the only input the scoring engine accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Answers {
    pub firm_size: FirmSize,
    pub bilingual_exposure: BilingualExposure,
    pub region: Region,
    pub hiring_pressure: HiringPressure,
}

impl Answers {
    /// Every valid combination (3 x 3 x 4 x 3).
    pub fn all() -> Vec<Self> {
        let mut combinations = Vec::with_capacity(108);
        for firm_size in FirmSize::ordered() {
            for bilingual_exposure in BilingualExposure::ordered() {
                for region in Region::ordered() {
                    for hiring_pressure in HiringPressure::ordered() {
                        combinations.push(Self {
                            firm_size,
                            bilingual_exposure,
                            region,
                            hiring_pressure,
                        });
                    }
                }
            }
        }
        combinations
    }
}

impl From<Answers> for AnswerSet {
    fn from(value: Answers) -> Self {
        Self {
            firm_size: Some(value.firm_size),
            bilingual_exposure: Some(value.bilingual_exposure),
            region: Some(value.region),
            hiring_pressure: Some(value.hiring_pressure),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    #[error("answers incomplete, missing: {}", join_fields(.missing))]
    IncompleteAnswers { missing: Vec<AnswerField> },
}

fn join_fields(fields: &[AnswerField]) -> String {
    fields
        .iter()
        .map(|field| field.key())
        .collect::<Vec<_>>()
        .join(", ")
}
