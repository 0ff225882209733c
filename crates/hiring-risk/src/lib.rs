//! Bilingual hiring risk questionnaire.
//!
//! The [`assessment`] module holds the pure model: answer types, coefficient
//! tables, the scoring engine, the interpretation generator, and the wizard
//! controller. Rendering is delegated to a [`assessment::WizardView`]
//! implementation supplied by the caller.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
