mod session;
pub mod views;

pub use session::{WizardSession, WizardView};
pub use views::RiskReport;
