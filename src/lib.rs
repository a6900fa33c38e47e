//! One-repetition maximum estimation.
//!
//! Seven closed-form formulas, input validation, and bilingual
//! (English/Korean) text for a simple calculator page.

pub mod error;
pub mod estimator;
pub mod formulas;
pub mod i18n;
pub mod page;
pub mod registry;

pub use error::{EstimateError, ParseError};
pub use estimator::{Estimate, estimate};
pub use formulas::{FormulaKind, MAX_REPS};
pub use i18n::{Language, TextKey, translate};
pub use page::CalculatorPage;
pub use registry::FormulaDefinition;
