//! Input validation and formula dispatch.

use crate::error::EstimateError;
use crate::formulas::MAX_REPS;
use crate::registry;

/// A successful estimate, rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub value: f64,
}

impl std::fmt::Display for Estimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.value)
    }
}

/// Estimates the 1RM with the formula at `formula_index`.
///
/// Weight is checked before reps; the first failure is returned.
pub fn estimate(
    formula_index: usize,
    weight_input: &str,
    reps_input: &str,
) -> Result<Estimate, EstimateError> {
    let weight = parse_weight(weight_input).inspect_err(|_| {
        log::warn!("Rejected weight input: {:?}", weight_input);
    })?;
    let reps = parse_reps(reps_input).inspect_err(|_| {
        log::warn!("Rejected reps input: {:?}", reps_input);
    })?;

    let formula =
        registry::get(formula_index).ok_or(EstimateError::UnknownFormula(formula_index))?;
    let value = round_to_cents(formula.evaluate(weight, reps));
    // Weights near f64::MAX overflow in the formula or the rounding step.
    if !value.is_finite() {
        log::warn!("Weight {} overflows {}", weight, formula.short_name());
        return Err(EstimateError::InvalidWeight);
    }

    log::debug!(
        "{}: {} x {} -> {:.2}",
        formula.short_name(),
        weight,
        reps,
        value
    );

    Ok(Estimate { value })
}

/// Parses a positive, finite weight.
pub fn parse_weight(input: &str) -> Result<f64, EstimateError> {
    match input.trim().parse::<f64>() {
        Ok(w) if w.is_finite() && w > 0.0 => Ok(w),
        _ => Err(EstimateError::InvalidWeight),
    }
}

/// Parses a whole rep count in `1..=MAX_REPS`.
pub fn parse_reps(input: &str) -> Result<u32, EstimateError> {
    match input.trim().parse::<u32>() {
        Ok(r) if (1..=MAX_REPS).contains(&r) => Ok(r),
        _ => Err(EstimateError::InvalidReps),
    }
}

/// Rounds half away from zero to two decimal places.
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
