//! Closed-form e1RM formulas.
//!
//! Each formula is a variant of [`FormulaKind`] and every evaluation lives in
//! the single `match` of [`FormulaKind::evaluate`].

use serde::Serialize;

/// Highest rep count accepted by every formula. Brzycki is singular at 37.
pub const MAX_REPS: u32 = 30;

/// Lander coefficients.
mod lander {
    pub const A: f64 = 101.3;
    pub const B: f64 = 2.67123;
}

/// Mayhew et al. coefficients.
mod mayhew {
    pub const A: f64 = 52.2;
    pub const B: f64 = 41.9;
    pub const C: f64 = 0.055;
}

/// Wathan coefficients.
mod wathan {
    pub const A: f64 = 48.8;
    pub const B: f64 = 53.8;
    pub const C: f64 = 0.075;
}

/// The estimation formulas, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormulaKind {
    Epley,
    Brzycki,
    Lander,
    Lombardi,
    Mayhew,
    OConner,
    Wathan,
}

impl FormulaKind {
    /// Returns all formula variants in display order.
    pub fn all() -> &'static [FormulaKind] {
        &[
            FormulaKind::Epley,
            FormulaKind::Brzycki,
            FormulaKind::Lander,
            FormulaKind::Lombardi,
            FormulaKind::Mayhew,
            FormulaKind::OConner,
            FormulaKind::Wathan,
        ]
    }

    /// Estimates the 1RM for `weight` lifted for `reps` repetitions.
    ///
    /// Finite and positive for `weight > 0` and `reps` in `1..=MAX_REPS`;
    /// inputs outside that domain are rejected by the estimator before
    /// reaching this point.
    pub fn evaluate(self, weight: f64, reps: u32) -> f64 {
        let w = weight;
        let r = f64::from(reps);

        match self {
            // w × (1 + r/30)
            FormulaKind::Epley => w * (1.0 + r / 30.0),
            // w × 36 / (37 - r)
            FormulaKind::Brzycki => w * (36.0 / (37.0 - r)),
            // 100w / (101.3 - 2.67123r)
            FormulaKind::Lander => (100.0 * w) / (lander::A - lander::B * r),
            // w × r^0.10
            FormulaKind::Lombardi => w * r.powf(0.10),
            // 100w / (52.2 + 41.9e^(-0.055r))
            FormulaKind::Mayhew => (100.0 * w) / (mayhew::A + mayhew::B * (-mayhew::C * r).exp()),
            // w × (1 + 0.025r)
            FormulaKind::OConner => w * (1.0 + 0.025 * r),
            // 100w / (48.8 + 53.8e^(-0.075r))
            FormulaKind::Wathan => (100.0 * w) / (wathan::A + wathan::B * (-wathan::C * r).exp()),
        }
    }
}
