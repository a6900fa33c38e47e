//! Calculator form state and its text rendering.
//!
//! The page holds the raw inputs, the selected formula and the active
//! language; every piece of text is looked up with that language passed in
//! explicitly.

use std::fmt::{self, Write};

use serde::Serialize;

use crate::error::EstimateError;
use crate::estimator::{Estimate, estimate};
use crate::i18n::{Language, TextKey, intro_paragraphs, translate};
use crate::registry::{self, FormulaDefinition};

/// Unit label appended to results; weights are never converted.
const UNIT_LABEL: &str = "kg/lbs";

/// State of the calculator form.
#[derive(Debug, Clone, Default)]
pub struct CalculatorPage {
    language: Language,
    /// Always a valid registry index.
    formula_index: usize,
    weight: String,
    reps: String,
    outcome: Option<Result<Estimate, EstimateError>>,
}

/// Machine-readable view of the page after a calculation.
#[derive(Debug, Serialize)]
pub struct Report {
    pub language: Language,
    pub formula: &'static str,
    pub weight: String,
    pub reps: String,
    pub estimate: Option<String>,
    pub error: Option<String>,
}

impl CalculatorPage {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggle();
    }

    pub fn formula_index(&self) -> usize {
        self.formula_index
    }

    /// Selects the formula at `index`, leaving the selection unchanged if the
    /// index is out of range.
    pub fn select_formula(&mut self, index: usize) -> Result<(), EstimateError> {
        if index >= registry::len() {
            return Err(EstimateError::UnknownFormula(index));
        }
        self.formula_index = index;
        Ok(())
    }

    pub fn selected_formula(&self) -> &'static FormulaDefinition {
        &registry::all()[self.formula_index]
    }

    pub fn set_weight(&mut self, input: impl Into<String>) {
        self.weight = input.into();
    }

    pub fn set_reps(&mut self, input: impl Into<String>) {
        self.reps = input.into();
    }

    /// Last calculation outcome, if any.
    pub fn outcome(&self) -> Option<&Result<Estimate, EstimateError>> {
        self.outcome.as_ref()
    }

    /// Runs the estimator on the current inputs and stores the outcome.
    ///
    /// A failure replaces any previous result and vice versa.
    pub fn calculate(&mut self) -> Result<Estimate, EstimateError> {
        let outcome = estimate(self.formula_index, &self.weight, &self.reps);
        self.outcome = Some(outcome.clone());
        outcome
    }

    /// Localized error message for the last outcome, if it failed.
    pub fn error_message(&self) -> Option<String> {
        match &self.outcome {
            Some(Err(err)) => Some(error_text(err, self.language)),
            _ => None,
        }
    }

    /// Result line for the last outcome, if it succeeded.
    pub fn result_line(&self) -> Option<String> {
        match &self.outcome {
            Some(Ok(value)) => Some(result_text(*value, self.language)),
            _ => None,
        }
    }

    pub fn report(&self) -> Report {
        Report {
            language: self.language,
            formula: self.selected_formula().name,
            weight: self.weight.clone(),
            reps: self.reps.clone(),
            estimate: match &self.outcome {
                Some(Ok(value)) => Some(value.to_string()),
                _ => None,
            },
            error: self.error_message(),
        }
    }

    /// Renders the whole page as plain text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_page(&mut out, self.language);
        out
    }

    fn write_page(&self, out: &mut String, lang: Language) -> fmt::Result {
        writeln!(out, "{}  [{}]", translate(lang, TextKey::Title), lang.switch_label())?;
        writeln!(out)?;
        for paragraph in intro_paragraphs(lang) {
            writeln!(out, "{}", paragraph)?;
        }
        writeln!(out)?;

        writeln!(out, "{}", translate(lang, TextKey::SelectFormula))?;
        write_formula_list(out, self.formula_index)?;
        writeln!(out)?;

        let formula = self.selected_formula();
        writeln!(out, "{}", translate(lang, TextKey::FormulaInfo))?;
        writeln!(out, "{}", formula.details(lang))?;
        writeln!(
            out,
            "{}: {}",
            translate(lang, TextKey::BestFor),
            formula.best_for(lang)
        )?;
        writeln!(out)?;

        writeln!(out, "{} {}", translate(lang, TextKey::Weight), self.weight)?;
        writeln!(out, "{} {}", translate(lang, TextKey::Reps), self.reps)?;
        writeln!(out)?;

        match &self.outcome {
            Some(Ok(value)) => writeln!(out, "{}", result_text(*value, lang))?,
            Some(Err(err)) => writeln!(out, "{}", error_text(err, lang))?,
            None => {}
        }
        writeln!(out, "[{}]", translate(lang, TextKey::Calculate))
    }
}

/// Renders the formula registry with expressions and localized notes.
pub fn render_formula_table(lang: Language) -> String {
    let mut out = String::new();
    let _ = write_formula_table(&mut out, lang);
    out
}

fn write_formula_table(out: &mut String, lang: Language) -> fmt::Result {
    for (index, formula) in registry::all().iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, formula.name)?;
        writeln!(out, "   {}", formula.expression)?;
        writeln!(
            out,
            "   {}: {}",
            translate(lang, TextKey::BestFor),
            formula.best_for(lang)
        )?;
    }
    Ok(())
}

fn write_formula_list(out: &mut String, selected: usize) -> fmt::Result {
    for (index, formula) in registry::all().iter().enumerate() {
        let marker = if index == selected { '>' } else { ' ' };
        writeln!(out, "{} {}. {}", marker, index + 1, formula.name)?;
    }
    Ok(())
}

fn result_text(value: Estimate, lang: Language) -> String {
    format!(
        "{}: {} {}",
        translate(lang, TextKey::Estimated1Rm),
        value,
        UNIT_LABEL
    )
}

fn error_text(err: &EstimateError, lang: Language) -> String {
    match err.message_key() {
        Some(key) => translate(lang, key).to_string(),
        None => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with(lang: Language, index: usize, weight: &str, reps: &str) -> CalculatorPage {
        let mut page = CalculatorPage::new(lang);
        page.select_formula(index).unwrap();
        page.set_weight(weight);
        page.set_reps(reps);
        page
    }

    #[test]
    fn test_new_page_defaults() {
        let page = CalculatorPage::default();
        assert_eq!(page.language(), Language::Ko);
        assert_eq!(page.formula_index(), 0);
        assert!(page.outcome().is_none());
        assert_eq!(page.selected_formula().name, "Epley Formula");
    }

    #[test]
    fn test_select_formula_out_of_range_keeps_selection() {
        let mut page = CalculatorPage::default();
        page.select_formula(2).unwrap();
        assert_eq!(page.select_formula(7), Err(EstimateError::UnknownFormula(7)));
        assert_eq!(page.formula_index(), 2);
    }

    #[test]
    fn test_calculate_success_english() {
        let mut page = page_with(Language::En, 0, "100", "5");
        assert_eq!(page.calculate().unwrap().to_string(), "116.67");
        assert_eq!(
            page.result_line().as_deref(),
            Some("Estimated 1RM: 116.67 kg/lbs")
        );
        assert!(page.error_message().is_none());
    }

    #[test]
    fn test_calculate_success_korean() {
        let mut page = page_with(Language::Ko, 1, "100", "5");
        page.calculate().unwrap();
        assert_eq!(
            page.result_line().as_deref(),
            Some("예상 1RM: 112.50 kg/lbs")
        );
    }

    #[test]
    fn test_error_replaces_previous_result() {
        let mut page = page_with(Language::En, 0, "100", "5");
        page.calculate().unwrap();

        page.set_reps("31");
        assert_eq!(page.calculate(), Err(EstimateError::InvalidReps));
        assert!(page.result_line().is_none());
        assert_eq!(
            page.error_message().as_deref(),
            Some("Please enter a valid number of reps (1-30).")
        );

        page.set_reps("5");
        page.calculate().unwrap();
        assert!(page.error_message().is_none());
    }

    #[test]
    fn test_toggle_language_relocalizes_error() {
        let mut page = page_with(Language::En, 0, "0", "5");
        assert!(page.calculate().is_err());
        assert_eq!(
            page.error_message().as_deref(),
            Some("Please enter a valid weight greater than 0.")
        );

        page.toggle_language();
        assert_eq!(page.language(), Language::Ko);
        assert_eq!(
            page.error_message().as_deref(),
            Some("0보다 큰 유효한 무게를 입력하십시오.")
        );
    }

    #[test]
    fn test_render_english_page() {
        let mut page = page_with(Language::En, 3, "100", "10");
        page.calculate().unwrap();
        let text = page.render();

        assert!(text.starts_with("1RM Calculator  [English]\n"));
        assert!(text.contains("> 4. Lombardi Formula\n"));
        assert!(text.contains("  1. Epley Formula\n"));
        assert!(text.contains("Best For: Endurance athletes"));
        assert!(text.contains("Weight Lifted (kg or lbs): 100\n"));
        assert!(text.contains("Estimated 1RM: 125.89 kg/lbs\n"));
        assert!(text.ends_with("[Calculate 1RM]\n"));
    }

    #[test]
    fn test_render_korean_page_without_outcome() {
        let page = page_with(Language::Ko, 6, "", "");
        let text = page.render();

        assert!(text.starts_with("1RM 계산기  [한국어]\n"));
        assert!(text.contains("> 7. Wathan Formula\n"));
        assert!(text.contains("와탄 공식은"));
        assert!(!text.contains("kg/lbs"));
        assert!(text.ends_with("[1RM 계산]\n"));
    }

    #[test]
    fn test_report_success_and_failure() {
        let mut page = page_with(Language::En, 1, "100", "5");
        page.calculate().unwrap();
        let report = page.report();
        assert_eq!(report.formula, "Brzycki Formula");
        assert_eq!(report.estimate.as_deref(), Some("112.50"));
        assert!(report.error.is_none());

        page.set_weight("abc");
        assert!(page.calculate().is_err());
        let report = page.report();
        assert!(report.estimate.is_none());
        assert_eq!(
            report.error.as_deref(),
            Some("Please enter a valid weight greater than 0.")
        );
    }

    #[test]
    fn test_formula_table_lists_every_formula() {
        let table = render_formula_table(Language::En);
        for (index, formula) in registry::all().iter().enumerate() {
            assert!(table.contains(&format!("{}. {}", index + 1, formula.name)));
            assert!(table.contains(formula.expression));
        }
        assert!(render_formula_table(Language::Ko).contains("적합한 용도: "));
    }

    #[test]
    fn test_formula_table_layout() {
        let table = render_formula_table(Language::En);
        assert_eq!(table.lines().count(), 3 * registry::len());
        assert!(table.starts_with(
            "1. Epley Formula\n   1RM = Weight × (1 + Reps / 30)\n   Best For: General strength training"
        ));
        assert!(table.ends_with("Intermediate to advanced lifters who perform moderate reps.\n"));
    }
}
