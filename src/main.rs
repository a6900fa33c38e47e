use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use onerm::page::render_formula_table;
use onerm::{CalculatorPage, Language, registry};

/// Estimates a one-repetition maximum from a submaximal set.
#[derive(Parser, Debug)]
#[command(name = "onerm")]
#[command(about = "1RM calculator with seven estimation formulas (English/Korean)")]
#[command(version)]
struct Args {
    /// Weight lifted (kg or lbs; the unit is not converted).
    #[arg(
        value_name = "WEIGHT",
        allow_negative_numbers = true,
        required_unless_present = "list"
    )]
    weight: Option<String>,

    /// Number of repetitions performed (1-30).
    #[arg(
        value_name = "REPS",
        allow_negative_numbers = true,
        required_unless_present = "list"
    )]
    reps: Option<String>,

    /// Formula by 0-based index or name (e.g. "brzycki").
    /// Can also be set via ONERM_FORMULA environment variable.
    #[arg(short, long, env = "ONERM_FORMULA", default_value = "0", value_parser = parse_formula)]
    formula: usize,

    /// Interface language (en or ko).
    /// Can also be set via ONERM_LANG environment variable.
    #[arg(short, long, env = "ONERM_LANG", default_value = "ko")]
    lang: Language,

    /// List the available formulas and exit.
    #[arg(long)]
    list: bool,

    /// Print JSON instead of text (the outcome, or the formula list with --list).
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    if args.list {
        if args.json {
            println!("{}", formulas_json()?);
        } else {
            print!("{}", render_formula_table(args.lang));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut page = CalculatorPage::new(args.lang);
    page.select_formula(args.formula)
        .with_context(|| format!("Failed to select formula {}", args.formula))?;
    page.set_weight(args.weight.unwrap_or_default());
    page.set_reps(args.reps.unwrap_or_default());

    let outcome = page.calculate();

    if args.json {
        let json = serde_json::to_string_pretty(&page.report())
            .context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        print!("{}", page.render());
    }

    match outcome {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            log::info!("Calculation rejected: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Serializes every formula definition, both languages included.
fn formulas_json() -> Result<String> {
    serde_json::to_string_pretty(registry::all()).context("Failed to serialize formulas")
}

/// Accepts a registry index or a formula name.
fn parse_formula(s: &str) -> Result<usize, String> {
    if let Ok(index) = s.trim().parse::<usize>() {
        return if index < registry::len() {
            Ok(index)
        } else {
            Err(format!("formula index must be below {}", registry::len()))
        };
    }

    registry::find(s).ok_or_else(|| {
        let names: Vec<&str> = registry::all().iter().map(|f| f.short_name()).collect();
        format!("unknown formula '{}' (expected one of: {})", s, names.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formula_by_index() {
        assert_eq!(parse_formula("0"), Ok(0));
        assert_eq!(parse_formula("6"), Ok(6));
        assert!(parse_formula("7").is_err());
    }

    #[test]
    fn test_parse_formula_by_name() {
        assert_eq!(parse_formula("Lander"), Ok(2));
        assert_eq!(parse_formula("Wathan Formula"), Ok(6));
        assert!(parse_formula("unknown").is_err());
    }

    #[test]
    fn test_args_positional_inputs() {
        let args =
            Args::try_parse_from(["onerm", "100", "5", "--formula", "brzycki", "--lang", "en"])
                .unwrap();
        assert_eq!(args.weight.as_deref(), Some("100"));
        assert_eq!(args.reps.as_deref(), Some("5"));
        assert_eq!(args.formula, 1);
        assert_eq!(args.lang, Language::En);
        assert!(!args.json);
    }

    #[test]
    fn test_args_negative_weight_is_passed_through() {
        let args = Args::try_parse_from(["onerm", "-10", "5"]).unwrap();
        assert_eq!(args.weight.as_deref(), Some("-10"));
    }

    #[test]
    fn test_args_list_without_inputs() {
        let args = Args::try_parse_from(["onerm", "--list"]).unwrap();
        assert!(args.list);
        assert!(args.weight.is_none());
    }

    #[test]
    fn test_formulas_json_lists_registry() {
        let json: serde_json::Value = serde_json::from_str(&formulas_json().unwrap()).unwrap();
        let formulas = json.as_array().unwrap();
        assert_eq!(formulas.len(), registry::len());
        assert_eq!(formulas[0]["kind"], "epley");
        assert_eq!(formulas[5]["kind"], "o_conner");
        assert_eq!(formulas[1]["name"], "Brzycki Formula");
        assert!(formulas[6]["details_ko"].as_str().unwrap().starts_with("와탄 공식"));
    }

    #[test]
    fn test_args_list_json() {
        let args = Args::try_parse_from(["onerm", "--list", "--json"]).unwrap();
        assert!(args.list && args.json);
    }

    #[test]
    fn test_args_unknown_language_rejected() {
        assert!(Args::try_parse_from(["onerm", "100", "5", "--lang", "de"]).is_err());
    }

    #[test]
    fn test_args_require_inputs() {
        assert!(Args::try_parse_from(["onerm"]).is_err());
        assert!(Args::try_parse_from(["onerm", "100"]).is_err());
    }
}
