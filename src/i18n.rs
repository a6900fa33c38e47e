//! English and Korean interface text.
//!
//! There is no ambient "current language": every lookup takes the
//! [`Language`] explicitly.

use std::str::FromStr;

use serde::Serialize;

use crate::error::ParseError;

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    #[default]
    Ko,
}

impl Language {
    /// Returns the language tag (`en` or `ko`).
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ko => "ko",
        }
    }

    /// Returns the other language.
    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Ko,
            Language::Ko => Language::En,
        }
    }

    /// Label of the language switch while this language is active.
    pub fn switch_label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ko => "한국어",
        }
    }
}

impl FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "en-us" | "english" => Ok(Language::En),
            "ko" | "ko-kr" | "korean" => Ok(Language::Ko),
            _ => Err(ParseError::UnknownLanguage(s.to_string())),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Keys of the translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    Title,
    Intro,
    Weight,
    Reps,
    SelectFormula,
    FormulaInfo,
    Calculate,
    Estimated1Rm,
    ErrorWeight,
    ErrorReps,
    ToggleLanguage,
    BestFor,
}

impl TextKey {
    /// Returns all keys.
    pub fn all() -> &'static [TextKey] {
        &[
            TextKey::Title,
            TextKey::Intro,
            TextKey::Weight,
            TextKey::Reps,
            TextKey::SelectFormula,
            TextKey::FormulaInfo,
            TextKey::Calculate,
            TextKey::Estimated1Rm,
            TextKey::ErrorWeight,
            TextKey::ErrorReps,
            TextKey::ToggleLanguage,
            TextKey::BestFor,
        ]
    }
}

/// Returns the text for `key` in `lang`.
pub fn translate(lang: Language, key: TextKey) -> &'static str {
    match lang {
        Language::En => en(key),
        Language::Ko => ko(key),
    }
}

/// Splits the intro text into trimmed, non-empty paragraphs.
pub fn intro_paragraphs(lang: Language) -> Vec<&'static str> {
    translate(lang, TextKey::Intro)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

fn en(key: TextKey) -> &'static str {
    match key {
        TextKey::Title => "1RM Calculator",
        TextKey::Intro => {
            "One-repetition maximum (one-rep max or 1RM) in weight training is the maximum amount of weight that a person can lift for one repetition.
            Weight training protocols often use 1RM when programming to ensure the exerciser reaches resistance overload, particularly when the exercise objective is muscular strength, endurance, or hypertrophy.
            While 1RM can be measured directly using trial and error testing, where the participant lifts progressively heavier free weights, it can also be estimated indirectly using repetition testing on submaximal loads.
            Compared to a formal 1RM test, the submaximal estimation method is safer and quicker. It is recommended to use a value of less than 10 reps for more accurate estimations.
            Choose one of the formulas below and calculate your estimated 1RM!"
        }
        TextKey::Weight => "Weight Lifted (kg or lbs):",
        TextKey::Reps => "Number of Reps:",
        TextKey::SelectFormula => "Select Formula:",
        TextKey::FormulaInfo => "Formula Information:",
        TextKey::Calculate => "Calculate 1RM",
        TextKey::Estimated1Rm => "Estimated 1RM",
        TextKey::ErrorWeight => "Please enter a valid weight greater than 0.",
        TextKey::ErrorReps => "Please enter a valid number of reps (1-30).",
        TextKey::ToggleLanguage => "Toggle Language",
        TextKey::BestFor => "Best For",
    }
}

fn ko(key: TextKey) -> &'static str {
    match key {
        TextKey::Title => "1RM 계산기",
        TextKey::Intro => {
            "웨이트 트레이닝에서 1RM은 한 번의 '반복'에서 들어 올릴 수 있는 최대 무게를 의미하며, 운동 프로그램을 계획하는데 자주 사용됩니다.
            1RM은 점차적으로 더 무거운 중량을 들어 올려 실패 지점에 도달하는 직접적인 방법으로도 측정할 수 있지만, 각종 공식을 통하여 최대 하중을 간접적으로 추정할 수도 있습니다.
            직접적인 1RM 측정에 비해 이와 같은 방법은 더 안전하고 편리하여 많이 사용됩니다. 보다 정확한 추정을 위해서는 10회 미만의 반복 값을 사용하는 것을 권장합니다.
            아래의 공식 중 하나를 선택하여 예상 1RM을 계산하십시오!"
        }
        TextKey::Weight => "들어올린 무게 (kg 또는 lbs):",
        TextKey::Reps => "반복 횟수:",
        TextKey::SelectFormula => "공식 선택:",
        TextKey::FormulaInfo => "공식 정보:",
        TextKey::Calculate => "1RM 계산",
        TextKey::Estimated1Rm => "예상 1RM",
        TextKey::ErrorWeight => "0보다 큰 유효한 무게를 입력하십시오.",
        TextKey::ErrorReps => "1-30 사이의 유효한 반복 횟수를 입력하십시오.",
        TextKey::ToggleLanguage => "언어 전환",
        TextKey::BestFor => "적합한 용도",
    }
}
