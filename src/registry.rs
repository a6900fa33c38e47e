//! The fixed, ordered table of formula definitions.
//!
//! Order is display order and doubles as the selection index.

use serde::Serialize;

use crate::formulas::FormulaKind;
use crate::i18n::Language;

/// Descriptive data for one formula. Evaluation is delegated to `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormulaDefinition {
    pub kind: FormulaKind,
    pub name: &'static str,
    pub expression: &'static str,
    pub details_en: &'static str,
    pub details_ko: &'static str,
    pub best_for_en: &'static str,
    pub best_for_ko: &'static str,
}

impl FormulaDefinition {
    /// Description text in `lang`.
    pub fn details(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.details_en,
            Language::Ko => self.details_ko,
        }
    }

    /// Applicability note in `lang`.
    pub fn best_for(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.best_for_en,
            Language::Ko => self.best_for_ko,
        }
    }

    /// Name without the trailing " Formula".
    pub fn short_name(&self) -> &'static str {
        self.name.strip_suffix(" Formula").unwrap_or(self.name)
    }

    pub fn evaluate(&self, weight: f64, reps: u32) -> f64 {
        self.kind.evaluate(weight, reps)
    }
}

static FORMULAS: [FormulaDefinition; 7] = [
    FormulaDefinition {
        kind: FormulaKind::Epley,
        name: "Epley Formula",
        expression: "1RM = Weight × (1 + Reps / 30)",
        details_en: "The Epley formula is one of the most commonly used methods for calculating 1RM. It is simple and effective for a wide range of rep ranges, especially for lower reps. It works best for those performing fewer than 10 reps. [Source: Functional Strength Lab]",
        details_ko: "에플리 공식은 1RM 계산에 가장 일반적으로 사용되는 방법 중 하나입니다. 간단하고, 특히 적은 반복 수에 대해 효과적입니다. 10회 미만의 반복 수행에 가장 적합합니다. [출처: Functional Strength Lab]",
        best_for_en: "General strength training, particularly when performing fewer reps per set.",
        best_for_ko: "적은 반복 횟수에 적합하며, 일반적인 훈련에 사용하기 적합합니다.",
    },
    FormulaDefinition {
        kind: FormulaKind::Brzycki,
        name: "Brzycki Formula",
        expression: "1RM = Weight × (36 / (37 - Reps))",
        details_en: "The Brzycki formula provides a slightly more conservative estimate of 1RM. It is commonly used by beginners and intermediate lifters who are lifting in the 6-10 rep range.",
        details_ko: "브지키 공식은 약간 더 보수적인 1RM 추정치를 제공합니다. 6-10회 반복 범위에서 리프팅하는 초보자와 중급자들에게 일반적으로 사용됩니다.",
        best_for_en: "Beginners and intermediate lifters; useful for a moderate range of reps.",
        best_for_ko: "초보자와 중급 리프터에게 적합하며, 중간 정도의 반복 범위에 유용합니다.",
    },
    FormulaDefinition {
        kind: FormulaKind::Lander,
        name: "Lander Formula",
        expression: "1RM = (100 × Weight) / (101.3 - 2.67123 × Reps)",
        details_en: "The Lander formula adjusts the weight lifted based on a non-linear relationship between reps and 1RM. This makes it more accurate for those who work within a higher rep range.",
        details_ko: "랜더 공식은 반복 횟수와 1RM 사이의 비선형 관계에 기반하여 들어올린 무게를 조정합니다. 이는 더 높은 반복 범위에서 운동하는 사람들에게 더 정확합니다.",
        best_for_en: "Experienced lifters working within higher rep ranges.",
        best_for_ko: "고급 리프터들이 더 높은 반복 범위 내에서 작업할 때 적합합니다.",
    },
    FormulaDefinition {
        kind: FormulaKind::Lombardi,
        name: "Lombardi Formula",
        expression: "1RM = Weight × Reps^0.10",
        details_en: "The Lombardi formula uses a power law relationship between reps and 1RM, providing lower estimates for endurance athletes. It's particularly useful for those performing higher reps.",
        details_ko: "롬바르디 공식은 반복 횟수와 1RM 사이에 지수 관계를 사용하여 내구성 운동선수에게 더 낮은 추정치를 제공합니다. 특히 높은 반복 수를 수행하는 사람들에게 유용합니다.",
        best_for_en: "Endurance athletes or those performing higher rep ranges.",
        best_for_ko: "내구성 운동선수 또는 더 높은 반복 범위를 수행하는 사람들에게 적합합니다.",
    },
    FormulaDefinition {
        kind: FormulaKind::Mayhew,
        name: "Mayhew et al. Formula",
        expression: "1RM = (100 × Weight) / (52.2 + 41.9 × e^(-0.055 × Reps))",
        details_en: "The Mayhew formula includes an exponential component, making it more accurate across a broader spectrum of rep ranges, particularly for advanced lifters.",
        details_ko: "메이휴 공식은 지수 성분을 포함하여, 특히 고급 리프터에게 더 넓은 반복 범위에서 더 정확합니다.",
        best_for_en: "Advanced lifters working across a broad spectrum of rep ranges.",
        best_for_ko: "광범위한 반복 범위에서 작업하는 고급 리프터에게 적합합니다.",
    },
    FormulaDefinition {
        kind: FormulaKind::OConner,
        name: "O'Conner Formula",
        expression: "1RM = Weight × (1 + 0.025 × Reps)",
        details_en: "The O'Conner formula is conservative, often used by athletes to ensure safety while estimating 1RM. It is similar to the Epley formula but with a smaller coefficient for reps.",
        details_ko: "오코너 공식은 보수적이며, 1RM 추정 시 안전을 보장하기 위해 운동선수들에 의해 자주 사용됩니다. 에플리 공식과 유사하지만 반복 횟수에 대한 계수가 더 작습니다.",
        best_for_en: "Athletes seeking a conservative estimate, especially in sports settings.",
        best_for_ko: "보수적인 추정을 원하는 운동선수들에게 적합합니다, 특히 스포츠 환경에서 활용됩니다.",
    },
    FormulaDefinition {
        kind: FormulaKind::Wathan,
        name: "Wathan Formula",
        expression: "1RM = (100 × Weight) / (48.8 + 53.8 × e^(-0.075 × Reps))",
        details_en: "The Wathan formula is accurate for those performing moderate reps (6-10), as it incorporates an exponential factor to provide a balanced 1RM estimate.",
        details_ko: "와탄 공식은 지수 요소를 포함하여 중간 정도의 반복(6-10회)을 수행하는 사람들에게 정확한 1RM 추정치를 제공합니다.",
        best_for_en: "Intermediate to advanced lifters who perform moderate reps.",
        best_for_ko: "중급에서 고급 리프터들에게 적합하며, 중간 정도의 반복 횟수에서 정확합니다.",
    },
];

/// Returns every definition in display order.
pub fn all() -> &'static [FormulaDefinition] {
    &FORMULAS
}

/// Number of registered formulas.
pub fn len() -> usize {
    FORMULAS.len()
}

/// Returns the definition at `index`, if any.
pub fn get(index: usize) -> Option<&'static FormulaDefinition> {
    FORMULAS.get(index)
}

/// Finds a formula's index by display name or short name, ignoring case.
pub fn find(name: &str) -> Option<usize> {
    let wanted = name.trim();
    FORMULAS.iter().position(|def| {
        def.name.eq_ignore_ascii_case(wanted) || def.short_name().eq_ignore_ascii_case(wanted)
    })
}
