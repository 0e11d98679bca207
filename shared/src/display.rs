//! Text and midpoint helpers for presenting a plan

use crate::plan::PlanResult;
use crate::range::MacroRange;
use serde::{Deserialize, Serialize};

/// Human-readable lines for a plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDisplay {
    pub protein: String,
    pub fat: String,
    pub carbs: String,
    pub calories: String,
    pub ideal_weight: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<String>,
}

/// Rounded midpoint of every range in a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanMidpoints {
    pub protein_g: i64,
    pub fat_g: i64,
    pub carb_g: i64,
    pub calories: i64,
    pub ideal_weight_kg: i64,
}

fn span(range: &MacroRange, unit: &str) -> String {
    if range.min() == range.max() {
        format!("{} {}", range.min(), unit)
    } else {
        format!("{}–{} {}", range.min(), range.max(), unit)
    }
}

pub fn format_plan_display(plan: &PlanResult) -> PlanDisplay {
    let macros = &plan.macros;
    let calories = MacroRange::new(macros.calories.final_min, macros.calories.final_max)
        .map(|r| span(&r, "kcal/day"))
        .unwrap_or_default();

    let delta = macros
        .delta_badges
        .as_ref()
        .map(|badges| format!("Calorie adjustment: {} to {} kcal/day", badges.min.text, badges.max.text));

    PlanDisplay {
        protein: span(&macros.protein_g, "g/day"),
        fat: span(&macros.fat_g, "g/day"),
        carbs: span(&macros.carb_g, "g/day"),
        calories: match &delta {
            Some(_) => format!("{} (maintenance {})", calories, macros.calories.maintain),
            None => calories,
        },
        ideal_weight: span(&plan.ideal_weight_kg, "kg"),
        delta,
    }
}

pub fn plan_midpoints(plan: &PlanResult) -> PlanMidpoints {
    let macros = &plan.macros;
    let calories = ((macros.calories.final_min + macros.calories.final_max) as f64 / 2.0).round() as i64;
    PlanMidpoints {
        protein_g: macros.protein_g.midpoint(),
        fat_g: macros.fat_g.midpoint(),
        carb_g: macros.carb_g.midpoint(),
        calories,
        ideal_weight_kg: plan.ideal_weight_kg.midpoint(),
    }
}
