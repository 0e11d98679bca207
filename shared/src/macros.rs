//! Macro allocation engine
//!
//! Turns an age, body weight, calorie anchor and goal into protein, fat and
//! carbohydrate ranges that stay consistent with the calorie targets across
//! the whole range, not only at a single point.
//!
//! # Algorithm
//!
//! 1. Classify the age group (below 9 fails).
//! 2. Protein bounds = ratio(group, goal) × weight.
//! 3. Calorie targets = anchor + delta(group, goal).
//! 4. At each calorie target, fat = 25 % and 35 % of that target ÷ 9.
//! 5. At each calorie target, carbohydrate = energy left after every
//!    protein/fat pairing ÷ 4. Any negative candidate fails the allocation.
//! 6. Two reconciliation sums recombine specific pairings into kilocalories.
//! 7. Ranges are rounded once, at the very end.
//!
//! Nothing is rounded before step 7; doing so would break reconciliation.

use crate::errors::{CalcResult, CalculationError};
use crate::range::MacroRange;
use crate::tables::{
    calorie_delta, protein_ratio, AgeGroup, Goal, FAT_SHARE_MAX, FAT_SHARE_MIN,
    KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
};
use crate::validation::validate_macro_inputs;
use serde::Serialize;

/// Reconciliation tolerance for the macro-only calculator (kcal)
pub const GENERAL_TOLERANCE_KCAL: i64 = 4;

/// Reconciliation tolerance for anchor-supplied plan computations (kcal)
pub const PLAN_TOLERANCE_KCAL: i64 = 1;

// ============================================================================
// Result Types
// ============================================================================

/// Calorie anchor and the goal-adjusted targets derived from it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalorieTargets {
    pub maintain: i64,
    pub final_min: i64,
    pub final_max: i64,
    pub delta_min: i64,
    pub delta_max: i64,
}

/// Energy reconciliation of two specific macro combinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnergyChecks {
    /// protein max + fat max + carb min, at the lower calorie target
    pub kcal_from_min_combo: i64,
    /// protein min + fat min + carb max, at the upper calorie target
    pub kcal_from_max_combo: i64,
    pub calories_target_min: i64,
    pub calories_target_max: i64,
}

impl EnergyChecks {
    pub fn min_gap(&self) -> i64 {
        (self.kcal_from_min_combo - self.calories_target_min).abs()
    }

    pub fn max_gap(&self) -> i64 {
        (self.kcal_from_max_combo - self.calories_target_max).abs()
    }

    pub fn is_balanced(&self, tolerance_kcal: i64) -> bool {
        self.min_gap() <= tolerance_kcal && self.max_gap() <= tolerance_kcal
    }
}

/// Direction of a calorie adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Surplus,
    Deficit,
}

/// Signed delta label such as `+300` or `-500`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeltaBadge {
    pub text: String,
    pub tone: Tone,
}

/// Badges for both delta bounds; absent when the goal is `maintain`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeltaBadges {
    pub min: DeltaBadge,
    pub max: DeltaBadge,
}

/// Carbohydrates expressed against the maintenance plan
///
/// The displayed carbohydrate figure stays anchored on the maintenance split;
/// the goal's calorie delta is shown as grams of carbohydrate on top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarbAdjustment {
    /// Carbohydrate range of the maintenance split at the anchor;
    /// `None` when the anchor cannot cover maintenance protein and fat
    pub maintenance_g: Option<MacroRange>,
    /// Midpoint of the unrounded maintenance bounds, rounded once
    pub maintenance_value_g: Option<i64>,
    /// Calorie delta as carbohydrate grams, `round(delta / 4)`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_g: Option<MacroRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Macro allocation result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroPlan {
    pub age_group: AgeGroup,
    pub goal: Goal,
    pub calories: CalorieTargets,
    pub protein_g: MacroRange,
    pub fat_g: MacroRange,
    pub carb_g: MacroRange,
    pub carb_adjustment: CarbAdjustment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_badges: Option<DeltaBadges>,
    pub checks: EnergyChecks,
    pub notes: String,
}

// ============================================================================
// Allocation
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct ProteinBounds {
    min: f64,
    max: f64,
}

impl ProteinBounds {
    fn for_goal(group: AgeGroup, goal: Goal, weight_kg: f64) -> Self {
        let ratio = protein_ratio(group, goal);
        Self {
            min: ratio.min * weight_kg,
            max: ratio.max * weight_kg,
        }
    }
}

/// Unrounded fat and carbohydrate bounds at one calorie target
#[derive(Debug, Clone, Copy)]
struct AnchorSplit {
    kcal: f64,
    fat_min: f64,
    fat_max: f64,
    /// Remainder after protein max and fat max
    carb_min: f64,
    /// Remainder after protein min and fat min
    carb_max: f64,
}

fn carb_remainder(kcal: f64, protein_g: f64, fat_g: f64) -> f64 {
    (kcal - protein_g * KCAL_PER_G_PROTEIN - fat_g * KCAL_PER_G_FAT) / KCAL_PER_G_CARBS
}

impl AnchorSplit {
    fn at(kcal: f64, protein: ProteinBounds) -> CalcResult<Self> {
        let fat_min = FAT_SHARE_MIN * kcal / KCAL_PER_G_FAT;
        let fat_max = FAT_SHARE_MAX * kcal / KCAL_PER_G_FAT;

        let pairings = [
            carb_remainder(kcal, protein.min, fat_min),
            carb_remainder(kcal, protein.min, fat_max),
            carb_remainder(kcal, protein.max, fat_min),
            carb_remainder(kcal, protein.max, fat_max),
        ];
        if pairings.iter().any(|carbs| *carbs < 0.0) {
            return Err(CalculationError::InsufficientCalories);
        }

        Ok(Self {
            kcal,
            fat_min,
            fat_max,
            carb_min: pairings[3],
            carb_max: pairings[0],
        })
    }
}

fn kcal_of(protein_g: f64, fat_g: f64, carb_g: f64) -> f64 {
    protein_g * KCAL_PER_G_PROTEIN + fat_g * KCAL_PER_G_FAT + carb_g * KCAL_PER_G_CARBS
}

fn delta_badges(goal: Goal, targets: &CalorieTargets) -> Option<DeltaBadges> {
    let tone = match goal {
        Goal::Maintain => return None,
        Goal::Cut => Tone::Deficit,
        Goal::Bulk => Tone::Surplus,
    };
    let badge = |delta: i64| DeltaBadge {
        text: format!("{:+}", delta),
        tone,
    };
    Some(DeltaBadges {
        min: badge(targets.delta_min),
        max: badge(targets.delta_max),
    })
}

fn carb_adjustment(
    group: AgeGroup,
    goal: Goal,
    weight_kg: f64,
    targets: &CalorieTargets,
) -> CarbAdjustment {
    let anchor = targets.maintain as f64;
    let protein = ProteinBounds::for_goal(group, Goal::Maintain, weight_kg);
    let split = AnchorSplit::at(anchor, protein).ok();
    let maintenance_g = split
        .as_ref()
        .map(|s| MacroRange::from_raw(s.carb_min, s.carb_max));
    let maintenance_value_g = split
        .as_ref()
        .map(|s| ((s.carb_min + s.carb_max) / 2.0).round() as i64);

    let (delta_g, tone, note) = match goal {
        Goal::Maintain => (None, None, None),
        Goal::Cut | Goal::Bulk => {
            let grams = MacroRange::from_raw(
                targets.delta_min as f64 / KCAL_PER_G_CARBS,
                targets.delta_max as f64 / KCAL_PER_G_CARBS,
            );
            let (tone, note) = if goal == Goal::Bulk {
                (
                    Tone::Surplus,
                    format!("Add carbohydrates: {}–{} g/day", grams.min(), grams.max()),
                )
            } else {
                (
                    Tone::Deficit,
                    format!(
                        "Reduce carbohydrates: {}–{} g/day",
                        grams.max().abs(),
                        grams.min().abs()
                    ),
                )
            };
            (Some(grams), Some(tone), Some(note))
        }
    };

    CarbAdjustment {
        maintenance_value_g,
        maintenance_g,
        delta_g,
        tone,
        note,
    }
}

/// Allocate macros for an already-classified age group
///
/// Callers are responsible for the weight band and the calorie minimum.
pub(crate) fn allocate_for_group(
    group: AgeGroup,
    weight_kg: f64,
    anchor_kcal: u32,
    goal: Goal,
) -> CalcResult<MacroPlan> {
    let protein = ProteinBounds::for_goal(group, goal, weight_kg);

    let delta = calorie_delta(group, goal);
    let maintain = i64::from(anchor_kcal);
    let targets = CalorieTargets {
        maintain,
        final_min: maintain + delta.min,
        final_max: maintain + delta.max,
        delta_min: delta.min,
        delta_max: delta.max,
    };

    let low = AnchorSplit::at(targets.final_min as f64, protein)?;
    let high = AnchorSplit::at(targets.final_max as f64, protein)?;

    let fat_g = MacroRange::from_raw(low.fat_min.min(high.fat_min), low.fat_max.max(high.fat_max));
    let carb_g = MacroRange::from_raw(
        low.carb_min.min(high.carb_min),
        low.carb_max.max(high.carb_max),
    );

    let checks = EnergyChecks {
        kcal_from_min_combo: kcal_of(protein.max, low.fat_max, low.carb_min).round() as i64,
        kcal_from_max_combo: kcal_of(protein.min, high.fat_min, high.carb_max).round() as i64,
        calories_target_min: low.kcal.round() as i64,
        calories_target_max: high.kcal.round() as i64,
    };

    Ok(MacroPlan {
        age_group: group,
        goal,
        calories: targets,
        protein_g: MacroRange::from_raw(protein.min, protein.max),
        fat_g,
        carb_g,
        carb_adjustment: carb_adjustment(group, goal, weight_kg, &targets),
        delta_badges: delta_badges(goal, &targets),
        checks,
        notes: goal.note().to_string(),
    })
}

/// Allocate macros for a typed goal
///
/// Checks age, weight `[20, 250]` kg and the calorie minimum, in that order.
pub fn allocate(age_years: u32, weight_kg: f64, anchor_kcal: u32, goal: Goal) -> CalcResult<MacroPlan> {
    let group = validate_macro_inputs(age_years, weight_kg, anchor_kcal)?;
    allocate_for_group(group, weight_kg, anchor_kcal, goal)
}

/// Macro-only calculator: weight domain `[20, 250]` kg
pub fn compute_macros(
    age_years: u32,
    weight_kg: f64,
    anchor_kcal: u32,
    goal: &str,
) -> CalcResult<MacroPlan> {
    let group = validate_macro_inputs(age_years, weight_kg, anchor_kcal)?;
    let goal: Goal = goal.parse()?;
    allocate_for_group(group, weight_kg, anchor_kcal, goal)
}
