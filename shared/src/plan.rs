//! Plan assembly: validation, ideal weight and macro allocation combined

use crate::energy::{compute_energy, BiologicalSex, EnergyResult};
use crate::errors::CalcResult;
use crate::ideal_weight::{ideal_weight_range, Position, WeightComparison};
use crate::macros::{allocate_for_group, MacroPlan};
use crate::range::MacroRange;
use crate::tables::Goal;
use crate::validation::{validate_plan_body, validate_plan_inputs};
use serde::{Deserialize, Serialize};

/// Combined plan for a player
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanResult {
    pub position: Position,
    pub ideal_weight_kg: MacroRange,
    /// `height_cm − 100`
    pub ideal_weight_base: f64,
    pub weight_comparison: WeightComparison,
    #[serde(flatten)]
    pub macros: MacroPlan,
}

/// Combined plan path
///
/// Field order: age, height `[140, 210]`, weight `[30, 140]`, calories,
/// goal, position.
pub fn compute_plan(
    age_years: u32,
    weight_kg: f64,
    height_cm: f64,
    position: &str,
    goal: &str,
    anchor_kcal: u32,
) -> CalcResult<PlanResult> {
    let group = validate_plan_inputs(age_years, weight_kg, height_cm, anchor_kcal)?;
    let goal: Goal = goal.parse()?;
    let position = Position::from_alias(position)?;

    let (ideal_weight_kg, ideal_weight_base) = ideal_weight_range(height_cm, position)?;
    let macros = allocate_for_group(group, weight_kg, anchor_kcal, goal)?;

    Ok(PlanResult {
        position,
        ideal_weight_kg,
        ideal_weight_base,
        weight_comparison: WeightComparison::compare(weight_kg, &ideal_weight_kg),
        macros,
    })
}

// ============================================================================
// Profiles
// ============================================================================

/// Athlete profile as collected by a form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub age_years: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub sex: BiologicalSex,
    pub position: String,
    pub activity_level: String,
    #[serde(default)]
    pub goal: Goal,
}

/// Where the calorie anchor of a profile plan came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorSource {
    /// Maintenance calories supplied by the caller
    Supplied,
    /// Estimated TDEE
    Estimated,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfilePlan {
    pub anchor_source: AnchorSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<EnergyResult>,
    pub plan: PlanResult,
}

/// Plan a profile, anchoring on its TDEE unless maintenance calories are given
///
/// Plan body bands are checked before the energy estimate so the stricter
/// plan domain is the one reported.
pub fn plan_for_profile(profile: &Profile, maintenance_kcal: Option<u32>) -> CalcResult<ProfilePlan> {
    validate_plan_body(profile.age_years, profile.weight_kg, profile.height_cm)?;

    let (anchor, anchor_source, energy) = match maintenance_kcal {
        Some(kcal) => (kcal, AnchorSource::Supplied, None),
        None => {
            let energy = compute_energy(
                profile.sex,
                profile.weight_kg,
                profile.height_cm,
                profile.age_years,
                &profile.activity_level,
            )?;
            // A non-positive estimate falls through to the calorie minimum check
            let anchor = u32::try_from(energy.tdee).unwrap_or(0);
            (anchor, AnchorSource::Estimated, Some(energy))
        }
    };

    let plan = compute_plan(
        profile.age_years,
        profile.weight_kg,
        profile.height_cm,
        &profile.position,
        profile.goal.as_str(),
        anchor,
    )?;

    Ok(ProfilePlan {
        anchor_source,
        energy,
        plan,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalculationError;
    use crate::macros::PLAN_TOLERANCE_KCAL;
    use proptest::prelude::*;
    use rstest::rstest;

    fn profile(goal: Goal) -> Profile {
        Profile {
            age_years: 25,
            weight_kg: 70.0,
            height_cm: 175.0,
            sex: BiologicalSex::Male,
            position: "CB".to_string(),
            activity_level: "moderate".to_string(),
            goal,
        }
    }

    #[test]
    fn test_centre_back_maintain() {
        let plan = compute_plan(25, 70.0, 175.0, "CB", "maintain", 2500).unwrap();

        assert_eq!(plan.position, Position::CentreBack);
        assert_eq!(plan.ideal_weight_kg, MacroRange::new(70, 77).unwrap());
        assert_eq!(plan.ideal_weight_base, 75.0);
        assert_eq!(plan.weight_comparison, WeightComparison::WithinRange);
        assert_eq!(plan.macros.protein_g, MacroRange::new(98, 112).unwrap());
        assert_eq!(plan.macros.fat_g, MacroRange::new(69, 97).unwrap());
        assert_eq!(plan.macros.carb_g, MacroRange::new(294, 371).unwrap());
        assert!(plan.macros.checks.is_balanced(PLAN_TOLERANCE_KCAL));
    }

    #[rstest]
    #[case("cut", (1900, 2100))]
    #[case("bulk", (2500, 2700))]
    fn test_teen_midfielder(#[case] goal: &str, #[case] calories: (i64, i64)) {
        let plan = compute_plan(16, 55.0, 170.0, "DM", goal, 2300).unwrap();

        assert_eq!(plan.ideal_weight_kg, MacroRange::new(65, 70).unwrap());
        assert_eq!(plan.macros.protein_g, MacroRange::new(88, 110).unwrap());
        assert_eq!(
            (plan.macros.calories.final_min, plan.macros.calories.final_max),
            calories
        );
        assert!(plan.macros.checks.is_balanced(PLAN_TOLERANCE_KCAL));
    }

    #[test]
    fn test_plan_bands_are_stricter_than_macro_only() {
        let err = compute_plan(25, 25.0, 175.0, "CB", "maintain", 2500).unwrap_err();
        assert_eq!(err.to_string(), "weight must be between 30 and 140 kg");

        let err = compute_plan(25, 70.0, 215.0, "CB", "maintain", 2500).unwrap_err();
        assert_eq!(err.to_string(), "height must be between 140 and 210 cm");
    }

    #[test]
    fn test_plan_field_order() {
        // Bad calories, goal and position: calories reported first
        let err = compute_plan(25, 70.0, 175.0, "Libero", "recomp", 500).unwrap_err();
        assert_eq!(err.field(), "calories");

        let err = compute_plan(25, 70.0, 175.0, "Libero", "recomp", 2500).unwrap_err();
        assert_eq!(err.field(), "goal");

        let err = compute_plan(25, 70.0, 175.0, "Libero", "cut", 2500).unwrap_err();
        assert!(matches!(err, CalculationError::UnsupportedPosition { .. }));
    }

    #[test]
    fn test_weight_comparison_attached() {
        let plan = compute_plan(25, 65.0, 175.0, "CB", "maintain", 2500).unwrap();
        assert_eq!(
            plan.weight_comparison,
            WeightComparison::BelowRange { deficit_kg: 5.0 }
        );
    }

    #[test]
    fn test_profile_with_supplied_anchor() {
        let result = plan_for_profile(&profile(Goal::Maintain), Some(2500)).unwrap();
        assert_eq!(result.anchor_source, AnchorSource::Supplied);
        assert!(result.energy.is_none());
        assert_eq!(result.plan.macros.calories.maintain, 2500);
    }

    #[test]
    fn test_profile_anchors_on_tdee() {
        let result = plan_for_profile(&profile(Goal::Bulk), None).unwrap();
        let energy = result.energy.unwrap();

        // 66.47 + 962.5 + 875 − 117.5 = 1786.47; × 1.55 = 2768.3
        assert_eq!(energy.bmr, 1786);
        assert_eq!(energy.tdee, 2768);
        assert_eq!(result.anchor_source, AnchorSource::Estimated);
        assert_eq!(result.plan.macros.calories.maintain, 2768);
        assert_eq!(result.plan.macros.calories.final_min, 3068);
    }

    #[test]
    fn test_profile_reports_plan_band_before_energy() {
        let mut p = profile(Goal::Maintain);
        p.weight_kg = 25.0;
        let err = plan_for_profile(&p, None).unwrap_err();
        assert_eq!(err.to_string(), "weight must be between 30 and 140 kg");

        let mut p = profile(Goal::Maintain);
        p.activity_level = "extreme".to_string();
        let err = plan_for_profile(&p, None).unwrap_err();
        assert_eq!(err.field(), "activity_level");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: plan computations reconcile within the plan tolerance
        #[test]
        fn prop_plan_reconciles(
            age in 9u32..70,
            weight in 30.0f64..=140.0,
            height in 140.0f64..=210.0,
            anchor in 800u32..5000,
            goal in prop::sample::select(vec!["maintain", "cut", "bulk"]),
            position in prop::sample::select(vec!["GK", "CB", "FB", "CM", "ST", "Winger"])
        ) {
            match compute_plan(age, weight, height, position, goal, anchor) {
                Ok(plan) => {
                    prop_assert!(plan.macros.checks.is_balanced(PLAN_TOLERANCE_KCAL));
                    prop_assert!(plan.ideal_weight_kg.min() <= plan.ideal_weight_kg.max());
                    prop_assert!(plan.macros.carb_g.min() >= 0);
                }
                Err(err) => prop_assert_eq!(err, CalculationError::InsufficientCalories),
            }
        }
    }
}
