//! Player Nutrition Shared Library
//!
//! The calculation engine behind the nutrition planner: input validation,
//! energy expenditure, position-based ideal weight, macro allocation and plan
//! assembly. Everything here is pure and synchronous; the backend and WASM
//! crates wrap it for their transports.

pub mod display;
pub mod energy;
pub mod errors;
pub mod ideal_weight;
pub mod macros;
pub mod plan;
pub mod range;
pub mod tables;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use display::{format_plan_display, plan_midpoints, PlanDisplay, PlanMidpoints};
pub use energy::{compute_energy, ActivityLevel, BiologicalSex, EnergyResult};
pub use errors::*;
pub use ideal_weight::{compute_ideal_weight, IdealWeightResult, Position, WeightComparison};
pub use macros::{
    allocate, compute_macros, MacroPlan, GENERAL_TOLERANCE_KCAL, PLAN_TOLERANCE_KCAL,
};
pub use plan::{compute_plan, plan_for_profile, PlanResult, Profile};
pub use range::MacroRange;
pub use tables::{AgeGroup, Goal};
pub use types::*;
pub use validation::{get_field_display_label, user_message};
