use crate::error::{MacroError, Result};
use crate::models::Goal;
use crate::planner::constants::{LB_PER_KG, MAX_WEIGHT_KG};

/// Daily calorie target for a bodyweight in kilograms and a typed goal.
///
/// Calories = bodyweight in pounds x the goal's multiplier, rounded to the
/// nearest whole calorie. Weights above `MAX_WEIGHT_KG` (or non-finite) are
/// rejected.
pub fn daily_calories(weight_kg: f64, goal: Goal) -> Result<u32> {
    if !weight_kg.is_finite() || weight_kg > MAX_WEIGHT_KG {
        return Err(MacroError::InvalidWeight(weight_kg.to_string()));
    }
    let weight_lbs = weight_kg * LB_PER_KG;
    Ok((weight_lbs * goal.multiplier()).round() as u32)
}

/// Daily calorie target from a free-text goal keyword.
///
/// The keyword is matched case-insensitively after trimming. Weight is
/// expected to have been validated as positive by the caller.
pub fn compute_daily_calories(weight_kg: f64, goal: &str) -> Result<u32> {
    let goal: Goal = goal.parse()?;
    daily_calories(weight_kg, goal)
}
