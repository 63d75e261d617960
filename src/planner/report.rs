use serde::Serialize;

use crate::error::Result;
use crate::models::{Goal, MealAssignment, Plan, PlanRequest};
use crate::planner::macros::build_plan;
use crate::planner::meals::compose_daily_meals;

/// Everything computed for one request: the daily plan and its meals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanReport {
    pub weight_kg: f64,
    pub goal: Goal,
    pub meal_count: usize,
    pub plan: Plan,
    pub meals: Vec<MealAssignment>,
}

/// Run the full pipeline for a parsed request.
pub fn generate_plan(request: &PlanRequest) -> Result<PlanReport> {
    let goal: Goal = request.goal.parse()?;
    let plan = build_plan(request.weight_kg, goal.as_str(), &request.style)?;
    let meals = compose_daily_meals(&plan.grams, request.meal_count);

    Ok(PlanReport {
        weight_kg: request.weight_kg,
        goal,
        meal_count: meals.len(),
        plan,
        meals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MacroError;
    use crate::models::MacroStyle;

    fn request(goal: &str, style: &str, meal_count: usize) -> PlanRequest {
        PlanRequest {
            weight_kg: 80.0,
            goal: goal.to_string(),
            style: style.to_string(),
            meal_count,
        }
    }

    #[test]
    fn test_generate_plan() {
        let report = generate_plan(&request("bulk", "hf", 5)).unwrap();
        assert_eq!(report.goal, Goal::Bulk);
        assert_eq!(report.plan.calories, 2646);
        assert_eq!(report.plan.style, MacroStyle::HighFat);
        assert_eq!(report.meals.len(), 5);
        assert_eq!(report.meals[4].label, "Dinner");
    }

    #[test]
    fn test_generate_plan_invalid_style() {
        let err = generate_plan(&request("bulk", "paleo", 3)).unwrap_err();
        assert!(matches!(err, MacroError::InvalidStyle(_)));
    }
}
