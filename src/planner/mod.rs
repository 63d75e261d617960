pub mod calories;
pub mod constants;
pub mod macros;
pub mod meals;
pub mod report;
pub mod tables;

pub use calories::{compute_daily_calories, daily_calories};
pub use constants::*;
pub use macros::{build_plan, compute_macro_grams, resolve_macro_style};
pub use meals::{MealComposition, compose_daily_meals, compose_meal, grams_needed_for_macro};
pub use report::{PlanReport, generate_plan};
pub use tables::{FOODS, MEAL_TEMPLATES, MealTemplate, template_for};
