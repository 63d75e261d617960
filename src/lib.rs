pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;

pub use error::{MacroError, Result};
pub use models::{MacroGrams, MealAssignment, Plan};
pub use planner::{compose_daily_meals, compute_daily_calories, compute_macro_grams, resolve_macro_style};
