pub mod food;
pub mod goal;
pub mod plan;
pub mod request;
pub mod style;

pub use food::FoodProfile;
pub use goal::Goal;
pub use plan::{FoodPortion, MacroAmounts, MacroGrams, MacroSplit, MealAssignment, MealRole, Plan};
pub use request::{PlanRequest, RequestDefaults};
pub use style::MacroStyle;
