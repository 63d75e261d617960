use crate::error::MacroError;
use crate::interface::suggest::{suggest_goal, suggest_style};
use crate::models::{Goal, MacroStyle, RequestDefaults};
use crate::planner::constants::{MAX_MEALS, MAX_WEIGHT_KG, MIN_MEALS};
use crate::planner::{FOODS, PlanReport};

/// Usage text sent for `/start` and `/help`.
pub fn help_text(defaults: &RequestDefaults) -> String {
    let goals: Vec<&str> = Goal::ALL.iter().map(|g| g.as_str()).collect();

    let mut lines = vec![
        "Mentzer Calorie & Macro Bot".to_string(),
        String::new(),
        "Send: <weight_kg> <goal> [macro_style] [meals]".to_string(),
        String::new(),
        "Goals:".to_string(),
        format!("  {}", goals.join(" / ")),
        String::new(),
        "Macro styles:".to_string(),
    ];
    for style in MacroStyle::ALL {
        let marker = if style == defaults.style { " [default]" } else { "" };
        lines.push(format!("  {}  - {}{}", style.key(), style.label(), marker));
    }
    lines.extend([
        String::new(),
        "Meals:".to_string(),
        format!(
            "  {} to {} (default {})",
            MIN_MEALS, MAX_MEALS, defaults.meal_count
        ),
        String::new(),
        "Examples:".to_string(),
        "  75 cut\n  75 cut hp\n  80 bulk hf 5\n  70 maintain 4".to_string(),
        String::new(),
        "I'll give you calories, macros, and raw-gram suggestions for each meal.".to_string(),
    ]);

    lines.join("\n")
}

/// Render a computed plan as the chat reply.
pub fn format_plan_reply(report: &PlanReport) -> String {
    let plan = &report.plan;
    let (carb_pct, protein_pct, fat_pct) = plan.split.percentages();

    let mut lines = vec![
        format!(
            "Mentzer-style plan for {:.1} kg ({}):",
            report.weight_kg, report.goal
        ),
        String::new(),
        format!("Calories: {} kcal/day", plan.calories),
        format!("Macro style: {}", plan.style.label()),
        format!("Meals per day: {}", report.meal_count),
        String::new(),
        "Daily macros:".to_string(),
        format!("  - Carbs: {} g (~{}%)", plan.grams.carbs_g, carb_pct),
        format!("  - Protein: {} g (~{}%)", plan.grams.protein_g, protein_pct),
        format!("  - Fats: {} g (~{}%)", plan.grams.fats_g, fat_pct),
        String::new(),
        "Suggested meals (raw weights):".to_string(),
    ];

    for meal in &report.meals {
        lines.push(String::new());
        lines.push(format!("{}:", meal.label));
        for portion in &meal.portions {
            lines.push(format!("  - {}: {} g", portion.food.label, portion.grams));
        }
    }

    lines.join("\n")
}

/// Corrective reply for a request that could not be planned.
pub fn format_error_reply(err: &MacroError) -> String {
    match err {
        MacroError::WrongTokenCount(_) => {
            "Format:\n<weight_kg> <goal> [macro_style] [meals]\nExample: 75 cut hp 4".to_string()
        }
        MacroError::InvalidWeight(_) => {
            format!(
                "Weight must be a positive number up to {} kg, e.g. `75 cut` or `75 cut hp 4`.",
                MAX_WEIGHT_KG
            )
        }
        MacroError::InvalidMealCount(_) => {
            format!(
                "Check your input for meals (must be an integer {}-{}).",
                MIN_MEALS, MAX_MEALS
            )
        }
        MacroError::MealCountOutOfRange(_) => {
            format!("Meals must be between {} and {}.", MIN_MEALS, MAX_MEALS)
        }
        MacroError::InvalidGoal(word) => with_hint(check_input_text(), suggest_goal(word)),
        MacroError::InvalidStyle(word) => with_hint(check_input_text(), suggest_style(word)),
        _ => "Sorry, something went wrong while building your plan. Please try again.".to_string(),
    }
}

fn check_input_text() -> String {
    "Check your input:\n\
     - Goal: cut / maintain / bulk\n\
     - Macro style: hc / hp / hf (or highcarb / highprotein / highfat)"
        .to_string()
}

fn with_hint(mut text: String, suggestion: Option<&str>) -> String {
    if let Some(word) = suggestion {
        text.push_str(&format!("\n\nDid you mean '{}'?", word));
    }
    text
}

/// Table of every food with its per-100 g macros.
pub fn format_food_table() -> String {
    let width = FOODS.iter().map(|f| f.label.len()).max().unwrap_or(10);

    let mut lines = vec![
        format!("=== Foods (per 100 g raw, {} items) ===", FOODS.len()),
        format!(
            "{:<width$}  {:>7} {:>7} {:>7} {:>7}",
            "Food",
            "P",
            "C",
            "F",
            "kcal",
            width = width
        ),
    ];
    for food in FOODS {
        lines.push(format!(
            "{:<width$}  {:>7.1} {:>7.1} {:>7.1} {:>7.0}",
            food.label,
            food.protein,
            food.carbs,
            food.fat,
            food.kcal_per_100g(),
            width = width
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlanRequest;
    use crate::planner::generate_plan;

    fn report(text_goal: &str, style: &str, meals: usize) -> PlanReport {
        generate_plan(&PlanRequest {
            weight_kg: 75.0,
            goal: text_goal.to_string(),
            style: style.to_string(),
            meal_count: meals,
        })
        .unwrap()
    }

    #[test]
    fn test_plan_reply_contents() {
        let reply = format_plan_reply(&report("cut", "hc", 3));

        assert!(reply.starts_with("Mentzer-style plan for 75.0 kg (cut):"));
        assert!(reply.contains("Calories: 1653 kcal/day"));
        assert!(reply.contains("Macro style: High carb (60C / 25P / 15F)"));
        assert!(reply.contains("Meals per day: 3"));
        assert!(reply.contains("  - Carbs: 248 g (~60%)"));
        assert!(reply.contains("  - Protein: 103 g (~25%)"));
        assert!(reply.contains("  - Fats: 28 g (~15%)"));
        assert!(reply.contains("Breakfast:\n  - Egg whites (raw): 312 g\n  - Oats (raw): 119 g"));
        assert!(reply.contains("Lunch:\n  - Chicken breast (raw): 111 g"));
    }

    #[test]
    fn test_meals_listed_in_template_order() {
        let reply = format_plan_reply(&report("maintain", "hp", 6));
        let labels = ["Breakfast:", "Snack 1:", "Lunch:", "Snack 2:", "Dinner:", "Supper:"];
        let positions: Vec<usize> = labels.iter().map(|l| reply.find(l).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_help_marks_default_style() {
        let defaults = RequestDefaults::new(MacroStyle::HighFat, 4).unwrap();
        let help = help_text(&defaults);
        assert!(help.contains("hf  - High fat (30C / 25P / 45F) [default]"));
        assert!(!help.contains("High carb (60C / 25P / 15F) [default]"));
        assert!(help.contains("1 to 6 (default 4)"));
    }

    #[test]
    fn test_error_replies() {
        assert!(format_error_reply(&MacroError::WrongTokenCount(1)).starts_with("Format:"));
        assert_eq!(
            format_error_reply(&MacroError::MealCountOutOfRange(7)),
            "Meals must be between 1 and 6."
        );
        let reply = format_error_reply(&MacroError::InvalidGoal("bulkk".to_string()));
        assert!(reply.starts_with("Check your input:"));
        assert!(reply.ends_with("Did you mean 'bulk'?"));
    }

    #[test]
    fn test_error_reply_without_hint() {
        let reply = format_error_reply(&MacroError::InvalidStyle("zzzzzz".to_string()));
        assert!(!reply.contains("Did you mean"));
    }

    #[test]
    fn test_internal_error_reply() {
        let reply = format_error_reply(&MacroError::InvalidRatio(1.2));
        assert!(reply.starts_with("Sorry"));
    }

    #[test]
    fn test_food_table_lists_every_food() {
        let table = format_food_table();
        for food in FOODS {
            assert!(table.contains(food.label), "missing {}", food.label);
        }
        assert!(table.contains("Olive oil"));
    }
}
