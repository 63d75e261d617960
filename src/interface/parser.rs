use crate::error::{MacroError, Result};
use crate::models::{PlanRequest, RequestDefaults};
use crate::planner::constants::{MAX_MEALS, MAX_WEIGHT_KG, MIN_MEALS};

/// Parse `<weight_kg> <goal> [macro_style] [meals]`.
///
/// A lone third token is a meal count when it is all digits and a style
/// otherwise. With four tokens the third is the style and the fourth must be
/// a meal count.
pub fn parse_request(text: &str, defaults: &RequestDefaults) -> Result<PlanRequest> {
    let msg = text.trim().to_lowercase();
    let parts: Vec<&str> = msg.split_whitespace().collect();

    if !(2..=4).contains(&parts.len()) {
        return Err(MacroError::WrongTokenCount(parts.len()));
    }

    let weight_kg = parse_weight(parts[0])?;
    let goal = parts[1].to_string();
    let mut style = defaults.style.key().to_string();
    let mut meal_count = defaults.meal_count as u64;

    match &parts[2..] {
        [] => {}
        [token] => {
            if is_digits(token) {
                meal_count = parse_meal_count(token);
            } else {
                style = token.to_string();
            }
        }
        [style_token, meals_token] => {
            style = style_token.to_string();
            if !is_digits(meals_token) {
                return Err(MacroError::InvalidMealCount(meals_token.to_string()));
            }
            meal_count = parse_meal_count(meals_token);
        }
        _ => return Err(MacroError::WrongTokenCount(parts.len())),
    }

    if !(MIN_MEALS as u64..=MAX_MEALS as u64).contains(&meal_count) {
        return Err(MacroError::MealCountOutOfRange(meal_count));
    }

    Ok(PlanRequest {
        weight_kg,
        goal,
        style,
        meal_count: meal_count as usize,
    })
}

fn parse_weight(token: &str) -> Result<f64> {
    match token.parse::<f64>() {
        Ok(w) if w.is_finite() && w > 0.0 && w <= MAX_WEIGHT_KG => Ok(w),
        _ => Err(MacroError::InvalidWeight(token.to_string())),
    }
}

fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

// Digit strings too long for u64 are simply out of range.
fn parse_meal_count(token: &str) -> u64 {
    token.parse().unwrap_or(u64::MAX)
}
