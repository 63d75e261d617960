use tracing::debug;

use crate::models::{FoodPortion, FoodProfile, MacroAmounts, MacroGrams, MealAssignment, MealRole};
use crate::planner::constants::{MAX_MEALS, MIN_MEALS};
use crate::planner::tables::template_for;

/// Unrounded food quantities for one meal, in grams.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MealComposition {
    pub protein_food_g: f64,
    pub carb_food_g: f64,
    pub fat_food_g: f64,
}

impl MealComposition {
    /// Whole grams for presentation, in role order protein, carb, fat.
    pub fn rounded(&self) -> [u64; 3] {
        [self.protein_food_g, self.carb_food_g, self.fat_food_g].map(|g| g.round() as u64)
    }
}

/// Grams of a food needed to supply `target_g` of a macro it contains at
/// `macro_per_100g`. A food without that macro contributes nothing.
pub fn grams_needed_for_macro(target_g: f64, macro_per_100g: f64) -> f64 {
    if macro_per_100g <= 0.0 {
        return 0.0;
    }
    target_g / (macro_per_100g / 100.0)
}

/// Fill one meal's targets with three foods.
///
/// Waterfall order: the protein food covers protein, its incidental carbs and
/// fat come off the remaining targets; the carb food covers remaining carbs,
/// its fat comes off the remaining fat; the fat food covers what is left.
/// Nothing flows back upstream, and remainders never go below zero.
pub fn compose_meal(
    targets: &MacroAmounts,
    protein_food: &FoodProfile,
    carb_food: &FoodProfile,
    fat_food: &FoodProfile,
) -> MealComposition {
    let protein_food_g = grams_needed_for_macro(targets.protein, protein_food.protein);
    let from_protein_food = protein_food.macros_in(protein_food_g);

    let remaining_carbs = (targets.carbs - from_protein_food.carbs).max(0.0);
    let remaining_fat = (targets.fat - from_protein_food.fat).max(0.0);

    let carb_food_g = grams_needed_for_macro(remaining_carbs, carb_food.carbs);
    let from_carb_food = carb_food.macros_in(carb_food_g);
    let remaining_fat = (remaining_fat - from_carb_food.fat).max(0.0);

    let fat_food_g = grams_needed_for_macro(remaining_fat, fat_food.fat);

    MealComposition {
        protein_food_g,
        carb_food_g,
        fat_food_g,
    }
}

/// Spread daily macro grams evenly over `meal_count` meals and suggest raw
/// food weights for each, using the meal templates in order.
///
/// `meal_count` is clamped into 1..=6.
pub fn compose_daily_meals(daily: &MacroGrams, meal_count: usize) -> Vec<MealAssignment> {
    let count = meal_count.clamp(MIN_MEALS, MAX_MEALS);
    if count != meal_count {
        debug!(requested = meal_count, used = count, "clamped meal count");
    }

    let per_meal = daily.per_meal(count);

    (0..count)
        .map(|i| {
            let template = template_for(i);
            let composition = compose_meal(&per_meal, template.protein, template.carb, template.fat);
            let [protein_g, carb_g, fat_g] = composition.rounded();

            MealAssignment {
                label: template.label,
                portions: [
                    FoodPortion {
                        role: MealRole::Protein,
                        food: template.protein,
                        grams: protein_g,
                    },
                    FoodPortion {
                        role: MealRole::Carb,
                        food: template.carb,
                        grams: carb_g,
                    },
                    FoodPortion {
                        role: MealRole::Fat,
                        food: template.fat,
                        grams: fat_g,
                    },
                ],
            }
        })
        .collect()
}
