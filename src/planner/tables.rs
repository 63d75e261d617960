//! Static nutrition data: raw food profiles and the meal templates that
//! assign them to protein, carb and fat roles.

use crate::models::FoodProfile;

// Carb-dominant
pub static OATS: FoodProfile = FoodProfile::new("oats_raw", "Oats (raw)", 13.0, 67.0, 7.0);
pub static WHITE_RICE: FoodProfile =
    FoodProfile::new("white_rice_raw", "White rice (raw)", 7.0, 80.0, 0.6);
pub static POTATOES: FoodProfile = FoodProfile::new("potatoes_raw", "Potatoes (raw)", 2.0, 17.0, 0.1);
pub static PASTA: FoodProfile = FoodProfile::new("pasta_raw", "Pasta (raw)", 13.0, 75.0, 1.5);
pub static BANANA: FoodProfile = FoodProfile::new("banana_raw", "Banana (raw)", 1.1, 23.0, 0.3);
pub static APPLE: FoodProfile = FoodProfile::new("apple_raw", "Apple (raw)", 0.3, 14.0, 0.2);

// Protein-dominant
pub static EGG_WHITES: FoodProfile =
    FoodProfile::new("egg_whites_raw", "Egg whites (raw)", 11.0, 1.0, 0.0);
pub static CHICKEN_BREAST: FoodProfile =
    FoodProfile::new("chicken_breast_raw", "Chicken breast (raw)", 31.0, 0.0, 3.6);
pub static LEAN_BEEF: FoodProfile = FoodProfile::new("beef_lean_raw", "Lean beef (raw)", 26.0, 0.0, 10.0);
pub static SALMON: FoodProfile = FoodProfile::new("salmon_raw", "Salmon (raw)", 20.0, 0.0, 13.0);
pub static FIRM_TOFU: FoodProfile = FoodProfile::new("tofu_firm_raw", "Firm tofu (raw)", 15.7, 3.5, 8.0);

// Fats / mixed
pub static OLIVE_OIL: FoodProfile = FoodProfile::new("olive_oil", "Olive oil", 0.0, 0.0, 100.0);
pub static PEANUT_BUTTER: FoodProfile =
    FoodProfile::new("peanut_butter", "Peanut butter", 25.0, 20.0, 50.0);
pub static ALMONDS: FoodProfile = FoodProfile::new("almonds_raw", "Almonds (raw)", 21.0, 22.0, 49.0);

/// All foods in display order.
pub static FOODS: [&FoodProfile; 14] = [
    &OATS,
    &WHITE_RICE,
    &POTATOES,
    &PASTA,
    &BANANA,
    &APPLE,
    &EGG_WHITES,
    &CHICKEN_BREAST,
    &LEAN_BEEF,
    &SALMON,
    &FIRM_TOFU,
    &OLIVE_OIL,
    &PEANUT_BUTTER,
    &ALMONDS,
];

/// Which foods fill the protein, carb and fat roles of one meal slot.
#[derive(Debug, Clone, Copy)]
pub struct MealTemplate {
    pub label: &'static str,
    pub protein: &'static FoodProfile,
    pub carb: &'static FoodProfile,
    pub fat: &'static FoodProfile,
}

pub static MEAL_TEMPLATES: [MealTemplate; 6] = [
    MealTemplate {
        label: "Breakfast",
        protein: &EGG_WHITES,
        carb: &OATS,
        fat: &PEANUT_BUTTER,
    },
    MealTemplate {
        label: "Snack 1",
        protein: &FIRM_TOFU,
        carb: &BANANA,
        fat: &ALMONDS,
    },
    MealTemplate {
        label: "Lunch",
        protein: &CHICKEN_BREAST,
        carb: &WHITE_RICE,
        fat: &OLIVE_OIL,
    },
    MealTemplate {
        label: "Snack 2",
        protein: &LEAN_BEEF,
        carb: &APPLE,
        fat: &PEANUT_BUTTER,
    },
    MealTemplate {
        label: "Dinner",
        protein: &SALMON,
        carb: &POTATOES,
        fat: &OLIVE_OIL,
    },
    MealTemplate {
        label: "Supper",
        protein: &EGG_WHITES,
        carb: &PASTA,
        fat: &ALMONDS,
    },
];

/// Template for the meal at `index`, cycling through the list.
pub fn template_for(index: usize) -> &'static MealTemplate {
    &MEAL_TEMPLATES[index % MEAL_TEMPLATES.len()]
}
