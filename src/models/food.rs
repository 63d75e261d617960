use serde::Serialize;

use crate::models::MacroAmounts;

/// A raw food with its macro content per 100 g.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodProfile {
    /// Stable identifier, e.g. `oats_raw`.
    pub key: &'static str,

    /// Human-readable name shown in replies.
    pub label: &'static str,

    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl FoodProfile {
    pub const fn new(
        key: &'static str,
        label: &'static str,
        protein: f64,
        carbs: f64,
        fat: f64,
    ) -> Self {
        Self {
            key,
            label,
            protein,
            carbs,
            fat,
        }
    }

    /// Macros delivered by `grams` of this food.
    #[inline]
    pub fn macros_in(&self, grams: f64) -> MacroAmounts {
        let factor = grams / 100.0;
        MacroAmounts {
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
        }
    }

    /// Energy per 100 g using the 4/4/9 kcal-per-gram constants.
    pub fn kcal_per_100g(&self) -> f64 {
        self.macros_in(100.0).kcal()
    }

    /// Basic validation: all macro values non-negative and at most 100 g.
    pub fn is_valid(&self) -> bool {
        [self.protein, self.carbs, self.fat]
            .into_iter()
            .all(|v| (0.0..=100.0).contains(&v))
    }
}
