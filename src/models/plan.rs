use std::fmt;

use serde::Serialize;

use crate::models::{FoodProfile, MacroStyle};
use crate::planner::constants::{KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};

/// Fractions of daily calories assigned to each macro.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroSplit {
    pub carb_pct: f64,
    pub protein_pct: f64,
    pub fat_pct: f64,
}

impl MacroSplit {
    pub const fn new(carb_pct: f64, protein_pct: f64, fat_pct: f64) -> Self {
        Self {
            carb_pct,
            protein_pct,
            fat_pct,
        }
    }

    pub fn total(&self) -> f64 {
        self.carb_pct + self.protein_pct + self.fat_pct
    }

    /// Whole-number percentages (carbs, protein, fat) for display.
    pub fn percentages(&self) -> (u32, u32, u32) {
        let pct = |v: f64| (v * 100.0).round() as u32;
        (pct(self.carb_pct), pct(self.protein_pct), pct(self.fat_pct))
    }
}

/// Daily macro targets in whole grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MacroGrams {
    pub carbs_g: u32,
    pub protein_g: u32,
    pub fats_g: u32,
}

impl MacroGrams {
    /// Energy implied by these grams (4/4/9).
    pub fn kcal(&self) -> f64 {
        self.carbs_g as f64 * KCAL_PER_G_CARBS
            + self.protein_g as f64 * KCAL_PER_G_PROTEIN
            + self.fats_g as f64 * KCAL_PER_G_FAT
    }

    /// Even share for one of `meal_count` meals, not rounded.
    pub fn per_meal(&self, meal_count: usize) -> MacroAmounts {
        let n = meal_count as f64;
        MacroAmounts {
            protein: self.protein_g as f64 / n,
            carbs: self.carbs_g as f64 / n,
            fat: self.fats_g as f64 / n,
        }
    }
}

/// Real-valued macro quantities in grams.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MacroAmounts {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroAmounts {
    pub fn kcal(&self) -> f64 {
        self.carbs * KCAL_PER_G_CARBS + self.protein * KCAL_PER_G_PROTEIN + self.fat * KCAL_PER_G_FAT
    }
}

impl std::ops::Add for MacroAmounts {
    type Output = MacroAmounts;

    fn add(self, other: MacroAmounts) -> MacroAmounts {
        MacroAmounts {
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }
}

/// Computed calorie and macro plan for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    pub calories: u32,
    pub grams: MacroGrams,
    pub split: MacroSplit,
    pub style: MacroStyle,
}

/// Which macro a food is filling within a meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MealRole {
    Protein,
    Carb,
    Fat,
}

impl MealRole {
    pub fn as_str(self) -> &'static str {
        match self {
            MealRole::Protein => "protein",
            MealRole::Carb => "carb",
            MealRole::Fat => "fat",
        }
    }
}

impl fmt::Display for MealRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rounded raw-weight suggestion for one food.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodPortion {
    pub role: MealRole,
    pub food: &'static FoodProfile,
    pub grams: u64,
}

/// One meal slot: label plus protein, carb and fat portions in that order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealAssignment {
    pub label: &'static str,
    pub portions: [FoodPortion; 3],
}

impl MealAssignment {
    /// Macros actually delivered by the rounded portions.
    pub fn delivered(&self) -> MacroAmounts {
        self.portions
            .iter()
            .map(|p| p.food.macros_in(p.grams as f64))
            .fold(MacroAmounts::default(), |acc, m| acc + m)
    }
}
