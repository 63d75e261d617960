use crate::error::{MacroError, Result};
use crate::models::{Goal, MacroGrams, MacroSplit, MacroStyle, Plan};
use crate::planner::calories::daily_calories;
use crate::planner::constants::{
    KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN, RATIO_TOLERANCE, STYLE_ALIASES,
};

/// Resolve a style keyword or alias to its split and canonical style.
///
/// Matching is case-insensitive. Aliases: highcarb/mentzer -> hc,
/// highprotein/protein -> hp, highfat/fat -> hf.
pub fn resolve_macro_style(style: &str) -> Result<(MacroSplit, MacroStyle)> {
    let key = style.trim().to_lowercase();

    let resolved = STYLE_ALIASES
        .get(key.as_str())
        .copied()
        .or_else(|| MacroStyle::from_key(&key))
        .ok_or_else(|| MacroError::InvalidStyle(key.clone()))?;

    Ok((resolved.split(), resolved))
}

/// Split calories into whole grams of carbs, protein and fat.
///
/// Uses 4 kcal/g for carbs and protein and 9 kcal/g for fat. The split must
/// sum to 1.0 within `RATIO_TOLERANCE`.
pub fn compute_macro_grams(calories: u32, split: &MacroSplit) -> Result<MacroGrams> {
    let total = split.total();
    if (total - 1.0).abs() > RATIO_TOLERANCE {
        return Err(MacroError::InvalidRatio(total));
    }

    let calories = calories as f64;
    let grams = |pct: f64, kcal_per_g: f64| (calories * pct / kcal_per_g).round() as u32;

    Ok(MacroGrams {
        carbs_g: grams(split.carb_pct, KCAL_PER_G_CARBS),
        protein_g: grams(split.protein_pct, KCAL_PER_G_PROTEIN),
        fats_g: grams(split.fat_pct, KCAL_PER_G_FAT),
    })
}

/// Bodyweight + goal + style keyword -> calories and macro grams.
pub fn build_plan(weight_kg: f64, goal: &str, style: &str) -> Result<Plan> {
    let goal: Goal = goal.parse()?;
    let calories = daily_calories(weight_kg, goal)?;
    let (split, style) = resolve_macro_style(style)?;
    let grams = compute_macro_grams(calories, &split)?;

    Ok(Plan {
        calories,
        grams,
        split,
        style,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_canonical_keys() {
        let (split, style) = resolve_macro_style("hp").unwrap();
        assert_eq!(style, MacroStyle::HighProtein);
        assert_eq!(split, MacroSplit::new(0.40, 0.35, 0.25));
    }

    #[test]
    fn test_resolve_aliases() {
        assert_eq!(
            resolve_macro_style("mentzer").unwrap(),
            resolve_macro_style("hc").unwrap()
        );
        assert_eq!(
            resolve_macro_style("protein").unwrap(),
            resolve_macro_style("hp").unwrap()
        );
        assert_eq!(resolve_macro_style("HighFat").unwrap().1, MacroStyle::HighFat);
    }

    #[test]
    fn test_resolve_unknown_style() {
        let err = resolve_macro_style("keto").unwrap_err();
        assert!(matches!(err, MacroError::InvalidStyle(ref s) if s == "keto"));
    }

    #[test]
    fn test_macro_grams_scenario() {
        let grams = compute_macro_grams(1653, &MacroStyle::HighCarb.split()).unwrap();
        assert_eq!(
            grams,
            MacroGrams {
                carbs_g: 248,
                protein_g: 103,
                fats_g: 28,
            }
        );
    }

    #[test]
    fn test_invalid_ratio_rejected() {
        let split = MacroSplit::new(0.5, 0.5, 0.5);
        let err = compute_macro_grams(2000, &split).unwrap_err();
        assert!(matches!(err, MacroError::InvalidRatio(t) if (t - 1.5).abs() < 1e-9));
    }

    #[test]
    fn test_ratio_within_tolerance_accepted() {
        let split = MacroSplit::new(0.6, 0.25, 0.15 + 1e-8);
        assert!(compute_macro_grams(2000, &split).is_ok());
    }

    #[test]
    fn test_build_plan() {
        let plan = build_plan(75.0, "cut", "mentzer").unwrap();
        assert_eq!(plan.calories, 1653);
        assert_eq!(plan.style, MacroStyle::HighCarb);
        assert_eq!(plan.grams.protein_g, 103);
        assert_eq!(plan.split, MacroStyle::HighCarb.split());
    }

    #[test]
    fn test_build_plan_reports_goal_before_style() {
        let err = build_plan(75.0, "shred", "keto").unwrap_err();
        assert!(matches!(err, MacroError::InvalidGoal(_)));
    }
}
