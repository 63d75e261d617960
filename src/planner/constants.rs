use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::MacroStyle;

/// Pounds per kilogram.
pub const LB_PER_KG: f64 = 2.20462;

/// Daily calories per pound of bodyweight for each goal.
pub const CUT_KCAL_PER_LB: f64 = 10.0;
pub const MAINTAIN_KCAL_PER_LB: f64 = 12.0;
pub const BULK_KCAL_PER_LB: f64 = 15.0;

/// Energy density of each macro (kcal per gram).
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Heaviest accepted bodyweight. Keeps every derived calorie and gram value
/// well inside `u32`.
pub const MAX_WEIGHT_KG: f64 = 1000.0;

/// Allowed deviation of a macro split from 1.0.
pub const RATIO_TOLERANCE: f64 = 1e-6;

// ─────────────────────────────────────────────────────────────────────────────
// Request defaults and limits
// ─────────────────────────────────────────────────────────────────────────────

pub const MIN_MEALS: usize = 1;
pub const MAX_MEALS: usize = 6;

/// Meals per day when the request does not name a count.
pub const DEFAULT_MEALS: usize = 3;

/// Macro style when the request does not name one.
pub const DEFAULT_STYLE: MacroStyle = MacroStyle::HighCarb;

/// Minimum Jaro-Winkler similarity for a "did you mean" hint.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Alternate spellings accepted for each macro style.
pub static STYLE_ALIASES: LazyLock<HashMap<&'static str, MacroStyle>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("highcarb", MacroStyle::HighCarb);
    m.insert("mentzer", MacroStyle::HighCarb);
    m.insert("highprotein", MacroStyle::HighProtein);
    m.insert("protein", MacroStyle::HighProtein);
    m.insert("highfat", MacroStyle::HighFat);
    m.insert("fat", MacroStyle::HighFat);
    m
});

/// Every keyword that resolves to a style: canonical keys plus aliases.
pub fn style_keywords() -> Vec<&'static str> {
    let mut words: Vec<&'static str> = MacroStyle::ALL.iter().map(|s| s.key()).collect();
    let mut aliases: Vec<&'static str> = STYLE_ALIASES.keys().copied().collect();
    aliases.sort_unstable();
    words.extend(aliases);
    words
}
