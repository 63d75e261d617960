use crate::error::{MacroError, Result};
use crate::models::MacroStyle;
use crate::planner::constants::{DEFAULT_MEALS, DEFAULT_STYLE, MAX_MEALS, MIN_MEALS};

/// Typed parameters parsed from one chat message.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    pub weight_kg: f64,

    /// Goal keyword as typed (lowercased); validated by the planner.
    pub goal: String,

    /// Style keyword or alias as typed (lowercased); validated by the planner.
    pub style: String,

    /// Meals per day, already checked to be within 1..=6.
    pub meal_count: usize,
}

/// Values used when a message omits the optional tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequestDefaults {
    pub style: MacroStyle,
    pub meal_count: usize,
}

impl RequestDefaults {
    pub fn new(style: MacroStyle, meal_count: usize) -> Result<Self> {
        if !(MIN_MEALS..=MAX_MEALS).contains(&meal_count) {
            return Err(MacroError::InvalidInput(format!(
                "default meal count must be between {} and {} (got {})",
                MIN_MEALS, MAX_MEALS, meal_count
            )));
        }
        Ok(Self { style, meal_count })
    }
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            style: DEFAULT_STYLE,
            meal_count: DEFAULT_MEALS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let defaults = RequestDefaults::default();
        assert_eq!(defaults.style, MacroStyle::HighCarb);
        assert_eq!(defaults.meal_count, 3);
    }

    #[test]
    fn test_new_validates_meal_count() {
        assert!(RequestDefaults::new(MacroStyle::HighFat, 6).is_ok());
        assert!(matches!(
            RequestDefaults::new(MacroStyle::HighFat, 0),
            Err(MacroError::InvalidInput(_))
        ));
        assert!(RequestDefaults::new(MacroStyle::HighFat, 7).is_err());
    }
}
