use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::MacroError;
use crate::planner::constants::{BULK_KCAL_PER_LB, CUT_KCAL_PER_LB, MAINTAIN_KCAL_PER_LB};

/// Dieting objective, bound to a calories-per-pound multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Cut,
    Maintain,
    Bulk,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Cut, Goal::Maintain, Goal::Bulk];

    /// Daily calories per pound of bodyweight.
    pub fn multiplier(self) -> f64 {
        match self {
            Goal::Cut => CUT_KCAL_PER_LB,
            Goal::Maintain => MAINTAIN_KCAL_PER_LB,
            Goal::Bulk => BULK_KCAL_PER_LB,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Goal::Cut => "cut",
            Goal::Maintain => "maintain",
            Goal::Bulk => "bulk",
        }
    }
}

impl FromStr for Goal {
    type Err = MacroError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cut" => Ok(Goal::Cut),
            "maintain" => Ok(Goal::Maintain),
            "bulk" => Ok(Goal::Bulk),
            _ => Err(MacroError::InvalidGoal(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive_and_trimmed() {
        assert_eq!("  CUT ".parse::<Goal>().unwrap(), Goal::Cut);
        assert_eq!("Maintain".parse::<Goal>().unwrap(), Goal::Maintain);
        assert_eq!("bulk\n".parse::<Goal>().unwrap(), Goal::Bulk);
    }

    #[test]
    fn test_parse_unknown_goal() {
        let err = "shred".parse::<Goal>().unwrap_err();
        assert!(matches!(err, MacroError::InvalidGoal(ref g) if g == "shred"));
    }

    #[test]
    fn test_multipliers() {
        assert_eq!(Goal::Cut.multiplier(), 10.0);
        assert_eq!(Goal::Maintain.multiplier(), 12.0);
        assert_eq!(Goal::Bulk.multiplier(), 15.0);
    }
}
