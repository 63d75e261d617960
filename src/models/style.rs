use std::fmt;

use serde::Serialize;

use crate::models::MacroSplit;

/// Named ratio of daily calories across carbs, protein and fat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MacroStyle {
    #[serde(rename = "hc")]
    HighCarb,
    #[serde(rename = "hp")]
    HighProtein,
    #[serde(rename = "hf")]
    HighFat,
}

impl MacroStyle {
    pub const ALL: [MacroStyle; 3] = [
        MacroStyle::HighCarb,
        MacroStyle::HighProtein,
        MacroStyle::HighFat,
    ];

    /// Canonical short key.
    pub fn key(self) -> &'static str {
        match self {
            MacroStyle::HighCarb => "hc",
            MacroStyle::HighProtein => "hp",
            MacroStyle::HighFat => "hf",
        }
    }

    /// Look up a canonical key exactly. Aliases are resolved by the planner.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    pub fn split(self) -> MacroSplit {
        match self {
            MacroStyle::HighCarb => MacroSplit::new(0.60, 0.25, 0.15),
            MacroStyle::HighProtein => MacroSplit::new(0.40, 0.35, 0.25),
            MacroStyle::HighFat => MacroSplit::new(0.30, 0.25, 0.45),
        }
    }

    /// Label used in replies, e.g. "High carb (60C / 25P / 15F)".
    pub fn label(self) -> String {
        let name = match self {
            MacroStyle::HighCarb => "High carb",
            MacroStyle::HighProtein => "High protein",
            MacroStyle::HighFat => "High fat",
        };
        let (carbs, protein, fat) = self.split().percentages();
        format!("{} ({}C / {}P / {}F)", name, carbs, protein, fat)
    }
}

impl fmt::Display for MacroStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
