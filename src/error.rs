use thiserror::Error;

#[derive(Debug, Error)]
pub enum MacroError {
    #[error("Unknown goal: {0} (expected cut, maintain or bulk)")]
    InvalidGoal(String),

    #[error("Unknown macro style: {0}")]
    InvalidStyle(String),

    #[error("Macro percentages must add up to 1.0 (got {0})")]
    InvalidRatio(f64),

    #[error("Expected 2 to 4 tokens, got {0}")]
    WrongTokenCount(usize),

    #[error("Weight must be a positive number: {0}")]
    InvalidWeight(String),

    #[error("Meals must be an integer: {0}")]
    InvalidMealCount(String),

    #[error("Meals must be between 1 and 6 (got {0})")]
    MealCountOutOfRange(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl MacroError {
    /// True for errors caused by what the user typed, as opposed to I/O or
    /// internal consistency faults.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            MacroError::InvalidGoal(_)
                | MacroError::InvalidStyle(_)
                | MacroError::WrongTokenCount(_)
                | MacroError::InvalidWeight(_)
                | MacroError::InvalidMealCount(_)
                | MacroError::MealCountOutOfRange(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, MacroError>;
