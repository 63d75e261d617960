use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::{MacroError, Result};
use crate::models::RequestDefaults;
use crate::planner::resolve_macro_style;

/// Mentzer Macro Bot: calories, macros and raw-gram meal suggestions from
/// bodyweight, goal and macro style.
#[derive(Parser, Debug)]
#[command(name = "mentzer_macro_bot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Macro style used when a message does not name one.
    #[arg(long, env = "MENTZER_DEFAULT_STYLE", default_value = "hc", global = true)]
    pub default_style: String,

    /// Meals per day used when a message does not name a count.
    #[arg(long, env = "MENTZER_DEFAULT_MEALS", default_value_t = 3, global = true)]
    pub default_meals: usize,

    /// Log each handled request (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Chat with the bot on this terminal.
    Chat,

    /// Answer a single message, e.g. `plan 80 bulk hf 5`.
    Plan {
        /// The message: <weight_kg> <goal> [macro_style] [meals]
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,

        /// Print the plan as JSON instead of the chat reply.
        #[arg(long)]
        json: bool,

        /// Also write the meal suggestions to a CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// List the nutrition table.
    Foods,
}

impl Default for Command {
    fn default() -> Self {
        Command::Chat
    }
}

impl Cli {
    /// Validated request defaults from the global options.
    pub fn request_defaults(&self) -> Result<RequestDefaults> {
        let (_, style) = resolve_macro_style(&self.default_style).map_err(|_| {
            MacroError::InvalidInput(format!("unknown default style '{}'", self.default_style))
        })?;
        RequestDefaults::new(style, self.default_meals)
    }

    /// Log filter when RUST_LOG is not set.
    pub fn log_directive(&self) -> &'static str {
        if self.verbose { "info" } else { "warn" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MacroStyle;

    #[test]
    fn test_defaults_to_chat() {
        let cli = Cli::try_parse_from(["mentzer_macro_bot"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(cli.command.unwrap_or_default(), Command::Chat));
    }

    #[test]
    fn test_plan_subcommand() {
        let cli =
            Cli::try_parse_from(["mentzer_macro_bot", "plan", "80", "bulk", "hf", "5", "--json"])
                .unwrap();
        match cli.command {
            Some(Command::Plan { message, json, csv }) => {
                assert_eq!(message, vec!["80", "bulk", "hf", "5"]);
                assert!(json);
                assert!(csv.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_request_defaults_accept_aliases() {
        let cli = Cli::try_parse_from([
            "mentzer_macro_bot",
            "--default-style",
            "protein",
            "--default-meals",
            "4",
        ])
        .unwrap();
        let defaults = cli.request_defaults().unwrap();
        assert_eq!(defaults.style, MacroStyle::HighProtein);
        assert_eq!(defaults.meal_count, 4);
    }

    #[test]
    fn test_request_defaults_rejects_bad_values() {
        let cli =
            Cli::try_parse_from(["mentzer_macro_bot", "--default-style", "keto"]).unwrap();
        assert!(matches!(
            cli.request_defaults(),
            Err(MacroError::InvalidInput(_))
        ));

        let cli = Cli::try_parse_from(["mentzer_macro_bot", "--default-meals", "9"]).unwrap();
        assert!(cli.request_defaults().is_err());
    }
}
