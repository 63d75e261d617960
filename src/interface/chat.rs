use tracing::{debug, error, info, warn};

use crate::error::Result;
use crate::interface::parser::parse_request;
use crate::interface::render::{format_error_reply, format_food_table, format_plan_reply, help_text};
use crate::interface::transport::Transport;
use crate::models::RequestDefaults;
use crate::planner::generate_plan;

/// What the session does with one incoming message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Reply(String),
    Ignore,
    Quit,
}

/// Stateless message handler; every message is planned independently.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    defaults: RequestDefaults,
}

impl ChatSession {
    pub fn new(defaults: RequestDefaults) -> Self {
        Self { defaults }
    }

    pub fn greeting(&self) -> String {
        help_text(&self.defaults)
    }

    /// Dispatch commands and plan everything else.
    pub fn handle(&self, text: &str) -> Response {
        let text = text.trim();
        if text.is_empty() {
            return Response::Ignore;
        }

        if let Some(command) = text.strip_prefix('/') {
            return self.handle_command(command);
        }

        Response::Reply(self.plan_reply(text))
    }

    fn handle_command(&self, command: &str) -> Response {
        // Accept "/help@SomeBot" as well as "/help".
        let name = command
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .split('@')
            .next()
            .unwrap_or_default()
            .to_lowercase();

        match name.as_str() {
            "start" | "help" => Response::Reply(self.greeting()),
            "foods" => Response::Reply(format_food_table()),
            "quit" | "exit" => Response::Quit,
            _ => {
                debug!(command = %name, "ignoring unknown command");
                Response::Ignore
            }
        }
    }

    /// Reply text for a plan request; errors become corrective messages.
    pub fn plan_reply(&self, text: &str) -> String {
        let outcome = parse_request(text, &self.defaults).and_then(|req| generate_plan(&req));

        match outcome {
            Ok(report) => {
                info!(
                    weight_kg = report.weight_kg,
                    goal = %report.goal,
                    style = %report.plan.style,
                    meals = report.meal_count,
                    calories = report.plan.calories,
                    "built plan"
                );
                format_plan_reply(&report)
            }
            Err(e) if e.is_user_error() => {
                warn!(input = text, error = %e, "rejected request");
                format_error_reply(&e)
            }
            Err(e) => {
                error!(input = text, error = %e, "failed to build plan");
                format_error_reply(&e)
            }
        }
    }
}

/// Drive a conversation until the transport runs dry or the user quits.
///
/// Returns the number of replies sent, greeting included.
pub fn run_session<T: Transport>(transport: &mut T, session: &ChatSession) -> Result<usize> {
    transport.send(&session.greeting())?;
    let mut sent = 1;

    while let Some(message) = transport.receive()? {
        match session.handle(&message) {
            Response::Reply(text) => {
                transport.send(&text)?;
                sent += 1;
            }
            Response::Ignore => {}
            Response::Quit => {
                info!("session ended by user");
                break;
            }
        }
    }

    Ok(sent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::transport::LineTransport;
    use crate::models::MacroStyle;
    use std::io::Cursor;

    fn reply(session: &ChatSession, text: &str) -> String {
        match session.handle(text) {
            Response::Reply(r) => r,
            other => panic!("expected a reply, got {:?}", other),
        }
    }

    #[test]
    fn test_help_commands() {
        let session = ChatSession::default();
        assert_eq!(reply(&session, "/start"), session.greeting());
        assert_eq!(reply(&session, "/help"), session.greeting());
        assert_eq!(reply(&session, "/HELP@MentzerBot"), session.greeting());
    }

    #[test]
    fn test_foods_command() {
        let session = ChatSession::default();
        assert!(reply(&session, "/foods").contains("Peanut butter"));
    }

    #[test]
    fn test_ignored_messages() {
        let session = ChatSession::default();
        assert_eq!(session.handle("   "), Response::Ignore);
        assert_eq!(session.handle("/settings"), Response::Ignore);
        assert_eq!(session.handle("/quit"), Response::Quit);
        assert_eq!(session.handle("/exit"), Response::Quit);
    }

    #[test]
    fn test_plan_message() {
        let session = ChatSession::default();
        let text = reply(&session, "75 cut");
        assert!(text.contains("Calories: 1653 kcal/day"));
        assert!(text.contains("Meals per day: 3"));
    }

    #[test]
    fn test_errors_become_replies() {
        let session = ChatSession::default();
        assert!(reply(&session, "75").starts_with("Format:"));
        assert!(reply(&session, "heavy cut").starts_with("Weight must be"));
        assert_eq!(reply(&session, "75 cut 7"), "Meals must be between 1 and 6.");
        assert!(reply(&session, "75 cut hc x").starts_with("Check your input for meals"));
        assert!(reply(&session, "75 slim").starts_with("Check your input:"));
        assert!(reply(&session, "75 cut keto").starts_with("Check your input:"));
    }

    #[test]
    fn test_session_defaults_apply() {
        let defaults = RequestDefaults::new(MacroStyle::HighProtein, 2).unwrap();
        let session = ChatSession::new(defaults);
        let text = reply(&session, "75 cut");
        assert!(text.contains("High protein (40C / 35P / 25F)"));
        assert!(text.contains("Meals per day: 2"));
    }

    #[test]
    fn test_run_session_over_lines() {
        let input = "/help\n\n75 cut\n/unknown\n/quit\n80 bulk\n";
        let mut transport = LineTransport::new(Cursor::new(input), Vec::new());
        let session = ChatSession::default();

        let sent = run_session(&mut transport, &session).unwrap();
        // greeting, /help, plan
        assert_eq!(sent, 3);

        let out = String::from_utf8(transport.into_writer()).unwrap();
        assert!(out.contains("Calories: 1653 kcal/day"));
        assert!(!out.contains("80.0 kg"));
    }
}
