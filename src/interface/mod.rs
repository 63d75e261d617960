pub mod chat;
pub mod export;
pub mod parser;
pub mod prompts;
pub mod render;
pub mod suggest;
pub mod transport;

pub use chat::{ChatSession, Response, run_session};
pub use export::{plan_to_json, write_csv, write_csv_to};
pub use parser::parse_request;
pub use prompts::PromptTransport;
pub use render::{format_error_reply, format_food_table, format_plan_reply, help_text};
pub use suggest::{closest_match, suggest_goal, suggest_style};
pub use transport::{LineTransport, Transport};
