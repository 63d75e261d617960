use std::io::{self, IsTerminal};
use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mentzer_macro_bot::cli::{Cli, Command};
use mentzer_macro_bot::error::Result;
use mentzer_macro_bot::interface::{
    ChatSession, LineTransport, PromptTransport, format_error_reply, format_food_table,
    format_plan_reply, parse_request, plan_to_json, run_session, write_csv,
};
use mentzer_macro_bot::models::RequestDefaults;
use mentzer_macro_bot::planner::generate_plan;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let defaults = cli.request_defaults()?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Chat => cmd_chat(defaults),
        Command::Plan { message, json, csv } => {
            cmd_plan(&message.join(" "), &defaults, json, csv.as_deref())
        }
        Command::Foods => {
            println!("{}", format_food_table());
            Ok(())
        }
    }
}

// Logs go to stderr so they never mix with replies on stdout.
fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Run an interactive session, or a line-based one when stdin is piped.
fn cmd_chat(defaults: RequestDefaults) -> Result<()> {
    let session = ChatSession::new(defaults);

    if io::stdin().is_terminal() {
        let mut transport = PromptTransport::default();
        run_session(&mut transport, &session)?;
    } else {
        let mut transport = LineTransport::new(io::stdin().lock(), io::stdout().lock());
        run_session(&mut transport, &session)?;
    }

    Ok(())
}

/// Answer one message and exit.
fn cmd_plan(message: &str, defaults: &RequestDefaults, json: bool, csv: Option<&Path>) -> Result<()> {
    let report = match parse_request(message, defaults).and_then(|req| generate_plan(&req)) {
        Ok(report) => report,
        Err(e) if e.is_user_error() => {
            eprintln!("{}", format_error_reply(&e));
            std::process::exit(2);
        }
        Err(e) => return Err(e),
    };

    if json {
        println!("{}", plan_to_json(&report)?);
    } else {
        println!("{}", format_plan_reply(&report));
    }

    if let Some(path) = csv {
        write_csv(&report.meals, path)?;
        eprintln!("Wrote meal suggestions to {}", path.display());
    }

    Ok(())
}
