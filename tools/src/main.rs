//! churn-dashboard: interactive runner for the telecom churn demo.
//!
//! Usage:
//!   churn-dashboard
//!   churn-dashboard --seed 12345
//!   churn-dashboard --ipc-mode --config dashboard.json

use anyhow::Result;
use churn_core::{
    command::{TerminalInput, TERMINAL_HELP},
    config::DashboardConfig,
    dashboard::Dashboard,
};
use std::env;
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let config = match args.windows(2).find(|w| w[0] == "--config") {
        Some(w) => DashboardConfig::load(&w[1])?,
        None => DashboardConfig::default(),
    };
    let seed = parse_arg(&args, "--seed", config.default_seed);

    let mut dashboard = Dashboard::new(config, seed)?;

    if ipc_mode {
        run_ipc_loop(&mut dashboard)?;
    } else {
        println!("{} - seed {seed}", dashboard.config.title);
        println!("Type 'help' for commands.");
        println!();
        run_terminal_loop(&mut dashboard)?;
    }

    Ok(())
}

/// One JSON command per input line, one JSON view (or error) per output line.
fn run_ipc_loop(dashboard: &mut Dashboard) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    writeln!(stdout, "{}", serde_json::to_string(&dashboard.current_view()?)?)?;
    stdout.flush()?;

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        match dashboard.handle_json(&buffer) {
            Ok(json) => writeln!(stdout, "{json}")?,
            Err(e) => {
                log::warn!("ipc: {e}");
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{err_json}")?;
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

fn run_terminal_loop(dashboard: &mut Dashboard) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    write!(stdout, "{}", dashboard.current_view()?)?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        buffer.clear();
        if handle.read_line(&mut buffer)? == 0 {
            break; // EOF
        }

        match TerminalInput::parse(&buffer) {
            Ok(TerminalInput::Quit) => break,
            Ok(TerminalInput::Blank) => {}
            Ok(TerminalInput::Help) => writeln!(stdout, "{TERMINAL_HELP}")?,
            Ok(TerminalInput::Command(cmd)) => match dashboard.handle(&cmd) {
                Ok(view) => write!(stdout, "\n{view}")?,
                Err(e) => writeln!(stdout, "error: {e}")?,
            },
            Err(e) => writeln!(stdout, "error: {e}")?,
        }
    }

    writeln!(stdout, "bye")?;
    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
