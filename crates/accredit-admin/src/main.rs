use std::io::{self, BufRead, Write};

use accredit_admin::commands::{self, Command};
use accredit_admin::config::{self, AdminConfig, Profile};
use accredit_admin::navigation::navigation;
use accredit_admin::render;
use accredit_admin::state::AdminState;
use accredit_workspace::Workspace;
use eyre::Result;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // stdout belongs to the console, so logs go to stderr.
    if std::env::var_os("ACCREDIT_LOG_JSON").is_some() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
}

/// `ACCREDIT_TODAY=YYYY-MM-DD` pins the date used for event tabs and deadlines.
fn today() -> Result<jiff::civil::Date> {
    match std::env::var("ACCREDIT_TODAY") {
        Ok(raw) => Ok(raw.parse()?),
        Err(_) => Ok(jiff::Zoned::now().date()),
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let config = if config::has_config() {
        config::load_config()?
    } else {
        tracing::info!("no config found, using defaults");
        AdminConfig::new(Profile::default(), jiff::Timestamp::now())
    };

    let workspace = Workspace::seeded()?;
    let mut state = AdminState::new(workspace, config, today()?)
        .with_config_dir(config::config_dir().ok());

    let mut stdout = io::stdout();
    writeln!(stdout, "Accreditation admin, acting as {}", state.role().label())?;
    writeln!(
        stdout,
        "{}",
        render::navigation(&navigation(state.role()), state.current_view())
    )?;
    writeln!(stdout, "Type 'help' for commands.")?;

    let stdin = io::stdin();
    loop {
        write!(stdout, "{}> ", state.current_view())?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => match commands::execute(&mut state, command) {
                Ok(output) => writeln!(stdout, "{output}")?,
                Err(e) => writeln!(stdout, "error: {e}")?,
            },
            Err(e) => writeln!(stdout, "error: {e}")?,
        }
    }

    Ok(())
}
