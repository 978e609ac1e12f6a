use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use calcpad::input::key_presses;
use calcpad::{Config, Shell, logging};

/// Keypad calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "calcpad", version, about)]
struct Cli {
    /// Path to a config.toml (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Press these keys, print the resulting display and exit
    #[arg(short, long, value_name = "SEQUENCE")]
    keys: Option<String>,

    /// With --keys, print the full engine state as JSON
    #[arg(long, requires = "keys")]
    json: bool,

    /// Print the display after every key press
    #[arg(short, long)]
    trace: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    logging::init(&config.logging);
    debug!(?config, "configuration loaded");

    let bindings = config
        .key_bindings()
        .context("Invalid key bindings in configuration")?;
    let mut shell = Shell::new(bindings, cli.trace || config.shell.trace);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(sequence) = cli.keys {
        shell.feed(&key_presses(&sequence), &mut out)?;
        if cli.json {
            let json = serde_json::to_string_pretty(&shell.engine().snapshot())
                .context("Failed to serialize engine state")?;
            writeln!(out, "{json}")?;
        } else {
            writeln!(out, "{}", shell.engine().display())?;
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let prompt = if stdin.is_terminal() {
        config.shell.prompt.as_str()
    } else {
        ""
    };
    shell
        .run(stdin.lock(), &mut out, prompt)
        .context("Calculator session failed")?;
    Ok(())
}
