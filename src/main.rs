use std::io;

use anyhow::Context;
use clap::Parser;
use pty_relay::cli::Cli;
use pty_relay::config::RelayConfig;
use pty_relay::logging::init_tracing;
use pty_relay::pty::{PtySession, PtySpawnConfig};
use pty_relay::shutdown::FALLBACK_EXIT_CODE;

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            FALLBACK_EXIT_CODE
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let config = RelayConfig::from_env();
    let spawn =
        PtySpawnConfig::new(cli.command, config.term.clone()).context("no command given")?;
    tracing::debug!(?config, "starting relay");

    let session = PtySession::new(config);
    let code = session
        .run(&spawn, io::stdin(), io::stdout())
        .context("relay setup failed")?;
    Ok(code)
}
