use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::Context;
use drop_target::{DropTarget, MemoryTransferable, PendingDrop};
use log::LevelFilter;
use pulse_core::{DisplayState, Msg, SessionConfig};
use pulse_engine::{run_display, ProgressServer, PulseWorker};
use pulse_logging::{pulse_info, pulse_warn};

use super::logging;
use super::terminal::TerminalDisplay;
use crate::cli::{Cli, Commands};
use crate::config::AppConfig;

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load(cli.config.as_deref())?;
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logging::initialize(cli.log.unwrap_or(config.log), level);

    match cli.command {
        Commands::Serve {
            title,
            total,
            step,
            width,
            height,
        } => {
            let session = SessionConfig::new(title, total, step).with_size(
                width.unwrap_or(config.width),
                height.unwrap_or(config.height),
            );
            serve(&config, session)
        }
        Commands::Pulse { host, port, count } => {
            pulse(&config, host, port, count);
            Ok(())
        }
        Commands::Classify { files, text } => classify(files, text),
    }
}

/// Runs one session; the calling thread owns the terminal display.
fn serve(config: &AppConfig, session: SessionConfig) -> anyhow::Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let (server, port) = ProgressServer::open(session.clone(), &config.server_settings(), msg_tx)
        .context("opening progress session")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "port={port}")?;
    stdout.flush()?;
    drop(stdout);

    let mut display = TerminalDisplay::new(session.width);
    let state = run_display(DisplayState::new(&session), msg_rx, &mut display);
    server.close();

    pulse_info!(
        "Session finished at {}/{}",
        state.view().value.min(session.total_steps),
        session.total_steps
    );
    Ok(())
}

fn pulse(config: &AppConfig, host: String, port: u16, count: u64) {
    let worker = PulseWorker::new(host, port)
        .with_connect_timeout(config.server_settings().connect_timeout);

    let delivered = (0..count).filter(|_| worker.increment()).count();
    worker.done();

    if delivered as u64 == count {
        pulse_info!("Delivered {} pulse(s) to {}:{}", delivered, worker.host(), worker.port());
    } else {
        pulse_warn!(
            "Delivered {} of {} pulse(s) to {}:{}",
            delivered,
            count,
            worker.host(),
            worker.port()
        );
    }
}

fn classify(files: Vec<PathBuf>, text: Option<String>) -> anyhow::Result<()> {
    let mut payload = MemoryTransferable::new();
    if !files.is_empty() {
        payload = payload.with_files(files);
    }
    if let Some(text) = text {
        payload = payload.with_text(text);
    }

    let mut target = DropTarget::new();
    target.handle_drop(&mut PendingDrop::new(payload));

    let json = serde_json::to_string_pretty(target.payload()).context("encoding drop payload")?;
    println!("{json}");
    Ok(())
}
