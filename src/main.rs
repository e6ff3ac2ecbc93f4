//! Prop Panel - control panel for escape-room prop controllers
//!
//! Usage:
//!   prop-panel                          Run interactive TUI
//!   prop-panel sound [--freq HZ ...]    POST sound settings once
//!   prop-panel gamestate --bomb-count N --minutes-remaining N
//!   prop-panel watch [--freq HZ ...]    Re-send sound settings until Ctrl+C

use anyhow::{Context, Result};
use clap::Parser;
use prop_panel::app::App;
use prop_panel::cli::{Cli, Command, SoundArgs};
use prop_panel::config::{self, Config};
use prop_panel::constants::{CHANNEL_CAPACITY, TRACE_FILE_NAME};
use prop_panel::form::{FormModel, GameState};
use prop_panel::logging::{self, store::format_log_entry_text, TraceTarget};
use prop_panel::scheduler::UpdateScheduler;
use prop_panel::sender::{Dispatcher, Endpoint, HttpSender, Origin, SendResult, SendStats};
use prop_panel::ui;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::info;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so traces go to a file next to the config
    let trace_file = config::data_dir()
        .ok()
        .map(|dir| dir.join(TRACE_FILE_NAME));
    let target = match cli.command {
        None => TraceTarget::Tui {
            file: trace_file.as_deref(),
        },
        Some(_) => TraceTarget::Stderr,
    };
    logging::init_tracing(cli.verbose, target);

    let mut config = config::load();
    if let Some(url) = &cli.url {
        config.device.base_url = url.clone();
    }
    config.validate().context("invalid configuration")?;

    let rt = tokio::runtime::Runtime::new()?;

    match cli.command {
        None => {
            rt.block_on(run_tui(config))?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::Sound(args)) => rt.block_on(run_sound(config, args)),
        Some(Command::GameState {
            bomb_count,
            minutes_remaining,
        }) => rt.block_on(run_game_state(config, &bomb_count, &minutes_remaining)),
        Some(Command::Watch(args)) => rt.block_on(run_watch(config, args)),
    }
}

fn http_sender(config: &Config) -> Result<Arc<HttpSender>> {
    Ok(Arc::new(HttpSender::new(config.device.request_timeout())?))
}

fn sound_form(config: &Config, args: &SoundArgs) -> FormModel {
    let mut form = FormModel::new(config.device.base_url.clone(), &config.sound);
    args.apply(&mut form);
    form
}

fn report(endpoint: Endpoint, result: &SendResult) -> ExitCode {
    if result.success {
        println!("{}", endpoint.success_message());
        ExitCode::SUCCESS
    } else {
        eprintln!("{} ({})", endpoint.failure_message(), result.describe());
        ExitCode::FAILURE
    }
}

async fn run_tui(config: Config) -> Result<()> {
    let sender = http_sender(&config)?;
    let mut app = App::new(config, sender);
    ui::run(&mut app).await?;
    Ok(())
}

async fn run_sound(config: Config, args: SoundArgs) -> Result<ExitCode> {
    let form = sound_form(&config, &args);
    let dispatcher = Dispatcher::new(http_sender(&config)?, Arc::new(SendStats::new()), None);

    let result = dispatcher
        .submit(
            &form.base_url,
            Endpoint::Sound,
            &form.sound_settings(),
            Origin::Manual,
        )
        .await;
    Ok(report(Endpoint::Sound, &result))
}

async fn run_game_state(
    config: Config,
    bomb_count: &str,
    minutes_remaining: &str,
) -> Result<ExitCode> {
    let state = match GameState::from_inputs(bomb_count, minutes_remaining) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(ExitCode::from(2));
        }
    };

    let dispatcher = Dispatcher::new(http_sender(&config)?, Arc::new(SendStats::new()), None);
    let result = dispatcher
        .submit(
            &config.device.base_url,
            Endpoint::GameState,
            &state,
            Origin::Manual,
        )
        .await;
    Ok(report(Endpoint::GameState, &result))
}

async fn run_watch(config: Config, args: SoundArgs) -> Result<ExitCode> {
    let form = sound_form(&config, &args);
    let (_form_tx, form_rx) = watch::channel(form.sound_target());

    let (events_tx, mut events_rx) = mpsc::channel(CHANNEL_CAPACITY);
    let stats = Arc::new(SendStats::new());
    let dispatcher = Dispatcher::new(http_sender(&config)?, stats.clone(), Some(events_tx));

    let printer = tokio::spawn(async move {
        while let Some(entry) = events_rx.recv().await {
            println!("{}", format_log_entry_text(&entry));
        }
    });

    let mut scheduler =
        UpdateScheduler::new(dispatcher, form_rx, config.device.repeat_interval());
    let generation = scheduler.notify_parameter_changed();
    info!(generation, url = %form.base_url, "watching, Ctrl+C to stop");
    eprintln!(
        "Sending to {} every {:?}, Ctrl+C to stop",
        form.base_url,
        scheduler.interval()
    );

    tokio::signal::ctrl_c()
        .await
        .context("cannot listen for Ctrl+C")?;

    scheduler.shutdown().await;
    // Last dispatcher clone goes with the scheduler; the printer then drains
    drop(scheduler);
    let _ = printer.await;

    eprintln!(
        "{} delivered, {} failed",
        stats.succeeded(),
        stats.failed()
    );
    Ok(if stats.failed() == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
