//! AWX Console - add inventory sources from the terminal.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize logging, configuration, and the AWX client.
//! - Run the interactive event loop or a headless submit/cancel.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//! - Form and controller logic (see `awx_console::app` and `awx_console::controller`).
//!
//! Invariants:
//! - `.env` is loaded before configuration is read.
//! - Interactive mode enters raw mode and the alternate screen, and restores both on exit.
//! - The route navigated to is printed on stdout after the terminal is restored.

use std::sync::Arc;

use anyhow::{Context, Result};
use awx_client::{AwxClient, InventorySourceDraft, NamedRef};
use awx_console::action::Action;
use awx_console::app::App;
use awx_console::cli::Cli;
use awx_console::error::{ExitCode, exit_code_for};
use awx_console::form::FieldError;
use awx_console::runtime::{
    config::load_config,
    headless::{HeadlessOutcome, cancel_headless, run_headless},
    logging,
    side_effects::dispatch,
    terminal::TerminalGuard,
};
use awx_console::ui;
use awx_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::channel;
use tokio_util::task::TaskTracker;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_guard = match logging::init(&cli) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "awx-console failed");
            eprintln!("Error: {:#}", e);
            exit_code_for(&e)
        }
    };

    // Flush file logs before exiting; process::exit skips destructors.
    drop(log_guard);
    std::process::exit(code.as_i32());
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let inventory = cli.inventory_ref();

    if cli.no_tui && cli.cancel {
        return Ok(report(cancel_headless(inventory)));
    }

    let config = load_config(&cli).context("Failed to load configuration")?;
    let client = AwxClient::builder()
        .from_config(&config)
        .build()
        .context("Failed to create AWX client")?;
    tracing::info!(
        base_url = %client.base_url(),
        inventory_id = inventory.id,
        "Starting awx-console"
    );

    let draft = cli.draft();
    if cli.no_tui {
        let outcome = run_headless(&client, inventory, &draft).await;
        return Ok(report(outcome));
    }

    run_interactive(Arc::new(client), inventory, draft).await
}

/// Print a headless outcome and map it to an exit code.
fn report(outcome: HeadlessOutcome) -> ExitCode {
    match &outcome {
        HeadlessOutcome::Navigated(route) => println!("{}", route),
        HeadlessOutcome::Invalid(errors) => {
            for FieldError { field, message } in errors {
                eprintln!("{}: {}", field.label(), message);
            }
        }
        HeadlessOutcome::Failed(failure) => eprintln!("Error: {}", failure.message()),
    }
    outcome.exit_code()
}

async fn run_interactive(
    client: Arc<AwxClient>,
    inventory: NamedRef,
    draft: InventorySourceDraft,
) -> Result<ExitCode> {
    let task_tracker = TaskTracker::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    // Input stream task
    let tx_input = tx.clone();
    task_tracker.spawn(async move {
        use crossterm::event::{Event, EventStream, KeyEventKind};

        let mut reader = EventStream::new();
        while let Some(event_result) = reader.next().await {
            let action = match event_result {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => Action::Input(key),
                Ok(Event::Resize(width, height)) => Action::Resize(width, height),
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!(error = %e, "Terminal event stream failed");
                    break;
                }
            };
            if tx_input.send(action).await.is_err() {
                break;
            }
        }
    });

    let mut app = App::new(inventory, draft);
    dispatch(&mut app, Action::LoadOptions, &client, &tx, &task_tracker);

    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_UI_TICK_MS));

    loop {
        terminal.draw(|f| ui::render(f, &app))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                let action = match action {
                    Action::Input(key) => match app.handle_input(key) {
                        Some(action) => action,
                        None => continue,
                    },
                    other => other,
                };
                dispatch(&mut app, action, &client, &tx, &task_tracker);
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }

        if app.is_done() {
            break;
        }
    }

    // Restore terminal before printing the route.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // The input task blocks on the event stream; in-flight API calls finish on their own.
    let _ = task_tracker.close();

    if let Some(route) = app.controller.navigated_to() {
        println!("{}", route);
    }
    Ok(ExitCode::Success)
}
