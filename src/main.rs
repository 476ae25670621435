mod app;
mod config;
mod logging;
mod storage;
mod ui;
mod vocab;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::{AppState, NotificationKind};
use crate::storage::{FileStore, KeyValueStore, WordRepository};
use crate::vocab::WordStore;
use anyhow::Result;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;
    let data_dir = cfg.storage.resolved_data_dir();
    logging::init(&cfg.logging, &data_dir)?;

    // Hydrate the word list before anything can write to it
    let mut repo = WordRepository::new(FileStore::new(&data_dir), cfg.storage.persist_empty);
    let store = WordStore::from_entries(repo.load());
    info!(
        dir = %repo.backend().dir().display(),
        words = store.len(),
        "flashcards starting"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, AppState::new(cfg, store), &mut repo).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        error!(error = %e, "exiting with error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    info!("flashcards exiting");
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut state: AppState,
    repo: &mut WordRepository<FileStore>,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task (4 Hz)
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_millis(250));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            apply_action(&mut state, repo, action);
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}

/// Carry out one side effect requested by the handler. A failed write leaves
/// the in-memory list as it is and tells the user.
fn apply_action<S: KeyValueStore>(
    state: &mut AppState,
    repo: &mut WordRepository<S>,
    action: Action,
) {
    match action {
        Action::PersistWords => {
            if let Err(e) = repo.persist(state.store.entries()) {
                error!(error = %e, "failed to save word list");
                state.notify(
                    NotificationKind::Error,
                    format!("Could not save words: {}", e),
                );
            }
        }
        Action::Quit => {
            state.should_quit = true;
        }
    }
}
