use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use quizzer::{
    App, BUILTIN_DECK_NAME, Cli, HttpJokeSource, JokeError, JokeSource, KeyAction,
    ProgressStore, builtin_questions, draw_app, handle_key, load_deck, logger, spawn_joke_fetch,
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(&cli.log_file);

    let (questions, deck_name) = match &cli.deck {
        Some(path) => {
            let questions = load_deck(path)
                .with_context(|| format!("Failed to load deck {}", path.display()))?;
            (questions, cli.deck_name().unwrap_or_default())
        }
        None => (builtin_questions(), BUILTIN_DECK_NAME.to_string()),
    };
    logger::info(&format!(
        "Starting quiz '{}' with {} questions",
        deck_name,
        questions.len()
    ));

    let progress = if cli.no_persist {
        ProgressStore::disabled(cli.progress_key())
    } else {
        ProgressStore::open(&cli.db_path(), cli.progress_key())
    };
    if !progress.is_enabled() {
        logger::info("Progress persistence disabled; answers live in memory only");
    }

    // Without an HTTP client the quiz still runs; joke requests just fail
    let source: Option<Arc<dyn JokeSource>> = match HttpJokeSource::new(cli.joke_url.clone()) {
        Ok(source) => {
            logger::info(&format!("Fetching jokes from {}", source.url()));
            Some(Arc::new(source))
        }
        Err(e) => {
            logger::error(&format!("Failed to build HTTP client, jokes disabled: {}", e));
            None
        }
    };
    let mut app = App::new(questions, deck_name, progress);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, source).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    app.save_on_exit();
    logger::info("Exiting");

    if let Err(e) = &result
        && let Some(path) = logger::log_path()
    {
        eprintln!("quizzer stopped: {} (see {})", e, path.display());
    }
    result.map_err(Into::into)
}

async fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    source: Option<Arc<dyn JokeSource>>,
) -> io::Result<()> {
    let (joke_tx, mut joke_rx) = mpsc::unbounded_channel();
    let mut events = EventStream::new();

    loop {
        terminal.draw(|f| draw_app(f, app))?;

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => match handle_key(app, key) {
                    KeyAction::Quit => break,
                    KeyAction::FetchJoke => match &source {
                        Some(source) => {
                            spawn_joke_fetch(source.clone(), joke_tx.clone());
                        }
                        None => app.apply_joke_result(Err(JokeError::Unavailable)),
                    },
                    KeyAction::None => {}
                },
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => break,
            },
            Some(result) = joke_rx.recv() => app.apply_joke_result(result),
        }
    }

    Ok(())
}
