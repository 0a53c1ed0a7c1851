pub mod app;
pub mod config;
pub mod csv;
pub mod db;
pub mod deck;
pub mod joke;
pub mod logger;
pub mod models;
pub mod quiz;
pub mod render;
pub mod scorer;
pub mod session;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use app::App;
pub use config::Cli;
pub use csv::{DeckError, load_deck};
pub use db::ProgressStore;
pub use deck::{BUILTIN_DECK_NAME, builtin_questions};
pub use joke::{HttpJokeSource, JokeError, JokeSource, fetch_joke, spawn_joke_fetch};
pub use models::{AppState, Joke, JokeDisplay, Question, QuizState, ReviewEntry, ScoreReport};
pub use quiz::{QuizError, QuizStore};
pub use render::{QuizView, quiz_view};
pub use scorer::score;
pub use session::{KeyAction, handle_key};
pub use ui::draw_app;
