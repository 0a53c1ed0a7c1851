use crate::db::ProgressStore;
use crate::joke::{self, JokeError};
use crate::logger;
use crate::models::{AppState, Joke, JokeDisplay, Question, ScoreReport};
use crate::quiz::QuizStore;
use crate::render::{QuizView, quiz_view};
use crate::scorer::score;

/// Everything the event loop mutates: the quiz, which screen is up, the
/// keyboard cursor, the joke panel, and where progress is saved.
#[derive(Debug)]
pub struct App {
    pub store: QuizStore,
    pub deck_name: String,
    pub app_state: AppState,
    pub option_cursor: usize,
    pub report: Option<ScoreReport>,
    pub review_scroll: u16,
    pub joke: JokeDisplay,
    pub progress: ProgressStore,
}

impl App {
    pub fn new(questions: Vec<Question>, deck_name: String, progress: ProgressStore) -> Self {
        let store = match progress.load() {
            Some(saved) => {
                let store = QuizStore::from_state(questions, saved);
                logger::info(&format!(
                    "Restoring progress for '{}' at question {}",
                    deck_name,
                    store.current_index() + 1
                ));
                store
            }
            None => QuizStore::new(questions),
        };

        let mut app = Self {
            store,
            deck_name,
            app_state: AppState::Quiz,
            option_cursor: 0,
            report: None,
            review_scroll: 0,
            joke: JokeDisplay::Idle,
            progress,
        };
        app.sync_cursor();
        app
    }

    pub fn view(&self) -> QuizView {
        quiz_view(&self.store, self.option_cursor)
    }

    fn persist(&self) {
        self.progress.save(self.store.state());
    }

    /// Puts the cursor on the recorded answer, or the first option.
    fn sync_cursor(&mut self) {
        self.option_cursor = self
            .store
            .answer_for(self.store.current_index())
            .unwrap_or(0);
    }

    pub fn select_option(&mut self, option_index: usize) {
        let question = self.store.current_index();
        match self.store.select(question, option_index) {
            Ok(()) => {
                self.option_cursor = option_index;
                self.persist();
            }
            Err(e) => logger::warn(&format!("Ignoring selection: {}", e)),
        }
    }

    pub fn select_highlighted(&mut self) {
        self.select_option(self.option_cursor);
    }

    pub fn cursor_up(&mut self) {
        self.option_cursor = self.option_cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let last = self.store.current_question().options.len().saturating_sub(1);
        if self.option_cursor < last {
            self.option_cursor += 1;
        }
    }

    pub fn next_question(&mut self) {
        if self.store.is_last() {
            return;
        }
        self.store.next();
        self.sync_cursor();
        self.persist();
    }

    pub fn previous_question(&mut self) {
        if self.store.is_first() {
            return;
        }
        self.store.previous();
        self.sync_cursor();
        self.persist();
    }

    pub fn go_to_question(&mut self, index: usize) {
        self.store.go_to(index);
        self.sync_cursor();
        self.persist();
    }

    pub fn submit(&mut self) {
        let report = score(self.store.questions(), self.store.answers());
        logger::info(&format!(
            "Submitted '{}': {} / {} correct",
            self.deck_name, report.correct_count, report.total
        ));
        self.report = Some(report);
        self.review_scroll = 0;
        self.app_state = AppState::Results;
    }

    /// Leaves the results screen without touching answers.
    pub fn back_to_quiz(&mut self) {
        self.app_state = AppState::Quiz;
    }

    /// Starts over and forgets any saved progress for this deck.
    pub fn retry(&mut self) {
        self.store.reset();
        self.option_cursor = 0;
        self.report = None;
        self.review_scroll = 0;
        self.app_state = AppState::Quiz;
        self.progress.clear();
    }

    pub fn scroll_review_up(&mut self) {
        self.review_scroll = self.review_scroll.saturating_sub(1);
    }

    pub fn scroll_review_down(&mut self) {
        self.review_scroll = self.review_scroll.saturating_add(1);
    }

    pub fn begin_joke_fetch(&mut self) {
        self.joke = JokeDisplay::Loading;
    }

    pub fn apply_joke_result(&mut self, result: Result<Joke, JokeError>) {
        self.joke = joke::display_for(result);
    }

    pub fn save_on_exit(&self) {
        self.persist();
    }
}
