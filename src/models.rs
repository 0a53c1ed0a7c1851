use serde::{Deserialize, Serialize};

/// Text shown in the review for a question the user left unanswered.
pub const NO_ANSWER: &str = "No answer";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl Question {
    /// Builds a question, rejecting fewer than two options or a correct index
    /// that does not point into `options`.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
    ) -> Result<Self, String> {
        let text = text.into();
        if options.len() < 2 {
            return Err(format!(
                "question '{}' needs at least two options, got {}",
                text,
                options.len()
            ));
        }
        if correct_index >= options.len() {
            return Err(format!(
                "question '{}' has correct index {} but only {} options",
                text,
                correct_index,
                options.len()
            ));
        }
        Ok(Self {
            text,
            options,
            correct_index,
        })
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }
}

pub type AnswerSet = Vec<Option<usize>>;

/// Position and selections for one pass through a quiz. Serialized with the
/// same field names the progress blob has always used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizState {
    pub current_index: usize,
    pub answers: AnswerSet,
}

impl QuizState {
    pub fn new(question_count: usize) -> Self {
        Self {
            current_index: 0,
            answers: vec![None; question_count],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEntry {
    pub question_text: String,
    pub chosen_option_text: String,
    pub correct_option_text: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub correct_count: usize,
    pub total: usize,
    pub review: Vec<ReviewEntry>,
}

impl ScoreReport {
    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.correct_count as f32 / self.total as f32 * 100.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    pub setup: String,
    pub punchline: String,
}

/// What the joke panel currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum JokeDisplay {
    #[default]
    Idle,
    Loading,
    Shown(String),
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Quiz,
    Results,
}
