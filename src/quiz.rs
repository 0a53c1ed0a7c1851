use crate::models::{AnswerSet, Question, QuizState};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("question {index} does not exist (quiz has {count} questions)")]
    QuestionOutOfRange { index: usize, count: usize },

    #[error("option {option} does not exist for question {question} ({count} options)")]
    OptionOutOfRange {
        question: usize,
        option: usize,
        count: usize,
    },
}

/// Ordered questions plus the user's position and selections.
///
/// Navigation is clamped to `[0, question_count - 1]` and `answers` always has
/// one slot per question.
#[derive(Debug, Clone)]
pub struct QuizStore {
    questions: Vec<Question>,
    state: QuizState,
}

impl QuizStore {
    /// `questions` must not be empty.
    pub fn new(questions: Vec<Question>) -> Self {
        let state = QuizState::new(questions.len());
        Self { questions, state }
    }

    /// Hydrates from previously saved state. The saved answers are used only
    /// when they line up with `questions` slot for slot; otherwise the quiz
    /// starts fresh.
    pub fn from_state(questions: Vec<Question>, saved: QuizState) -> Self {
        let mut store = Self::new(questions);
        if store.accepts(&saved.answers) {
            store.state.answers = saved.answers;
            store.state.current_index = saved
                .current_index
                .min(store.questions.len().saturating_sub(1));
        }
        store
    }

    fn accepts(&self, answers: &AnswerSet) -> bool {
        answers.len() == self.questions.len()
            && answers
                .iter()
                .zip(&self.questions)
                .all(|(answer, question)| answer.is_none_or(|a| a < question.options.len()))
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.state.answers
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.state.current_index]
    }

    pub fn answer_for(&self, question_index: usize) -> Option<usize> {
        self.state.answers.get(question_index).copied().flatten()
    }

    pub fn select(&mut self, question_index: usize, option_index: usize) -> Result<(), QuizError> {
        let question =
            self.questions
                .get(question_index)
                .ok_or(QuizError::QuestionOutOfRange {
                    index: question_index,
                    count: self.questions.len(),
                })?;
        if option_index >= question.options.len() {
            return Err(QuizError::OptionOutOfRange {
                question: question_index,
                option: option_index,
                count: question.options.len(),
            });
        }
        self.state.answers[question_index] = Some(option_index);
        Ok(())
    }

    pub fn go_to(&mut self, index: usize) {
        self.state.current_index = index.min(self.questions.len().saturating_sub(1));
    }

    pub fn next(&mut self) {
        if self.state.current_index < self.questions.len().saturating_sub(1) {
            self.state.current_index += 1;
        }
    }

    pub fn previous(&mut self) {
        self.state.current_index = self.state.current_index.saturating_sub(1);
    }

    pub fn is_first(&self) -> bool {
        self.state.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.state.current_index == self.questions.len().saturating_sub(1)
    }

    pub fn reset(&mut self) {
        self.state = QuizState::new(self.questions.len());
    }

    pub fn is_complete(&self) -> bool {
        self.state.answers.iter().all(Option::is_some)
    }

    pub fn answered_count(&self) -> usize {
        self.state.answers.iter().filter(|a| a.is_some()).count()
    }
}
