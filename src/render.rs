use crate::quiz::QuizStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub label: String,
    /// The recorded answer for this question is this option.
    pub selected: bool,
    /// The keyboard cursor is on this option.
    pub highlighted: bool,
}

/// Everything the quiz screen shows, derived from the store alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizView {
    pub progress: String,
    pub question_text: String,
    pub options: Vec<OptionView>,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub submit_enabled: bool,
    pub answered: usize,
    pub total: usize,
}

pub fn progress_label(store: &QuizStore) -> String {
    format!(
        "Question {} / {}",
        store.current_index() + 1,
        store.question_count()
    )
}

/// Builds the view for the current question. Submitting is always allowed,
/// even with unanswered questions; those show up as "No answer" in the review.
pub fn quiz_view(store: &QuizStore, option_cursor: usize) -> QuizView {
    let index = store.current_index();
    let question = store.current_question();
    let answer = store.answer_for(index);

    let options = question
        .options
        .iter()
        .enumerate()
        .map(|(i, label)| OptionView {
            label: label.clone(),
            selected: answer == Some(i),
            highlighted: option_cursor == i,
        })
        .collect();

    QuizView {
        progress: progress_label(store),
        question_text: format!("Q{}. {}", index + 1, question.text),
        options,
        previous_enabled: !store.is_first(),
        next_enabled: !store.is_last(),
        submit_enabled: true,
        answered: store.answered_count(),
        total: store.question_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::builtin_questions;

    fn store() -> QuizStore {
        QuizStore::new(builtin_questions())
    }

    #[test]
    fn test_first_question_view() {
        let view = quiz_view(&store(), 0);
        assert_eq!(view.progress, "Question 1 / 5");
        assert_eq!(
            view.question_text,
            "Q1. Which keyword declares a block-scoped variable in modern JavaScript?"
        );
        assert_eq!(view.options.len(), 4);
        assert!(!view.previous_enabled);
        assert!(view.next_enabled);
        assert!(view.submit_enabled);
        assert!(view.options.iter().all(|o| !o.selected));
    }

    #[test]
    fn test_last_question_disables_next() {
        let mut store = store();
        store.go_to(4);
        let view = quiz_view(&store, 0);
        assert_eq!(view.progress, "Question 5 / 5");
        assert!(view.previous_enabled);
        assert!(!view.next_enabled);
    }

    #[test]
    fn test_selection_is_preselected_for_every_question() {
        let mut store = store();
        for q in 0..store.question_count() {
            let option = (q + 1) % 4;
            store.select(q, option).unwrap();
            store.go_to(q);

            let view = quiz_view(&store, 0);
            let selected: Vec<usize> = view
                .options
                .iter()
                .enumerate()
                .filter(|(_, o)| o.selected)
                .map(|(i, _)| i)
                .collect();
            assert_eq!(selected, vec![option]);
        }
    }

    #[test]
    fn test_selection_is_per_question() {
        let mut store = store();
        store.select(0, 2).unwrap();
        store.next();
        let view = quiz_view(&store, 0);
        assert!(view.options.iter().all(|o| !o.selected));
    }

    #[test]
    fn test_submit_enabled_with_partial_answers() {
        let mut store = store();
        store.select(0, 1).unwrap();
        let view = quiz_view(&store, 0);
        assert!(view.submit_enabled);
        assert_eq!(view.answered, 1);
        assert_eq!(view.total, 5);
    }

    #[test]
    fn test_highlight_follows_cursor() {
        let view = quiz_view(&store(), 2);
        let highlighted: Vec<bool> = view.options.iter().map(|o| o.highlighted).collect();
        assert_eq!(highlighted, vec![false, false, true, false]);
    }
}
