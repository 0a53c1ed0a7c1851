use crate::models::{NO_ANSWER, Question, ReviewEntry, ScoreReport};

/// Compares recorded answers against the correct ones.
///
/// `answers` is expected to have one slot per question; missing slots count as
/// unanswered. An answer index that does not name an option is shown as
/// "No answer" and scored as incorrect.
pub fn score(questions: &[Question], answers: &[Option<usize>]) -> ScoreReport {
    let review: Vec<ReviewEntry> = questions
        .iter()
        .enumerate()
        .map(|(i, question)| {
            let answer = answers.get(i).copied().flatten();
            let chosen = answer.and_then(|a| question.option(a));
            ReviewEntry {
                question_text: question.text.clone(),
                chosen_option_text: chosen.unwrap_or(NO_ANSWER).to_string(),
                correct_option_text: question.correct_option().to_string(),
                is_correct: chosen.is_some() && answer == Some(question.correct_index),
            }
        })
        .collect();

    ScoreReport {
        correct_count: review.iter().filter(|entry| entry.is_correct).count(),
        total: questions.len(),
        review,
    }
}
