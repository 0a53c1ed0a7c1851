mod joke;
pub mod layout;
mod quiz;
mod results;

pub use joke::draw_joke;
pub use layout::{calculate_quiz_chunks, calculate_results_chunks};
pub use quiz::draw_quiz;
pub use results::{draw_results, review_text, score_line};

use crate::app::App;
use crate::models::AppState;
use ratatui::Frame;

pub fn draw_app(f: &mut Frame, app: &mut App) {
    match (app.app_state, app.report.as_ref()) {
        (AppState::Results, Some(report)) => {
            app.review_scroll =
                draw_results(f, report, &app.deck_name, app.review_scroll, &app.joke);
        }
        _ => draw_quiz(f, &app.view(), &app.deck_name, &app.joke),
    }
}
