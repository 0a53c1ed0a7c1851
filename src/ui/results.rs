use crate::models::{JokeDisplay, ScoreReport};
use crate::ui::joke::draw_joke;
use crate::ui::layout::calculate_results_chunks;
use crate::ui::quiz::{deck_title, key_span};
use crate::utils::{calculate_max_scroll, estimate_wrapped_height};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn score_line(report: &ScoreReport) -> String {
    format!("{} / {} correct", report.correct_count, report.total)
}

pub fn review_text(report: &ScoreReport) -> Text<'static> {
    let mut text = Text::default();

    for (i, entry) in report.review.iter().enumerate() {
        let (mark, colour) = if entry.is_correct {
            ("✓", Color::Green)
        } else {
            ("✗", Color::Red)
        };
        text.push_line(Line::from(vec![
            Span::styled(
                format!("{} Q{}. ", mark, i + 1),
                Style::default().fg(colour).add_modifier(Modifier::BOLD),
            ),
            Span::from(entry.question_text.clone()),
        ]));
        text.push_line(Line::from(vec![
            Span::from("   Your answer: "),
            Span::styled(
                entry.chosen_option_text.clone(),
                Style::default().fg(colour).add_modifier(Modifier::ITALIC),
            ),
        ]));
        text.push_line(Line::from(vec![
            Span::from("   Correct: "),
            Span::styled(
                entry.correct_option_text.clone(),
                Style::default().add_modifier(Modifier::ITALIC),
            ),
        ]));
        text.push_line(Line::from(""));
    }

    text
}

/// Draws the score and review. Returns the scroll offset actually used so the
/// caller can keep its own offset from drifting past the end.
pub fn draw_results(
    f: &mut Frame,
    report: &ScoreReport,
    deck_name: &str,
    review_scroll: u16,
    joke: &JokeDisplay,
) -> u16 {
    let layout = calculate_results_chunks(f.area());

    let title = Paragraph::new(format!(
        "{} - {} ({:.0}%)",
        deck_title(deck_name),
        score_line(report),
        report.percentage()
    ))
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let review = review_text(report);
    let visible_height = layout.review_area.height.saturating_sub(2) as usize;
    let text_width = layout.review_area.width.saturating_sub(2) as usize;
    let plain: Vec<String> = review
        .lines
        .iter()
        .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect();
    let content_height = estimate_wrapped_height(plain.iter().map(String::as_str), text_width);
    let scroll = review_scroll.min(calculate_max_scroll(content_height, visible_height));

    let review = Paragraph::new(review)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(Block::default().borders(Borders::ALL).title("Review"));
    f.render_widget(review, layout.review_area);

    draw_joke(f, layout.joke_area, joke);

    let help_text = vec![Line::from(vec![
        key_span("↑/↓", true),
        Span::from(" Scroll  "),
        key_span("r", true),
        Span::from(" Retry  "),
        key_span("b", true),
        Span::from(" Back  "),
        key_span("j", true),
        Span::from(" Joke  "),
        key_span("q", true),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);

    scroll
}
