use crate::models::JokeDisplay;
use crate::render::QuizView;
use crate::ui::joke::draw_joke;
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::truncate_string;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

const MAX_DECK_NAME_WIDTH: usize = 40;

/// Deck name as shown in screen headers, shortened when it would crowd out
/// the progress or score.
pub(crate) fn deck_title(deck_name: &str) -> String {
    truncate_string(deck_name, MAX_DECK_NAME_WIDTH)
}

/// Key label in the help bar. Disabled controls are dimmed.
pub(crate) fn key_span(label: &'static str, enabled: bool) -> Span<'static> {
    let style = if enabled {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Span::styled(label, style)
}

pub(crate) fn action_span(label: &'static str, enabled: bool) -> Span<'static> {
    if enabled {
        Span::from(label)
    } else {
        Span::styled(label, Style::default().fg(Color::DarkGray))
    }
}

pub fn draw_quiz(f: &mut Frame, view: &QuizView, deck_name: &str, joke: &JokeDisplay) {
    let layout = calculate_quiz_chunks(f.area());

    let header = Paragraph::new(format!("{} - {}", view.progress, deck_title(deck_name)))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let question = Paragraph::new(Text::from(view.question_text.as_str()))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question, layout.question_area);

    let items: Vec<ListItem> = view
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let marker = if option.selected { "(•)" } else { "( )" };
            let mut style = Style::default();
            if option.selected {
                style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
            }
            if option.highlighted {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(format!("{} {}. {}", marker, i + 1, option.label)).style(style)
        })
        .collect();

    let options_title = format!("Options ({} / {} answered)", view.answered, view.total);
    let options = List::new(items).block(Block::default().borders(Borders::ALL).title(options_title));
    f.render_widget(options, layout.options_area);

    draw_joke(f, layout.joke_area, joke);

    let help_text = vec![
        Line::from(vec![
            key_span("←", view.previous_enabled),
            action_span(" Previous  ", view.previous_enabled),
            key_span("→", view.next_enabled),
            action_span(" Next  ", view.next_enabled),
            key_span("↑/↓", true),
            Span::from(" Move  "),
            key_span("Enter/1-9", true),
            Span::from(" Select"),
        ]),
        Line::from(vec![
            key_span("s", view.submit_enabled),
            action_span(" Submit  ", view.submit_enabled),
            key_span("j", true),
            Span::from(" Joke  "),
            key_span("q", true),
            Span::from(" Quit"),
        ]),
    ];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_title_keeps_short_names() {
        assert_eq!(deck_title("JavaScript Basics"), "JavaScript Basics");
    }

    #[test]
    fn test_deck_title_shortens_long_names() {
        let title = deck_title(&"x".repeat(60));
        assert_eq!(title.len(), MAX_DECK_NAME_WIDTH);
        assert!(title.ends_with("..."));
    }
}
