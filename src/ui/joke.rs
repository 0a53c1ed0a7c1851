use crate::models::JokeDisplay;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn draw_joke(f: &mut Frame, area: Rect, joke: &JokeDisplay) {
    let (text, style) = match joke {
        JokeDisplay::Idle => ("Press j for a random joke", Style::default().fg(Color::DarkGray)),
        JokeDisplay::Loading => (joke.text(), Style::default().fg(Color::Yellow)),
        JokeDisplay::Shown(_) => (joke.text(), Style::default()),
        JokeDisplay::Failed => (joke.text(), Style::default().fg(Color::Red)),
    };

    let panel = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Joke"));
    f.render_widget(panel, area);
}
