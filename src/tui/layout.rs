//! Single-window layout.
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │         Programming Language Roulette           │
//! ├─────────────────────────────────────────────────┤
//! │                                                 │
//! │        Python: A dynamic language               │
//! │                                                 │
//! ├─────────────────────────────────────────────────┤
//! │ 42 left   s:Spin  r:Reset  q:Quit               │
//! └─────────────────────────────────────────────────┘
//! ```

use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::app::{MessageTone, RouletteApp};

/// Draw the full TUI layout.
pub fn draw(f: &mut Frame, app: &RouletteApp) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Min(5),    // pick display
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    let title = Paragraph::new("Programming Language Roulette")
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(title, outer[0]);

    let pick = Paragraph::new(app.display.as_str())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(tone_style(app.tone))
        .block(Block::default().borders(Borders::ALL).title(" Pick "));
    f.render_widget(pick, outer[1]);

    let status = Line::from(vec![
        Span::styled(
            format!(" {} left ", app.remaining()),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::raw("  s:Spin  r:Reset  q:Quit"),
    ]);
    f.render_widget(Paragraph::new(status), outer[2]);
}

fn tone_style(tone: MessageTone) -> Style {
    match tone {
        MessageTone::Info => Style::default(),
        MessageTone::Pick => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        MessageTone::Error => Style::default().fg(Color::Red),
    }
}
