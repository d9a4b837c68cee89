//! Status bar rendering with keybindings and the current status message

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the status bar at the bottom.
///
/// `converter_active` controls which keybinds are advertised: placeholder
/// categories only respond to navigation keys.
pub fn render_status_bar(frame: &mut Frame, area: Rect, message: &str, converter_active: bool) {
    // Split status bar into left and right
    let layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage(40),
            ratatui::layout::Constraint::Percentage(60),
        ])
        .split(area);

    // Left side: status message
    let left_paragraph = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", message),
        Style::default()
            .bg(DEFAULT_THEME.bar_bg)
            .fg(DEFAULT_THEME.fg),
    )))
    .style(Style::default().bg(DEFAULT_THEME.bar_bg))
    .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.bar_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.bar_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" ←/→ ", key_style),
        Span::styled(" category ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
    ];

    if converter_active {
        right_spans.extend([
            Span::styled(" ⇥ ", key_style),
            Span::styled(" focus ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" ↑/↓ ", key_style),
            Span::styled(" unit ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" c ", key_style),
            Span::styled(" clear ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
        ]);
    }

    right_spans.push(Span::styled(" q ", key_style));
    right_spans.push(Span::styled(" quit ", desc_style));

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.bar_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
