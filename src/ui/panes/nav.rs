//! Category navigation bar rendering

use crate::convert::Category;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the category bar at the top.
///
/// The selected category is highlighted; categories without a live table
/// are dimmed so the placeholder state is visible before navigating.
pub fn render_nav_bar(frame: &mut Frame, area: Rect, selected: Category, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Categories ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut spans: Vec<Span> = Vec::new();
    for category in Category::ALL {
        spans.push(Span::raw(" "));
        if category == selected {
            spans.push(Span::styled(
                format!(" {} ", category.name()),
                Style::default()
                    .bg(DEFAULT_THEME.primary)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ));
        } else if category.is_available() {
            spans.push(Span::styled(
                format!(" {} ", category.name()),
                Style::default().fg(DEFAULT_THEME.fg),
            ));
        } else {
            spans.push(Span::styled(
                format!(" {} ", category.name()),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
