//! Placeholder panel for categories without a live conversion table
//!
//! One renderer keyed by category data; adding another pending category is
//! a data change in [`Category`], not new render logic.

use crate::convert::Category;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

/// Render the "coming soon" panel for a pending category
pub fn render_placeholder_pane(frame: &mut Frame, area: Rect, category: Category) {
    let block = Block::default()
        .title(format!(" {} ", category.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 1, 0));

    let lines = vec![
        Line::from(Span::styled(
            category.description(),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Coming soon...",
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
