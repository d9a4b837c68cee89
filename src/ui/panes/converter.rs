//! Live converter section rendering: value input, unit selectors, result box

use crate::convert::LengthUnit;
use crate::ui::app::FocusedPane;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Render the converter section for the active category.
///
/// `result` is the already-formatted display string; this function only
/// draws, it never invokes the conversion engine.
pub fn render_converter_pane(
    frame: &mut Frame,
    area: Rect,
    input: &str,
    from_unit: LengthUnit,
    to_unit: LengthUnit,
    result: &str,
    focused_pane: FocusedPane,
) {
    // Input on top, unit selectors in the middle, result at the bottom
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(4),
        ])
        .split(area);

    render_input_box(frame, rows[0], input, focused_pane == FocusedPane::Input);

    // From / To selectors side by side
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_unit_list(
        frame,
        columns[0],
        " From ",
        from_unit,
        focused_pane == FocusedPane::FromUnit,
    );
    render_unit_list(
        frame,
        columns[1],
        " To ",
        to_unit,
        focused_pane == FocusedPane::ToUnit,
    );

    render_result_box(frame, rows[2], result);
}

fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Render the value input field with a cursor marker when focused
fn render_input_box(frame: &mut Frame, area: Rect, input: &str, is_focused: bool) {
    let block = Block::default()
        .title(" Enter Value ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let line = if input.is_empty() && !is_focused {
        Line::from(Span::styled(
            "Enter amount",
            Style::default().fg(DEFAULT_THEME.comment),
        ))
    } else {
        let mut spans = vec![Span::styled(
            input.to_string(),
            Style::default().fg(DEFAULT_THEME.value),
        )];
        if is_focused {
            spans.push(Span::styled(
                "_",
                Style::default().fg(DEFAULT_THEME.secondary),
            ));
        }
        Line::from(spans)
    };

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}

/// Render one unit selector as a list with the selected unit highlighted
fn render_unit_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    selected: LengthUnit,
    is_focused: bool,
) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let items: Vec<ListItem> = LengthUnit::ALL
        .iter()
        .map(|&unit| {
            if unit == selected {
                ListItem::new(format!(" {} ", unit.label())).style(
                    Style::default()
                        .bg(DEFAULT_THEME.primary)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(format!(" {} ", unit.label()))
                    .style(Style::default().fg(DEFAULT_THEME.fg))
            }
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

fn render_result_box(frame: &mut Frame, area: Rect, result: &str) {
    let block = Block::default()
        .title(" Result ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let paragraph = Paragraph::new(Line::from(Span::styled(
        result.to_string(),
        Style::default()
            .fg(DEFAULT_THEME.success)
            .add_modifier(Modifier::BOLD),
    )))
    .block(block);

    frame.render_widget(paragraph, area);
}
