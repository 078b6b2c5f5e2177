use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::app::{AppModel, Screen};
use crate::ui::footer::render_footer;
use crate::ui::header::render_header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK};

pub fn draw(frame: &mut Frame<'_>, state: &AppModel) {
    let (header, body, footer) = layout_regions(frame.area());
    render_header(frame, header, state);
    match state.screen {
        Screen::Counter => draw_counter(frame, body, state),
        Screen::Finder => draw_finder(frame, body, state),
    }
    render_footer(frame, footer, state);
}

fn draw_counter(frame: &mut Frame<'_>, area: Rect, state: &AppModel) {
    let counter = &state.counter;
    let text_style = Style::default().fg(HEADER_TEXT);
    let milestone_style = if counter.reached_milestone() {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_SEPARATOR)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(format!("  {}", counter.click_line()), text_style),
        Line::styled(format!("  {}", counter.milestone_line()), milestone_style),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Label: ", Style::default().fg(HEADER_SEPARATOR)),
            Span::styled(counter.label.clone(), text_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(bordered("Counter")), area);
}

fn draw_finder(frame: &mut Frame<'_>, area: Rect, state: &AppModel) {
    let finder = &state.finder;
    let text_style = Style::default().fg(HEADER_TEXT);
    let dim_style = Style::default().fg(HEADER_SEPARATOR);

    let input = if finder.input.is_empty() {
        // Watermark standing in for the empty text box.
        Span::styled("Starts with P ends with R", dim_style)
    } else {
        Span::styled(finder.input.clone(), text_style)
    };

    let found = if finder.name_found {
        Span::styled("[x] Name Found", Style::default().fg(STATUS_OK))
    } else {
        Span::styled("[ ] Name Found", dim_style)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(format!("  {}", finder.click_line()), text_style),
        Line::styled(format!("  {}", finder.action_line()), text_style),
        Line::from(""),
        Line::styled("  Find the name!", text_style),
        Line::from(vec![Span::styled("  > ", dim_style), input]),
        Line::from(""),
        Line::from(vec![Span::raw("  "), found]),
    ];

    frame.render_widget(Paragraph::new(lines).block(bordered("Finder")), area);
}

fn bordered(title: &'static str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}
