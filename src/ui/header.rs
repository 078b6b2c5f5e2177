use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::app::{AppModel, Screen};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};

pub fn render_header(frame: &mut Frame<'_>, area: Rect, state: &AppModel) {
    let separator_style = Style::default().fg(HEADER_SEPARATOR);
    let line = Line::from(vec![
        Span::styled(
            "  elmtui",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  │  ", separator_style),
        tab(Screen::Counter, state.screen),
        Span::styled("  │  ", separator_style),
        tab(Screen::Finder, state.screen),
    ]);

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, area);
}

fn tab(screen: Screen, active: Screen) -> Span<'static> {
    let style = if screen == active {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    Span::styled(screen.title(), style)
}
