use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::app::{AppModel, Screen};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render_footer(frame: &mut Frame<'_>, area: Rect, state: &AppModel) {
    let hints = match state.screen {
        Screen::Counter => " Up/Down: count │ Type: edit label │ Tab: switch │ Esc: quit",
        Screen::Finder => {
            " Up/Down: count │ Type: search │ Enter: search now │ Ctrl+R: reset │ Tab: switch │ Esc: quit"
        }
    };
    let version = format!("v{} ", VERSION);

    // Calculate padding using char count, not byte count (for Unicode)
    let hints_width = hints.chars().count();
    let version_width = version.chars().count();
    let content_width = area.width.saturating_sub(2) as usize; // minus borders
    let padding = content_width
        .saturating_sub(hints_width)
        .saturating_sub(version_width);

    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

    let line = Line::from(vec![
        Span::styled(hints, text_style),
        Span::styled(" ".repeat(padding), text_style),
        Span::styled(version, text_style),
    ]);

    let widget = Paragraph::new(line)
        .style(text_style)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(widget, area);
}
