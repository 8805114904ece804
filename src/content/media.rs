use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::apps::AppLaunch;
use crate::session::ThemeKind;
use crate::theme;
use crate::window::Window;

use super::ContentRenderer;

/// Shows which file was launched and a placeholder canvas. Decoding real
/// media is out of scope; the panel only demonstrates the launch-payload
/// contract.
pub struct MediaViewerPanel;

impl ContentRenderer for MediaViewerPanel {
    fn render(&self, frame: &mut Frame, area: Rect, window: &Window, _focused: bool, theme: ThemeKind) {
        let path = match &window.launch {
            AppLaunch::Media { path } => path.as_str(),
            _ => "(nothing queued)",
        };
        let header = Line::from(vec![
            Span::raw("now showing: "),
            Span::styled(
                path,
                Style::default()
                    .fg(theme::accent(theme))
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let canvas = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::border_unfocused(theme)));
        let body = Paragraph::new(vec![header, Line::default(), Line::raw("▒▒▒ preview ▒▒▒")])
            .style(
                Style::default()
                    .fg(theme::window_fg(theme))
                    .bg(theme::window_bg(theme)),
            )
            .block(canvas);
        frame.render_widget(body, area);
    }
}
