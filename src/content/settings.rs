use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::apps::AppLaunch;
use crate::session::ThemeKind;
use crate::theme;
use crate::window::Window;

use super::ContentRenderer;

/// Settings is single-instance; re-opening it re-parameterizes the landing
/// tab through the launch payload.
pub struct SettingsPanel;

impl ContentRenderer for SettingsPanel {
    fn render(&self, frame: &mut Frame, area: Rect, window: &Window, _focused: bool, theme: ThemeKind) {
        let tab = match &window.launch {
            AppLaunch::SettingsTab { tab } => tab.as_str(),
            _ => "general",
        };
        let active = |name: &str| {
            if name == tab {
                Style::default()
                    .fg(theme::accent(theme))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::window_fg(theme))
            }
        };
        let lines = vec![
            Line::from(vec![
                Span::styled(" general ", active("general")),
                Span::styled(" theme ", active("theme")),
                Span::styled(" lock ", active("lock")),
            ]),
            Line::default(),
            Line::raw(format!("theme: {:?}", theme)),
            Line::raw("lock:  Ctrl/Cmd+L locks the session"),
        ];
        frame.render_widget(
            Paragraph::new(lines).style(
                Style::default()
                    .fg(theme::window_fg(theme))
                    .bg(theme::window_bg(theme)),
            ),
            area,
        );
    }
}
