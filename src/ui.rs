//! Paints the desktop: top bar, window stack (ascending z), minimized
//! strip, overlays, and the lock screen. Pure view code; all state comes in
//! by reference.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::apps::AppId;
use crate::content::RendererRegistry;
use crate::session::{Session, ThemeKind};
use crate::theme;
use crate::window::{SnapState, Window, WindowManager};

/// Higher-level surfaces the dispatcher can ask for. Rendered above the
/// window stack; input routing while one is open happens in the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Overview,
    AppGrid,
}

pub fn draw(
    frame: &mut Frame,
    wm: &WindowManager,
    registry: &RendererRegistry,
    session: &Session,
    overlay: Option<Overlay>,
) {
    let theme = session.theme();
    let screen = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme::desktop_bg(theme))),
        screen,
    );

    if session.locked() {
        draw_lock_screen(frame, screen, session);
        return;
    }

    draw_top_bar(frame, screen, wm, session);

    for window in wm.visible_stack() {
        draw_window(frame, screen, wm, registry, session, window);
    }

    draw_minimized_strip(frame, screen, wm, session);

    match overlay {
        Some(Overlay::Overview) => draw_overview(frame, screen, wm, session),
        Some(Overlay::AppGrid) => draw_app_grid(frame, screen, session),
        None => {}
    }
}

fn draw_top_bar(frame: &mut Frame, screen: Rect, wm: &WindowManager, session: &Session) {
    let theme = session.theme();
    let bar = Rect {
        height: wm.chrome_top().min(screen.height),
        ..screen
    };
    if bar.height == 0 {
        return;
    }
    let focused_title = wm
        .focused_window()
        .map(|w| w.title.as_str())
        .unwrap_or("desktop");
    let right = format!(
        "{} open / {} min ",
        wm.visible_stack().len(),
        wm.minimized_windows().len()
    );
    let left = format!(" term-desk  ·  {focused_title}");
    // cell counts, not byte lengths: the separator is multi-byte
    let pad = (bar.width as usize).saturating_sub(left.chars().count() + right.chars().count());
    let line = Line::from(vec![
        Span::styled(left, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(pad)),
        Span::raw(right),
    ]);
    frame.render_widget(
        Paragraph::new(line).style(
            Style::default()
                .fg(theme::top_bar_fg(theme))
                .bg(theme::top_bar_bg(theme)),
        ),
        bar,
    );
}

fn draw_window(
    frame: &mut Frame,
    screen: Rect,
    wm: &WindowManager,
    registry: &RendererRegistry,
    session: &Session,
    window: &Window,
) {
    let theme = session.theme();
    let area = window.bounds.to_rect(screen);
    if area.width == 0 || area.height == 0 {
        return;
    }
    let focused = wm.focused() == Some(window.id);
    let border = if focused {
        theme::border_focused(theme)
    } else {
        theme::border_unfocused(theme)
    };
    let marker = match (window.maximized, window.snap) {
        (true, _) => " [max]",
        (_, SnapState::Left) => " [left]",
        (_, SnapState::Right) => " [right]",
        _ => "",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(format!(" {}{} ", window.title, marker))
        .style(Style::default().bg(theme::window_bg(theme)));
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);
    registry.render(frame, inner, window, focused, theme);
}

fn draw_minimized_strip(frame: &mut Frame, screen: Rect, wm: &WindowManager, session: &Session) {
    let minimized = wm.minimized_windows();
    if minimized.is_empty() || screen.height == 0 {
        return;
    }
    let theme = session.theme();
    let strip = Rect {
        y: screen.y + screen.height - 1,
        height: 1,
        ..screen
    };
    let labels: Vec<String> = minimized.iter().map(|w| format!("▁ {}", w.title)).collect();
    frame.render_widget(Clear, strip);
    frame.render_widget(
        Paragraph::new(labels.join("   ")).style(
            Style::default()
                .fg(theme::top_bar_fg(theme))
                .bg(theme::top_bar_bg(theme)),
        ),
        strip,
    );
}

fn centered(screen: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(screen.width);
    let h = height.min(screen.height);
    Rect {
        x: screen.x + (screen.width - w) / 2,
        y: screen.y + (screen.height - h) / 2,
        width: w,
        height: h,
    }
}

fn draw_overview(frame: &mut Frame, screen: Rect, wm: &WindowManager, session: &Session) {
    let theme = session.theme();
    let mut lines = vec![Line::from(Span::styled(
        "Overview",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    let stack = wm.visible_stack();
    if stack.is_empty() {
        lines.push(Line::raw("no open windows"));
    }
    for (i, window) in stack.iter().rev().enumerate().take(9) {
        let focused = wm.focused() == Some(window.id);
        let mark = if focused { "●" } else { " " };
        lines.push(Line::raw(format!("{} {} {}", i + 1, mark, window.title)));
    }
    lines.push(Line::default());
    lines.push(Line::raw("digit focuses · Esc closes"));
    draw_overlay_panel(frame, screen, theme, lines);
}

fn draw_app_grid(frame: &mut Frame, screen: Rect, session: &Session) {
    let theme = session.theme();
    let mut lines = vec![Line::from(Span::styled(
        "Apps",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for (i, app) in AppId::ALL.iter().enumerate() {
        lines.push(Line::raw(format!("{} {}", i + 1, app.spec().title)));
    }
    lines.push(Line::default());
    lines.push(Line::raw("digit opens · Esc closes"));
    draw_overlay_panel(frame, screen, theme, lines);
}

fn draw_overlay_panel(frame: &mut Frame, screen: Rect, theme: ThemeKind, lines: Vec<Line>) {
    let height = lines.len() as u16 + 2;
    let area = centered(screen, 36, height);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::accent(theme)))
        .style(Style::default().bg(theme::window_bg(theme)));
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().fg(theme::window_fg(theme))),
        inner,
    );
}

fn draw_lock_screen(frame: &mut Frame, screen: Rect, session: &Session) {
    let theme = session.theme();
    let area = centered(screen, 40, 7);
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "term-desk",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw("session locked"),
        Line::default(),
        Line::raw("press any key to unlock"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(theme::lock_fg(theme)))
            .centered(),
        area,
    );
}
