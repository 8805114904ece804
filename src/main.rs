use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use term_desk::apps::{AppId, AppLaunch};
use term_desk::content::RendererRegistry;
use term_desk::dispatcher::{Dispatcher, normalize};
use term_desk::drivers::console::ConsoleInputDriver;
use term_desk::event_loop::{ControlFlow, EventLoop};
use term_desk::geometry::Viewport;
use term_desk::session::{Session, ThemeKind};
use term_desk::shortcuts::{Platform, ShortcutAction};
use term_desk::tracing_sub;
use term_desk::ui::{self, Overlay};
use term_desk::window::{OpenOptions, WindowManager};

#[derive(Parser, Debug)]
#[command(name = "term-desk", version, about = "A desktop environment simulator for the terminal")]
struct Cli {
    /// Color theme.
    #[arg(long, value_enum, default_value_t = ThemeKind::Dark)]
    theme: ThemeKind,

    /// Start with the session locked.
    #[arg(long)]
    locked: bool,

    /// Append structured logs to this file (the alternate screen owns the tty).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Repaint rate.
    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    /// Apps to open at startup (about, projects, contact, media, snake,
    /// settings, shortcuts). Repeatable.
    #[arg(long = "open", value_name = "APP")]
    open: Vec<String>,
}

/// Everything the event handler needs in one place: the store, its
/// collaborators, and the transient overlay state.
struct Shell {
    wm: WindowManager,
    session: Session,
    dispatcher: Dispatcher,
    registry: RendererRegistry,
    overlay: Option<Overlay>,
}

impl Shell {
    fn new(cli: &Cli, viewport: Viewport) -> Result<Self, term_desk::apps::ShellError> {
        let platform = Platform::detect();
        let mut wm = WindowManager::new(viewport);
        for name in &cli.open {
            let app: AppId = name.parse()?;
            wm.open(app, OpenOptions::default());
        }
        Ok(Self {
            wm,
            session: Session::new(cli.theme, cli.locked),
            dispatcher: Dispatcher::new(platform),
            registry: RendererRegistry::with_defaults(platform),
            overlay: None,
        })
    }

    fn on_key(&mut self, key: KeyEvent) -> ControlFlow {
        if key.kind != KeyEventKind::Press {
            return ControlFlow::Continue;
        }

        // Lock screen gate: any key unlocks, nothing else is dispatched.
        if self.session.locked() {
            self.session.unlock_screen();
            return ControlFlow::Continue;
        }

        // Shell-level quit, outside the shortcut table. Compare the folded
        // chord, not the raw event: shifted characters arrive upper-cased.
        let primary = self.dispatcher.platform().primary_modifier();
        let (code, mods) = normalize(&key);
        if code == KeyCode::Char('q') && mods == primary | KeyModifiers::SHIFT {
            return ControlFlow::Quit;
        }

        if self.overlay.is_some() && self.on_overlay_key(key) {
            return ControlFlow::Continue;
        }

        let text_input_focused = self
            .wm
            .focused_window()
            .is_some_and(|w| w.app == AppId::Contact);
        if let Some(action) = self.dispatcher.handle_key(&key, text_input_focused) {
            self.apply(action);
        }
        ControlFlow::Continue
    }

    /// Input routing while an overlay is up. Returns true when the key was
    /// consumed by the overlay.
    fn on_overlay_key(&mut self, key: KeyEvent) -> bool {
        let Some(overlay) = self.overlay else {
            return false;
        };
        match key.code {
            KeyCode::Esc => {
                self.overlay = None;
                true
            }
            KeyCode::Char(c @ '1'..='9') => {
                let idx = (c as u8 - b'1') as usize;
                match overlay {
                    Overlay::Overview => {
                        let target = self
                            .wm
                            .visible_stack()
                            .iter()
                            .rev()
                            .nth(idx)
                            .map(|w| w.id);
                        if let Some(id) = target {
                            self.wm.focus(id);
                            self.overlay = None;
                        }
                    }
                    Overlay::AppGrid => {
                        if let Some(app) = AppId::ALL.get(idx).copied() {
                            self.wm.open(app, OpenOptions::default());
                            self.overlay = None;
                        }
                    }
                }
                true
            }
            _ => false,
        }
    }

    fn apply(&mut self, action: ShortcutAction) {
        match action {
            ShortcutAction::LockScreen => self.session.lock_screen(),
            ShortcutAction::OpenApp(app) => {
                let opts = match app {
                    AppId::MediaViewer => OpenOptions::with_launch(AppLaunch::Media {
                        path: "~/media/demo.png".into(),
                    }),
                    _ => OpenOptions::default(),
                };
                self.wm.open(app, opts);
            }
            ShortcutAction::CloseActive => self.wm.close_active(),
            ShortcutAction::MinimizeActive => {
                if let Some(id) = self.wm.focused() {
                    self.wm.minimize(id);
                }
            }
            ShortcutAction::ToggleMaximizeActive => {
                if let Some(id) = self.wm.focused() {
                    self.wm.toggle_maximize(id);
                }
            }
            ShortcutAction::SnapActive(side) => {
                if let Some(id) = self.wm.focused() {
                    self.wm.snap(id, side);
                }
            }
            ShortcutAction::MoveActive(dx, dy) => {
                if let Some(id) = self.wm.focused() {
                    self.wm.move_by(id, dx, dy);
                }
            }
            ShortcutAction::ResizeActive(dw, dh) => {
                if let Some(id) = self.wm.focused()
                    && let Some(w) = self.wm.get(id)
                {
                    let width = w.bounds.w.saturating_add_signed(dw as i16);
                    let height = w.bounds.h.saturating_add_signed(dh as i16);
                    self.wm.resize(id, width, height);
                }
            }
            ShortcutAction::CycleWindow(direction) => self.wm.cycle_focus(direction),
            ShortcutAction::ShowOverview => self.overlay = Some(Overlay::Overview),
            ShortcutAction::ShowAppGrid => self.overlay = Some(Overlay::AppGrid),
        }
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    tracing_sub::init(cli.log_file.as_deref())?;

    let (cols, rows) = terminal::size()?;
    let mut shell = Shell::new(&cli, Viewport::new(cols, rows)).map_err(io::Error::other)?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let poll = Duration::from_secs_f64(1.0 / cli.fps.clamp(1.0, 120.0));
    let mut event_loop = EventLoop::new(ConsoleInputDriver::new(), poll);
    let result = event_loop.run(|event| {
        match event {
            Some(Event::Key(key)) => {
                if let ControlFlow::Quit = shell.on_key(key) {
                    return Ok(ControlFlow::Quit);
                }
            }
            Some(Event::Resize(w, h)) => {
                shell.wm.handle_viewport_resize(Viewport::new(w, h));
            }
            _ => {}
        }
        terminal.draw(|frame| {
            ui::draw(
                frame,
                &shell.wm,
                &shell.registry,
                &shell.session,
                shell.overlay,
            );
        })?;
        Ok(ControlFlow::Continue)
    });

    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
