//! Churns the window store (open, focus, snap, maximize, cycle, close) while
//! rendering frames into an offscreen backend, and reports operation and
//! frame throughput. Useful for catching regressions in the stacking-order
//! bookkeeping without a live terminal.

use std::time::{Duration, Instant};

use clap::Parser;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use term_desk::apps::AppId;
use term_desk::content::RendererRegistry;
use term_desk::geometry::{SnapSide, Viewport};
use term_desk::session::Session;
use term_desk::shortcuts::Platform;
use term_desk::ui;
use term_desk::window::{CycleDirection, OpenOptions, WindowManager};

#[derive(Parser, Debug)]
#[command(
    name = "desk-bench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Window-store churn benchmark"
)]
struct BenchCli {
    /// How long to run the benchmark.
    #[arg(short = 'd', long = "duration", value_name = "SECONDS", default_value_t = 5.0)]
    duration_seconds: f64,

    /// Viewport width in cells.
    #[arg(long, default_value_t = 200)]
    width: u16,

    /// Viewport height in cells.
    #[arg(long, default_value_t = 60)]
    height: u16,

    /// Render a frame every N store operations. 0 disables rendering.
    #[arg(long, default_value_t = 16)]
    render_every: u32,
}

fn main() {
    let cli = BenchCli::parse();
    if !(0.5..=600.0).contains(&cli.duration_seconds) {
        eprintln!("duration must be between 0.5 and 600 seconds");
        std::process::exit(2);
    }
    let duration = Duration::from_secs_f64(cli.duration_seconds);

    let viewport = Viewport::new(cli.width, cli.height);
    let mut wm = WindowManager::new(viewport);
    let session = Session::default();
    let registry = RendererRegistry::with_defaults(Platform::Other);
    let backend = TestBackend::new(cli.width, cli.height);
    let mut terminal = Terminal::new(backend).expect("offscreen terminal");

    let apps = [
        AppId::About,
        AppId::Projects,
        AppId::Contact,
        AppId::MediaViewer,
        AppId::Snake,
    ];

    let start = Instant::now();
    let mut ops: u64 = 0;
    let mut frames: u64 = 0;
    let mut opened: Vec<term_desk::window::WindowId> = Vec::new();

    while start.elapsed() < duration {
        let step = ops as usize;
        match step % 6 {
            0 => opened.push(wm.open(apps[step % apps.len()], OpenOptions::default())),
            1 => {
                if let Some(&id) = opened.first() {
                    wm.focus(id);
                }
            }
            2 => {
                if let Some(&id) = opened.last() {
                    wm.snap(id, if step % 2 == 0 { SnapSide::Left } else { SnapSide::Right });
                }
            }
            3 => {
                if let Some(&id) = opened.last() {
                    wm.toggle_maximize(id);
                }
            }
            4 => wm.cycle_focus(CycleDirection::Forward),
            _ => {
                // cap the population so the run measures churn, not growth
                if opened.len() > 32
                    && let Some(id) = opened.pop()
                {
                    wm.close(id);
                }
            }
        }
        ops += 1;

        if cli.render_every > 0 && ops % cli.render_every as u64 == 0 {
            terminal
                .draw(|frame| ui::draw(frame, &wm, &registry, &session, None))
                .expect("draw");
            frames += 1;
        }
    }

    let secs = start.elapsed().as_secs_f64();
    println!("windows live:   {}", wm.len());
    println!("store ops:      {ops} ({:.0}/s)", ops as f64 / secs);
    println!("frames:         {frames} ({:.1}/s)", frames as f64 / secs);
}
