//! A desktop environment simulator for the terminal.
//!
//! The core is [`window::WindowManager`] — the single owner of every open
//! window's placement, stacking order and lifecycle — and the
//! [`dispatcher::Dispatcher`] that turns key chords into window-manager
//! commands. Everything else here is presentational.

pub mod apps;
pub mod constants;
pub mod content;
pub mod dispatcher;
pub mod drivers;
pub mod event_loop;
pub mod geometry;
pub mod session;
pub mod shortcuts;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod window;
