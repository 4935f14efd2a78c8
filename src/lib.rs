//! Window Core
//!
//! The platform-agnostic half of a native window: edge-triggered mouse event
//! synthesis, a geometry facade over platform bounds, per-occurrence event
//! broadcasters and an at-most-once disposal lifecycle.

/// Per-occurrence event broadcasters
pub mod broadcast;

/// Configuration profiles (files + environment)
pub mod config;

pub mod error;

/// Integer points, sizes and rectangles
pub mod geometry;

/// Mouse snapshots, edge detection and input payloads
pub mod input;

/// Logging setup
pub mod telemetry;

/// Window facade, platform capability and headless backend
pub mod window;

pub use broadcast::{CancelEventArgs, Event, SubscriptionId, WeakEvent, WindowEvents, WindowId};
pub use crate::config::{CoreConfig, DiagnosticsConfig, WindowConfig};
pub use error::{CoreError, PlatformError};
pub use window::{HeadlessWindow, NativeWindow, PlatformWindow};

/// Loads configuration from the environment and opens a headless window with it
pub fn headless_from_env() -> Result<NativeWindow<HeadlessWindow>, CoreError> {
    let config = CoreConfig::load_from_env()?;
    let platform = HeadlessWindow::from_config(&config.window)?;
    Ok(NativeWindow::with_diagnostics(platform, config.diagnostics))
}
