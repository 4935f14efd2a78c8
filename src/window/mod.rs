//! Window facade and platform capability
//!
//! [`NativeWindow`] composes a [`PlatformWindow`] implementation with the
//! input synthesizer and the event broadcasters. [`HeadlessWindow`] is an
//! in-memory platform used for tests and tooling.

mod headless;
mod native;
mod platform;

pub use headless::{HeadlessWindow, Insets};
pub use native::NativeWindow;
pub use platform::{CursorHandle, IconHandle, PlatformWindow, WindowBorder, WindowState};
