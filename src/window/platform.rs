//! Platform window capability
//!
//! Everything the core needs from an operating-system window. Implementations
//! own the native handle and the authoritative geometry; the core never caches
//! any of it.

use serde::{Deserialize, Serialize};

use crate::error::PlatformError;
use crate::geometry::{Point, Rectangle, Size};
use crate::input::InputDriver;

/// Window display state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
    Fullscreen,
}

/// Window border style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowBorder {
    /// Decorated and user-resizable
    #[default]
    Resizable,
    /// Decorated, fixed size
    Fixed,
    /// No decorations at all
    Hidden,
}

/// Opaque handle to an icon owned by the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconHandle(pub u64);

/// Opaque handle to a cursor owned by the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CursorHandle(pub u64);

impl CursorHandle {
    /// The platform's default arrow cursor
    pub const DEFAULT: Self = Self(0);
}

/// Trait implemented by each operating-system backend
pub trait PlatformWindow {
    /// Outer rectangle including decorations, in screen coordinates
    fn bounds(&self) -> Rectangle;
    fn set_bounds(&mut self, bounds: Rectangle);

    /// Size of the drawable interior
    fn client_size(&self) -> Size;
    fn set_client_size(&mut self, size: Size);

    /// Offset of the client area's top-left corner from the bounds origin
    fn client_origin(&self) -> Point {
        Point::ZERO
    }

    /// False once the native window has been destroyed
    fn exists(&self) -> bool;
    fn focused(&self) -> bool;

    fn visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool);

    fn title(&self) -> &str;
    fn set_title(&mut self, title: &str);

    fn icon(&self) -> Option<IconHandle>;
    fn set_icon(&mut self, icon: Option<IconHandle>);

    fn cursor(&self) -> CursorHandle;
    fn set_cursor(&mut self, cursor: CursorHandle);

    fn window_state(&self) -> WindowState;
    fn set_window_state(&mut self, state: WindowState);

    fn window_border(&self) -> WindowBorder;
    fn set_window_border(&mut self, border: WindowBorder);

    /// Asks the native window to close
    fn close(&mut self);

    /// Builds the legacy input driver; called once, at window construction
    fn create_input_driver(&mut self) -> Box<dyn InputDriver>;

    /// Releases native resources. Called at most once by the core.
    fn release(&mut self) -> Result<(), PlatformError>;
}
