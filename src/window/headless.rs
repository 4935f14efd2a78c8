//! In-memory platform window
//!
//! Behaves like a decorated desktop window without talking to any OS: the
//! bounds include a frame whose thickness depends on the border style, so
//! the client size is always smaller than the outer size unless the border
//! is hidden.

use tracing::debug;

use super::platform::{CursorHandle, IconHandle, PlatformWindow, WindowBorder, WindowState};
use crate::config::WindowConfig;
use crate::error::PlatformError;
use crate::geometry::{Point, Rectangle, Size};
use crate::input::{InputDriver, NullInputDriver};

/// Thickness of the decoration frame on each side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Insets {
    /// Frame used for a given border style
    pub const fn for_border(border: WindowBorder) -> Self {
        match border {
            WindowBorder::Resizable => Self {
                left: 4,
                top: 24,
                right: 4,
                bottom: 4,
            },
            WindowBorder::Fixed => Self {
                left: 1,
                top: 24,
                right: 1,
                bottom: 1,
            },
            WindowBorder::Hidden => Self {
                left: 0,
                top: 0,
                right: 0,
                bottom: 0,
            },
        }
    }

    pub const fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    pub const fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

/// A [`PlatformWindow`] that keeps all state in memory
#[derive(Debug, Clone)]
pub struct HeadlessWindow {
    bounds: Rectangle,
    border: WindowBorder,
    state: WindowState,
    visible: bool,
    focused: bool,
    exists: bool,
    released: bool,
    title: String,
    icon: Option<IconHandle>,
    cursor: CursorHandle,
}

impl HeadlessWindow {
    /// Creates a window whose client area has the given size
    pub fn new(title: impl Into<String>, location: Point, client_size: Size) -> Self {
        let border = WindowBorder::default();
        Self {
            bounds: Rectangle::from_parts(location, Self::outer_size(client_size, border)),
            border,
            state: WindowState::Normal,
            visible: true,
            focused: false,
            exists: true,
            released: false,
            title: title.into(),
            icon: None,
            cursor: CursorHandle::DEFAULT,
        }
    }

    /// Creates a window from configuration, rejecting empty client areas
    pub fn from_config(config: &WindowConfig) -> Result<Self, PlatformError> {
        let client_size = config.client_size();
        if client_size.is_empty() {
            return Err(PlatformError::Backend(format!(
                "client size must be positive, got {}x{}",
                client_size.width, client_size.height
            )));
        }

        let mut window = Self::new(config.title.clone(), config.location(), client_size);
        window.set_window_border(config.border);
        window.visible = config.visible;
        Ok(window)
    }

    /// Simulates the OS moving keyboard focus
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn insets(&self) -> Insets {
        Insets::for_border(self.border)
    }

    fn outer_size(client: Size, border: WindowBorder) -> Size {
        let insets = Insets::for_border(border);
        Size::new(
            client.width.saturating_add(insets.horizontal()),
            client.height.saturating_add(insets.vertical()),
        )
    }
}

impl PlatformWindow for HeadlessWindow {
    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rectangle) {
        let insets = self.insets();
        // The outer size can never be smaller than the frame itself
        self.bounds = Rectangle::new(
            bounds.x,
            bounds.y,
            bounds.width.max(insets.horizontal()),
            bounds.height.max(insets.vertical()),
        );
    }

    fn client_size(&self) -> Size {
        let insets = self.insets();
        Size::new(
            self.bounds.width.saturating_sub(insets.horizontal()),
            self.bounds.height.saturating_sub(insets.vertical()),
        )
    }

    fn set_client_size(&mut self, size: Size) {
        let clamped = Size::new(size.width.max(0), size.height.max(0));
        self.bounds = self
            .bounds
            .with_size(Self::outer_size(clamped, self.border));
    }

    fn client_origin(&self) -> Point {
        let insets = self.insets();
        Point::new(insets.left, insets.top)
    }

    fn exists(&self) -> bool {
        self.exists
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn icon(&self) -> Option<IconHandle> {
        self.icon
    }

    fn set_icon(&mut self, icon: Option<IconHandle>) {
        self.icon = icon;
    }

    fn cursor(&self) -> CursorHandle {
        self.cursor
    }

    fn set_cursor(&mut self, cursor: CursorHandle) {
        self.cursor = cursor;
    }

    fn window_state(&self) -> WindowState {
        self.state
    }

    fn set_window_state(&mut self, state: WindowState) {
        self.state = state;
    }

    fn window_border(&self) -> WindowBorder {
        self.border
    }

    /// Keeps the client size and grows or shrinks the frame around it
    fn set_window_border(&mut self, border: WindowBorder) {
        let client = self.client_size();
        self.border = border;
        self.bounds = self.bounds.with_size(Self::outer_size(client, border));
    }

    fn close(&mut self) {
        self.visible = false;
        self.exists = false;
    }

    fn create_input_driver(&mut self) -> Box<dyn InputDriver> {
        Box::new(NullInputDriver)
    }

    fn release(&mut self) -> Result<(), PlatformError> {
        if self.released {
            return Err(PlatformError::AlreadyDestroyed);
        }
        debug!(title = %self.title, "Releasing headless window");
        self.released = true;
        self.exists = false;
        self.visible = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> HeadlessWindow {
        HeadlessWindow::new("test", Point::new(10, 20), Size::new(100, 200))
    }

    #[test]
    fn test_bounds_include_frame() {
        let w = window();
        assert_eq!(w.bounds(), Rectangle::new(10, 20, 108, 228));
        assert_eq!(w.client_size(), Size::new(100, 200));
        assert_eq!(w.client_origin(), Point::new(4, 24));
    }

    #[test]
    fn test_set_client_size_keeps_origin() {
        let mut w = window();
        w.set_client_size(Size::new(50, 60));
        assert_eq!(w.bounds().location(), Point::new(10, 20));
        assert_eq!(w.client_size(), Size::new(50, 60));
    }

    #[test]
    fn test_border_change_preserves_client_size() {
        let mut w = window();
        w.set_window_border(WindowBorder::Hidden);
        assert_eq!(w.bounds(), Rectangle::new(10, 20, 100, 200));
        assert_eq!(w.client_size(), Size::new(100, 200));

        w.set_window_border(WindowBorder::Fixed);
        assert_eq!(w.client_size(), Size::new(100, 200));
        assert_eq!(w.bounds().size(), Size::new(102, 225));
    }

    #[test]
    fn test_bounds_never_smaller_than_frame() {
        let mut w = window();
        w.set_bounds(Rectangle::new(0, 0, 1, 1));
        assert_eq!(w.client_size(), Size::new(0, 0));
    }

    #[test]
    fn test_from_config_rejects_empty_size() {
        let config = WindowConfig {
            width: 0,
            ..WindowConfig::default()
        };
        assert!(matches!(
            HeadlessWindow::from_config(&config),
            Err(PlatformError::Backend(_))
        ));
    }

    #[test]
    fn test_from_config_applies_border_and_visibility() {
        let config = WindowConfig {
            border: WindowBorder::Hidden,
            visible: false,
            ..WindowConfig::default()
        };
        let w = HeadlessWindow::from_config(&config).expect("valid config");
        assert_eq!(w.bounds(), Rectangle::new(100, 100, 800, 600));
        assert!(!w.visible());
    }

    #[test]
    fn test_release_after_close_succeeds() {
        let mut w = window();
        w.close();
        assert!(!w.exists());
        assert!(w.release().is_ok());
    }

    #[test]
    fn test_release_twice_reports_destroyed() {
        let mut w = window();
        assert!(w.release().is_ok());
        assert!(!w.exists());
        assert!(matches!(w.release(), Err(PlatformError::AlreadyDestroyed)));
    }
}
