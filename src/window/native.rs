//! Platform-agnostic window facade

use tracing::{debug, error, info, warn};

use super::platform::{CursorHandle, IconHandle, PlatformWindow, WindowBorder, WindowState};
use crate::broadcast::{CancelEventArgs, WindowEvents, WindowId};
use crate::config::DiagnosticsConfig;
use crate::geometry::{Point, Rectangle, Size};
use crate::input::{
    InputDriver, KeyPressEventArgs, KeyboardKeyEventArgs, MouseState, MouseSynthesizer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Live,
    Disposed,
}

type LeakHook = Box<dyn FnMut(WindowId)>;

/// A window built on top of a [`PlatformWindow`]
///
/// Owns the event broadcasters and the mouse snapshots, and derives every
/// geometry view from the platform's bounds and client size.
///
/// Call [`dispose`](Self::dispose) when done. Dropping a live window releases
/// the platform anyway but reports a leak.
pub struct NativeWindow<P: PlatformWindow> {
    id: WindowId,
    platform: P,
    mouse: MouseSynthesizer,
    events: WindowEvents,
    input_driver: Box<dyn InputDriver>,
    lifecycle: Lifecycle,
    diagnostics: DiagnosticsConfig,
    leak_hook: Option<LeakHook>,
}

impl<P: PlatformWindow> NativeWindow<P> {
    /// Wraps a platform window with default diagnostics
    pub fn new(platform: P) -> Self {
        Self::with_diagnostics(platform, DiagnosticsConfig::default())
    }

    /// Wraps a platform window
    pub fn with_diagnostics(mut platform: P, diagnostics: DiagnosticsConfig) -> Self {
        let input_driver = platform.create_input_driver();
        let mut mouse = MouseSynthesizer::new();
        mouse.set_warn_on_redundant(diagnostics.warn_on_redundant_notify);

        let id = WindowId::next();
        debug!(window = %id, driver = input_driver.name(), "Native window created");

        Self {
            id,
            platform,
            mouse,
            events: WindowEvents::new(),
            input_driver,
            lifecycle: Lifecycle::Live,
            diagnostics,
            leak_hook: None,
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    /// Subscription points, one per occurrence
    pub fn events(&self) -> &WindowEvents {
        &self.events
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// The legacy input driver built at construction
    pub fn input_driver(&self) -> &dyn InputDriver {
        self.input_driver.as_ref()
    }

    pub fn input_driver_mut(&mut self) -> &mut dyn InputDriver {
        self.input_driver.as_mut()
    }

    /// Installs a callback run when the window is dropped without dispose
    pub fn set_leak_hook<F>(&mut self, hook: F)
    where
        F: FnMut(WindowId) + 'static,
    {
        self.leak_hook = Some(Box::new(hook));
    }
}

/// Geometry
///
/// `bounds` and `client_size` come straight from the platform; every other
/// view is derived from them and writes back through them.
impl<P: PlatformWindow> NativeWindow<P> {
    pub fn bounds(&self) -> Rectangle {
        self.platform.bounds()
    }

    pub fn set_bounds(&mut self, bounds: Rectangle) {
        self.platform.set_bounds(bounds);
    }

    pub fn client_size(&self) -> Size {
        self.platform.client_size()
    }

    pub fn set_client_size(&mut self, size: Size) {
        self.platform.set_client_size(size);
    }

    /// Client area in client coordinates; the origin is always `(0, 0)`
    pub fn client_rectangle(&self) -> Rectangle {
        Rectangle::from_parts(Point::ZERO, self.client_size())
    }

    /// Applies the rectangle's size to the client area; its origin is ignored
    pub fn set_client_rectangle(&mut self, rect: Rectangle) {
        self.set_client_size(rect.size());
    }

    pub fn location(&self) -> Point {
        self.bounds().location()
    }

    pub fn set_location(&mut self, location: Point) {
        let bounds = self.bounds().with_location(location);
        self.set_bounds(bounds);
    }

    /// Outer size including decorations
    pub fn size(&self) -> Size {
        self.bounds().size()
    }

    pub fn set_size(&mut self, size: Size) {
        let bounds = self.bounds().with_size(size);
        self.set_bounds(bounds);
    }

    pub fn x(&self) -> i32 {
        self.bounds().x
    }

    pub fn set_x(&mut self, x: i32) {
        let bounds = self.bounds().with_x(x);
        self.set_bounds(bounds);
    }

    pub fn y(&self) -> i32 {
        self.bounds().y
    }

    pub fn set_y(&mut self, y: i32) {
        let bounds = self.bounds().with_y(y);
        self.set_bounds(bounds);
    }

    /// Client area width
    pub fn width(&self) -> i32 {
        self.client_size().width
    }

    pub fn set_width(&mut self, width: i32) {
        let size = self.client_size();
        self.set_client_size(Size::new(width, size.height));
    }

    /// Client area height
    pub fn height(&self) -> i32 {
        self.client_size().height
    }

    pub fn set_height(&mut self, height: i32) {
        let size = self.client_size();
        self.set_client_size(Size::new(size.width, height));
    }

    /// Converts a screen position to client coordinates
    pub fn point_to_client(&self, point: Point) -> Point {
        let origin = self.location().offset(self.platform.client_origin());
        point.delta(origin)
    }

    /// Converts a client position to screen coordinates
    pub fn point_to_screen(&self, point: Point) -> Point {
        point
            .offset(self.location())
            .offset(self.platform.client_origin())
    }
}

/// Window properties with change notification
impl<P: PlatformWindow> NativeWindow<P> {
    pub fn exists(&self) -> bool {
        self.platform.exists()
    }

    pub fn focused(&self) -> bool {
        self.platform.focused()
    }

    pub fn visible(&self) -> bool {
        self.platform.visible()
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.platform.visible() != visible {
            self.platform.set_visible(visible);
            self.notify_visible_changed();
        }
    }

    pub fn title(&self) -> &str {
        self.platform.title()
    }

    pub fn set_title(&mut self, title: &str) {
        if self.platform.title() != title {
            self.platform.set_title(title);
            self.events.title_changed.fire(self.id, &());
        }
    }

    pub fn icon(&self) -> Option<IconHandle> {
        self.platform.icon()
    }

    pub fn set_icon(&mut self, icon: Option<IconHandle>) {
        if self.platform.icon() != icon {
            self.platform.set_icon(icon);
            self.events.icon_changed.fire(self.id, &());
        }
    }

    pub fn cursor(&self) -> CursorHandle {
        self.platform.cursor()
    }

    pub fn set_cursor(&mut self, cursor: CursorHandle) {
        self.platform.set_cursor(cursor);
    }

    pub fn window_state(&self) -> WindowState {
        self.platform.window_state()
    }

    pub fn set_window_state(&mut self, state: WindowState) {
        if self.platform.window_state() != state {
            self.platform.set_window_state(state);
            self.notify_window_state_changed();
        }
    }

    pub fn window_border(&self) -> WindowBorder {
        self.platform.window_border()
    }

    pub fn set_window_border(&mut self, border: WindowBorder) {
        if self.platform.window_border() != border {
            self.platform.set_window_border(border);
            self.notify_window_border_changed();
        }
    }

    /// Raises `closing`; unless a subscriber cancels, closes the platform
    /// window and raises `closed`. Returns whether the window closed.
    pub fn close(&mut self) -> bool {
        let args = CancelEventArgs::default();
        self.events.closing.fire(self.id, &args);
        if args.is_cancelled() {
            debug!(window = %self.id, "Close cancelled by subscriber");
            return false;
        }

        self.platform.close();
        self.events.closed.fire(self.id, &());
        true
    }
}

/// Notifications raised by the platform layer
impl<P: PlatformWindow> NativeWindow<P> {
    /// Current mouse snapshot, written by the platform before notifying
    pub fn mouse_state(&self) -> &MouseState {
        self.mouse.current()
    }

    pub fn mouse_state_mut(&mut self) -> &mut MouseState {
        self.mouse.current_mut()
    }

    /// Snapshot as of the last reported mouse transition
    pub fn previous_mouse_state(&self) -> &MouseState {
        self.mouse.previous()
    }

    /// Number of notify calls that found no matching state change
    pub fn redundant_notifications(&self) -> u64 {
        self.mouse.redundant_notifications()
    }

    /// Reports the first newly pressed button as `mouse_down`
    pub fn notify_mouse_button_pressed(&mut self) {
        if let Some(args) = self.mouse.detect_button_pressed() {
            self.events.mouse_down.fire(self.id, &args);
        }
    }

    /// Reports the first newly released button as `mouse_up`
    pub fn notify_mouse_button_released(&mut self) {
        if let Some(args) = self.mouse.detect_button_released() {
            self.events.mouse_up.fire(self.id, &args);
        }
    }

    pub fn notify_mouse_moved(&mut self) {
        let args = self.mouse.detect_moved();
        self.events.mouse_move.fire(self.id, &args);
    }

    pub fn notify_mouse_wheel(&mut self) {
        let args = self.mouse.detect_wheel();
        self.events.mouse_wheel.fire(self.id, &args);
    }

    pub fn notify_mouse_enter(&mut self) {
        self.events.mouse_enter.fire(self.id, &());
    }

    pub fn notify_mouse_leave(&mut self) {
        self.events.mouse_leave.fire(self.id, &());
    }

    pub fn notify_key_down(&mut self, args: KeyboardKeyEventArgs) {
        self.events.key_down.fire(self.id, &args);
    }

    pub fn notify_key_press(&mut self, args: KeyPressEventArgs) {
        self.events.key_press.fire(self.id, &args);
    }

    pub fn notify_key_up(&mut self, args: KeyboardKeyEventArgs) {
        self.events.key_up.fire(self.id, &args);
    }

    pub fn notify_moved(&mut self) {
        self.events.moved.fire(self.id, &());
    }

    pub fn notify_resized(&mut self) {
        self.events.resized.fire(self.id, &());
    }

    pub fn notify_focused_changed(&mut self) {
        self.events.focused_changed.fire(self.id, &());
    }

    pub fn notify_visible_changed(&mut self) {
        self.events.visible_changed.fire(self.id, &());
    }

    pub fn notify_window_state_changed(&mut self) {
        self.events.window_state_changed.fire(self.id, &());
    }

    pub fn notify_window_border_changed(&mut self) {
        self.events.window_border_changed.fire(self.id, &());
    }
}

/// Disposal
impl<P: PlatformWindow> NativeWindow<P> {
    pub fn is_disposed(&self) -> bool {
        self.lifecycle == Lifecycle::Disposed
    }

    /// Releases platform resources and raises `disposed`.
    ///
    /// Only the first call has any effect.
    pub fn dispose(&mut self) {
        if self.is_disposed() {
            debug!(window = %self.id, "Dispose called on an already disposed window");
            return;
        }

        self.release();
        info!(window = %self.id, "Native window disposed");
        self.events.disposed.fire(self.id, &());
    }

    fn release(&mut self) {
        self.lifecycle = Lifecycle::Disposed;
        if let Err(e) = self.platform.release() {
            error!(window = %self.id, error = %e, "Failed to release platform window");
        }
    }
}

impl<P: PlatformWindow> Drop for NativeWindow<P> {
    fn drop(&mut self) {
        if self.is_disposed() {
            return;
        }

        if self.diagnostics.report_leaks {
            warn!(window = %self.id, "Native window leaked: dropped without dispose()");
        }
        if let Some(hook) = self.leak_hook.as_mut() {
            hook(self.id);
        }

        // Subscribers are not notified here; they may already be gone.
        self.release();
    }
}

impl<P: PlatformWindow> std::fmt::Debug for NativeWindow<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeWindow")
            .field("id", &self.id)
            .field("lifecycle", &self.lifecycle)
            .field("mouse", &self.mouse)
            .finish_non_exhaustive()
    }
}
