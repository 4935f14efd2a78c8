//! Legacy input driver capability
//!
//! Older applications poll devices through a driver object instead of
//! subscribing to window events. The platform constructs one driver per
//! window; the window hands the same instance out for its whole lifetime.

/// A platform input driver exposing polled devices
pub trait InputDriver {
    /// Name of this driver for debugging
    fn name(&self) -> &str;

    /// Number of keyboards the driver exposes
    fn keyboard_count(&self) -> usize;

    /// Number of mice the driver exposes
    fn mouse_count(&self) -> usize;

    /// Refreshes device state. Default: no-op
    fn poll(&mut self) {}
}

/// Driver for platforms without legacy device access
#[derive(Debug, Clone, Copy, Default)]
pub struct NullInputDriver;

impl InputDriver for NullInputDriver {
    fn name(&self) -> &str {
        "null"
    }

    fn keyboard_count(&self) -> usize {
        0
    }

    fn mouse_count(&self) -> usize {
        0
    }
}
