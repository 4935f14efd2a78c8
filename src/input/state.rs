//! Raw mouse device state

use enum_map::EnumMap;

use super::events::MouseButton;
use crate::geometry::Point;

/// Accumulated scroll position of the mouse wheel(s)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollPosition {
    pub x: f32,
    pub y: f32,
}

/// Point-in-time snapshot of a mouse device
///
/// The platform layer writes new values into the current snapshot and then
/// asks the window to compare it against the previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct MouseState {
    buttons: EnumMap<MouseButton, bool>,
    /// Cursor position in client coordinates
    pub x: i32,
    pub y: i32,
    /// Accumulated wheel position (not a per-frame delta)
    pub scroll: ScrollPosition,
    connected: bool,
}

impl MouseState {
    /// Creates a connected mouse with no buttons down, at the origin
    pub fn new() -> Self {
        Self {
            buttons: EnumMap::default(),
            x: 0,
            y: 0,
            scroll: ScrollPosition::default(),
            connected: true,
        }
    }

    /// Returns true if the button is currently held
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons[button]
    }

    pub fn is_button_up(&self, button: MouseButton) -> bool {
        !self.buttons[button]
    }

    pub fn set_button(&mut self, button: MouseButton, down: bool) {
        self.buttons[button] = down;
    }

    pub fn press(&mut self, button: MouseButton) {
        self.set_button(button, true);
    }

    pub fn release(&mut self, button: MouseButton) {
        self.set_button(button, false);
    }

    /// Iterates over every button in canonical order with its flag
    pub fn buttons(&self) -> impl Iterator<Item = (MouseButton, bool)> + '_ {
        self.buttons.iter().map(|(button, down)| (button, *down))
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn set_position(&mut self, position: Point) {
        self.x = position.x;
        self.y = position.y;
    }

    /// Vertical wheel position
    pub fn wheel(&self) -> f32 {
        self.scroll.y
    }

    /// Adds a wheel movement to the accumulated scroll position
    pub fn scroll_by(&mut self, dx: f32, dy: f32) {
        self.scroll.x += dx;
        self.scroll.y += dy;
    }

    /// Always true; device disconnects are not modelled
    pub fn is_connected(&self) -> bool {
        self.connected
    }
}

impl Default for MouseState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_connected_and_idle() {
        let state = MouseState::default();
        assert!(state.is_connected());
        assert!(state.buttons().all(|(_, down)| !down));
        assert_eq!(state.position(), Point::ZERO);
        assert_eq!(state.wheel(), 0.0);
    }

    #[test]
    fn test_buttons_iterate_in_canonical_order() {
        let order: Vec<MouseButton> = MouseState::new().buttons().map(|(b, _)| b).collect();
        assert_eq!(order.first(), Some(&MouseButton::Left));
        assert_eq!(order.get(1), Some(&MouseButton::Middle));
        assert_eq!(order.get(2), Some(&MouseButton::Right));
        assert_eq!(order.last(), Some(&MouseButton::Button9));
        assert_eq!(order.len(), MouseButton::COUNT);
    }

    #[test]
    fn test_press_release() {
        let mut state = MouseState::new();
        state.press(MouseButton::Right);
        assert!(state.is_button_down(MouseButton::Right));
        assert!(state.is_button_up(MouseButton::Left));

        state.release(MouseButton::Right);
        assert!(state.is_button_up(MouseButton::Right));
    }

    #[test]
    fn test_scroll_accumulates() {
        let mut state = MouseState::new();
        state.scroll_by(0.0, 1.0);
        state.scroll_by(0.5, 2.0);
        assert_eq!(state.scroll, ScrollPosition { x: 0.5, y: 3.0 });
    }
}
