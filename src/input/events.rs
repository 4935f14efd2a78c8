//! Input identifiers and event payloads

use bitflags::bitflags;
use enum_map::Enum;
use serde::{Deserialize, Serialize};

use super::state::MouseState;
use crate::geometry::Point;

/// Mouse button identifier
///
/// Declaration order is the canonical scan order used when looking for
/// button transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Enum, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Button1,
    Button2,
    Button3,
    Button4,
    Button5,
    Button6,
    Button7,
    Button8,
    Button9,
}

impl MouseButton {
    /// Number of distinct buttons
    pub const COUNT: usize = <Self as Enum>::LENGTH;
}

/// Convert from winit mouse button
///
/// `Back`/`Forward` map to `Button1`/`Button2` and `Other(n)` to `Button3`
/// onwards. Buttons beyond `Button9` are handed back unconverted.
impl TryFrom<winit::event::MouseButton> for MouseButton {
    type Error = winit::event::MouseButton;

    fn try_from(button: winit::event::MouseButton) -> Result<Self, Self::Error> {
        use winit::event::MouseButton as WB;
        Ok(match button {
            WB::Left => Self::Left,
            WB::Middle => Self::Middle,
            WB::Right => Self::Right,
            WB::Back => Self::Button1,
            WB::Forward => Self::Button2,
            WB::Other(0) => Self::Button3,
            WB::Other(1) => Self::Button4,
            WB::Other(2) => Self::Button5,
            WB::Other(3) => Self::Button6,
            WB::Other(4) => Self::Button7,
            WB::Other(5) => Self::Button8,
            WB::Other(6) => Self::Button9,
            other => return Err(other),
        })
    }
}

/// Payload of `mouse_down` / `mouse_up`
#[derive(Debug, Clone, PartialEq)]
pub struct MouseButtonEventArgs {
    /// Device state at the moment the transition was detected
    pub state: MouseState,
    /// The button that changed
    pub button: MouseButton,
}

impl MouseButtonEventArgs {
    /// Whether the button is down after the transition
    pub fn is_pressed(&self) -> bool {
        self.state.is_button_down(self.button)
    }

    pub fn position(&self) -> Point {
        self.state.position()
    }
}

/// Payload of `mouse_move`
#[derive(Debug, Clone, PartialEq)]
pub struct MouseMoveEventArgs {
    pub state: MouseState,
    pub x_delta: i32,
    pub y_delta: i32,
}

impl MouseMoveEventArgs {
    pub fn position(&self) -> Point {
        self.state.position()
    }

    pub fn delta(&self) -> Point {
        Point::new(self.x_delta, self.y_delta)
    }
}

/// Payload of `mouse_wheel`
#[derive(Debug, Clone, PartialEq)]
pub struct MouseWheelEventArgs {
    pub state: MouseState,
    /// Accumulated vertical wheel position
    pub value: f32,
    /// Change since the last reported wheel event
    pub delta: f32,
}

impl MouseWheelEventArgs {
    pub fn position(&self) -> Point {
        self.state.position()
    }
}

bitflags! {
    /// Modifier keys held during a key event
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyModifiers: u8 {
        const ALT = 1 << 0;
        const CONTROL = 1 << 1;
        const SHIFT = 1 << 2;
        const COMMAND = 1 << 3;
    }
}

impl From<winit::keyboard::ModifiersState> for KeyModifiers {
    fn from(state: winit::keyboard::ModifiersState) -> Self {
        let mut modifiers = Self::empty();
        modifiers.set(Self::ALT, state.alt_key());
        modifiers.set(Self::CONTROL, state.control_key());
        modifiers.set(Self::SHIFT, state.shift_key());
        modifiers.set(Self::COMMAND, state.super_key());
        modifiers
    }
}

/// Payload of `key_down` / `key_up`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardKeyEventArgs {
    pub key: Key,
    /// Platform scancode, 0 when unknown
    pub scancode: u32,
    pub modifiers: KeyModifiers,
    /// True when generated by key auto-repeat
    pub is_repeat: bool,
}

impl KeyboardKeyEventArgs {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            scancode: 0,
            modifiers: KeyModifiers::empty(),
            is_repeat: false,
        }
    }

    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_scancode(mut self, scancode: u32) -> Self {
        self.scancode = scancode;
        self
    }

    pub fn repeated(mut self) -> Self {
        self.is_repeat = true;
        self
    }

    pub fn alt(&self) -> bool {
        self.modifiers.contains(KeyModifiers::ALT)
    }

    pub fn control(&self) -> bool {
        self.modifiers.contains(KeyModifiers::CONTROL)
    }

    pub fn shift(&self) -> bool {
        self.modifiers.contains(KeyModifiers::SHIFT)
    }
}

/// Payload of `key_press`: a translated character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPressEventArgs {
    pub key_char: char,
}

impl KeyPressEventArgs {
    pub fn new(key_char: char) -> Self {
        Self { key_char }
    }
}

/// Keyboard key identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Unknown,

    // Modifiers
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,
    WinLeft,
    WinRight,

    // Common keys
    Space,
    Enter,
    Escape,
    Backspace,
    Tab,
    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,

    // Letters
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // Numbers
    Number0,
    Number1,
    Number2,
    Number3,
    Number4,
    Number5,
    Number6,
    Number7,
    Number8,
    Number9,

    // Function keys
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    // Arrows
    Left,
    Right,
    Up,
    Down,
}

/// Convert from winit key code
impl From<winit::keyboard::KeyCode> for Key {
    fn from(key: winit::keyboard::KeyCode) -> Self {
        use winit::keyboard::KeyCode as WK;
        match key {
            WK::ShiftLeft => Self::ShiftLeft,
            WK::ShiftRight => Self::ShiftRight,
            WK::ControlLeft => Self::ControlLeft,
            WK::ControlRight => Self::ControlRight,
            WK::AltLeft => Self::AltLeft,
            WK::AltRight => Self::AltRight,
            WK::SuperLeft => Self::WinLeft,
            WK::SuperRight => Self::WinRight,

            WK::Space => Self::Space,
            WK::Enter => Self::Enter,
            WK::Escape => Self::Escape,
            WK::Backspace => Self::Backspace,
            WK::Tab => Self::Tab,
            WK::Insert => Self::Insert,
            WK::Delete => Self::Delete,
            WK::Home => Self::Home,
            WK::End => Self::End,
            WK::PageUp => Self::PageUp,
            WK::PageDown => Self::PageDown,

            WK::KeyA => Self::A,
            WK::KeyB => Self::B,
            WK::KeyC => Self::C,
            WK::KeyD => Self::D,
            WK::KeyE => Self::E,
            WK::KeyF => Self::F,
            WK::KeyG => Self::G,
            WK::KeyH => Self::H,
            WK::KeyI => Self::I,
            WK::KeyJ => Self::J,
            WK::KeyK => Self::K,
            WK::KeyL => Self::L,
            WK::KeyM => Self::M,
            WK::KeyN => Self::N,
            WK::KeyO => Self::O,
            WK::KeyP => Self::P,
            WK::KeyQ => Self::Q,
            WK::KeyR => Self::R,
            WK::KeyS => Self::S,
            WK::KeyT => Self::T,
            WK::KeyU => Self::U,
            WK::KeyV => Self::V,
            WK::KeyW => Self::W,
            WK::KeyX => Self::X,
            WK::KeyY => Self::Y,
            WK::KeyZ => Self::Z,

            WK::Digit0 => Self::Number0,
            WK::Digit1 => Self::Number1,
            WK::Digit2 => Self::Number2,
            WK::Digit3 => Self::Number3,
            WK::Digit4 => Self::Number4,
            WK::Digit5 => Self::Number5,
            WK::Digit6 => Self::Number6,
            WK::Digit7 => Self::Number7,
            WK::Digit8 => Self::Number8,
            WK::Digit9 => Self::Number9,

            WK::F1 => Self::F1,
            WK::F2 => Self::F2,
            WK::F3 => Self::F3,
            WK::F4 => Self::F4,
            WK::F5 => Self::F5,
            WK::F6 => Self::F6,
            WK::F7 => Self::F7,
            WK::F8 => Self::F8,
            WK::F9 => Self::F9,
            WK::F10 => Self::F10,
            WK::F11 => Self::F11,
            WK::F12 => Self::F12,

            WK::ArrowLeft => Self::Left,
            WK::ArrowRight => Self::Right,
            WK::ArrowUp => Self::Up,
            WK::ArrowDown => Self::Down,

            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winit_button_mapping() {
        use winit::event::MouseButton as WB;
        assert_eq!(MouseButton::try_from(WB::Left), Ok(MouseButton::Left));
        assert_eq!(MouseButton::try_from(WB::Back), Ok(MouseButton::Button1));
        assert_eq!(MouseButton::try_from(WB::Other(6)), Ok(MouseButton::Button9));
        assert_eq!(MouseButton::try_from(WB::Other(7)), Err(WB::Other(7)));
    }

    #[test]
    fn test_winit_key_mapping() {
        use winit::keyboard::KeyCode as WK;
        assert_eq!(Key::from(WK::KeyQ), Key::Q);
        assert_eq!(Key::from(WK::Digit7), Key::Number7);
        assert_eq!(Key::from(WK::SuperLeft), Key::WinLeft);
        assert_eq!(Key::from(WK::NumLock), Key::Unknown);
    }

    #[test]
    fn test_keyboard_args_builders() {
        let args = KeyboardKeyEventArgs::new(Key::S)
            .with_modifiers(KeyModifiers::CONTROL | KeyModifiers::SHIFT)
            .with_scancode(31)
            .repeated();

        assert!(args.control());
        assert!(args.shift());
        assert!(!args.alt());
        assert_eq!(args.scancode, 31);
        assert!(args.is_repeat);
    }

    #[test]
    fn test_button_args_reports_pressed() {
        let mut state = MouseState::new();
        state.press(MouseButton::Middle);
        let args = MouseButtonEventArgs {
            state,
            button: MouseButton::Middle,
        };
        assert!(args.is_pressed());
    }
}
