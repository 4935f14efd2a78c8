//! Input event synthesis
//!
//! Turns polled mouse snapshots into discrete, edge-triggered events:
//! - The platform layer writes raw values into the current [`MouseState`]
//! - [`MouseSynthesizer`] compares it with the previous snapshot
//! - The owning window broadcasts the resulting payload
//!
//! # Architecture
//!
//! ```text
//! Platform layer → MouseState (current)
//!                       ↓
//!                 MouseSynthesizer
//!               (current vs previous)
//!                       ↓
//!                NativeWindow events
//!                 (mouse_down, ...)
//! ```
//!
//! Keyboard payloads carry no state differencing; they are passed straight
//! through to the key broadcasters.

mod driver;
mod events;
mod state;
mod synthesizer;

// Re-export public API
pub use driver::{InputDriver, NullInputDriver};
pub use events::{
    Key, KeyModifiers, KeyPressEventArgs, KeyboardKeyEventArgs, MouseButton,
    MouseButtonEventArgs, MouseMoveEventArgs, MouseWheelEventArgs,
};
pub use state::{MouseState, ScrollPosition};
pub use synthesizer::MouseSynthesizer;
