//! Edge detection over mouse snapshots
//!
//! [`MouseSynthesizer`] keeps the current and previous [`MouseState`]. The
//! platform layer writes into the current snapshot, then calls one of the
//! `detect_*` methods, which compares the two snapshots, builds the payload and
//! rebaselines `previous := current`.
//!
//! Detecting without an actual transition is tolerated. It is counted and
//! logged, never treated as an error.

use tracing::warn;

use super::events::{MouseButtonEventArgs, MouseMoveEventArgs, MouseWheelEventArgs};
use super::state::MouseState;

/// Turns polled mouse snapshots into discrete transitions
#[derive(Debug, Clone)]
pub struct MouseSynthesizer {
    current: MouseState,
    previous: MouseState,
    redundant: u64,
    warn_on_redundant: bool,
}

impl MouseSynthesizer {
    pub fn new() -> Self {
        Self {
            current: MouseState::new(),
            previous: MouseState::new(),
            redundant: 0,
            warn_on_redundant: true,
        }
    }

    /// Enables or disables the warning logged for redundant notifications.
    /// The counter is maintained either way.
    pub fn set_warn_on_redundant(&mut self, enabled: bool) {
        self.warn_on_redundant = enabled;
    }

    /// The snapshot the platform layer writes into
    pub fn current(&self) -> &MouseState {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut MouseState {
        &mut self.current
    }

    /// The snapshot as of the last reported transition
    pub fn previous(&self) -> &MouseState {
        &self.previous
    }

    /// How many detections found nothing to report
    pub fn redundant_notifications(&self) -> u64 {
        self.redundant
    }

    /// Finds the first button (canonical order) that went from up to down.
    ///
    /// Only one transition is reported per call. Returns `None` without
    /// touching the previous snapshot if no button was pressed.
    pub fn detect_button_pressed(&mut self) -> Option<MouseButtonEventArgs> {
        let button = self
            .current
            .buttons()
            .find(|&(button, down)| down && self.previous.is_button_up(button))
            .map(|(button, _)| button);

        match button {
            Some(button) => {
                let args = MouseButtonEventArgs {
                    state: self.current.clone(),
                    button,
                };
                self.rebaseline();
                Some(args)
            }
            None => {
                self.note_redundant("button_pressed", "notify called without pressing a button");
                None
            }
        }
    }

    /// Finds the first button (canonical order) that went from down to up.
    pub fn detect_button_released(&mut self) -> Option<MouseButtonEventArgs> {
        let button = self
            .current
            .buttons()
            .find(|&(button, down)| !down && self.previous.is_button_down(button))
            .map(|(button, _)| button);

        match button {
            Some(button) => {
                let args = MouseButtonEventArgs {
                    state: self.current.clone(),
                    button,
                };
                self.rebaseline();
                Some(args)
            }
            None => {
                self.note_redundant("button_released", "notify called without releasing a button");
                None
            }
        }
    }

    /// Computes the pointer delta, saturating at the `i32` range. Always
    /// produces a payload and always rebaselines, even when the pointer did
    /// not move.
    pub fn detect_moved(&mut self) -> MouseMoveEventArgs {
        let x_delta = self.current.x.saturating_sub(self.previous.x);
        let y_delta = self.current.y.saturating_sub(self.previous.y);

        if x_delta == 0 && y_delta == 0 {
            self.note_redundant("moved", "notify called without moving the mouse");
        }

        self.rebaseline();
        MouseMoveEventArgs {
            state: self.current.clone(),
            x_delta,
            y_delta,
        }
    }

    /// Computes the vertical wheel delta. Always produces a payload and always
    /// rebaselines.
    pub fn detect_wheel(&mut self) -> MouseWheelEventArgs {
        let value = self.current.wheel();
        let delta = value - self.previous.wheel();

        if delta == 0.0 {
            self.note_redundant("wheel", "notify called without scrolling the mouse wheel");
        }

        self.rebaseline();
        MouseWheelEventArgs {
            state: self.current.clone(),
            value,
            delta,
        }
    }

    fn rebaseline(&mut self) {
        self.previous.clone_from(&self.current);
    }

    fn note_redundant(&mut self, notification: &'static str, message: &'static str) {
        self.redundant += 1;
        if self.warn_on_redundant {
            warn!(notification, count = self.redundant, "{message}");
        }
    }
}

impl Default for MouseSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseButton;

    #[test]
    fn test_press_reports_button_and_rebaselines() {
        let mut mouse = MouseSynthesizer::new();
        mouse.current_mut().press(MouseButton::Right);

        let args = mouse.detect_button_pressed().expect("press should be detected");
        assert_eq!(args.button, MouseButton::Right);
        assert!(args.is_pressed());
        assert!(mouse.previous().is_button_down(MouseButton::Right));
        assert_eq!(mouse.previous(), mouse.current());
    }

    #[test]
    fn test_second_press_without_change_is_redundant() {
        let mut mouse = MouseSynthesizer::new();
        mouse.current_mut().press(MouseButton::Left);

        assert!(mouse.detect_button_pressed().is_some());
        assert!(mouse.detect_button_pressed().is_none());
        assert_eq!(mouse.redundant_notifications(), 1);
    }

    #[test]
    fn test_simultaneous_presses_reported_one_per_call_in_order() {
        let mut mouse = MouseSynthesizer::new();
        mouse.current_mut().press(MouseButton::Right);
        mouse.current_mut().press(MouseButton::Left);

        let first = mouse.detect_button_pressed().expect("first press");
        assert_eq!(first.button, MouseButton::Left);

        // previous was rebaselined wholesale, so Right is no longer a transition
        assert!(mouse.detect_button_pressed().is_none());
    }

    #[test]
    fn test_no_press_leaves_previous_untouched() {
        let mut mouse = MouseSynthesizer::new();
        mouse.current_mut().x = 99;

        assert!(mouse.detect_button_pressed().is_none());
        assert_eq!(mouse.previous().x, 0);
    }

    #[test]
    fn test_release_is_symmetric() {
        let mut mouse = MouseSynthesizer::new();
        mouse.current_mut().press(MouseButton::Button4);
        mouse.detect_button_pressed();

        assert!(mouse.detect_button_released().is_none());

        mouse.current_mut().release(MouseButton::Button4);
        let args = mouse.detect_button_released().expect("release should be detected");
        assert_eq!(args.button, MouseButton::Button4);
        assert!(!args.is_pressed());
        assert!(mouse.previous().is_button_up(MouseButton::Button4));
    }

    #[test]
    fn test_move_deltas_and_rebaseline() {
        let mut mouse = MouseSynthesizer::new();
        mouse.current_mut().x = 3;
        mouse.current_mut().y = -2;

        let args = mouse.detect_moved();
        assert_eq!((args.x_delta, args.y_delta), (3, -2));
        assert_eq!((mouse.previous().x, mouse.previous().y), (3, -2));
        assert_eq!(mouse.redundant_notifications(), 0);
    }

    #[test]
    fn test_move_without_motion_still_produces_payload() {
        let mut mouse = MouseSynthesizer::new();
        mouse.current_mut().x = 10;
        mouse.current_mut().y = 5;
        mouse.detect_moved();

        let args = mouse.detect_moved();
        assert_eq!((args.x_delta, args.y_delta), (0, 0));
        assert_eq!(args.position().x, 10);
        assert_eq!(mouse.redundant_notifications(), 1);
    }

    #[test]
    fn test_move_across_full_range_saturates() {
        let mut mouse = MouseSynthesizer::new();
        mouse.current_mut().x = i32::MIN;
        mouse.current_mut().y = i32::MAX;
        mouse.detect_moved();

        mouse.current_mut().x = i32::MAX;
        mouse.current_mut().y = i32::MIN;
        let args = mouse.detect_moved();
        assert_eq!((args.x_delta, args.y_delta), (i32::MAX, i32::MIN));
        assert_eq!(mouse.previous().x, i32::MAX);
    }

    #[test]
    fn test_wheel_delta() {
        let mut mouse = MouseSynthesizer::new();
        mouse.current_mut().scroll_by(0.0, 2.5);

        let args = mouse.detect_wheel();
        assert_eq!(args.value, 2.5);
        assert_eq!(args.delta, 2.5);

        mouse.current_mut().scroll_by(0.0, -1.0);
        let args = mouse.detect_wheel();
        assert_eq!(args.value, 1.5);
        assert_eq!(args.delta, -1.0);
    }

    #[test]
    fn test_wheel_ignores_horizontal_scroll() {
        let mut mouse = MouseSynthesizer::new();
        mouse.current_mut().scroll_by(4.0, 0.0);

        let args = mouse.detect_wheel();
        assert_eq!(args.delta, 0.0);
        assert_eq!(mouse.redundant_notifications(), 1);
        assert_eq!(mouse.previous().scroll.x, 4.0);
    }

    #[test]
    fn test_silenced_warning_still_counts() {
        let mut mouse = MouseSynthesizer::new();
        mouse.set_warn_on_redundant(false);
        mouse.detect_moved();
        assert_eq!(mouse.redundant_notifications(), 1);
    }
}
