//! Drives a headless window through a short scripted input sequence and logs
//! every broadcast. Useful for checking configuration and log output.

use anyhow::Context;
use tracing::info;
use window_core::geometry::{Point, Size};
use window_core::input::{Key, KeyModifiers, KeyboardKeyEventArgs, MouseButton};
use window_core::{CoreConfig, HeadlessWindow, NativeWindow, telemetry};

fn main() -> anyhow::Result<()> {
    let config = CoreConfig::load_from_env().unwrap_or_else(|e| {
        eprintln!("Failed to load config ({e}), using built-in configuration");
        CoreConfig::builtin("release")
    });
    telemetry::init(&config.diagnostics.log_filter);

    info!(profile = %config.profile, ?config.window, "Starting headless demo");

    let platform =
        HeadlessWindow::from_config(&config.window).context("invalid window configuration")?;
    let mut window = NativeWindow::with_diagnostics(platform, config.diagnostics.clone());

    subscribe_logging(&window);

    window.set_title("headless demo");
    window.set_location(Point::new(40, 40));
    window.notify_moved();
    window.set_client_size(Size::new(640, 480));
    window.notify_resized();

    window.notify_mouse_enter();
    window.mouse_state_mut().set_position(Point::new(12, 30));
    window.notify_mouse_moved();

    window.mouse_state_mut().press(MouseButton::Left);
    window.notify_mouse_button_pressed();
    window.mouse_state_mut().set_position(Point::new(20, 34));
    window.notify_mouse_moved();
    window.mouse_state_mut().release(MouseButton::Left);
    window.notify_mouse_button_released();

    window.mouse_state_mut().scroll_by(0.0, 1.0);
    window.notify_mouse_wheel();
    window.notify_mouse_leave();

    window.notify_key_down(KeyboardKeyEventArgs::new(Key::S).with_modifiers(KeyModifiers::CONTROL));
    window.notify_key_up(KeyboardKeyEventArgs::new(Key::S));

    window.close();
    window.dispose();

    info!(
        redundant = window.redundant_notifications(),
        bounds = ?window.bounds(),
        "Headless demo finished"
    );
    Ok(())
}

fn subscribe_logging(window: &NativeWindow<HeadlessWindow>) {
    let events = window.events();

    events.moved.subscribe(|sender, _| info!(window = %sender, "moved"));
    events.resized.subscribe(|sender, _| info!(window = %sender, "resized"));
    events.title_changed.subscribe(|sender, _| info!(window = %sender, "title changed"));
    events.mouse_enter.subscribe(|sender, _| info!(window = %sender, "mouse entered"));
    events.mouse_leave.subscribe(|sender, _| info!(window = %sender, "mouse left"));
    events.mouse_down.subscribe(|sender, e| {
        info!(window = %sender, button = ?e.button, pos = ?e.position(), "mouse down")
    });
    events.mouse_up.subscribe(|sender, e| {
        info!(window = %sender, button = ?e.button, pos = ?e.position(), "mouse up")
    });
    events.mouse_move.subscribe(|sender, e| {
        info!(window = %sender, dx = e.x_delta, dy = e.y_delta, "mouse moved")
    });
    events.mouse_wheel.subscribe(|sender, e| {
        info!(window = %sender, value = e.value, delta = e.delta, "mouse wheel")
    });
    events.key_down.subscribe(|sender, e| {
        info!(window = %sender, key = ?e.key, modifiers = ?e.modifiers, "key down")
    });
    events.key_up.subscribe(|sender, e| info!(window = %sender, key = ?e.key, "key up"));
    events.closing.subscribe(|sender, _| info!(window = %sender, "closing"));
    events.closed.subscribe(|sender, _| info!(window = %sender, "closed"));
    events.disposed.subscribe(|sender, _| info!(window = %sender, "disposed"));
}
