//! Core configuration
//!
//! Supports multiple profiles (debug, release) with different settings.

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CoreError;
use crate::geometry::{Point, Size};
use crate::window::WindowBorder;

/// Initial window geometry and appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Outer position
    pub x: i32,
    pub y: i32,
    /// Client area width
    pub width: i32,
    /// Client area height
    pub height: i32,
    /// Border style (resizable, fixed, hidden)
    pub border: WindowBorder,
    /// Whether the window starts visible
    pub visible: bool,
}

impl WindowConfig {
    pub fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn client_size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "window-core".to_string(),
            x: 100,
            y: 100,
            width: 800,
            height: 600,
            border: WindowBorder::Resizable,
            visible: true,
        }
    }
}

/// Diagnostic behaviour of the core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Log a warning when a notify call finds no matching state change
    pub warn_on_redundant_notify: bool,
    /// Log a warning when a window is dropped without being disposed
    pub report_leaks: bool,
    /// Default tracing filter, overridden by RUST_LOG
    pub log_filter: String,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            warn_on_redundant_notify: true,
            report_leaks: true,
            log_filter: "info".to_string(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreConfig {
    /// The active profile (debug, release, etc.)
    pub profile: String,
    /// Initial window settings
    #[serde(default)]
    pub window: WindowConfig,
    /// Diagnostic settings
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl CoreConfig {
    /// Prefix for environment overrides, e.g. `WINDOW_CORE_WINDOW__WIDTH=1024`
    pub const ENV_PREFIX: &'static str = "WINDOW_CORE";
    /// Environment variable naming the active profile
    pub const PROFILE_VAR: &'static str = "WINDOW_CORE_PROFILE";

    /// Loads and validates the settings for `profile`
    ///
    /// Later sources win:
    /// 1. `config/{profile}.toml`, next to the executable or in the working directory
    /// 2. `WINDOW_CORE_*` environment variables, `__` between nested keys
    ///
    /// A missing profile file is not an error; every field has a default.
    pub fn load(profile: &str) -> Result<Self, CoreError> {
        let file = match Self::find_config_dir() {
            Some(dir) => File::from(dir.join(profile).as_path()),
            None => File::with_name(&format!("config/{profile}")),
        };

        let sources = Config::builder()
            .add_source(file.required(false))
            .add_source(
                Environment::with_prefix(Self::ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override("profile", profile)?
            .build()?;

        let config = Self::from_sources(sources)?;
        debug!(
            profile = %config.profile,
            width = config.window.width,
            height = config.window.height,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Loads the profile named by `WINDOW_CORE_PROFILE`, or "release"
    pub fn load_from_env() -> Result<Self, CoreError> {
        let profile =
            std::env::var(Self::PROFILE_VAR).unwrap_or_else(|_| "release".to_string());
        Self::load(&profile)
    }

    /// Deserializes already layered sources and checks the result
    pub fn from_sources(sources: Config) -> Result<Self, CoreError> {
        let config: Self = sources.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings no window could be opened with
    pub fn validate(&self) -> Result<(), CoreError> {
        let size = self.window.client_size();
        if size.is_empty() {
            return Err(CoreError::InvalidConfig(format!(
                "window size must be positive, got {}x{}",
                size.width, size.height
            )));
        }
        if self.diagnostics.log_filter.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "diagnostics.log_filter must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    fn find_config_dir() -> Option<PathBuf> {
        let beside_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("config")));

        beside_exe
            .into_iter()
            .chain(std::iter::once(PathBuf::from("config")))
            .find(|dir| dir.is_dir())
    }

    /// Built-in settings, used when nothing can be loaded
    pub fn builtin(profile: &str) -> Self {
        Self {
            profile: profile.to_string(),
            window: WindowConfig::default(),
            diagnostics: DiagnosticsConfig::default(),
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::load("release").unwrap_or_else(|_| Self::builtin("release"))
    }
}
