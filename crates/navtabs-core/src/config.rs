use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::style::StyleOverrides;
use crate::tab::{ActiveTabRef, TabDescriptor, TabId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Initially selected tab id (defaults to the first tab)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_tab: Option<TabId>,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub strip: StripConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub styles: StyleOverrides,
    #[serde(default)]
    pub keymap: KeymapConfig,
    /// Tabs shown by the demo
    #[serde(default = "default_tabs")]
    pub tabs: Vec<TabDescriptor>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            active_tab: None,
            general: GeneralConfig::default(),
            strip: StripConfig::default(),
            ui: UiConfig::default(),
            styles: StyleOverrides::default(),
            keymap: KeymapConfig::default(),
            tabs: default_tabs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Easing curve applied to tweens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump at the end
    None,
    Linear,
    /// Cubic ease-out
    Cubic,
    /// Quintic ease-out
    Quintic,
    /// Exponential ease-out
    EaseOut,
    /// Cubic ease-in-out
    #[default]
    EaseInOut,
}

/// Behaviour of the tab strip itself
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripConfig {
    /// Suppress the selection callback (scrolling still happens)
    #[serde(default)]
    pub disabled: bool,
    /// Let the host drive the offset tween natively
    #[serde(default)]
    pub use_native_driver: bool,
    /// Underline transition duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Easing for the underline and scroll tweens
    #[serde(default)]
    pub easing: EasingType,
    /// Remount the strip (recomputing the scroll step) when the host resizes
    #[serde(default)]
    pub remeasure_on_resize: bool,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            use_native_driver: false,
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            remeasure_on_resize: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Input poll interval in milliseconds while nothing animates
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Layout units (px) covered by one terminal cell
    #[serde(default = "default_cell_width")]
    pub cell_width: f64,
    /// Theme colour overrides
    #[serde(default)]
    pub theme: ThemeColorOverrides,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            cell_width: default_cell_width(),
            theme: ThemeColorOverrides::default(),
        }
    }
}

/// Optional color overrides for the surrounding chrome
/// Each color is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Background
    pub bg: Option<String>,
    /// Foreground
    pub fg: Option<String>,
    /// Accent (status bar highlights)
    pub accent: Option<String>,
    /// Dimmed text
    pub muted: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "l", "<C-n>" (Ctrl+n), "<S-Tab>", "<CR>", "<Esc>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Select the next tab
    #[serde(default = "default_key_next_tab")]
    pub next_tab: String,
    /// Select the previous tab
    #[serde(default = "default_key_prev_tab")]
    pub prev_tab: String,
    /// Select the first tab
    #[serde(default = "default_key_first_tab")]
    pub first_tab: String,
    /// Select the last tab
    #[serde(default = "default_key_last_tab")]
    pub last_tab: String,
    /// Toggle the disabled flag
    #[serde(default = "default_key_toggle_disabled")]
    pub toggle_disabled: String,
    /// Remount the strip, re-measuring everything
    #[serde(default = "default_key_remount")]
    pub remount: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            next_tab: default_key_next_tab(),
            prev_tab: default_key_prev_tab(),
            first_tab: default_key_first_tab(),
            last_tab: default_key_last_tab(),
            toggle_disabled: default_key_toggle_disabled(),
            remount: default_key_remount(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_next_tab() -> String { "l".to_string() }
fn default_key_prev_tab() -> String { "h".to_string() }
fn default_key_first_tab() -> String { "g".to_string() }
fn default_key_last_tab() -> String { "G".to_string() }
fn default_key_toggle_disabled() -> String { "d".to_string() }
fn default_key_remount() -> String { "r".to_string() }

fn default_tabs() -> Vec<TabDescriptor> {
    [
        "Home",
        "Trending",
        "Subscriptions",
        "Library",
        "History",
        "Watch later",
        "Downloads",
        "Settings",
    ]
    .iter()
    .enumerate()
    .map(|(i, name)| TabDescriptor::new(i as i64 + 1, *name))
    .collect()
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("navtabs")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_animation_duration() -> u64 {
    crate::animation::underline::DEFAULT_DURATION_MS
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_cell_width() -> f64 {
    8.0
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default location or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, falling back to defaults if it does
    /// not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::parse(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> crate::Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    fn validate(&self) -> crate::Result<()> {
        if self.tabs.is_empty() {
            return Err(crate::Error::Config("at least one tab is required".into()));
        }
        if self.ui.cell_width <= 0.0 || !self.ui.cell_width.is_finite() {
            return Err(crate::Error::Config(format!(
                "ui.cell_width must be positive, got {}",
                self.ui.cell_width
            )));
        }
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/navtabs/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("navtabs")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("navtabs.log")
    }

    /// The configured active tab, or the first tab
    pub fn initial_active(&self) -> Option<ActiveTabRef> {
        self.active_tab
            .clone()
            .or_else(|| self.tabs.first().map(|t| t.id.clone()))
            .map(|id| ActiveTabRef { id })
    }
}
