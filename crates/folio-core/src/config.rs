use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Portfolio page file; built-in sample page when unset
    #[serde(default)]
    pub page_file: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            page_file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Terminal width above which the slide-out menu force-closes
    #[serde(default = "default_menu_breakpoint")]
    pub menu_breakpoint_cols: u16,
    /// Scrolling behavior and thresholds
    #[serde(default)]
    pub scroll: ScrollConfig,
    /// Reveal-on-scroll behavior
    #[serde(default)]
    pub reveal: RevealConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            menu_breakpoint_cols: default_menu_breakpoint(),
            scroll: ScrollConfig::default(),
            reveal: RevealConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Enable smooth scrolling animation
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Animation duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Easing function for animations
    #[serde(default)]
    pub easing: EasingType,
    /// Animation frame rate
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Rows scrolled per key press
    #[serde(default = "default_scroll_step")]
    pub scroll_step: u16,
    /// Scroll depth past which the header renders in its compact style
    #[serde(default = "default_header_threshold")]
    pub header_threshold: u16,
    /// Scroll depth past which the back-to-top hint shows
    #[serde(default = "default_back_to_top_threshold")]
    pub back_to_top_threshold: u16,
    /// Lookahead subtracted from section tops for active-section detection
    #[serde(default = "default_section_lookahead")]
    pub section_lookahead: u16,
    /// Gap left between the header and an anchor navigation target
    #[serde(default = "default_anchor_gap")]
    pub anchor_gap: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
            scroll_step: default_scroll_step(),
            header_threshold: default_header_threshold(),
            back_to_top_threshold: default_back_to_top_threshold(),
            section_lookahead: default_section_lookahead(),
            anchor_gap: default_anchor_gap(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Per-element delay within a reveal batch, in milliseconds
    #[serde(default = "default_stagger")]
    pub stagger_ms: u64,
    /// Fraction of an element that must be visible to trigger its reveal
    #[serde(default = "default_visible_fraction")]
    pub visible_fraction: f64,
    /// Rows trimmed from the bottom of the viewport when testing visibility
    #[serde(default = "default_bottom_margin")]
    pub bottom_margin_rows: u16,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            stagger_ms: default_stagger(),
            visible_fraction: default_visible_fraction(),
            bottom_margin_rows: default_bottom_margin(),
        }
    }
}

/// Easing function for scroll animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseOut,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate() -> u64 {
    250
}

fn default_menu_breakpoint() -> u16 {
    100
}

fn default_true() -> bool {
    true
}

fn default_animation_duration() -> u64 {
    150
}

fn default_animation_fps() -> u32 {
    60
}

fn default_scroll_step() -> u16 {
    2
}

fn default_header_threshold() -> u16 {
    20
}

fn default_back_to_top_threshold() -> u16 {
    300
}

fn default_section_lookahead() -> u16 {
    100
}

fn default_anchor_gap() -> u16 {
    8
}

fn default_stagger() -> u64 {
    60
}

fn default_visible_fraction() -> f64 {
    0.1
}

fn default_bottom_margin() -> u16 {
    2
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Configuration directory, ~/.config/folio on all platforms
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
    }

    /// Path of the configuration file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }
}
