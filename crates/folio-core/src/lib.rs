pub mod config;
pub mod error;
pub mod menu;
pub mod nav;
pub mod page;
pub mod reveal;
pub mod theme;
pub mod tracker;

pub use config::{AppConfig, EasingType, RevealConfig, ScrollConfig};
pub use error::{Error, Result};
pub use menu::{MenuController, MenuState};
pub use page::{Block, BlockRole, Page, Section};
pub use theme::{ThemeMode, ThemePrefs};
pub use tracker::{FrameGate, ScrollMetrics, ScrollState};
