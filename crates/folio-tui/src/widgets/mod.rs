mod header;
mod menu;
mod progress;
mod sections;
mod status_bar;

pub use header::HeaderWidget;
pub use menu::MenuWidget;
pub use progress::ProgressWidget;
pub use sections::SectionsWidget;
pub use status_bar::StatusBarWidget;
