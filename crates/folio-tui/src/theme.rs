use folio_core::ThemeMode;
use ratatui::style::Color;

/// Semantic color palette for the viewer
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    /// Header background once the page is scrolled
    pub bg_scrolled: Color,
    pub surface: Color,
    pub fg: Color,
    pub fg_dim: Color,
    /// Pre-reveal text, blocks still fading in
    pub fg_hidden: Color,
    pub accent: Color,
    pub link: Color,
    pub link_active: Color,
    pub badge: Color,
    pub border: Color,
    pub progress: Color,
    pub progress_track: Color,
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(0x12, 0x12, 0x18),
            bg_scrolled: Color::Rgb(0x1c, 0x1c, 0x26),
            surface: Color::Rgb(0x1e, 0x1e, 0x2a),
            fg: Color::Rgb(0xdc, 0xdc, 0xe4),
            fg_dim: Color::Rgb(0x8a, 0x8a, 0x9a),
            fg_hidden: Color::Rgb(0x3c, 0x3c, 0x4a),
            accent: Color::Rgb(0x7d, 0xc4, 0xa5),
            link: Color::Rgb(0x82, 0xaa, 0xff),
            link_active: Color::Rgb(0xc3, 0xe8, 0x8d),
            badge: Color::Rgb(0xd8, 0xa6, 0x57),
            border: Color::Rgb(0x34, 0x34, 0x42),
            progress: Color::Rgb(0x7d, 0xc4, 0xa5),
            progress_track: Color::Rgb(0x26, 0x26, 0x32),
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(0xfa, 0xfa, 0xf5),
            bg_scrolled: Color::Rgb(0xec, 0xec, 0xe4),
            surface: Color::Rgb(0xf0, 0xf0, 0xe8),
            fg: Color::Rgb(0x2a, 0x2a, 0x32),
            fg_dim: Color::Rgb(0x72, 0x72, 0x7e),
            fg_hidden: Color::Rgb(0xc8, 0xc8, 0xc0),
            accent: Color::Rgb(0x2e, 0x7d, 0x5b),
            link: Color::Rgb(0x1f, 0x55, 0xb0),
            link_active: Color::Rgb(0x5c, 0x78, 0x00),
            badge: Color::Rgb(0xa8, 0x6a, 0x00),
            border: Color::Rgb(0xd4, 0xd4, 0xc8),
            progress: Color::Rgb(0x2e, 0x7d, 0x5b),
            progress_track: Color::Rgb(0xe4, 0xe4, 0xda),
        }
    }
}
