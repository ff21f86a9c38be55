//! Portfolio page content model.
//!
//! A page is a flat list of identified sections, each holding blocks. Card,
//! panel and badge blocks participate in reveal-on-scroll; plain text does
//! not.

use std::path::Path;

use chrono::Datelike;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default, rename = "section")]
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    /// Anchor id, unique within the page
    pub id: String,
    pub title: String,
    #[serde(default, rename = "block")]
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub role: BlockRole,
    #[serde(default)]
    pub title: Option<String>,
    pub body: String,
    /// External link opened with `o`
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockRole {
    Card,
    Panel,
    Badge,
    #[default]
    Text,
}

impl BlockRole {
    /// Card-like roles fade in on first viewport entry
    pub fn reveals(&self) -> bool {
        matches!(self, BlockRole::Card | BlockRole::Panel | BlockRole::Badge)
    }
}

impl Page {
    /// Load and validate a page from a TOML file
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let page: Page =
            toml::from_str(&content).map_err(|e| crate::Error::Page(e.to_string()))?;
        page.validate()?;
        Ok(page)
    }

    pub fn validate(&self) -> crate::Result<()> {
        let mut seen = std::collections::HashSet::new();
        for section in &self.sections {
            if section.id.is_empty() {
                return Err(crate::Error::Page(format!(
                    "section \"{}\" has an empty id",
                    section.title
                )));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(crate::Error::Page(format!(
                    "duplicate section id \"{}\"",
                    section.id
                )));
            }
        }
        Ok(())
    }

    pub fn section_index(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// Built-in sample portfolio
    pub fn sample() -> Self {
        let content = include_str!("sample_page.toml");
        toml::from_str(content).expect("sample page is valid")
    }
}

/// Current year for the page footer
pub fn footer_year() -> i32 {
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_page_is_valid() {
        let page = Page::sample();
        assert!(page.validate().is_ok());
        assert!(!page.sections.is_empty());
        assert!(page
            .sections
            .iter()
            .flat_map(|s| &s.blocks)
            .any(|b| b.role.reveals()));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let page: Page = toml::from_str(
            r#"
            title = "T"
            [[section]]
            id = "about"
            title = "About"
            [[section]]
            id = "about"
            title = "Also About"
            "#,
        )
        .unwrap();
        assert!(page.validate().is_err());
    }

    #[test]
    fn test_section_index() {
        let page = Page::sample();
        let last = page.sections.last().unwrap().id.clone();
        assert_eq!(page.section_index(&last), Some(page.sections.len() - 1));
        assert_eq!(page.section_index("no-such-id"), None);
    }

    #[test]
    fn test_role_reveal_eligibility() {
        assert!(BlockRole::Card.reveals());
        assert!(BlockRole::Panel.reveals());
        assert!(BlockRole::Badge.reveals());
        assert!(!BlockRole::Text.reveals());
    }
}
