//! Page sections and the active-section marker for the nav bar.

use serde::{Deserialize, Serialize};

/// A section of the single-page layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PageSection {
    #[default]
    Home,
    Catalog,
    About,
    Delivery,
    Gallery,
    Contacts,
}

impl PageSection {
    /// All sections in page order.
    pub const ALL: [PageSection; 6] = [
        PageSection::Home,
        PageSection::Catalog,
        PageSection::About,
        PageSection::Delivery,
        PageSection::Gallery,
        PageSection::Contacts,
    ];

    /// Anchor id of the section element.
    pub fn anchor(&self) -> &'static str {
        match self {
            PageSection::Home => "home",
            PageSection::Catalog => "catalog",
            PageSection::About => "about",
            PageSection::Delivery => "delivery",
            PageSection::Gallery => "gallery",
            PageSection::Contacts => "contacts",
        }
    }

    /// Nav bar label.
    pub fn label(&self) -> &'static str {
        match self {
            PageSection::Home => "Главная",
            PageSection::Catalog => "Каталог",
            PageSection::About => "О нас",
            PageSection::Delivery => "Доставка",
            PageSection::Gallery => "Фото",
            PageSection::Contacts => "Контакты",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.trim().trim_start_matches('#');
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

/// Remembers which section the visitor last jumped to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionNavigator {
    active: PageSection,
}

impl SectionNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `section` active and return the anchor to scroll to.
    pub fn scroll_to(&mut self, section: PageSection) -> &'static str {
        self.active = section;
        tracing::debug!(section = section.anchor(), "section activated");
        section.anchor()
    }

    pub fn active(&self) -> PageSection {
        self.active
    }

    pub fn is_active(&self, section: PageSection) -> bool {
        self.active == section
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_home() {
        let nav = SectionNavigator::new();
        assert!(nav.is_active(PageSection::Home));
    }

    #[test]
    fn test_scroll_to_sets_active() {
        let mut nav = SectionNavigator::new();
        assert_eq!(nav.scroll_to(PageSection::Gallery), "gallery");
        assert_eq!(nav.active(), PageSection::Gallery);
        assert!(!nav.is_active(PageSection::Home));
    }

    #[test]
    fn test_from_anchor() {
        assert_eq!(PageSection::from_anchor("#delivery"), Some(PageSection::Delivery));
        assert_eq!(PageSection::from_anchor("contacts"), Some(PageSection::Contacts));
        assert_eq!(PageSection::from_anchor("blog"), None);
        for section in PageSection::ALL {
            assert_eq!(PageSection::from_anchor(section.anchor()), Some(section));
        }
    }
}
