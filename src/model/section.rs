// Section catalog - the static list of navigable portfolio sections
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Identifier of a portfolio section, e.g. `"about"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SectionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionDescriptor {
    pub id: SectionId,
    /// Display label
    pub title: String,
    /// Display glyph
    pub icon: String,
}

impl SectionDescriptor {
    pub fn new(id: impl Into<SectionId>, title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: icon.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("duplicate section id '{0}' in catalog")]
    DuplicateId(SectionId),
}

/// Ordered, immutable list of sections with unique ids.
#[derive(Clone, Debug, Default)]
pub struct SectionCatalog {
    sections: Vec<SectionDescriptor>,
}

impl SectionCatalog {
    pub fn new(sections: Vec<SectionDescriptor>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for section in &sections {
            if !seen.insert(&section.id) {
                return Err(CatalogError::DuplicateId(section.id.clone()));
            }
        }
        Ok(Self { sections })
    }

    /// The built-in portfolio sections.
    pub fn portfolio() -> Self {
        Self {
            sections: default_sections(),
        }
    }

    pub fn find(&self, id: &SectionId) -> Option<&SectionDescriptor> {
        self.sections.iter().find(|section| &section.id == id)
    }

    pub fn position(&self, id: &SectionId) -> Option<usize> {
        self.sections.iter().position(|section| &section.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&SectionDescriptor> {
        self.sections.get(index)
    }

    /// Entry `delta` steps away from `id`, clamped to the catalog bounds.
    ///
    /// An id outside the catalog (such as the initial hero section) sits
    /// before the first entry when stepping forward and after the last one
    /// when stepping backward.
    pub fn neighbor(&self, id: &SectionId, delta: isize) -> Option<&SectionDescriptor> {
        let last = self.sections.len().checked_sub(1)?;
        let index = match self.position(id) {
            Some(pos) => pos.saturating_add_signed(delta).min(last),
            None if delta >= 0 => 0,
            None => last,
        };
        self.sections.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionDescriptor> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

pub fn default_sections() -> Vec<SectionDescriptor> {
    vec![
        SectionDescriptor::new("about", "Обо мне", "👤"),
        SectionDescriptor::new("skills", "Навыки / стек", "⚡"),
        SectionDescriptor::new("projects", "Кейсы", "🗂️"),
        SectionDescriptor::new("experience", "Опыт", "🎒"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_catalog_order() {
        let catalog = SectionCatalog::portfolio();
        let ids: Vec<&str> = catalog.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["about", "skills", "projects", "experience"]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = SectionCatalog::new(vec![
            SectionDescriptor::new("about", "About", "a"),
            SectionDescriptor::new("skills", "Skills", "s"),
            SectionDescriptor::new("about", "Again", "b"),
        ]);
        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateId(SectionId::from("about"))
        );
    }

    #[test]
    fn test_empty_catalog_allowed() {
        let catalog = SectionCatalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.neighbor(&"about".into(), 1).is_none());
    }

    #[test]
    fn test_find_hit_and_miss() {
        let catalog = SectionCatalog::portfolio();
        let skills = catalog.find(&"skills".into()).unwrap();
        assert_eq!(skills.title, "Навыки / стек");
        assert_eq!(skills.icon, "⚡");
        assert!(catalog.find(&"hero".into()).is_none());
    }

    #[test]
    fn test_neighbor_clamps() {
        let catalog = SectionCatalog::portfolio();
        let next = catalog.neighbor(&"about".into(), 1).unwrap();
        assert_eq!(next.id.as_str(), "skills");
        let first = catalog.neighbor(&"about".into(), -1).unwrap();
        assert_eq!(first.id.as_str(), "about");
        let last = catalog.neighbor(&"projects".into(), 5).unwrap();
        assert_eq!(last.id.as_str(), "experience");
    }

    #[test]
    fn test_neighbor_from_unknown_section() {
        let catalog = SectionCatalog::portfolio();
        let hero = SectionId::from("hero");
        assert_eq!(catalog.neighbor(&hero, 1).unwrap().id.as_str(), "about");
        assert_eq!(catalog.neighbor(&hero, -1).unwrap().id.as_str(), "experience");
    }
}
