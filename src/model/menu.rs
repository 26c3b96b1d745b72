//! The static pizza menu.
//!
//! The menu is loaded once at startup, either from the copy bundled into the binary
//! (`data/menu.json`) or from a file named by `MENU_PATH`, and never changes afterwards.

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

const BUNDLED_MENU: &str = include_str!("../../data/menu.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
}

/// The full menu. Serialized as a plain JSON array of items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// The menu shipped with the service.
    pub fn bundled() -> Result<Self, ConfigError> {
        serde_json::from_str(BUNDLED_MENU).map_err(|source| ConfigError::Menu {
            path: "<bundled>".into(),
            source: source.into(),
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let menu_error = |source: Box<dyn std::error::Error + Send + Sync>| ConfigError::Menu {
            path: path.display().to_string(),
            source,
        };
        let raw = std::fs::read_to_string(path).map_err(|e| menu_error(e.into()))?;
        serde_json::from_str(&raw).map_err(|e| menu_error(e.into()))
    }

    /// Loads `path` when given, the bundled menu otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::bundled(),
        }
    }

    pub fn find(&self, id: u32) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_menu_parses_with_unique_ids() {
        let menu = Menu::bundled().unwrap();
        assert!(!menu.items().is_empty());

        let mut ids: Vec<u32> = menu.items().iter().map(|item| item.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), menu.items().len());
    }

    #[test]
    fn find_matches_by_id_only() {
        let menu = Menu::new(vec![MenuItem {
            id: 7,
            name: "Diavola".into(),
            price: 12.0,
            image: String::new(),
            description: String::new(),
        }]);

        assert_eq!(menu.find(7).map(|item| item.name.as_str()), Some("Diavola"));
        assert!(menu.find(8).is_none());
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = Menu::from_path(Path::new("/definitely/not/here/menu.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Menu { .. }));
    }
}
