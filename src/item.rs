//! Item Catalog
//!
//! The ordered, read-only collection of items the scene browses. The host
//! reads it once from a JSON manifest and hands it to the scene at
//! construction; nothing mutates it afterwards.

use std::fmt;

use serde::Deserialize;

/// One item of the collection.
///
/// `id` doubles as the texture key for every visual derived from the item
/// (thumbnail, enlarged image, entity sprite). `name` and `description` are
/// optional; the detail panel substitutes placeholders when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct Item {
    pub id: String,
    /// Resource locator for the item image, relative to the working directory.
    pub image: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Ordered, immutable item sequence.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemCatalog {
    items: Vec<Item>,
}

impl ItemCatalog {
    /// Builds a catalog directly; the host normally goes through
    /// [`ItemCatalog::load_from_file`].
    #[allow(dead_code)]
    pub fn new(items: Vec<Item>) -> Self {
        ItemCatalog { items }
    }

    /// Reads a `{ "items": [...] }` manifest from disk.
    pub fn load_from_file(path: &str) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let catalog: ItemCatalog = serde_json::from_str(&content)?;
        Ok(catalog)
    }

    /// The item backing a grid slot, or `None` for an empty slot.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}

/// Errors reading the item manifest.
#[derive(Debug)]
pub enum CatalogError {
    /// Manifest file could not be read
    Io(std::io::Error),
    /// Manifest content is not valid item JSON
    Parse(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "failed to read item manifest: {}", e),
            CatalogError::Parse(e) => write!(f, "invalid item manifest: {}", e),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(error: std::io::Error) -> Self {
        CatalogError::Io(error)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(error: serde_json::Error) -> Self {
        CatalogError::Parse(error)
    }
}
