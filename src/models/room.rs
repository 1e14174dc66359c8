use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoomCatalogEntry {
    pub code: String,
    pub display_name: String,
    pub price_per_night: u64, // Whole rupees
}

impl RoomCatalogEntry {
    pub fn new(code: &str, display_name: &str, price_per_night: u64) -> Self {
        Self {
            code: code.to_string(),
            display_name: display_name.to_string(),
            price_per_night,
        }
    }
}

#[derive(Debug)]
pub enum CatalogError {
    Io(String),
    Parse(String),
    Empty,
    EmptyCode,
    DuplicateCode(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "Failed to read room catalog: {}", err),
            CatalogError::Parse(err) => write!(f, "Failed to parse room catalog: {}", err),
            CatalogError::Empty => write!(f, "Room catalog has no entries"),
            CatalogError::EmptyCode => write!(f, "Room catalog entry has an empty code"),
            CatalogError::DuplicateCode(code) => {
                write!(f, "Room code '{}' appears more than once", code)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Immutable set of bookable rooms, keyed by code.
///
/// Name and nightly price live on the same entry so they can never drift
/// apart. Entries keep their declaration order for listings.
#[derive(Debug, Clone, Serialize)]
pub struct RoomCatalog {
    entries: Vec<RoomCatalogEntry>,
}

impl RoomCatalog {
    pub fn new(entries: Vec<RoomCatalogEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.code.trim().is_empty() {
                return Err(CatalogError::EmptyCode);
            }
            if !seen.insert(entry.code.as_str()) {
                return Err(CatalogError::DuplicateCode(entry.code.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// The hotel's published room line-up.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                RoomCatalogEntry::new("deluxe", "Deluxe Room", 25_000),
                RoomCatalogEntry::new("premier", "Premier Room", 32_000),
                RoomCatalogEntry::new("club", "Club Room", 38_000),
                RoomCatalogEntry::new("cityscape", "Four Seasons Cityscape Suite", 65_000),
                RoomCatalogEntry::new("garden", "Garden Suite", 85_000),
                RoomCatalogEntry::new("presidential", "Presidential Suite", 250_000),
            ],
        }
    }

    /// Load a catalog from a JSON array of entries.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|e| CatalogError::Io(e.to_string()))?;
        let entries: Vec<RoomCatalogEntry> =
            serde_json::from_str(&raw).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(entries)
    }

    pub fn get(&self, code: &str) -> Option<&RoomCatalogEntry> {
        self.entries.iter().find(|entry| entry.code == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn entries(&self) -> &[RoomCatalogEntry] {
        &self.entries
    }
}
