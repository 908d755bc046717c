//! Career catalog
//!
//! The catalog is an immutable lookup table parsed once at startup, either
//! from the TOML document compiled into the binary or from a user-supplied
//! file. Lookups are keyed by normalized (trimmed, lower-cased) name and
//! never fail: unknown names get a defined empty profile.

pub mod career;

pub use career::{CareerLevels, CareerProfile, LevelInfo, ResourceLink};

use crate::config::Config;
use crate::error::{CareerCompassError, Result};
use log::info;
use std::collections::HashMap;
use std::path::Path;

const BUILTIN_CAREERS: &str = include_str!("careers.toml");

#[derive(Debug, serde::Deserialize)]
struct CatalogFile {
    careers: Vec<CareerProfile>,
}

pub struct CareerCatalog {
    profiles: HashMap<String, CareerProfile>,
    /// Display names in catalog order; iteration and ranking tie-breaks
    /// follow this order.
    order: Vec<String>,
}

impl CareerCatalog {
    /// Parse the catalog compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_CAREERS)
    }

    /// Load the configured catalog: a custom file when one is set, the
    /// built-in data otherwise.
    pub fn load(config: &Config) -> Result<Self> {
        match &config.catalog.custom_path {
            Some(path) => {
                info!("Loading career catalog from {}", path.display());
                Self::from_path(path)
            }
            None => Self::builtin(),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    fn from_toml(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)
            .map_err(|e| CareerCompassError::Catalog(format!("Failed to parse catalog: {}", e)))?;

        let mut profiles = HashMap::new();
        let mut order = Vec::new();
        for profile in file.careers {
            let key = Self::normalize(&profile.name);
            if profiles.insert(key, profile.clone()).is_some() {
                return Err(CareerCompassError::Catalog(format!(
                    "Duplicate career name in catalog: {}",
                    profile.name
                )));
            }
            order.push(profile.name);
        }

        Ok(Self { profiles, order })
    }

    fn normalize(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// The profile for a name, if the catalog knows it.
    pub fn get(&self, name: &str) -> Option<&CareerProfile> {
        self.profiles.get(&Self::normalize(name))
    }

    /// The profile for a name, falling back to the defined empty profile
    /// for unknown names.
    pub fn details(&self, name: &str) -> CareerProfile {
        self.get(name)
            .cloned()
            .unwrap_or_else(|| CareerProfile::unknown(name))
    }

    /// Display names in catalog order.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Profiles in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CareerProfile> {
        self.order
            .iter()
            .filter_map(|name| self.profiles.get(&Self::normalize(name)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Closest catalog name to a query, for "did you mean" hints. Fuzzy
    /// similarity is a CLI convenience only and never feeds scoring.
    pub fn closest_name(&self, query: &str) -> Option<&str> {
        let normalized = Self::normalize(query);
        self.order
            .iter()
            .map(|name| {
                let score = strsim::jaro_winkler(&Self::normalize(name), &normalized);
                (name.as_str(), score)
            })
            .filter(|(_, score)| *score >= 0.7)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(name, _)| name)
    }
}

impl Default for CareerCatalog {
    fn default() -> Self {
        Self::builtin().expect("Built-in career catalog is valid")
    }
}
