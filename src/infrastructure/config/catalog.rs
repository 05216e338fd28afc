//! Branch and unit lists offered by the forms.

use serde::Deserialize;

use crate::domain::Catalog;

/// `[catalog]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    pub branches: Vec<String>,
    pub units: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let catalog = Catalog::default();
        Self {
            branches: catalog.branches().to_vec(),
            units: catalog.units().to_vec(),
        }
    }
}

impl CatalogConfig {
    #[must_use]
    pub fn to_catalog(&self) -> Catalog {
        let clean = |values: &[String]| -> Vec<String> {
            values.iter().map(|v| v.trim().to_string()).collect()
        };
        Catalog::new(clean(&self.branches), clean(&self.units))
    }
}
