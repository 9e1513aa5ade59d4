use std::{fs, path::Path};

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::studio::Studio;

/// The static studio dataset, loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudioCatalog {
    #[serde(rename = "Studios")]
    studios: Vec<Studio>,
}

impl StudioCatalog {
    pub fn new(studios: Vec<Studio>) -> Self {
        Self { studios }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).wrap_err("Invalid studio dataset")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read studio dataset {}", path.display()))?;
        let catalog = Self::from_json_str(&json)?;
        info!("Loaded {} studios from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn studios(&self) -> &[Studio] {
        &self.studios
    }

    pub fn find(&self, id: u32) -> Option<&Studio> {
        self.studios.iter().find(|studio| studio.id == id)
    }

    pub fn len(&self) -> usize {
        self.studios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.studios.is_empty()
    }
}
