use std::{fs, path::Path};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::pagination::{
    ClampMode, PaginationConfig, PaginationModel, DEFAULT_PAGE_LIMIT, MAXIMUM_PAGE_LIMIT,
    MAXIMUM_PAGE_NEIGHBOURS, STANDARD_PAGE_SIZES,
};

/// Host-level defaults for page controls, usually read from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct PagerSettings {
    #[validate(range(min = 1, max = MAXIMUM_PAGE_LIMIT))]
    pub page_limit: u64,
    #[validate(range(max = MAXIMUM_PAGE_NEIGHBOURS))]
    pub page_neighbours: u8,
    pub clamp_mode: ClampMode,
    #[validate(length(min = 1))]
    pub page_sizes: Vec<u64>,
}

impl Default for PagerSettings {
    fn default() -> Self {
        Self {
            page_limit: DEFAULT_PAGE_LIMIT,
            page_neighbours: 0,
            clamp_mode: ClampMode::default(),
            page_sizes: STANDARD_PAGE_SIZES.to_vec(),
        }
    }
}

impl PagerSettings {
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        let settings: Self = toml::from_str(raw).context("Failed to parse pager settings")?;
        settings
            .validate()
            .context("Invalid pager settings")?;
        Ok(settings)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read pager settings from: {}", path.display()))?;
        Self::from_toml_str(&raw)
    }

    pub fn config_for(&self, total_records: u64) -> PaginationConfig {
        PaginationConfig::new(
            total_records,
            self.page_limit,
            i64::from(self.page_neighbours),
        )
    }

    /// A model for `total_records` carrying these defaults.
    pub fn model_for(&self, total_records: u64) -> PaginationModel {
        PaginationModel::new(self.config_for(total_records))
            .with_clamp_mode(self.clamp_mode)
            .with_page_sizes(self.page_sizes.clone())
    }
}
