use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::config::{PaginationConfig, DEFAULT_PAGE_LIMIT};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Builder)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "camelCase", default)]
pub struct PaginationInput {
    pub total_records: Option<Value>,
    pub page_limit: Option<Value>,
    pub page_neighbours: Option<Value>,
}

impl PaginationInput {
    pub fn builder() -> PaginationInputBuilder {
        PaginationInputBuilder::default()
    }

    /// Derive a config, substituting defaults for anything that is not a number.
    pub fn derive_config(&self) -> PaginationConfig {
        let total_records = as_number(self.total_records.as_ref()).map_or(0, |n| n.max(0.0) as u64);
        let page_limit = as_number(self.page_limit.as_ref())
            .map(|n| n as i64)
            .filter(|n| *n >= 1)
            .map_or(DEFAULT_PAGE_LIMIT, |n| n as u64);
        let page_neighbours = as_number(self.page_neighbours.as_ref()).map_or(0, |n| n as i64);
        PaginationConfig::new(total_records, page_limit, page_neighbours)
    }
}

fn as_number(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64).filter(|n| n.is_finite())
}
