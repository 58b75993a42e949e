use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::error::Result;

pub const DEFAULT_PAGE_LIMIT: u64 = 10;

pub const MAXIMUM_PAGE_LIMIT: u64 = 65535;

pub const MAXIMUM_PAGE_NEIGHBOURS: u8 = 2;

/// How navigation treats targets below the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClampMode {
    /// Clamp into `[0, total_pages]`; paging left past page 1 lands on page 0.
    #[default]
    Permissive,
    /// Clamp into `[1, total_pages]`.
    FirstPage,
    /// Refuse any target that would clamp to page 0.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaginationConfig {
    pub total_records: u64,
    #[validate(range(min = 1, max = MAXIMUM_PAGE_LIMIT))]
    pub page_limit: u64,
    #[validate(range(max = MAXIMUM_PAGE_NEIGHBOURS))]
    pub page_neighbours: u8,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            total_records: 0,
            page_limit: DEFAULT_PAGE_LIMIT,
            page_neighbours: 0,
        }
    }
}

impl PaginationConfig {
    /// Lenient constructor: a zero page limit falls back to the default and
    /// the neighbour count is clamped into `[0, 2]`.
    pub fn new(total_records: u64, page_limit: u64, page_neighbours: i64) -> Self {
        let page_limit = if page_limit == 0 {
            DEFAULT_PAGE_LIMIT
        } else {
            page_limit
        };
        Self {
            total_records,
            page_limit,
            page_neighbours: page_neighbours.clamp(0, i64::from(MAXIMUM_PAGE_NEIGHBOURS)) as u8,
        }
    }

    pub fn try_new(total_records: u64, page_limit: u64, page_neighbours: u8) -> Result<Self> {
        let config = Self {
            total_records,
            page_limit,
            page_neighbours,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn total_pages(&self) -> u64 {
        self.total_records.div_ceil(self.page_limit.max(1))
    }

    /// Width of the visible neighbour window, which is also the block-skip step.
    pub fn block_step(&self) -> i64 {
        i64::from(self.page_neighbours) * 2 + 1
    }
}
