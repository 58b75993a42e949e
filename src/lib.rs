pub mod pagination;
pub mod utils;

pub use pagination::{
    compute_tokens, ClampMode, NavIntent, PageChange, PageToken, PaginationConfig,
    PaginationInput, PaginationModel, SharedPaginationModel,
};
pub use utils::error::{PaginationError, Result};
pub use utils::settings::PagerSettings;
