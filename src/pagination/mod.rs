mod config;
mod input;
mod model;
mod page_size;
mod shared;
mod token;
mod window;

pub use config::{
    ClampMode, PaginationConfig, DEFAULT_PAGE_LIMIT, MAXIMUM_PAGE_LIMIT, MAXIMUM_PAGE_NEIGHBOURS,
};
pub use input::{PaginationInput, PaginationInputBuilder, PaginationInputBuilderError};
pub use model::{OnPageChanged, PageChange, PageStatus, PaginationModel};
pub use page_size::{page_size_options, STANDARD_PAGE_SIZES};
pub use shared::SharedPaginationModel;
pub use token::{NavIntent, PageToken, TokenView};
pub use window::compute_tokens;
