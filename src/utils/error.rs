use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum PaginationError {
    /// Only raised under `ClampMode::Strict`, where landing on page 0 is refused.
    #[error("page {requested} is out of range (total pages: {total_pages})")]
    InvalidPage { requested: i64, total_pages: u64 },

    #[error(transparent)]
    InvalidConfig(#[from] ValidationErrors),

    #[error("pagination state lock was poisoned")]
    Poisoned,
}

pub type Result<T, E = PaginationError> = core::result::Result<T, E>;

#[macro_export]
/// log and swallow an error where the caller has no way to recover.
macro_rules! unhandled_error {
    ($result:expr, $msg:tt) => {
        if let Err(e) = $result {
            tracing::error!(e = ?e, $msg);
        }
    };
}
