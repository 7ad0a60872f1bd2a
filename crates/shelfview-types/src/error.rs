use thiserror::Error;

/// Result type for shelfview-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Validation errors raised while building pipeline parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A page size of zero was requested
    #[error("page size must be greater than zero")]
    ZeroPageSize,

    /// The page-size selector was configured without any choices
    #[error("at least one page size choice is required")]
    NoPageSizeChoices,
}
