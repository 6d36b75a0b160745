use thiserror::Error;

use crate::price::Price;

/// Alias for `Result<T, larder_inventory::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while talking to an [`Inventory`](crate::Inventory).
///
/// None of these are fatal. The store is left exactly as it was before the failing call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),

    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
}

/// Raised when an ingredient is rejected at the store boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ingredient name must not be empty")]
    EmptyName,

    #[error("quantity {0} is outside the accepted range 1..=1000")]
    QuantityOutOfRange(u32),

    #[error("price {0} is outside the accepted range 0.00..=1000.00")]
    PriceOutOfRange(Price),

    /// Text that could not be read as an ingredient field at all.
    #[error("malformed {field}: `{value}`")]
    Malformed { field: &'static str, value: String },
}

/// Raised when a record index does not exist in the store.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("index {index} is out of range for an inventory of {len} records")]
pub struct OutOfRange {
    pub index: usize,
    pub len: usize,
}

/// Raised for unknown sort fields or algorithms, and for requests the data cannot satisfy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid argument: {0}")]
pub struct InvalidArgument(pub String);
