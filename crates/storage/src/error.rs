use core_types::{CoreError, ProductId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to access the data file: {0}")]
    Io(#[from] std::io::Error),

    #[error("An error occurred during JSON serialization/deserialization: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{}", .0.message())]
    Validation(#[from] CoreError),

    #[error("Product not found")]
    ProductNotFound(ProductId),
}
