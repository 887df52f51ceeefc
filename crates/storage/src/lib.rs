//! # Profitlens Storage Crate
//!
//! Persists the product catalog and the orders to a single pretty-printed JSON file.
//!
//! - `JsonStore`: A cheap-to-clone handle that reads the file on every call and
//!   serializes writers, so readers always see the latest saved state.
//! - `StorageError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use error::StorageError;
pub use store::JsonStore;
