//! Common types shared by all aggregates

pub mod datetime;
pub mod error;

// Re-exports
pub use datetime::parse_api_datetime;
pub use error::DomainError;
