pub mod aggregate;
pub mod create;
pub mod status;
