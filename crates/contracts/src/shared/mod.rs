pub mod endpoints;
pub mod error;
