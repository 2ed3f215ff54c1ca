//! Request extractors that reject with [`crate::error::AppError`].

pub mod json;
pub use json::JsonObject;
