//! REST client for the fleet service.
//!
//! One [`ApiClient`] serves all three resource collections; the resource
//! type parameter selects the path segment and the record shape.

mod client;
mod error;

pub use client::ApiClient;
pub use error::ApiError;
