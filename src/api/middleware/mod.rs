//! API middleware.

mod cors;
mod envelope;

pub use cors::cors_layer;
pub use envelope::error_envelope;
