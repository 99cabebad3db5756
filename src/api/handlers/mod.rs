//! HTTP request handlers.

pub mod category_handler;
pub mod question_handler;
pub mod quiz_handler;

pub use category_handler::category_routes;
pub use question_handler::question_routes;
pub use quiz_handler::quiz_routes;
