//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Pagination
// =============================================================================

/// Number of questions per page on every paginated listing
pub const QUESTIONS_PER_PAGE: u64 = 10;

/// Default starting page number (1-indexed)
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

// =============================================================================
// Quiz
// =============================================================================

/// Category `type` the front-end sends when the player picks "All"
pub const QUIZ_ALL_CATEGORIES_TYPE: &str = "click";

/// Category id the front-end sends when the player picks "All"
pub const QUIZ_ALL_CATEGORIES_ID: i32 = 0;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

// =============================================================================
// CORS
// =============================================================================

/// Methods advertised to cross-origin callers
pub const CORS_ALLOWED_METHODS: &[&str] = &["GET", "PUT", "POST", "DELETE", "OPTIONS"];
