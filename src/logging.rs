//! Logging utilities for pet-friends
//!
//! Re-exports tracing macros with log_* naming convention for consistency.

// Re-export tracing macros with log_* naming
pub use tracing::{debug as log_debug, error as log_error, warn as log_warn};
