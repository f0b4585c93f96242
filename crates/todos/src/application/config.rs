//! Application Configuration
//!
//! Configuration for the todos application layer.

/// Todos application configuration
#[derive(Debug, Clone)]
pub struct TodosConfig {
    /// Maximum title length in characters
    pub title_max_chars: usize,
    /// Maximum notes length in characters
    pub notes_max_chars: usize,
}

impl Default for TodosConfig {
    fn default() -> Self {
        Self {
            title_max_chars: 200,
            notes_max_chars: 2000,
        }
    }
}
