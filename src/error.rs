use thiserror::Error;

/// Errors that can occur while turning text into a recipe payload.
///
/// Extraction itself never fails; these cover the form, the builder and I/O around it.
#[derive(Error, Debug)]
pub enum DraftError {
    /// Recipe form was submitted without a name
    #[error("Recipe name is required")]
    MissingName,

    /// Difficulty string is not one of Easy, Medium or Hard
    #[error("Invalid difficulty: {0}")]
    InvalidDifficulty(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Failed to read the input text
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize or deserialize JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
