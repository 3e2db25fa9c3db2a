//! Message catalog loading errors

/// Errors that can occur while loading a translation catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog is not a JSON object of template to translation.
    #[error("Invalid catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
