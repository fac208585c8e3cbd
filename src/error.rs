use thiserror::Error;

/// Top-level error type for the gridlock recognition engine.
///
/// Only configuration can fail. Inside the recognition core, a missed hit
/// test, an unresolvable cell center, or an empty pattern at gesture end are
/// all expected outcomes modeled as absence, not as errors.
#[derive(Debug, Error)]
pub enum GridlockError {
    #[error("grid size must be at least 1, got {0}")]
    InvalidGridSize(usize),

    #[error("activation radius must be finite and positive, got {0}")]
    InvalidRadius(f64),
}

/// Convenience type alias for results using [`GridlockError`].
pub type Result<T> = std::result::Result<T, GridlockError>;
