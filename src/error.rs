use thiserror::Error;

/// Reasons a wall template cannot seed a half-grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template dimensions must be non-zero (got {width}x{height})")]
    ZeroDimension { width: usize, height: usize },
    #[error("template has {found} cells but {expected} were expected")]
    CellCount { expected: usize, found: usize },
}
