//! Physics error types.

/// Errors raised by the physics formulas and tables.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PhysicsError {
    /// The habitable-zone kind is not one of the recognized names.
    #[error("unknown habitable zone kind `{0}` (expected `conservative` or `optimistic`)")]
    InvalidHzKind(String),

    /// No color rows were left after filtering by calibration type.
    #[error("color table has no rows for calibration `{0}`")]
    EmptyColorTable(String),
}
