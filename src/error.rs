use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("support threshold must be in (0, 1], got {0}")]
    InvalidSupport(f64),

    #[error("confidence threshold must be in (0, 1], got {0}")]
    InvalidConfidence(f64),

    /// A data row marked a column for which no attribute was declared.
    #[error("data row selects column {column}, but only {declared} attributes are declared")]
    UnknownAttribute { column: usize, declared: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
