use crate::model::ProductId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockError {
    #[error("Format error on line {line}: {problem}")]
    Format { line: usize, problem: RowProblem },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("No product id left after {0}")]
    IdsExhausted(ProductId),
}

/// What was wrong with a single line of the catalog file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowProblem {
    #[error("expected header \"{expected}\", found \"{found}\"")]
    BadHeader {
        expected: &'static str,
        found: String,
    },

    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid {field} \"{value}\"")]
    InvalidNumber { field: &'static str, value: String },

    #[error("id must be a positive integer")]
    ZeroId,

    #[error("duplicate id {0}")]
    DuplicateId(ProductId),
}

impl StockError {
    pub fn format(line: usize, problem: RowProblem) -> Self {
        StockError::Format { line, problem }
    }
}

pub type Result<T> = std::result::Result<T, StockError>;
