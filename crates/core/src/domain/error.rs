// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Integer overflow: {a} + {b}")]
    Overflow { a: i32, b: i32 },

    #[error("Count {count} exceeds handle length {len}")]
    CountOutOfRange { count: usize, len: usize },

    #[error("Invalid value '{value}' for {field}")]
    InvalidChoice { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, DomainError>;
