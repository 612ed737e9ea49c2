use std::num::ParseFloatError;

#[derive(Debug, thiserror::Error)]
pub enum SezError {
    #[error("Invalid number {value:?}: {source}")]
    InvalidNumber {
        value: String,
        source: ParseFloatError,
    },
}

pub type Result<T> = std::result::Result<T, SezError>;
