use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayoutError {
    #[error("validation error: {0}")]
    ValidationError(String),
}
