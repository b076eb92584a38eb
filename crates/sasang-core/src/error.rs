use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown constitution: {0}")]
    UnknownConstitution(String),

    #[error("unknown question category: {0}")]
    UnknownCategory(String),
}
