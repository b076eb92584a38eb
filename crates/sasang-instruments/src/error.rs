use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("no assessment results to integrate")]
    NoModalities,

    #[error("invalid question bank: {0}")]
    QuestionBank(#[from] serde_json::Error),

    #[error("question bank failed validation: {0}")]
    InvalidQuestionBank(String),
}
