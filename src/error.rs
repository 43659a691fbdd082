use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid time range: {0}")]
    InvalidTimeRange(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Member not found: {0}")]
    MemberNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
