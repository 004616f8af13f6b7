use crate::RecordId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown record type: {0}")]
    UnknownRecordType(String),

    #[error("Record id {0} priority missing")]
    MissingPriority(RecordId),

    #[error("Record id {id} priority invalid: {token}")]
    InvalidPriority { id: RecordId, token: String },

    #[error("Database error: {0}")]
    DatabaseError(String),
}
