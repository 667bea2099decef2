use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("empty payload")]
    EmptyPayload,

    #[error("malformed receipt payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

pub type ProtocolResult<T> = Result<T, ProtocolError>;
