use std::fmt;

use thiserror::Error;

pub type CardId = u64;

/// Events emitted by the engine back to the driving surface. Exactly one
/// per attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ProbeCompleted {
        card_id: CardId,
        epoch: u64,
        source_index: usize,
        result: Result<ProbeOutput, ProbeError>,
    },
}

/// Metadata about a usable image response. The bytes themselves are
/// drained and discarded; only the fact that the candidate loads matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutput {
    pub final_url: String,
    pub content_type: Option<String>,
    pub byte_len: u64,
    pub redirect_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ProbeError {
    pub kind: FailureKind,
    pub message: String,
}

impl ProbeError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    NotAnImage { content_type: String },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::NotAnImage { content_type } => {
                write!(f, "response is not an image ({content_type})")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
