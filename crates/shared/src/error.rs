use serde::{Deserialize, Serialize};

/// Error payload the server attaches to non-2xx responses. Only the fields the
/// client actually reads are modeled; the server sends more (timestamp, path).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: u16,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: Some(message.into()),
        }
    }
}
