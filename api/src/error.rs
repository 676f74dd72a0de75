use serde::Deserialize;
use thiserror::Error;

/// PostgreSQL SQLSTATE for `unique_violation`.
pub const UNIQUE_VIOLATION: &str = "23505";

const UNIQUE_VIOLATION_TEXT: &str = "violates unique constraint";

#[derive(Error, Debug)]
pub enum StoreError {
    /// The store answered with a structured failure.
    #[error("{message}")]
    Rejected {
        code: Option<String>,
        message: String,
        details: Option<String>,
        hint: Option<String>,
    },

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid store url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("waitlist is not configured: missing {0}")]
    NotConfigured(&'static str),

    #[error("{0}")]
    Unexpected(String),
}

impl StoreError {
    pub fn rejected(code: Option<&str>, message: impl Into<String>) -> Self {
        Self::Rejected {
            code: code.map(str::to_string),
            message: message.into(),
            details: None,
            hint: None,
        }
    }

    /// Whether the store refused the insert because the email already exists.
    ///
    /// Matches on the SQLSTATE code, or on the message text when the code is
    /// missing or rewritten by a proxy.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Rejected { code, message, .. } => {
                code.as_deref() == Some(UNIQUE_VIOLATION)
                    || message.contains(UNIQUE_VIOLATION_TEXT)
            }
            _ => false,
        }
    }

    /// True when the store itself produced the failure (as opposed to a
    /// local problem before any answer arrived).
    pub fn is_reported(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Build a failure from a non-success response body.
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<PostgrestError>(body) {
            Ok(err) => Self::Rejected {
                message: err.message.unwrap_or_else(|| format!("HTTP {status}")),
                code: err.code,
                details: err.details,
                hint: err.hint,
            },
            Err(_) => {
                let body = body.trim();
                let message = if body.is_empty() {
                    format!("HTTP {status}")
                } else {
                    body.to_string()
                };
                Self::rejected(None, message)
            }
        }
    }
}

/// Error body returned by PostgREST.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    hint: Option<String>,
}
