use thiserror::Error;

/// Unified error type for the entire portfolio-dashboard-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── User input ──────────────────────────────────────────────────
    #[error("Transaction validation failed: {0}")]
    ValidationError(String),

    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({endpoint}): {message}")]
    Api {
        endpoint: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Fire-and-forget sync ────────────────────────────────────────
    #[error("Backend sync failed ({endpoint}): {message}")]
    BackendSync {
        endpoint: String,
        message: String,
    },
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs so a
        // logged error never carries the user's raw search input.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
