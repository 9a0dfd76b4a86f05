// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use portfolio_dashboard_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn validation_error() {
        let err = CoreError::ValidationError("Quantity must be a positive number".into());
        assert_eq!(
            err.to_string(),
            "Transaction validation failed: Quantity must be a positive number"
        );
    }

    #[test]
    fn api_error() {
        let err = CoreError::Api {
            endpoint: "/api/portfolio".into(),
            message: "HTTP 500 Internal Server Error".into(),
        };
        assert_eq!(
            err.to_string(),
            "API error (/api/portfolio): HTTP 500 Internal Server Error"
        );
    }

    #[test]
    fn network_error() {
        let err = CoreError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn deserialization_error() {
        let err = CoreError::Deserialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Deserialization error: unexpected EOF");
    }

    #[test]
    fn backend_sync_error() {
        let err = CoreError::BackendSync {
            endpoint: "/api/add_transaction".into(),
            message: "HTTP 503".into(),
        };
        assert_eq!(
            err.to_string(),
            "Backend sync failed (/api/add_transaction): HTTP 503"
        );
    }

    #[test]
    fn validation_error_empty_message() {
        let err = CoreError::ValidationError(String::new());
        assert_eq!(err.to_string(), "Transaction validation failed: ");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn serde_json_error_becomes_deserialization() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: CoreError = parse_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn serde_json_error_keeps_message() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let msg = parse_err.to_string();
        let err: CoreError = parse_err.into();
        assert_eq!(err.to_string(), format!("Deserialization error: {msg}"));
    }
}

// ── Error trait ─────────────────────────────────────────────────────

mod error_trait {
    use super::*;

    #[test]
    fn implements_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<CoreError>();
    }

    #[test]
    fn debug_names_the_variant() {
        let err = CoreError::Network("x".into());
        assert!(format!("{err:?}").starts_with("Network"));
    }
}
