// ═══════════════════════════════════════════════════════════════════
// Provider Tests — BackendClient against a wiremock server
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use portfolio_dashboard_core::errors::CoreError;
use portfolio_dashboard_core::models::event::TransactionRecord;
use portfolio_dashboard_core::providers::backend::BackendClient;
use portfolio_dashboard_core::providers::traits::PortfolioApi;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn snapshot_body() -> serde_json::Value {
    json!({
        "positions": [{
            "id": "aapl",
            "symbol": "AAPL",
            "name": "Apple Inc.",
            "price": 189.5,
            "quantity": 2.0,
            "dayGain": 3.2,
            "dayGainPercent": 0.85,
            "value": 379.0,
            "totalGain": 79.0,
            "totalGainPercent": 26.33,
            "purchases": [{
                "transactionId": "txn-1",
                "date": "2025-01-15",
                "purchasePrice": 150.0,
                "quantity": 2.0,
                "value": 379.0,
                "totalGain": 79.0,
                "totalGainPercent": 26.33,
                "action": "buy",
                "securityType": "Common Stock"
            }]
        }],
        "balance": 10250.75,
        "timestamp": "2025-08-05T14:30:00",
        "dayChange": -120.5,
        "dayPercent": -1.16,
        "totalGain": 2250.75,
        "totalGainPercent": 28.13,
        "portfolioHighlights": [
            {"name": "Common Stock", "value": 8000.0, "percent": 78.0}
        ]
    })
}

// ═══════════════════════════════════════════════════════════════════
// Snapshot endpoints
// ═══════════════════════════════════════════════════════════════════

mod snapshots {
    use super::*;

    #[tokio::test]
    async fn live_snapshot_uses_api_portfolio() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/portfolio"))
            .respond_with(ResponseTemplate::new(200).set_body_json(snapshot_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        let snapshot = client.fetch_snapshot().await.unwrap();

        assert_eq!(snapshot.positions.len(), 1);
        assert_eq!(snapshot.positions[0].symbol, "AAPL");
        assert_eq!(snapshot.positions[0].purchases[0].date, d(2025, 1, 15));
        assert_eq!(snapshot.summary.balance, 10250.75);
        assert_eq!(snapshot.summary.portfolio_highlights[0].name, "Common Stock");
    }

    #[tokio::test]
    async fn cold_snapshot_uses_api_cache_portfolio() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cache/portfolio"))
            .respond_with(ResponseTemplate::new(200).set_body_json(snapshot_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        let snapshot = client.fetch_cold_snapshot().await.unwrap();

        assert_eq!(snapshot.positions.len(), 1);
    }

    #[tokio::test]
    async fn non_2xx_becomes_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/portfolio"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        let result = client.fetch_snapshot().await;

        match result.unwrap_err() {
            CoreError::Api { endpoint, message } => {
                assert_eq!(endpoint, "/api/portfolio");
                assert!(message.contains("500"));
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn undecodable_body_becomes_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/cache/portfolio"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        let result = client.fetch_cold_snapshot().await;

        assert!(matches!(result, Err(CoreError::Api { .. })));
    }

    #[tokio::test]
    async fn unreachable_backend_becomes_network_error() {
        // Nothing listens on port 1.
        let client = BackendClient::new("http://127.0.0.1:1");
        let result = client.fetch_snapshot().await;

        assert!(matches!(result, Err(CoreError::Network(_))));
    }

    #[tokio::test]
    async fn trailing_slash_in_base_url_is_tolerated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/portfolio"))
            .respond_with(ResponseTemplate::new(200).set_body_json(snapshot_body()))
            .expect(1)
            .mount(&server)
            .await;

        let client = BackendClient::new(format!("{}/", server.uri()));
        assert!(client.fetch_snapshot().await.is_ok());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Symbol suggestions
// ═══════════════════════════════════════════════════════════════════

mod suggestions {
    use super::*;

    #[tokio::test]
    async fn query_is_passed_as_q_parameter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/symbolSuggestion"))
            .and(query_param("q", "AAP"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "symbol": "AAPL",
                "displaySymbol": "AAPL",
                "description": "Apple Inc.",
                "exchange": "NASDAQ",
                "type": "Common Stock"
            }])))
            .expect(1)
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        let suggestions = client.symbol_suggestions("AAP").await.unwrap();

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].symbol, "AAPL");
        assert_eq!(suggestions[0].kind, "Common Stock");
    }

    #[tokio::test]
    async fn empty_result_list_is_ok() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/symbolSuggestion"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        let suggestions = client.symbol_suggestions("ZZZZ").await.unwrap();
        assert!(suggestions.is_empty());
    }

    #[tokio::test]
    async fn lookup_failure_becomes_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/symbolSuggestion"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        let result = client.symbol_suggestions("AAP").await;

        match result.unwrap_err() {
            CoreError::Api { endpoint, .. } => assert_eq!(endpoint, "/api/symbolSuggestion"),
            other => panic!("Expected Api error, got {:?}", other),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// Outbound notifications
// ═══════════════════════════════════════════════════════════════════

mod notifications {
    use super::*;

    fn record() -> TransactionRecord {
        TransactionRecord {
            date: d(2025, 8, 1),
            cost_basis: 150.0,
            quantity: 2.0,
            company_name: "Apple Inc.".to_string(),
            symbol: "AAPL".to_string(),
            kind: "Common Stock".to_string(),
        }
    }

    #[tokio::test]
    async fn add_posts_snake_case_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/add_transaction"))
            .and(body_json(json!({
                "date": "2025-08-01",
                "cost_basis": 150.0,
                "quantity": 2.0,
                "company_name": "Apple Inc.",
                "symbol": "AAPL",
                "type": "Common Stock"
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        client.add_transaction(&record()).await.unwrap();
    }

    #[tokio::test]
    async fn add_failure_becomes_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/add_transaction"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        let result = client.add_transaction(&record()).await;

        assert!(matches!(result, Err(CoreError::Api { .. })));
    }

    #[tokio::test]
    async fn delete_targets_the_transaction_path() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/transactions/txn-123"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        client.delete_transaction("txn-123").await.unwrap();
    }

    #[tokio::test]
    async fn delete_failure_carries_the_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/transactions/txn-123"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = BackendClient::new(server.uri());
        let result = client.delete_transaction("txn-123").await;

        match result.unwrap_err() {
            CoreError::Api { endpoint, message } => {
                assert_eq!(endpoint, "/api/transactions/txn-123");
                assert!(message.contains("404"));
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }
}
