mod integration_tests {
    use crate::schemas::HealthResponse;
    use crate::test_utils::{init_test_tracing, setup_test_app};
    use axum::http::StatusCode;
    use axum_test::TestServer;

    fn bundle_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html><body>delaycast</body></html>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('app');").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_health_check() {
        let _guard = init_test_tracing();
        let dir = bundle_dir();
        let server = TestServer::new(setup_test_app(dir.path())).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.frontend, "available");
    }

    #[tokio::test]
    async fn test_health_check_without_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let server = TestServer::new(setup_test_app(dir.path())).unwrap();

        let body: HealthResponse = server.get("/health").await.json();

        assert_eq!(body.frontend, "missing");
    }

    #[tokio::test]
    async fn test_static_assets_are_served() {
        let dir = bundle_dir();
        let server = TestServer::new(setup_test_app(dir.path())).unwrap();

        let response = server.get("/app.js").await;

        response.assert_status(StatusCode::OK);
        assert!(response.text().contains("console.log"));
    }

    #[tokio::test]
    async fn test_unknown_paths_fall_back_to_index() {
        let dir = bundle_dir();
        let server = TestServer::new(setup_test_app(dir.path())).unwrap();

        let response = server.get("/some/client/route").await;

        response.assert_status(StatusCode::OK);
        assert!(response.text().contains("delaycast"));
    }
}

mod client_tests {
    use crate::cli::commands::predict;
    use crate::config::Settings;
    use crate::test_utils::{closed_port_url, init_test_tracing, spawn_stub_service};
    use crate::transport::ReqwestTransport;
    use common::{
        ClientError, DelayCategory, FALLBACK_AIRPORTS, FALLBACK_CARRIERS, PredictionClient,
        PredictionForm,
    };
    use std::time::Duration;

    fn client(base_url: &str) -> PredictionClient<ReqwestTransport> {
        PredictionClient::new(ReqwestTransport::new(base_url, Duration::from_secs(5)).unwrap())
    }

    fn settings(base_url: String) -> Settings {
        Settings {
            api_base_url: base_url,
            bind_address: "127.0.0.1:0".to_string(),
            static_dir: "dist".into(),
            request_timeout_secs: 5,
        }
    }

    fn form(carrier: &str) -> PredictionForm {
        PredictionForm {
            carrier: carrier.to_string(),
            airport: "ATL".to_string(),
            month: "7".to_string(),
            arr_flights: "150".to_string(),
            ..PredictionForm::default()
        }
    }

    #[tokio::test]
    async fn test_predict_success() {
        let _guard = init_test_tracing();
        let base_url = spawn_stub_service().await;

        let result = client(&base_url).predict(&form("AA")).await.unwrap();

        assert_eq!(result.total_minutes_rounded(), 42);
        assert_eq!(result.average_minutes_rounded(), 10);
        assert_eq!(result.delay_category, DelayCategory::Moderate);
    }

    #[tokio::test]
    async fn test_predict_surfaces_service_error_verbatim() {
        let base_url = spawn_stub_service().await;

        let err = client(&base_url).predict(&form("ZZ")).await.unwrap_err();

        assert_eq!(err, ClientError::Remote("Unknown carrier: ZZ".to_string()));
        assert_eq!(err.user_message(), "Unknown carrier: ZZ");
    }

    #[tokio::test]
    async fn test_predict_unreachable_service_is_transport_error() {
        let base_url = closed_port_url().await;

        let err = client(&base_url).predict(&form("AA")).await.unwrap_err();

        assert!(matches!(err, ClientError::Transport(_)));
    }

    #[tokio::test]
    async fn test_insights_month_labels() {
        let base_url = spawn_stub_service().await;

        let insights = client(&base_url).insights().await.unwrap();
        let months = insights.monthly_series();

        assert_eq!(insights.best_model, "Random Forest");
        assert_eq!(months[0].label, "Jan");
        assert_eq!(months[1].label, "Jul");
        assert_eq!(months[2].label, "Dec");
        assert_eq!(insights.busiest_airports(1)[0].code, "ORD");
        assert_eq!(insights.top_carriers(1)[0].code, "DL");
    }

    #[tokio::test]
    async fn test_options_use_service_lists_and_fallbacks() {
        let base_url = spawn_stub_service().await;
        let client = client(&base_url);

        assert_eq!(client.carriers().await, vec!["AA".to_string(), "DL".to_string()]);
        assert_eq!(client.airports().await.len(), FALLBACK_AIRPORTS.len());
    }

    #[tokio::test]
    async fn test_options_fall_back_when_unreachable() {
        let base_url = closed_port_url().await;
        let client = client(&base_url);

        let carriers = client.carriers().await;
        let airports = client.airports().await;

        assert_eq!(carriers[0], FALLBACK_CARRIERS[0]);
        assert_eq!(carriers.len(), 10);
        assert_eq!(airports[0], "ATL");
    }

    #[tokio::test]
    async fn test_predict_command_rejects_incomplete_input_offline() {
        let settings = settings(closed_port_url().await);
        let incomplete = PredictionForm { carrier: "AA".to_string(), ..PredictionForm::default() };

        let err = predict(&settings, &incomplete).await.unwrap_err();

        assert_eq!(err.to_string(), "Please select an airport");
    }

    #[tokio::test]
    async fn test_predict_command_reports_remote_error() {
        let settings = settings(spawn_stub_service().await);

        let err = predict(&settings, &form("ZZ")).await.unwrap_err();

        assert_eq!(err.to_string(), "Unknown carrier: ZZ");
    }
}
