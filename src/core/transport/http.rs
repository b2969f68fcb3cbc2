//! HTTP transport implementation.
//!
//! Serves the MCP protocol over rmcp's streamable HTTP service (POST for
//! requests, SSE for server-to-client events) next to a few plain JSON
//! endpoints:
//!
//! - `GET /` and `GET /health`: liveness and the current tool count
//! - `GET /tools`: every tool descriptor
//! - `<mcp_path>` (default `/sse`): the MCP endpoint. Clients `POST` an
//!   `initialize` request first and send the returned `Mcp-Session-Id` on
//!   every later call; a `GET` without a session is rejected with 401.
//!
//! Anything else answers `404 {"error": "Not found"}`.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{any, get},
};
use http::{HeaderName, Method, StatusCode, header};
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;

/// Interval between SSE keep-alive pings.
const SSE_KEEP_ALIVE: Duration = Duration::from_secs(15);

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
struct AppState {
    /// The MCP server instance.
    server: McpServer,
    /// Path of the MCP endpoint, reported by the health check.
    mcp_path: Arc<str>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = build_router(server, &self.config);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → MCP:    {}", self.config.mcp_path);
        info!("  → Health: GET /health");
        info!("  → Tools:  GET /tools");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the complete router: JSON endpoints, the MCP service, the 404
/// fallback, request tracing and (optionally) CORS.
pub fn build_router(server: McpServer, config: &HttpConfig) -> Router {
    let state = AppState {
        server: server.clone(),
        mcp_path: Arc::from(config.mcp_path.as_str()),
    };

    let mcp_service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig {
            sse_keep_alive: Some(SSE_KEEP_ALIVE),
            ..Default::default()
        },
    );

    let app = Router::new()
        .route("/", any(health_check))
        .route("/health", any(health_check))
        .route("/tools", get(list_tools).fallback(not_found))
        .nest_service(&config.mcp_path, mcp_service)
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if config.enable_cors {
        app.layer(cors_layer())
    } else {
        app
    }
}

/// Permissive CORS. Every `OPTIONS` request is answered here as a preflight.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
            HeaderName::from_static("mcp-session-id"),
            HeaderName::from_static("mcp-protocol-version"),
        ])
        .expose_headers([HeaderName::from_static("mcp-session-id")])
}

/// Health check endpoint.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "server": state.server.name(),
        "version": state.server.version(),
        "tools": state.server.tool_count(),
        "endpoint": &*state.mcp_path,
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Tool listing endpoint.
#[instrument(skip_all)]
async fn list_tools(State(state): State<AppState>) -> impl IntoResponse {
    let tools = state.server.list_tools();
    info!("Listing {} tools over HTTP", tools.len());

    Json(serde_json::json!({
        "count": tools.len(),
        "tools": tools
    }))
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not found" })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::domains::tools::testing::RecordingClient;
    use crate::domains::tools::{Endpoint, EndpointGroup, ToolGroup, ToolRegistry};
    use axum::body::Body;
    use http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn server() -> McpServer {
        let group = EndpointGroup::new(
            "calendars",
            vec![
                Endpoint::get("get_calendars", "List calendars", "/calendars/").location_query(),
                Endpoint::get("get_calendar", "Get calendar", "/calendars/{calendarId}")
                    .path_param("calendarId", "Calendar ID"),
            ],
            Arc::new(RecordingClient::default()),
        );
        let registry =
            ToolRegistry::with_groups([Arc::new(group) as Arc<dyn ToolGroup>]).unwrap();
        McpServer::with_registry(Config::default(), registry)
    }

    fn router() -> Router {
        build_router(server(), &HttpConfig::default())
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_live_tool_count() {
        let server = server();
        let app = build_router(server.clone(), &HttpConfig::default());

        for path in ["/", "/health"] {
            let response = tokio_test::assert_ok!(app.clone().oneshot(get(path)).await);
            assert_eq!(response.status(), StatusCode::OK);

            let body = body_json(response).await;
            assert_eq!(body["status"], "healthy");
            assert_eq!(body["server"], "ghl-mcp-server");
            assert_eq!(body["tools"], server.list_tools().len());
            assert_eq!(body["endpoint"], "/sse");
        }
    }

    #[tokio::test]
    async fn test_tools_lists_every_descriptor() {
        let response = router().oneshot(get("/tools")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["count"], 2);
        assert_eq!(body["tools"][0]["name"], "get_calendars");
        assert_eq!(body["tools"][1]["inputSchema"]["required"][0], "calendarId");
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let response = router().oneshot(get("/does-not-exist")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, serde_json::json!({"error": "Not found"}));
    }

    #[tokio::test]
    async fn test_post_to_tools_is_404() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/tools")
            .body(Body::empty())
            .unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_options_is_answered_as_preflight() {
        for path in ["/sse", "/anything"] {
            let request = Request::builder()
                .method(Method::OPTIONS)
                .uri(path)
                .header(header::ORIGIN, "https://app.example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap();
            let response = router().oneshot(request).await.unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(
                response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
                "*"
            );
            let methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
                .to_str()
                .unwrap()
                .to_string();
            assert!(methods.contains("POST"));

            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            assert!(bytes.is_empty());
        }
    }

    #[tokio::test]
    async fn test_cors_headers_on_regular_responses() {
        let request = Request::builder()
            .uri("/health")
            .header(header::ORIGIN, "https://app.example.com")
            .body(Body::empty())
            .unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn test_cors_can_be_disabled() {
        let config = HttpConfig {
            enable_cors: false,
            ..Default::default()
        };
        let request = Request::builder()
            .uri("/health")
            .header(header::ORIGIN, "https://app.example.com")
            .body(Body::empty())
            .unwrap();
        let response = build_router(server(), &config).oneshot(request).await.unwrap();
        assert!(
            !response
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        );
    }

    #[tokio::test]
    async fn test_custom_mcp_path_is_reported() {
        let config = HttpConfig {
            mcp_path: "/mcp".to_string(),
            ..Default::default()
        };
        let response = build_router(server(), &config)
            .oneshot(get("/health"))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["endpoint"], "/mcp");
    }

    fn mcp_post(body: serde_json::Value, session: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri("/sse")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json, text/event-stream");
        if let Some(id) = session {
            builder = builder.header("mcp-session-id", id);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_mcp_stream_needs_a_session() {
        let request = Request::builder()
            .uri("/sse")
            .header(header::ACCEPT, "text/event-stream")
            .body(Body::empty())
            .unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_mcp_stream_opens_after_initialize() {
        let app = router();
        let timeout = Duration::from_secs(5);

        let initialize = mcp_post(
            serde_json::json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "initialize",
                "params": {
                    "protocolVersion": "2025-03-26",
                    "capabilities": {},
                    "clientInfo": {"name": "ghl-test-client", "version": "0.1.0"}
                }
            }),
            None,
        );
        let response = tokio::time::timeout(timeout, app.clone().oneshot(initialize))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let session = response.headers()["mcp-session-id"]
            .to_str()
            .unwrap()
            .to_string();
        assert!(!session.is_empty());

        let initialized = mcp_post(
            serde_json::json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
            Some(&session),
        );
        let response = tokio::time::timeout(timeout, app.clone().oneshot(initialized))
            .await
            .unwrap()
            .unwrap();
        assert!(response.status().is_success());

        let stream = Request::builder()
            .uri("/sse")
            .header(header::ACCEPT, "text/event-stream")
            .header("mcp-session-id", &session)
            .body(Body::empty())
            .unwrap();
        let response = tokio::time::timeout(timeout, app.oneshot(stream))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/event-stream")
        );
    }
}
