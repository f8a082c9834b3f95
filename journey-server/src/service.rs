use std::sync::Arc;

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderValue, Request, StatusCode},
    middleware::{Next, from_fn},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use journey_flow::Journey;
use serde_json::Value;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{Instrument, error, info};
use uuid::Uuid;

use crate::{
    rpc::{self, JsonRpcRequest, JsonRpcResponse},
    tools::{CalculatorTool, EchoTool, JourneyTool, ToolRegistry},
};

#[derive(Clone)]
pub struct AppState {
    pub tools: Arc<ToolRegistry>,
}

impl AppState {
    pub fn new(journey: Arc<Journey>) -> Self {
        let tools = ToolRegistry::new()
            .register(Arc::new(JourneyTool::new(journey)))
            .register(Arc::new(EchoTool))
            .register(Arc::new(CalculatorTool));
        Self {
            tools: Arc::new(tools),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/mcp", post(handle_rpc))
        .layer(from_fn(correlation_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Middleware to add correlation ID to all requests
async fn correlation_id_middleware(mut request: Request<axum::body::Body>, next: Next) -> Response {
    let correlation_id = Uuid::new_v4().to_string();

    if let Ok(value) = HeaderValue::from_str(&correlation_id) {
        request.headers_mut().insert("x-correlation-id", value);
    }

    let span = tracing::info_span!("http_request", correlation_id = %correlation_id);
    next.run(request).instrument(span).await
}

async fn health_check() -> &'static str {
    "OK"
}

async fn handle_rpc(State(state): State<AppState>, body: Bytes) -> Response {
    let request: JsonRpcRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            error!(error = %e, "malformed JSON-RPC request");
            let code = if serde_json::from_slice::<Value>(&body).is_ok() {
                rpc::INVALID_REQUEST
            } else {
                rpc::PARSE_ERROR
            };
            return Json(JsonRpcResponse::failure(Value::Null, code, e.to_string())).into_response();
        }
    };

    info!(method = %request.method, "JSON-RPC request");

    match rpc::dispatch(&state.tools, request) {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use journey_flow::{JourneyBuilder, SeededIdentifiers, facility_list};
    use serde_json::json;
    use tower::ServiceExt;

    fn app() -> Router {
        let journey = JourneyBuilder::hospitalization()
            .with_identifier_source(Arc::new(SeededIdentifiers::new(21)))
            .build();
        build_router(AppState::new(Arc::new(journey)))
    }

    async fn post_json(app: Router, body: String) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/mcp")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn call(id: u64, name: &str, arguments: Value) -> String {
        json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": "tools/call",
            "params": { "name": name, "arguments": arguments }
        })
        .to_string()
    }

    #[tokio::test]
    async fn health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn lists_all_tools() {
        let body = json!({ "jsonrpc": "2.0", "id": 1, "method": "tools/list" }).to_string();
        let (status, value) = post_json(app(), body).await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = value["result"]["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["hospitalization_journey", "echo", "calculator"]);
    }

    #[tokio::test]
    async fn journey_round_trip_over_http() {
        let (_, first) = post_json(app(), call(1, "hospitalization_journey", json!({}))).await;
        let content = &first["result"]["structuredContent"];
        assert_eq!(content["step"], "select_member");
        assert_eq!(
            content["facilityList"].as_array().unwrap().len(),
            facility_list().len()
        );

        let catalog = facility_list();
        let facility = &catalog[0];
        let (_, second) = post_json(
            app(),
            call(
                2,
                "hospitalization_journey",
                json!({ "step": "select_hospital", "state": { "facilityId": facility.id } }),
            ),
        )
        .await;
        let content = &second["result"]["structuredContent"];
        assert_eq!(content["step"], "admission_details");
        assert_eq!(content["state"]["facilityName"], facility.name.as_str());
        assert_eq!(content["state"]["facilityCity"], facility.city.as_str());
    }

    #[tokio::test]
    async fn invalid_journey_step_is_a_tool_error() {
        let request = call(3, "hospitalization_journey", json!({ "step": "checkout" }));
        let (status, value) = post_json(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["result"]["isError"], true);
        assert!(
            value["result"]["content"][0]["text"]
                .as_str()
                .unwrap()
                .contains("checkout")
        );
    }

    #[tokio::test]
    async fn notification_is_accepted_without_body() {
        let body = json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }).to_string();
        let (status, value) = post_json(app(), body).await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn malformed_bodies() {
        let (_, value) = post_json(app(), "{not json".to_string()).await;
        assert_eq!(value["error"]["code"], rpc::PARSE_ERROR);

        let (_, value) = post_json(app(), json!({ "id": 1 }).to_string()).await;
        assert_eq!(value["error"]["code"], rpc::INVALID_REQUEST);
    }
}
