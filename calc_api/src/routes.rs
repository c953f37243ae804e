//! Router and request handlers.
//!
//! Single-scalar operations are `GET` with a path parameter; power and
//! statistics are `POST` with a JSON body. Every handler feeds its raw
//! input to calc_core's coercion, so `/square/5` and a body of
//! `{"number": "5"}` take the same path as `calc_cli square 5`.

use std::collections::BTreeMap;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;
use axum::routing::{get, post};
use axum::{Json, Router};
use calc_core::{dispatch, CalcResult, Operation, OperationRequest, OperationResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::config::ServerConfig;
use crate::error::{panic_response, ApiError, ApiResult};
use crate::{API_VERSION, SERVICE_NAME};

/// One documented route
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

/// Every route the router serves, as listed by `GET /`
pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint { method: "GET", path: "/", description: "API information" },
    Endpoint { method: "GET", path: "/health", description: "Health check" },
    Endpoint { method: "GET", path: "/square/{number}", description: "Calculate square of a number" },
    Endpoint { method: "GET", path: "/factorial/{number}", description: "Calculate factorial of a number" },
    Endpoint { method: "GET", path: "/fibonacci/{count}", description: "Generate Fibonacci sequence" },
    Endpoint { method: "GET", path: "/prime/{number}", description: "Check if number is prime" },
    Endpoint { method: "POST", path: "/power", description: "Calculate base^exponent" },
    Endpoint { method: "POST", path: "/stats", description: "Calculate statistics for a list of numbers" },
];

/// Successful operation body: the result fields plus `"success": true`
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    #[serde(flatten)]
    pub result: OperationResult,
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiInfoResponse {
    pub message: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
}

/// Build the application router.
pub fn router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/square/{number}", get(square))
        .route("/factorial/{number}", get(factorial))
        .route("/fibonacci/{count}", get(fibonacci))
        .route("/prime/{number}", get(prime))
        .route("/power", post(power))
        .route("/stats", post(stats))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(config.cors_layer())
}

async fn root() -> Json<ApiInfoResponse> {
    let endpoints = ENDPOINTS
        .iter()
        .map(|e| (format!("{} {}", e.method, e.path), e.description.to_string()))
        .collect();

    Json(ApiInfoResponse {
        message: "Mathematical Operations API".to_string(),
        version: API_VERSION.to_string(),
        endpoints,
    })
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
    })
}

async fn not_found() -> ApiError {
    ApiError::not_found("Not Found")
}

async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed("Method Not Allowed")
}

async fn square(path: Result<Path<String>, PathRejection>) -> ApiResult<Json<SuccessResponse>> {
    from_path(Operation::Square, path)
}

async fn factorial(path: Result<Path<String>, PathRejection>) -> ApiResult<Json<SuccessResponse>> {
    from_path(Operation::Factorial, path)
}

async fn fibonacci(path: Result<Path<String>, PathRejection>) -> ApiResult<Json<SuccessResponse>> {
    from_path(Operation::Fibonacci, path)
}

async fn prime(path: Result<Path<String>, PathRejection>) -> ApiResult<Json<SuccessResponse>> {
    from_path(Operation::IsPrime, path)
}

async fn power(body: Result<Json<Value>, JsonRejection>) -> ApiResult<Json<SuccessResponse>> {
    from_body(Operation::Power, body)
}

async fn stats(body: Result<Json<Value>, JsonRejection>) -> ApiResult<Json<SuccessResponse>> {
    from_body(Operation::CalculateStats, body)
}

fn from_path(
    operation: Operation,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<SuccessResponse>> {
    let Path(raw) = path.map_err(|e| ApiError::bad_request(format!("Invalid path: {}", e.body_text())))?;
    respond(operation, OperationRequest::from_args(operation, &[raw]))
}

fn from_body(
    operation: Operation,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<SuccessResponse>> {
    let Json(body) = body?;
    respond(operation, OperationRequest::from_json(operation, &body))
}

fn respond(
    operation: Operation,
    request: CalcResult<OperationRequest>,
) -> ApiResult<Json<SuccessResponse>> {
    let result = request.and_then(|r| dispatch(&r)).map_err(|e| {
        debug!(%operation, code = e.error_code(), "Rejecting request: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(SuccessResponse {
        result,
        success: true,
    }))
}
