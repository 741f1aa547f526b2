use crate::domain::errors::CalcError;
use crate::domain::operation::Operation;
use crate::interface_adapters::protocol::{ErrorResponse, HealthResponse, ResultResponse};
use crate::use_cases::evaluate::EvaluateUseCase;
use axum::{Json, extract::rejection::JsonRejection, http::StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

const INVALID_INPUT_MESSAGE: &str = "Invalid input: a and b must be numbers";

type HandlerResult = Result<Json<ResultResponse>, (StatusCode, Json<ErrorResponse>)>;

pub async fn add(payload: Result<Json<Value>, JsonRejection>) -> HandlerResult {
    evaluate(Operation::Add, payload)
}

pub async fn subtract(payload: Result<Json<Value>, JsonRejection>) -> HandlerResult {
    evaluate(Operation::Subtract, payload)
}

pub async fn multiply(payload: Result<Json<Value>, JsonRejection>) -> HandlerResult {
    evaluate(Operation::Multiply, payload)
}

pub async fn divide(payload: Result<Json<Value>, JsonRejection>) -> HandlerResult {
    evaluate(Operation::Divide, payload)
}

// Liveness probe; reachable means healthy.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

fn evaluate(operation: Operation, payload: Result<Json<Value>, JsonRejection>) -> HandlerResult {
    // Unreadable bodies are caller input problems, same as bad operands.
    let Json(payload) = payload.map_err(|rejection| {
        warn!(%operation, reason = %rejection.body_text(), "rejected request body");
        map_calc_error(CalcError::InvalidOperands)
    })?;

    let use_case = EvaluateUseCase { operation };
    let value = use_case.execute(&payload).map_err(|err| {
        warn!(%operation, error = ?err, "evaluation failed");
        map_calc_error(err)
    })?;

    let response = ResultResponse::new(value).ok_or_else(|| {
        warn!(%operation, "result could not be rendered");
        map_calc_error(CalcError::NonFiniteResult)
    })?;
    debug!(%operation, result = %response.result, "evaluated");

    Ok(Json(response))
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

// Every calculator failure is a caller input problem.
fn map_calc_error(err: CalcError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        CalcError::InvalidOperands => error_response(StatusCode::BAD_REQUEST, INVALID_INPUT_MESSAGE),
        CalcError::DivisionByZero => error_response(StatusCode::BAD_REQUEST, "Division by zero"),
        CalcError::NonFiniteResult => {
            error_response(StatusCode::BAD_REQUEST, "Result is not a finite number")
        }
    }
}
