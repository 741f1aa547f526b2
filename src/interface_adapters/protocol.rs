use serde::Serialize;
use serde_json::Number;

// Largest integer a JSON client can read back without losing precision.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

// Response payload for a successful operation.
#[derive(Debug, Serialize)]
pub struct ResultResponse {
    pub result: Number,
}

impl ResultResponse {
    pub fn new(value: f64) -> Option<Self> {
        render_number(value).map(|result| Self { result })
    }
}

// Response payload for the health check.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// Integral values render as integer literals (`8`, not `8.0`); `-0` renders as `0`.
pub fn render_number(value: f64) -> Option<Number> {
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        return Some(Number::from(value as i64));
    }
    Number::from_f64(value)
}
