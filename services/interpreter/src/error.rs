use log::warn;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::response::{self, Responder};
use rocket::Request;
use serde::Serialize;

use expression::InterpretError;
use telemetry::IsErr;

#[derive(Debug)]
pub enum ApiError {
    InvalidExpression(String),
    InputTooLong { len: usize, max: usize },
    Unprocessable(String),
}

impl From<InterpretError> for ApiError {
    fn from(e: InterpretError) -> Self {
        match e {
            InterpretError::Parse(e) => ApiError::InvalidExpression(e.to_string()),
            InterpretError::Evaluate(e) => ApiError::Unprocessable(e.to_string()),
        }
    }
}

// Rejected input is the caller's fault and not counted as a failure
impl IsErr for ApiError {
    fn is_err(&self) -> bool {
        matches!(self, ApiError::Unprocessable(_))
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let (message, status) = match self {
            ApiError::InvalidExpression(e) => (e, Status::BadRequest),
            ApiError::InputTooLong { len, max } => (
                format!("Expression of {} bytes exceeds limit of {}", len, max),
                Status::BadRequest,
            ),
            ApiError::Unprocessable(e) => {
                warn!("Evaluation Error: {}", e);
                (e, Status::UnprocessableEntity)
            }
        };
        response::status::Custom(status, Json(ErrorResponse { message })).respond_to(req)
    }
}
