use log::{debug, info};
use rocket::http::Status;
use rocket::serde::json::{json, Json, Value};
use rocket::{Route, State};
use serde::{Deserialize, Serialize};

use expression::{evaluate, parse, Expr, InterpretError};
use telemetry::Measure;

use crate::config::Config;
use crate::error::ApiError;

lazy_static! {
    static ref EVALUATE_MEASURE: Measure = Measure::new("controller", "evaluate");
    static ref PARSE_MEASURE: Measure = Measure::new("controller", "parse");
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
struct Expression {
    expr: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Evaluation {
    value: i64,
}

#[derive(Debug, Serialize, Deserialize)]
struct ParsedExpression {
    tree: Expr,
    canonical: String,
}

fn parse_bounded(expr: &str, config: &Config) -> Result<Expr, ApiError> {
    let max = config.interpreter.max_input_len;
    if expr.len() > max {
        return Err(ApiError::InputTooLong {
            len: expr.len(),
            max,
        });
    }
    parse(expr).map_err(|e| InterpretError::from(e).into())
}

#[get("/status")]
fn status() -> Value {
    json!({ "status": "ok" })
}

#[get("/metrics")]
fn metrics() -> Result<String, Status> {
    telemetry::encode().map_err(|_| Status::InternalServerError)
}

#[post("/api/v1/evaluate", format = "json", data = "<request>")]
fn evaluate_expression(
    request: Json<Expression>,
    config: &State<Config>,
) -> Result<Json<Evaluation>, ApiError> {
    EVALUATE_MEASURE.observe(|| -> Result<_, ApiError> {
        let e = parse_bounded(&request.expr, config)?;
        let value = evaluate(&e).map_err(InterpretError::from)?;
        info!("Evaluated \"{}\" to {}", request.expr, value);

        Ok(Json(Evaluation { value }))
    })
}

#[post("/api/v1/parse", format = "json", data = "<request>")]
fn parse_expression(
    request: Json<Expression>,
    config: &State<Config>,
) -> Result<Json<ParsedExpression>, ApiError> {
    PARSE_MEASURE.observe(|| -> Result<_, ApiError> {
        let tree = parse_bounded(&request.expr, config)?;
        let canonical = tree.to_string();
        debug!("Parsed \"{}\" as \"{}\"", request.expr, canonical);

        Ok(Json(ParsedExpression { tree, canonical }))
    })
}

pub fn routes() -> Vec<Route> {
    routes![status, metrics, evaluate_expression, parse_expression]
}
