//! Request handlers

use axum::body::Bytes;
use axum::extract::Query;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;
use unitconv_units::{convert_request, list_units as catalog_units, ConversionRequest};
use crate::error::ApiError;

/// Body fields of a conversion request, matched without regard to case
const REQUEST_FIELDS: [&str; 3] = ["value", "from", "to"];

/// `?type=` query parameter shared by both endpoints
#[derive(Debug, Clone, Default)]
pub struct TypeQuery {
    pub category: Option<String>,
}

impl TypeQuery {
    /// Take the first `type` pair; repeated keys are not an error
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let category = pairs
            .into_iter()
            .find(|(key, _)| key == "type")
            .map(|(_, value)| value);
        TypeQuery { category }
    }

    /// The category name; an empty value counts as missing
    pub fn require(&self) -> Result<&str, ApiError> {
        match self.category.as_deref() {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(ApiError::MissingParameter("type")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "unitconv-server".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /units?type=...`
pub async fn list_units(
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<&'static [&'static str]>, ApiError> {
    let query = TypeQuery::from_pairs(pairs);
    let category = query.require()?;
    let units = catalog_units(category)?;
    Ok(Json(units))
}

/// `POST /convert?type=...`
///
/// The body is read as raw bytes so that a missing or unexpected
/// content-type is not itself a rejection.
pub async fn convert(
    Query(pairs): Query<Vec<(String, String)>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let query = TypeQuery::from_pairs(pairs);
    let category = query.require()?;
    let request = decode_request(&body)?;
    debug!(category, ?request, "convert request");

    let result = convert_request(category, &request)?;
    Ok(number_response(result))
}

/// A bare JSON number body
fn number_response(value: f64) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], format_number(value)).into_response()
}

/// Shortest decimal form; exponent notation only below 1e-6 or from 1e21 up.
///
/// Whole numbers carry no fractional part (`1`, `-40`).
pub fn format_number(value: f64) -> String {
    let abs = value.abs();
    if abs != 0.0 && (abs < 1e-6 || abs >= 1e21) {
        let formatted = format!("{:e}", value);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        format!("{}", value)
    }
}

/// Decode the first JSON value in the body; trailing data is ignored.
///
/// `null` decodes to an empty request, keys match fields case-insensitively,
/// null fields keep their zero value and unknown keys are dropped.
fn decode_request(body: &[u8]) -> Result<ConversionRequest, ApiError> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Value>();
    let value = match values.next() {
        Some(Ok(value)) => value,
        Some(Err(e)) => return Err(ApiError::MalformedBody(e.to_string())),
        None => return Err(ApiError::MalformedBody("EOF".to_string())),
    };

    match value {
        Value::Null => Ok(ConversionRequest::default()),
        Value::Object(object) => {
            let fields: Map<String, Value> = object
                .into_iter()
                .filter(|(_, field)| !field.is_null())
                .filter_map(|(key, field)| {
                    REQUEST_FIELDS
                        .iter()
                        .find(|name| key.eq_ignore_ascii_case(name))
                        .map(|name| (name.to_string(), field))
                })
                .collect();
            serde_json::from_value(Value::Object(fields))
                .map_err(|e| ApiError::MalformedBody(e.to_string()))
        }
        other => Err(ApiError::MalformedBody(format!(
            "cannot decode {} into a conversion request",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
