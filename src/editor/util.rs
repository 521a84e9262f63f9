//! Utility functions for the plan server

use crate::editor::protocol::{error_codes, Response};
use serde::de::DeserializeOwned;

/// Deserialize request params, or produce the INVALID_PARAMS response that
/// the handler should return as-is. `expected` describes the shape for the
/// error message, e.g. `"{x, y}"`.
pub fn parse_params<T: DeserializeOwned>(
    id: Option<serde_json::Value>,
    params: Option<serde_json::Value>,
    expected: &str,
) -> Result<T, Response> {
    match params.and_then(|p| serde_json::from_value(p).ok()) {
        Some(p) => Ok(p),
        None => Err(Response::error(
            id,
            error_codes::INVALID_PARAMS,
            format!("Invalid params: expected {}", expected),
        )),
    }
}
