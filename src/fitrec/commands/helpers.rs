use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FitrecError, Result};
use crate::protocol::{Arguments, Outcome, Response};
use serde::Serialize;
use serde_json::Value;

/// Turns a decoded response into a command result. `confirmation` is only
/// shown when the worker reports success.
pub fn render_response(response: &Response, confirmation: Option<&str>) -> CmdResult {
    let mut result = CmdResult::default();
    match response.outcome() {
        Outcome::Failure(text) => {
            result.add_message(CmdMessage::error(format!("Error: {}", text)));
        }
        Outcome::Success(texts) => {
            if let Some(message) = confirmation {
                result.add_message(CmdMessage::success(message));
            }
            result = result.with_output(texts);
        }
    }
    result
}

/// Serializes a value that must encode as a JSON object into tool arguments.
pub fn to_arguments<T: Serialize>(value: &T) -> Result<Arguments> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(FitrecError::Serialization(serde::ser::Error::custom(
            format!("tool arguments must be an object, got {}", other),
        ))),
    }
}
