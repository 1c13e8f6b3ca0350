//! # Wire Protocol
//!
//! The worker speaks a single-shot JSON-RPC 2.0 dialect: one request on stdin,
//! one response on stdout.
//!
//! ```text
//! -> {"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"record_training","arguments":{...}}}
//! <- {"result":{"content":[{"type":"text","text":"..."}]}}
//! <- {"error":"..."}  |  {"error":{"code":-32601,"message":"Method not found"}}
//! ```
//!
//! Requests are built fresh for every call and never reused. Responses are
//! decoded leniently: unknown keys are ignored and unknown content kinds are
//! kept as [`ContentBlock::Other`] so a newer worker doesn't break decoding.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const PROTOCOL_VERSION: &str = "2.0";

/// The client never has two calls in flight, so every request carries the same id.
pub const REQUEST_ID: u64 = 1;

/// JSON-RPC method used to invoke a worker tool.
pub const TOOLS_CALL: &str = "tools/call";

pub type Arguments = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Request {
    #[serde(rename = "jsonrpc")]
    pub protocol_version: &'static str,
    pub id: u64,
    pub method: String,
    pub params: ToolCall,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolCall {
    pub name: String,
    pub arguments: Arguments,
}

impl Request {
    pub fn new(method: impl Into<String>, params: ToolCall) -> Self {
        Self {
            protocol_version: PROTOCOL_VERSION,
            id: REQUEST_ID,
            method: method.into(),
            params,
        }
    }

    pub fn tool(name: impl Into<String>, arguments: Arguments) -> Self {
        Self::new(TOOLS_CALL, ToolCall::new(name, arguments))
    }

    pub fn to_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

impl ToolCall {
    pub fn new(name: impl Into<String>, arguments: Arguments) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub result: Option<ToolResult>,
    #[serde(default)]
    pub error: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ToolResult {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    #[serde(default, rename = "isError")]
    pub is_error: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text {
        #[serde(default)]
        text: String,
    },
    #[serde(other)]
    Other,
}

impl ContentBlock {
    pub fn text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text { text } => Some(text),
            ContentBlock::Other => None,
        }
    }
}

/// A response interpreted as either text output or an application error.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(Vec<String>),
    Failure(String),
}

impl Response {
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Text blocks of the success payload, in order.
    pub fn texts(&self) -> Vec<String> {
        self.result
            .iter()
            .flat_map(|r| r.content.iter())
            .filter_map(|block| block.text().map(str::to_string))
            .collect()
    }

    /// An `error` field always wins; a result flagged `isError` is the worker
    /// reporting a tool failure inside an otherwise successful envelope.
    pub fn outcome(&self) -> Outcome {
        if let Some(error) = &self.error {
            return Outcome::Failure(error_text(error));
        }
        let texts = self.texts();
        match &self.result {
            Some(result) if result.is_error => Outcome::Failure(texts.join("\n")),
            _ => Outcome::Success(texts),
        }
    }
}

fn error_text(error: &Value) -> String {
    match error {
        Value::String(s) => s.clone(),
        Value::Object(obj) => match obj.get("message").and_then(Value::as_str) {
            Some(message) => match obj.get("data").and_then(Value::as_str) {
                Some(data) => format!("{}: {}", message, data),
                None => message.to_string(),
            },
            None => error.to_string(),
        },
        other => other.to_string(),
    }
}
