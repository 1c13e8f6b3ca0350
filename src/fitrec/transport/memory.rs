use super::Transport;
use crate::error::TransportError;
use crate::protocol::{Request, Response, ToolResult};
use std::collections::VecDeque;

/// In-memory transport for testing.
/// Records every request and answers from a queue of canned replies;
/// once the queue is empty every call gets an empty success.
#[derive(Default)]
pub struct RecordingTransport {
    requests: Vec<Request>,
    replies: VecDeque<Result<Response, TransportError>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, response: Response) -> Self {
        self.replies.push_back(Ok(response));
        self
    }

    pub fn fail(mut self, error: TransportError) -> Self {
        self.replies.push_back(Err(error));
        self
    }

    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    pub fn last_request(&self) -> Option<&Request> {
        self.requests.last()
    }
}

impl Transport for RecordingTransport {
    fn call(&mut self, request: &Request) -> Result<Response, TransportError> {
        self.requests.push(request.clone());
        self.replies.pop_front().unwrap_or_else(|| {
            Ok(Response {
                result: Some(ToolResult::default()),
                error: None,
            })
        })
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::protocol::{ContentBlock, Response, ToolResult};
    use serde_json::Value;

    pub fn text_response(texts: &[&str]) -> Response {
        Response {
            result: Some(ToolResult {
                content: texts
                    .iter()
                    .map(|t| ContentBlock::Text {
                        text: t.to_string(),
                    })
                    .collect(),
                is_error: false,
            }),
            error: None,
        }
    }

    pub fn error_response(message: &str) -> Response {
        Response {
            result: None,
            error: Some(Value::String(message.to_string())),
        }
    }
}
