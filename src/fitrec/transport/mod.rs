//! # Transport Layer
//!
//! The [`Transport`] trait is the only seam between fitrec and the worker
//! process. Flows hand it a [`Request`] and get back a decoded [`Response`];
//! whether the response carries an application error is for the caller to
//! decide.
//!
//! ## Implementations
//!
//! - [`process::ProcessTransport`]: production transport. Spawns the worker
//!   executable once per call, writes the request to its stdin, closes stdin
//!   and waits for it to exit.
//! - [`memory::RecordingTransport`]: in-memory double for tests. Records
//!   every request and replays canned responses.
//!
//! ## Failure Model
//!
//! Every failure is terminal for the call. There is no retry and no timeout:
//! a worker that never exits blocks the caller indefinitely.

use crate::error::TransportError;
use crate::protocol::{Arguments, Request, Response};

pub mod memory;
pub mod process;

pub trait Transport {
    /// Send one request and wait for its response.
    fn call(&mut self, request: &Request) -> Result<Response, TransportError>;

    /// Invoke a worker tool by name.
    fn call_tool(&mut self, name: &str, arguments: Arguments) -> Result<Response, TransportError> {
        self.call(&Request::tool(name, arguments))
    }
}
