use super::Transport;
use crate::error::TransportError;
use crate::protocol::{Request, Response};
use log::{debug, warn};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Runs the worker as a child process, one process per request.
#[derive(Debug, Clone)]
pub struct ProcessTransport {
    server_path: PathBuf,
}

impl ProcessTransport {
    pub fn new(server_path: impl Into<PathBuf>) -> Self {
        Self {
            server_path: server_path.into(),
        }
    }

    pub fn server_path(&self) -> &Path {
        &self.server_path
    }

    fn spawn_error(&self, source: std::io::Error) -> TransportError {
        TransportError::Spawn {
            path: self.server_path.display().to_string(),
            source,
        }
    }
}

impl Transport for ProcessTransport {
    fn call(&mut self, request: &Request) -> Result<Response, TransportError> {
        let payload = request.to_bytes().map_err(TransportError::Encode)?;

        debug!(
            "spawning worker {} for {} ({} bytes)",
            self.server_path.display(),
            request.params.name,
            payload.len()
        );

        let mut child = Command::new(&self.server_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        // Dropping stdin closes the pipe, which is the worker's end-of-input.
        // A worker that exits without reading is still waited on, so its exit
        // status and stderr decide the error.
        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(&payload) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    debug!("worker closed stdin before reading the whole request");
                }
                Err(e) => {
                    drop(stdin);
                    let _ = child.wait_with_output();
                    return Err(self.spawn_error(e));
                }
            }
        }

        let output = child.wait_with_output().map_err(|e| self.spawn_error(e))?;

        debug!(
            "worker exited with {} ({} bytes stdout, {} bytes stderr)",
            output.status,
            output.stdout.len(),
            output.stderr.len()
        );

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!("worker failed: {}", stderr);
            return Err(TransportError::Server {
                status: output.status,
                stderr,
            });
        }

        Response::from_slice(&output.stdout).map_err(TransportError::Decode)
    }
}
