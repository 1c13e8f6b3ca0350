use std::path::{Path, PathBuf};

const DEFAULT_SERVER_PATH: &str = "./mcp";

/// Client settings. fitrec has no config file; everything comes from flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Worker executable, spawned once per command
    pub server_path: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_path: PathBuf::from(DEFAULT_SERVER_PATH),
        }
    }
}

impl ClientConfig {
    pub fn with_server_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.server_path = path.as_ref().to_path_buf();
        self
    }

    pub fn server_path(&self) -> &Path {
        &self.server_path
    }
}
