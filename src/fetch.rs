//! Remote image staging.
//!
//! Terminal image protocols want bytes from a local file, so remote image
//! sources are downloaded into temp files first. Every staged file belongs to
//! exactly one render run via [`TransientResources`] and is removed when that
//! run ends.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempPath;
use tracing::debug;

use crate::error::FetchError;

/// Prefix for staged temp files, handy when inspecting a temp dir.
pub const TEMP_FILE_PREFIX: &str = "ansimark-";

// ---------------------------------------------------------------------------
// Fetch trait
// ---------------------------------------------------------------------------

/// Downloads a URL into a fresh temp file.
pub trait Fetch: Send + Sync {
    /// Fetch `url` and return the staged file. The file is deleted when the
    /// returned [`TempPath`] is dropped.
    fn fetch(&self, url: &str) -> Result<TempPath, FetchError>;
}

/// Blocking HTTP GET via `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    /// Request timeout; `None` keeps the client default.
    timeout: Option<Duration>,
    /// Skip `HTTP(S)_PROXY` environment proxies.
    direct: bool,
    /// Directory for staged files; `None` uses the system temp dir.
    staging_dir: Option<PathBuf>,
}

impl HttpFetcher {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }

    /// Connect directly, ignoring proxy environment variables.
    pub fn without_proxy(mut self) -> Self {
        self.direct = true;
        self
    }

    /// Stage downloads under `dir` instead of the system temp dir.
    pub fn staging_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.staging_dir = Some(dir.into());
        self
    }

    fn client(&self) -> Result<reqwest::blocking::Client, FetchError> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if self.direct {
            builder = builder.no_proxy();
        }
        Ok(builder.build()?)
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<TempPath, FetchError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(TEMP_FILE_PREFIX);
        let mut file = match &self.staging_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };

        let mut response = self.client()?.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let copied = response.copy_to(&mut file)?;
        file.flush()?;
        debug!("fetched {url} ({copied} bytes) to {}", file.path().display());
        Ok(file.into_temp_path())
    }
}

// ---------------------------------------------------------------------------
// TransientResources
// ---------------------------------------------------------------------------

/// Temp files staged during one render run.
///
/// Dropping the set deletes every file it holds. Deletion failures are only
/// logged.
#[derive(Debug, Default)]
pub struct TransientResources {
    staged: Vec<TempPath>,
}

impl TransientResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a staged file and return its path.
    pub fn register(&mut self, staged: TempPath) -> PathBuf {
        let path = staged.to_path_buf();
        self.staged.push(staged);
        path
    }

    pub fn len(&self) -> usize {
        self.staged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }
}

impl Drop for TransientResources {
    fn drop(&mut self) {
        for staged in self.staged.drain(..) {
            let path = staged.to_path_buf();
            match staged.close() {
                Ok(()) => debug!("removed {}", path.display()),
                Err(e) => debug!("failed to remove {}: {e}", path.display()),
            }
        }
    }
}
