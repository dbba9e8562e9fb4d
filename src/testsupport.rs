//! Shared test fixtures for renderer, fetch and encoder tests.
//!
//! Everything here is std-only apart from `tempfile`, which the crate already
//! depends on for staging downloads.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use tempfile::TempPath;

use crate::error::FetchError;
use crate::fetch::{Fetch, TEMP_FILE_PREFIX};
use crate::terminal::{ImageEncoder, LinkEncoder};

// ---------------------------------------------------------------------------
// Encoders
// ---------------------------------------------------------------------------

/// One call observed by [`RecordingImages`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCall {
    pub path: PathBuf,
    pub max_width: u32,
    /// Whether `path` existed on disk at encode time.
    pub existed: bool,
}

/// Image encoder that records its inputs and renders `<img:PATH>`.
#[derive(Debug, Clone, Default)]
pub struct RecordingImages {
    calls: Arc<Mutex<Vec<ImageCall>>>,
}

impl RecordingImages {
    pub fn calls(&self) -> Vec<ImageCall> {
        self.calls.lock().expect("image call log").clone()
    }
}

impl ImageEncoder for RecordingImages {
    fn make_image(&self, path: &std::path::Path, max_width: u32) -> String {
        self.calls.lock().expect("image call log").push(ImageCall {
            path: path.to_path_buf(),
            max_width,
            existed: path.is_file(),
        });
        format!("<img:{}>", path.display())
    }
}

/// Link encoder rendering `<link:TEXT|HREF>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaggedLinks;

impl LinkEncoder for TaggedLinks {
    fn make_link(&self, text: &str, href: &str) -> String {
        format!("<link:{text}|{href}>")
    }
}

// ---------------------------------------------------------------------------
// Fetchers
// ---------------------------------------------------------------------------

/// Fetcher that stages a fixed body without touching the network.
#[derive(Debug, Clone, Default)]
pub struct StubFetcher {
    body: Vec<u8>,
    fetches: Arc<AtomicUsize>,
}

impl StubFetcher {
    pub fn with_body(body: &[u8]) -> Self {
        Self {
            body: body.to_vec(),
            fetches: Arc::default(),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl Fetch for StubFetcher {
    fn fetch(&self, _url: &str) -> Result<TempPath, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let mut file = tempfile::Builder::new()
            .prefix(TEMP_FILE_PREFIX)
            .tempfile()?;
        file.write_all(&self.body)?;
        Ok(file.into_temp_path())
    }
}

/// Fetcher that always fails like an unreachable host.
#[derive(Debug, Clone, Default)]
pub struct FailingFetcher {
    fetches: Arc<AtomicUsize>,
}

impl FailingFetcher {
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl Fetch for FailingFetcher {
    fn fetch(&self, _url: &str) -> Result<TempPath, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Err(FetchError::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "unreachable",
        )))
    }
}

// ---------------------------------------------------------------------------
// Local HTTP
// ---------------------------------------------------------------------------

/// Serve exactly one HTTP response on an ephemeral localhost port.
///
/// Returns the base URL (`http://127.0.0.1:PORT`) and the server thread.
pub fn serve_once(status: &str, body: &[u8]) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    let head = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/octet-stream\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );
    let body = body.to_vec();
    let handle = std::thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };
        drain_request_head(&mut stream);
        let _ = stream.write_all(head.as_bytes());
        let _ = stream.write_all(&body);
        let _ = stream.flush();
    });
    (format!("http://{addr}"), handle)
}

fn drain_request_head(stream: &mut TcpStream) {
    let mut seen = Vec::new();
    let mut buf = [0u8; 512];
    while !seen.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => seen.extend_from_slice(&buf[..n]),
        }
    }
}

/// URL on a localhost port nothing listens on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let port = listener.local_addr().expect("probe addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}/img.png")
}
