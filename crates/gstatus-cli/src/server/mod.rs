//! HTTP presentation layer.
//!
//! One task per connection, one request per connection. Git queries run on
//! the blocking pool so a slow repository never stalls the accept loop.

use std::path::PathBuf;
use std::sync::Arc;

use gstatus_core::SyntectHighlighter;
use gstatus_git::Repository;
use tokio::io::{AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};

mod http;
mod render;
mod routes;

use http::{RequestError, Response, read_request};

/// Everything a request handler needs, shared across connections.
#[derive(Debug)]
pub struct AppState {
    pub repo: Repository,
    pub highlighter: SyntectHighlighter,
    pub page_size: usize,
    pub static_dir: PathBuf,
}

/// Accept connections until the task is dropped, handling each on its own
/// task. Failed accepts are logged and skipped.
pub async fn run(listener: TcpListener, state: Arc<AppState>) -> std::io::Result<()> {
    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                warn!(error = %e, "accept failed");
                continue;
            }
        };

        let state = Arc::clone(&state);
        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, state).await {
                debug!(%peer, error = %e, "connection ended with error");
            }
        });
    }
}

async fn handle_connection(stream: TcpStream, state: Arc<AppState>) -> std::io::Result<()> {
    let (reader, mut writer) = stream.into_split();
    let mut reader = BufReader::new(reader);

    let response = match read_request(&mut reader).await {
        Ok(request) => {
            info!(method = %request.method, path = %request.path, "request");
            routes::respond(&request, state).await
        }
        Err(RequestError::Closed) => return Ok(()),
        Err(RequestError::Io(e)) => return Err(e),
        Err(RequestError::Malformed(reason)) => {
            debug!(reason, "bad request");
            Response::error(400)
        }
    };

    writer.write_all(&response.to_bytes()).await?;
    writer.shutdown().await
}
