#![cfg(feature = "std")]

//! Liveness responder for hosting platforms that poll an HTTP port.
//!
//! Runs as its own tokio task and shares nothing with the game.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tokio::time::{timeout, Duration};

/// How long a client gets to send its request line.
const READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Largest request prefix inspected.
const MAX_REQUEST_SIZE: usize = 1024;

const OK_RESPONSE: &[u8] =
    b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 2\r\nConnection: close\r\n\r\nOK";
const NOT_IMPLEMENTED_RESPONSE: &[u8] =
    b"HTTP/1.1 501 Not Implemented\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";

/// Pick the reply for a raw request. `None` means the request had no method
/// and the connection should just be closed.
pub fn response_for(request: &[u8]) -> Option<&'static [u8]> {
    let text = String::from_utf8_lossy(request);
    match text.split_whitespace().next()? {
        "GET" => Some(OK_RESPONSE),
        _ => Some(NOT_IMPLEMENTED_RESPONSE),
    }
}

async fn respond(mut stream: TcpStream) -> anyhow::Result<()> {
    let mut buf = [0u8; MAX_REQUEST_SIZE];
    let n = timeout(READ_TIMEOUT, stream.read(&mut buf))
        .await
        .map_err(|_| anyhow::anyhow!("health check request timed out"))??;
    if let Some(reply) = response_for(&buf[..n]) {
        stream.write_all(reply).await?;
    }
    stream.shutdown().await?;
    Ok(())
}

/// Answer health checks on `listener` until accepting fails.
pub async fn serve(listener: TcpListener) -> anyhow::Result<()> {
    loop {
        let (stream, peer) = listener.accept().await?;
        log::debug!("health check from {}", peer);
        tokio::spawn(async move {
            if let Err(e) = respond(stream).await {
                log::debug!("health check from {} failed: {}", peer, e);
            }
        });
    }
}

/// Bind `addr` and serve health checks on a background task.
///
/// Returns the bound address (useful when binding port 0) and the task handle.
pub async fn spawn(
    addr: SocketAddr,
) -> anyhow::Result<(SocketAddr, JoinHandle<anyhow::Result<()>>)> {
    let listener = TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    log::info!("health check listening on {}", local);
    Ok((local, tokio::spawn(serve(listener))))
}
