use std::net::SocketAddr;
use std::time::Duration;

use sdstatus_common::config::ScanConfig;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Scan configuration pointed at plain loopback HTTP, no proxy.
pub fn local_config() -> ScanConfig {
    ScanConfig {
        proxy_addr: None,
        request_timeout: Some(Duration::from_secs(5)),
        ..ScanConfig::default()
    }
}

/// Minimal HTTP/1.1 server that answers every request with `body`.
///
/// Returns the bound address; the accept loop runs until the runtime shuts
/// down.
pub async fn spawn_metadata_server(body: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body,
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    addr
}

/// An address nothing is listening on: bind an ephemeral port, then drop it.
pub async fn unreachable_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}
