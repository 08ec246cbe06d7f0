//! One-shot HTTP server serving a canned response

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;

/// A listener that answers exactly one request
pub struct CannedServer {
    /// API root pointing at the listener
    pub base_url: Url,
    request: JoinHandle<String>,
}

impl CannedServer {
    /// Bind a local port and answer the first request with `status` and `body`
    pub async fn start(status: &str, content_type: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            content_type,
            body.len(),
            body
        );

        let request = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.ok();
            String::from_utf8_lossy(&buf).into_owned()
        });

        Self {
            base_url: Url::parse(&format!("http://{}/api/v1", addr)).unwrap(),
            request,
        }
    }

    /// Raw request head the server received
    pub async fn request(self) -> String {
        self.request.await.unwrap()
    }
}
