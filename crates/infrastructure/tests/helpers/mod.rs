#![allow(dead_code)]

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// One-shot HTTP/1.1 server on localhost.
///
/// Answers the first request with `status` and `body` and hands back the
/// raw request head it received.
pub struct LocalDohServer {
    pub url: String,
    pub request: oneshot::Receiver<String>,
}

impl LocalDohServer {
    pub async fn start(status: &'static str, body: Vec<u8>) -> Self {
        Self::start_with(status, body, false).await
    }

    /// Same as [`LocalDohServer::start`] but sends the body chunked, without
    /// a `Content-Length`.
    pub async fn start_chunked(status: &'static str, body: Vec<u8>) -> Self {
        Self::start_with(status, body, true).await
    }

    async fn start_with(status: &'static str, body: Vec<u8>, chunked: bool) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();

            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }

            let framing = if chunked {
                "Transfer-Encoding: chunked".to_string()
            } else {
                format!("Content-Length: {}", body.len())
            };
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/dns-message\r\n{}\r\nConnection: close\r\n\r\n",
                status, framing
            );

            // The client may hang up early on oversized bodies.
            let _ = stream.write_all(response.as_bytes()).await;
            if chunked {
                for part in body.chunks(8192) {
                    let _ = stream
                        .write_all(format!("{:x}\r\n", part.len()).as_bytes())
                        .await;
                    let _ = stream.write_all(part).await;
                    let _ = stream.write_all(b"\r\n").await;
                }
                let _ = stream.write_all(b"0\r\n\r\n").await;
            } else {
                let _ = stream.write_all(&body).await;
            }
            let _ = stream.shutdown().await;

            let _ = tx.send(String::from_utf8_lossy(&head).into_owned());
        });

        Self {
            url: format!("http://{}/dns-query", addr),
            request: rx,
        }
    }

    /// Accepts connections and never answers.
    pub async fn silent() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let mut open = Vec::new();
            while let Ok((stream, _)) = listener.accept().await {
                open.push(stream);
            }
        });

        format!("http://{}/dns-query", addr)
    }
}
