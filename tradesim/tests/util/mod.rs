#![allow(dead_code)]

use std::sync::Arc;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    sync::{Notify, mpsc},
};

pub const RESULT_BODY: &str = r#"{
    "order_type": "buy",
    "filled_quantity": 100,
    "avg_price": 50000,
    "slippage": 0.001,
    "mid_price": 49995,
    "fees": {"fee_rate": 0.0005, "fee_amount": 25, "fee_tier": "T1", "order_value": 100000},
    "market_impact": 0.0002,
    "net_cost": 100025,
    "volatility": 0.02,
    "processing_time_ms": 12,
    "optimal_schedule": 1,
    "reg_slippage": 0.0009,
    "maker_prob": 0.6,
    "taker_prob": 0.4
}"#;

/// Canned Http response served by a [`StubServer`].
#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
    /// If set, the response is held back until notified.
    pub release: Option<Arc<Notify>>,
}

impl StubResponse {
    pub fn new<S: Into<String>>(status: u16, body: S) -> Self {
        Self {
            status,
            body: body.into(),
            release: None,
        }
    }

    pub fn held<S: Into<String>>(status: u16, body: S, release: Arc<Notify>) -> Self {
        Self {
            status,
            body: body.into(),
            release: Some(release),
        }
    }
}

/// In-process Http server answering each connection with the next [`StubResponse`], recording
/// the raw request head it received.
#[derive(Debug)]
pub struct StubServer {
    pub base_url: String,
    pub requests: mpsc::UnboundedReceiver<String>,
}

impl StubServer {
    pub async fn spawn(responses: Vec<StubResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let (request_tx, requests) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            for response in responses {
                let Ok((stream, _)) = listener.accept().await else {
                    return;
                };
                serve(stream, response, &request_tx).await;
            }
        });

        Self { base_url, requests }
    }

    /// Next recorded request head, lowercased for case-insensitive header assertions.
    pub async fn next_request(&mut self) -> String {
        self.requests.recv().await.unwrap()
    }

    /// Number of requests received so far that have not been consumed.
    pub fn pending_requests(&mut self) -> usize {
        let mut count = 0;
        while self.requests.try_recv().is_ok() {
            count += 1;
        }
        count
    }
}

async fn serve(
    mut stream: TcpStream,
    response: StubResponse,
    request_tx: &mpsc::UnboundedSender<String>,
) {
    let mut head = Vec::new();
    let mut buffer = [0_u8; 1024];
    while !head.windows(4).any(|window| window == b"\r\n\r\n") {
        match stream.read(&mut buffer).await {
            Ok(0) | Err(_) => return,
            Ok(read) => head.extend_from_slice(&buffer[..read]),
        }
    }
    let _ = request_tx.send(String::from_utf8_lossy(&head).to_lowercase());

    if let Some(release) = response.release {
        release.notified().await;
    }

    let raw = format!(
        "HTTP/1.1 {} STUB\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        response.status,
        response.body.len(),
        response.body
    );
    let _ = stream.write_all(raw.as_bytes()).await;
    let _ = stream.shutdown().await;
}

/// Base Url of a port that was just bound then released, so nothing is listening on it.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{address}")
}
