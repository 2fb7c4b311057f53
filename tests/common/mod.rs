//! Shared test helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use nichescout::application::analyze::EmptyResultPolicy;
use nichescout::application::rank::RankerConfig;
use nichescout::domain::entities::candidate_product::CandidateProduct;
use nichescout::domain::ports::product_source::{ProductSource, SourceError};
use nichescout::NicheScout;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Source that always fails.
pub struct FailingSource;

#[async_trait]
impl ProductSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch(&self, _niche: &str) -> Result<Vec<CandidateProduct>, SourceError> {
        Err(SourceError::Network("connection reset".into()))
    }
}

/// Source that returns a fixed batch and counts calls.
pub struct StaticSource {
    products: Vec<CandidateProduct>,
    calls: AtomicUsize,
}

impl StaticSource {
    pub fn new(products: Vec<CandidateProduct>) -> Self {
        Self {
            products,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self, _niche: &str) -> Result<Vec<CandidateProduct>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.products.clone())
    }
}

pub fn make_candidate(id: &str, price: f64, shipping: f64, rating: f64) -> CandidateProduct {
    CandidateProduct::new(
        id,
        format!("Product {id}"),
        price,
        shipping,
        rating,
        format!("https://img.example/{id}.png"),
        "gadgets",
    )
}

pub fn setup_with(source: Arc<dyn ProductSource>) -> NicheScout {
    NicheScout::with_ranker(RankerConfig::default(), EmptyResultPolicy::default(), source)
}

/// One-shot local HTTP endpoint answering with `status` and a JSON `body`.
///
/// Returns the endpoint URL and a handle resolving to the raw request head.
pub async fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        stream.write_all(response.as_bytes()).await.unwrap();
        let _ = stream.shutdown().await;
        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{addr}/datasets/products"), handle)
}
