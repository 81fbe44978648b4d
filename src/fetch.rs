use async_trait::async_trait;
use log::error;
use reqwest::{Client, StatusCode};

use crate::snapshot::ExchangeSnapshot;

/// Retrieval seam between the reporter and the network.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetch and decode one day's rates. `None` on any failure; every
    /// failure leaves exactly one entry on the error log.
    async fn fetch(&self, url: &str) -> Option<ExchangeSnapshot>;
}

/// Fetcher backed by reqwest. The client is scoped to the call; the
/// connection is closed before the call returns, on every exit path.
pub struct HttpFetcher;

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Option<ExchangeSnapshot> {
        let resp = match Client::new().get(url).send().await {
            Ok(resp) => resp,
            Err(err) => {
                error!("Connection failed for {url}: {err}");
                return None;
            }
        };

        if resp.status() != StatusCode::OK {
            error!("Unexpected status {} for {url}", resp.status());
            return None;
        }

        let body = match resp.text().await {
            Ok(body) => body,
            Err(err) => {
                error!("Connection failed for {url}: {err}");
                return None;
            }
        };

        match serde_json::from_str(&body) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                error!("Can't decode payload from {url}: {err}");
                None
            }
        }
    }
}
