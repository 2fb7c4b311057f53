use std::time::Duration;

use super::{ProductSource, SourceError};
use crate::domain::entities::candidate_product::CandidateProduct;
use async_trait::async_trait;
use serde::Deserialize;

pub const DEFAULT_MAX_ITEMS: usize = 5;

/// Scraper dataset endpoint returning a JSON array of product items.
///
/// Queried as `GET {endpoint}?search={niche}&maxItems={n}` with a bearer token.
pub struct HttpCatalogSource {
    client: reqwest::Client,
    endpoint: String,
    token: String,
    max_items: usize,
}

impl HttpCatalogSource {
    pub fn new(
        endpoint: String,
        token: String,
        timeout: Duration,
        max_items: usize,
    ) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Network(format!("client build failed: {e}")))?;
        Ok(Self {
            client,
            endpoint,
            token,
            max_items,
        })
    }
}

#[derive(Debug, Deserialize)]
struct CatalogItem {
    #[serde(default)]
    id: Option<serde_json::Value>,
    #[serde(default, alias = "title")]
    name: Option<String>,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    shipping: Option<f64>,
    #[serde(default, alias = "rating")]
    supplier_rating: Option<f64>,
    #[serde(default, alias = "imageUrl")]
    image: Option<String>,
}

#[async_trait]
impl ProductSource for HttpCatalogSource {
    fn name(&self) -> &str {
        "http_catalog"
    }

    async fn fetch(&self, niche: &str) -> Result<Vec<CandidateProduct>, SourceError> {
        let max_items = self.max_items.to_string();
        let resp = self
            .client
            .get(&self.endpoint)
            .bearer_auth(&self.token)
            .query(&[("search", niche), ("maxItems", max_items.as_str())])
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(SourceError::Network(format!(
                "catalog endpoint returned {}",
                resp.status()
            )));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let mut products = parse_items(&body, niche)?;
        products.truncate(self.max_items);
        Ok(products)
    }
}

/// Decode a catalog response body into candidates tagged with `niche`.
///
/// Items without an id, a name or a price are skipped.
pub fn parse_items(body: &str, niche: &str) -> Result<Vec<CandidateProduct>, SourceError> {
    let items: Vec<CatalogItem> =
        serde_json::from_str(body).map_err(|e| SourceError::Parse(e.to_string()))?;

    let mut products = Vec::with_capacity(items.len());
    for (idx, item) in items.into_iter().enumerate() {
        let id = match item.id {
            Some(serde_json::Value::String(s)) if !s.is_empty() => s,
            Some(serde_json::Value::Number(n)) => n.to_string(),
            _ => {
                tracing::warn!(index = idx, "skipping catalog item without id");
                continue;
            }
        };
        let (Some(name), Some(price)) = (item.name, item.price) else {
            tracing::warn!(id = %id, "skipping catalog item without name or price");
            continue;
        };

        products.push(CandidateProduct::new(
            id,
            name,
            price,
            item.shipping.unwrap_or(0.0),
            item.supplier_rating.unwrap_or(0.0),
            item.image.unwrap_or_default(),
            niche,
        ));
    }
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_items_maps_fields_and_aliases() {
        let body = r#"[
            {"id": "a1", "name": "Desk Lamp", "price": 7.5, "shipping": 1.25, "supplier_rating": 4.8, "image": "https://img/a1"},
            {"id": 42, "title": "Clip Light", "price": 3.0, "rating": 4.1}
        ]"#;
        let products = parse_items(body, "lamps").unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, "a1");
        assert_eq!(products[0].shipping_cost, 1.25);
        assert_eq!(products[0].niche_tag, "lamps");
        assert_eq!(products[1].id, "42");
        assert_eq!(products[1].name, "Clip Light");
        assert_eq!(products[1].shipping_cost, 0.0);
        assert_eq!(products[1].supplier_rating, 4.1);
        assert_eq!(products[1].image_url, "");
    }

    #[test]
    fn test_parse_items_skips_incomplete() {
        let body = r#"[
            {"name": "No Id", "price": 1.0},
            {"id": "b", "price": 2.0},
            {"id": "c", "name": "No Price"},
            {"id": "d", "name": "Ok", "price": 2.0}
        ]"#;
        let products = parse_items(body, "x").unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "d");
    }

    #[test]
    fn test_parse_items_rejects_non_array() {
        let err = parse_items(r#"{"error": "quota"}"#, "x").unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));
    }
}
