use serde::{Deserialize, Serialize};

/// A product returned by a source (live or synthetic) before scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProduct {
    pub id: String,
    pub name: String,
    #[serde(rename = "price")]
    pub unit_price: f64,
    #[serde(rename = "shipping")]
    pub shipping_cost: f64,
    pub supplier_rating: f64,
    #[serde(rename = "image")]
    pub image_url: String,
    pub niche_tag: String,
}

impl CandidateProduct {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit_price: f64,
        shipping_cost: f64,
        supplier_rating: f64,
        image_url: impl Into<String>,
        niche_tag: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            shipping_cost,
            supplier_rating,
            image_url: image_url.into(),
            niche_tag: niche_tag.into(),
        }
    }
}
