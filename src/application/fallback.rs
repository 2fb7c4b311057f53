//! Synthetic catalog served when no live source data is available.
//!
//! Output depends only on the niche string: the same niche always yields
//! the same three products, in the same order, with the same numbers.

use crate::domain::entities::candidate_product::CandidateProduct;

/// Placeholder artwork for synthetic products.
pub const FALLBACK_IMAGE_URL: &str = "https://via.placeholder.com/150";

/// One slot of the synthetic catalog. The product name is
/// `"{prefix} {Niche} {suffix}"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallbackTemplate {
    pub id: &'static str,
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub unit_price: f64,
    pub shipping_cost: f64,
    pub supplier_rating: f64,
}

pub const FALLBACK_TEMPLATES: [FallbackTemplate; 3] = [
    FallbackTemplate {
        id: "p1",
        prefix: "Ultra",
        suffix: "Pro",
        unit_price: 10.50,
        shipping_cost: 2.00,
        supplier_rating: 4.9,
    },
    FallbackTemplate {
        id: "p2",
        prefix: "Smart",
        suffix: "Basic",
        unit_price: 4.20,
        shipping_cost: 1.50,
        supplier_rating: 4.6,
    },
    FallbackTemplate {
        id: "p3",
        prefix: "Eco",
        suffix: "Bundle",
        unit_price: 15.00,
        shipping_cost: 3.00,
        supplier_rating: 4.2,
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackGenerator;

impl FallbackGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Build the synthetic catalog for `niche`. Never fails; an empty or
    /// blank niche is embedded as-is.
    pub fn generate(&self, niche: &str) -> Vec<CandidateProduct> {
        let display = capitalize(niche);
        FALLBACK_TEMPLATES
            .iter()
            .map(|t| {
                CandidateProduct::new(
                    t.id,
                    format!("{} {} {}", t.prefix, display, t.suffix),
                    t.unit_price,
                    t.shipping_cost,
                    t.supplier_rating,
                    FALLBACK_IMAGE_URL,
                    niche,
                )
            })
            .collect()
    }
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}
