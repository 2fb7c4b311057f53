pub mod http_catalog;
pub mod offline;

pub use crate::domain::ports::product_source::{ProductSource, SourceError};
