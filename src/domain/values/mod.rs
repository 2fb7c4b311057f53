pub mod batch_summary;
pub mod markup;
pub mod profitability;
pub mod sort_key;
pub mod source_label;
