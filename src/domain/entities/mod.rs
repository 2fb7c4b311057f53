pub mod candidate_product;
pub mod ranked_product;
