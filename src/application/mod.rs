pub mod analyze;
pub mod fallback;
pub mod rank;
