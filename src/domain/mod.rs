//! Domain layer - Business logic and domain models

pub mod quote;
pub mod store;

pub use quote::Quote;
pub use store::{MergeReport, QuoteStore};
