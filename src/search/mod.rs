//! Query parsing and matching for address-book search.

pub mod query;

pub use query::Query;
