pub mod query;
pub mod regions;
pub mod validate;
