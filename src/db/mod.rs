pub mod categories;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pets;
pub mod pool;
pub mod queries;
pub mod stats;
pub mod store;
