pub mod audit;
pub mod migrate;
pub mod pool;
pub mod queries;
