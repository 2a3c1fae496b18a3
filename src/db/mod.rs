pub mod initialize;
pub mod migrate;
pub mod oplog;
pub mod pool;
pub mod queries;
