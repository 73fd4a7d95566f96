//! Declarative pool creation parameters.

mod pool_config;

pub use pool_config::PoolConfig;
