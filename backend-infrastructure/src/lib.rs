pub mod config;
pub mod gateway;

pub use config::*;
pub use gateway::*;
