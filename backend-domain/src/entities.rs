// Domain entities
pub mod catalog;
pub mod copy_result;
pub mod identifier_map;
pub mod runtime_config;
pub mod wire;

pub use catalog::*;
pub use copy_result::*;
pub use identifier_map::*;
pub use runtime_config::*;
pub use wire::*;
