// Domain value objects
pub mod account;
pub mod endpoints;
pub mod identifiers;
pub mod strategy;

pub use account::*;
pub use endpoints::*;
pub use identifiers::*;
pub use strategy::*;
