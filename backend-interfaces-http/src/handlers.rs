pub mod copy_handlers;
pub mod ops_handlers;
pub mod series_handlers;

#[cfg(test)]
pub(crate) mod test_support;

pub use copy_handlers::*;
pub use ops_handlers::*;
pub use series_handlers::*;
