pub mod cli;
pub mod context;
pub mod lifecycle;

pub use cli::{Cli, Command};
pub use lifecycle::{run_copy, run_list_series, run_standalone};
