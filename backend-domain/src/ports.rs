// Port traits (interfaces)
// Define what the domain needs from infrastructure

pub mod gateway;

pub use gateway::*;
