pub mod connection_queries;
pub mod series_queries;
