pub mod config;

pub use config::DesignRequest;
