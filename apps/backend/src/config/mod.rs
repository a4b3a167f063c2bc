//! Runtime configuration read from the process environment.

pub mod server;

pub use server::ServerConfig;
