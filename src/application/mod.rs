pub mod routes;
pub mod server;
pub mod state;

pub use server::{ServerConfig, serve};
