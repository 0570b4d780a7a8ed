//! HTTP route layer: submit a question, poll its record, check status.

pub mod handler;
pub mod server;

pub use handler::AppState;
pub use server::HttpServer;
