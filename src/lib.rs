pub mod config;
pub mod error;
pub mod rag;
pub mod server;

pub use error::{Error, Result};
