mod client;

pub use client::{HttpRagClient, RagBackend};
