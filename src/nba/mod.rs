//! NBA stats backend: response types, decoders, and routes.

pub mod decode;
pub mod http;
pub mod types;
