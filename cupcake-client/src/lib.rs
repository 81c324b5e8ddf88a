pub mod http;

pub use http::{HttpTransport, DEFAULT_ENDPOINT};
