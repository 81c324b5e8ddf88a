pub mod app_config;
pub mod flavor;
pub mod order;
pub mod wire;
pub mod form;
pub mod transport;

pub use flavor::FLAVORS;
pub use form::{OrderChanged, OrderEdit, OrderField, OrderForm};
pub use order::{Order, MAX_QUANTITY, MIN_QUANTITY};
pub use transport::{OrderTransport, TransportError};
pub use wire::WireError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
