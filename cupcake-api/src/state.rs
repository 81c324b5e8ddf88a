use std::sync::atomic::AtomicU64;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct AppState {
    /// Orders echoed since startup.
    pub received: Arc<AtomicU64>,
}
