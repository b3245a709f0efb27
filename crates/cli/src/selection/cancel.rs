use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Caller-owned cancellation flag, checked before every blocking read.
///
/// Cancelling does not interrupt a read already in progress.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
