use crate::handler::Handler;
use std::sync::Arc;

/// Exposes the nested components a handler composes privately.
pub trait ComponentTracker: Send + Sync {
    fn tracked_components(&self) -> Vec<Arc<dyn Handler>>;
}
