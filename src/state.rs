use std::sync::Arc;

use crate::flow::SplitterFlow;

#[derive(Clone)]
pub struct AppState {
    pub flow: Arc<SplitterFlow>,
}

impl AppState {
    pub fn new(queue_capacity: usize) -> Self {
        Self {
            flow: Arc::new(SplitterFlow::new(queue_capacity)),
        }
    }
}
