use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::messaging::{
    Bridge, DirectChannel, Message, MessageChannel, QueueChannel, Result, SplitterEndpoint,
};

/// `input` -> splitter -> `output` -> bridge -> `results`.
pub struct SplitterFlow {
    input: Arc<DirectChannel>,
    results: Arc<QueueChannel>,
}

impl SplitterFlow {
    pub fn new(queue_capacity: usize) -> Self {
        let results = Arc::new(QueueChannel::new("results", queue_capacity));

        let output = Arc::new(DirectChannel::new("output"));
        output.subscribe(Arc::new(Bridge::new(results.clone())));

        let input = Arc::new(DirectChannel::new("input"));
        input.subscribe(Arc::new(SplitterEndpoint::new(output)));

        info!(
            capacity = results.capacity(),
            "splitter flow ready"
        );

        Self { input, results }
    }

    /// Sends `payload` into the flow and returns the id of the input message.
    pub fn send(&self, payload: impl Into<String>) -> Result<Uuid> {
        let message = Message::new(payload);
        let id = message.id();
        self.input.send(message)?;
        Ok(id)
    }

    pub fn results(&self) -> &QueueChannel {
        &self.results
    }
}
