use std::sync::Arc;

use tracing::debug;

use super::{Message, MessageChannel, MessageHandler, Result};
use crate::splitter::split;

/// Splits each incoming payload and emits one message per token.
pub struct SplitterEndpoint {
    output: Arc<dyn MessageChannel>,
}

impl SplitterEndpoint {
    pub fn new(output: Arc<dyn MessageChannel>) -> Self {
        Self { output }
    }
}

impl MessageHandler for SplitterEndpoint {
    fn handle(&self, message: Message) -> Result<()> {
        let tokens = split(&message.payload);
        let size = tokens.len();

        debug!(
            message_id = %message.id(),
            output = self.output.name(),
            token_count = size,
            "splitting message"
        );

        for (index, token) in tokens.into_iter().enumerate() {
            self.output
                .send(Message::in_sequence(token, &message, index + 1, size))?;
        }

        Ok(())
    }
}
