use std::sync::Arc;

use super::{Message, MessageChannel, MessageHandler, Result};

/// Forwards every message unchanged to `target`.
pub struct Bridge {
    target: Arc<dyn MessageChannel>,
}

impl Bridge {
    pub fn new(target: Arc<dyn MessageChannel>) -> Self {
        Self { target }
    }
}

impl MessageHandler for Bridge {
    fn handle(&self, message: Message) -> Result<()> {
        self.target.send(message)
    }
}
