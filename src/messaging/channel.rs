use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use tokio::sync::{mpsc, Mutex};
use tracing::{debug, warn};

use super::{ChannelError, Message, MessageChannel, MessageHandler, Result};

/// Point-to-point channel that invokes its subscriber synchronously.
pub struct DirectChannel {
    name: String,
    subscriber: RwLock<Option<Arc<dyn MessageHandler>>>,
}

impl DirectChannel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subscriber: RwLock::new(None),
        }
    }

    /// Replaces the current subscriber, if any.
    pub fn subscribe(&self, handler: Arc<dyn MessageHandler>) {
        let mut subscriber = self
            .subscriber
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *subscriber = Some(handler);
    }
}

impl MessageChannel for DirectChannel {
    fn name(&self) -> &str {
        &self.name
    }

    fn send(&self, message: Message) -> Result<()> {
        // Clone the handle out so the lock is not held while the handler runs.
        let handler = self
            .subscriber
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        match handler {
            Some(handler) => handler.handle(message),
            None => {
                warn!(channel = %self.name, "dropping message, no subscribers");
                Err(ChannelError::NoSubscribers {
                    channel: self.name.clone(),
                })
            }
        }
    }
}

/// Bounded buffering channel polled by receivers.
pub struct QueueChannel {
    name: String,
    sender: mpsc::Sender<Message>,
    receiver: Mutex<mpsc::Receiver<Message>>,
}

impl QueueChannel {
    pub fn new(name: impl Into<String>, capacity: usize) -> Self {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        Self {
            name: name.into(),
            sender,
            receiver: Mutex::new(receiver),
        }
    }

    /// Waits up to `timeout` for the next message. A zero timeout polls once.
    pub async fn receive(&self, timeout: Duration) -> Option<Message> {
        let mut receiver = self.receiver.lock().await;
        if timeout.is_zero() {
            return receiver.try_recv().ok();
        }

        tokio::time::timeout(timeout, receiver.recv())
            .await
            .ok()
            .flatten()
    }

    pub async fn try_receive(&self) -> Option<Message> {
        self.receive(Duration::ZERO).await
    }

    /// Removes up to `max` buffered messages (all of them when `None`).
    pub async fn drain(&self, max: Option<usize>) -> Vec<Message> {
        let limit = max.unwrap_or(usize::MAX);
        let mut messages = Vec::new();

        while messages.len() < limit {
            match self.try_receive().await {
                Some(message) => messages.push(message),
                None => break,
            }
        }

        messages
    }

    pub fn len(&self) -> usize {
        self.sender.max_capacity() - self.sender.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.sender.max_capacity()
    }
}

impl MessageChannel for QueueChannel {
    fn name(&self) -> &str {
        &self.name
    }

    fn send(&self, message: Message) -> Result<()> {
        let id = message.id();
        match self.sender.try_send(message) {
            Ok(()) => {
                debug!(channel = %self.name, message_id = %id, "queued message");
                Ok(())
            }
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn!(channel = %self.name, message_id = %id, "queue full, rejecting message");
                Err(ChannelError::Full {
                    channel: self.name.clone(),
                })
            }
            Err(mpsc::error::TrySendError::Closed(_)) => Err(ChannelError::Closed {
                channel: self.name.clone(),
            }),
        }
    }
}
