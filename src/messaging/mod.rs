//! In-process message channels.
//!
//! A [`DirectChannel`] hands each message to its single subscriber on the
//! caller's thread. A [`QueueChannel`] buffers messages until a receiver
//! polls for them. Handlers such as [`Bridge`] and [`SplitterEndpoint`] are
//! subscribed to channels to move messages along a flow.

mod bridge;
mod channel;
mod message;
mod splitter_endpoint;

pub use bridge::Bridge;
pub use channel::{DirectChannel, QueueChannel};
pub use message::Message;
pub use splitter_endpoint::SplitterEndpoint;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChannelError {
    #[error("channel '{channel}' has no subscribers")]
    NoSubscribers { channel: String },

    #[error("channel '{channel}' is full")]
    Full { channel: String },

    #[error("channel '{channel}' is closed")]
    Closed { channel: String },
}

pub type Result<T> = std::result::Result<T, ChannelError>;

pub trait MessageChannel: Send + Sync {
    fn name(&self) -> &str;

    fn send(&self, message: Message) -> Result<()>;
}

pub trait MessageHandler: Send + Sync {
    fn handle(&self, message: Message) -> Result<()>;
}
