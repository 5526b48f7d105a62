use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageHeaders {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_size: Option<usize>,
}

impl MessageHeaders {
    fn fresh() -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            correlation_id: None,
            sequence_number: None,
            sequence_size: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub payload: String,
    pub headers: MessageHeaders,
}

impl Message {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            headers: MessageHeaders::fresh(),
        }
    }

    /// Builds the `sequence_number`-th (1-based) of `sequence_size` messages split out of `parent`.
    pub fn in_sequence(
        payload: impl Into<String>,
        parent: &Message,
        sequence_number: usize,
        sequence_size: usize,
    ) -> Self {
        let mut message = Self::new(payload);
        message.headers.correlation_id = Some(parent.headers.id);
        message.headers.sequence_number = Some(sequence_number);
        message.headers.sequence_size = Some(sequence_size);
        message
    }

    pub fn id(&self) -> Uuid {
        self.headers.id
    }
}
