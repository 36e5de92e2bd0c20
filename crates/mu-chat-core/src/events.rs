//! SessionEvent enum — broadcast from a chat session to its front end.

use serde::{Deserialize, Serialize};

use crate::types::{ConversationStatus, Message};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum SessionEvent {
    /// A turn was appended to the log
    #[serde(rename = "message")]
    Message(Message),

    /// Busy flag changed
    #[serde(rename = "status")]
    Status(ConversationStatus),
}

impl SessionEvent {
    /// `{"event": "...", "data": {...}}`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sender;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_event_json_shape() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let msg = Message::new("1-0".into(), "hi", Sender::User, ts);
        let json = SessionEvent::Message(msg).to_json();
        assert_eq!(json["event"], "message");
        assert_eq!(json["data"]["sender"], "user");
        assert_eq!(json["data"]["text"], "hi");

        let json = SessionEvent::Status(ConversationStatus::AwaitingReply).to_json();
        assert_eq!(json["event"], "status");
        assert_eq!(json["data"], "awaiting_reply");
    }
}
