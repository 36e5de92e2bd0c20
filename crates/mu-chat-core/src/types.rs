//! Core types — Message, Sender, ConversationStatus.

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

// ── Sender ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

// ── Message ──

/// One turn in the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(id: String, text: impl Into<String>, sender: Sender, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into(),
            sender,
            timestamp,
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    /// Local wall-clock time of the message as `HH:MM`.
    pub fn display_time(&self) -> String {
        format_time(self.timestamp)
    }
}

/// Format a timestamp as hour:minute in the local timezone.
pub fn format_time(timestamp: DateTime<Utc>) -> String {
    format_time_in(timestamp, &Local)
}

pub fn format_time_in<Tz>(timestamp: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    timestamp.with_timezone(tz).format("%H:%M").to_string()
}

// ── Conversation status ──

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStatus {
    #[default]
    Idle,
    AwaitingReply,
}

impl ConversationStatus {
    pub fn is_busy(self) -> bool {
        self == ConversationStatus::AwaitingReply
    }
}

impl std::fmt::Display for ConversationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversationStatus::Idle => write!(f, "idle"),
            ConversationStatus::AwaitingReply => write!(f, "awaiting reply"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_format_time_uses_offset() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 9, 5, 0).unwrap();
        let nairobi = FixedOffset::east_opt(3 * 3600).unwrap();
        assert_eq!(format_time_in(ts, &nairobi), "12:05");
        assert_eq!(format_time_in(ts, &Utc), "09:05");
    }

    #[test]
    fn test_sender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Sender::Bot).unwrap(), "\"bot\"");
        assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"user\"");
    }

    #[test]
    fn test_status_busy() {
        assert!(!ConversationStatus::Idle.is_busy());
        assert!(ConversationStatus::AwaitingReply.is_busy());
        assert_eq!(ConversationStatus::default(), ConversationStatus::Idle);
    }
}
