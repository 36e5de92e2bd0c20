//! The conversation state machine.
//!
//! A [`Conversation`] holds the message log, the busy flag and the draft
//! input of one chat session. Every change goes through [`transition`] (or
//! [`Conversation::step`] in place), which never performs I/O: time arrives
//! with the event and the reply delay leaves as an [`Effect`] for the caller
//! to schedule.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::ChatSettings;
use crate::replies::render_reply;
use crate::types::{ConversationStatus, Message, Sender};

/// Inputs to the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The draft text changed (typing, quick-question pick)
    Input(String),
    /// The user asked to send `text`
    Submit { text: String, at: DateTime<Utc> },
    /// The simulated reply delay elapsed
    ReplyDue { at: DateTime<Utc> },
}

/// Work the caller must perform after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Deliver `Event::ReplyDue` once `after` has elapsed
    ScheduleReply { after: Duration },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    messages: Vec<Message>,
    status: ConversationStatus,
    /// Question the pending reply will quote
    pending_question: Option<String>,
    draft: String,
    settings: ChatSettings,
    next_seq: u64,
}

impl Conversation {
    /// Start a session seeded with the welcome message.
    pub fn new(settings: ChatSettings, at: DateTime<Utc>) -> Self {
        let mut conversation = Self {
            messages: Vec::new(),
            status: ConversationStatus::Idle,
            pending_question: None,
            draft: String::new(),
            settings,
            next_seq: 0,
        };
        let welcome = conversation.settings.welcome_message.clone();
        conversation.append(welcome, Sender::Bot, at);
        conversation
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn status(&self) -> ConversationStatus {
        self.status
    }

    pub fn is_busy(&self) -> bool {
        self.status.is_busy()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    /// Whether `submit(text)` would be accepted right now.
    pub fn can_submit(&self, text: &str) -> bool {
        !self.is_busy() && !text.trim().is_empty()
    }

    /// Quick questions are offered until the first user turn.
    pub fn show_quick_questions(&self) -> bool {
        self.messages.len() == 1 && !self.settings.quick_questions.is_empty()
    }

    /// Apply one event in place.
    pub fn step(&mut self, event: Event) -> Option<Effect> {
        match event {
            Event::Input(text) => {
                self.draft = text;
                None
            }
            Event::Submit { text, at } => {
                if !self.can_submit(&text) {
                    return None;
                }
                self.append(text.clone(), Sender::User, at);
                self.draft.clear();
                self.pending_question = Some(text);
                self.status = ConversationStatus::AwaitingReply;
                Some(Effect::ScheduleReply {
                    after: self.settings.reply_delay(),
                })
            }
            Event::ReplyDue { at } => {
                let question = self.pending_question.take()?;
                let reply = render_reply(&self.settings.reply_template, &question);
                self.append(reply, Sender::Bot, at);
                self.status = ConversationStatus::Idle;
                None
            }
        }
    }

    fn append(&mut self, text: String, sender: Sender, at: DateTime<Utc>) {
        let id = format!("{}-{}", at.timestamp_millis(), self.next_seq);
        self.next_seq += 1;
        self.messages.push(Message::new(id, text, sender, at));
    }
}

/// Pure transition: `(state, event) -> (state, effect)`.
pub fn transition(mut state: Conversation, event: Event) -> (Conversation, Option<Effect>) {
    let effect = state.step(event);
    (state, effect)
}
