//! mu-chat-core — Pure domain logic, no UI.
//!
//! Holds the message model, the conversation state machine, reply templates,
//! site content and configuration for the Murang'a University chat assistant.
//! It is UI-agnostic: the terminal UI drives a [`session::SessionHandle`],
//! the browser frontend drives a [`conversation::Conversation`] directly.

pub mod config;
pub mod conversation;
pub mod error;
pub mod events;
pub mod replies;
pub mod site;
pub mod types;

#[cfg(feature = "runtime")]
pub mod session;
