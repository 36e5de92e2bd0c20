//! Chat session — drives a [`Conversation`] as an independent tokio task.
//!
//! Front ends send [`SessionCommand`]s and subscribe to [`SessionEvent`]s
//! through a [`SessionHandle`]. The simulated reply is a single deadline
//! owned by the task, so tearing the session down drops it with everything
//! else and a reply can never land after teardown.

use chrono::Utc;
use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::config::ChatSettings;
use crate::conversation::{Conversation, Effect, Event};
use crate::error::SessionError;
use crate::events::SessionEvent;

/// Messages that can be sent TO the session (from a front end)
#[derive(Debug)]
pub enum SessionCommand {
    Input(String),
    Submit(String),
    Stop,
}

struct ChatSession {
    conversation: Conversation,
    reply_at: Option<Instant>,

    event_tx: broadcast::Sender<SessionEvent>,
    snapshot_tx: watch::Sender<Conversation>,
    command_rx: mpsc::Receiver<SessionCommand>,
}

impl ChatSession {
    async fn run(mut self) {
        info!(
            assistant = %self.conversation.settings().assistant_name,
            "chat session started"
        );

        loop {
            let reply_at = self.reply_at;
            let reply_due = async move {
                match reply_at {
                    Some(at) => tokio::time::sleep_until(at).await,
                    None => std::future::pending::<()>().await,
                }
            };

            tokio::select! {
                cmd = self.command_rx.recv() => match cmd {
                    Some(SessionCommand::Input(text)) => self.dispatch(Event::Input(text)),
                    Some(SessionCommand::Submit(text)) => {
                        self.dispatch(Event::Submit { text, at: Utc::now() })
                    }
                    Some(SessionCommand::Stop) | None => break,
                },
                _ = reply_due => {
                    self.reply_at = None;
                    self.dispatch(Event::ReplyDue { at: Utc::now() });
                }
            }
        }

        if self.reply_at.take().is_some() {
            info!("pending reply cancelled by teardown");
        }
        info!(
            messages = self.conversation.messages().len(),
            "chat session stopped"
        );
    }

    fn dispatch(&mut self, event: Event) {
        let before_len = self.conversation.messages().len();
        let before_status = self.conversation.status();

        if let Some(Effect::ScheduleReply { after }) = self.conversation.step(event) {
            debug!(delay_ms = after.as_millis() as u64, "reply scheduled");
            self.reply_at = Some(Instant::now() + after);
        }

        for message in &self.conversation.messages()[before_len..] {
            let _ = self.event_tx.send(SessionEvent::Message(message.clone()));
        }
        let status = self.conversation.status();
        if status != before_status {
            let _ = self.event_tx.send(SessionEvent::Status(status));
        }
        self.snapshot_tx.send_replace(self.conversation.clone());
    }
}

/// Owner-side handle of a running session. Dropping it aborts the task.
pub struct SessionHandle {
    command_tx: mpsc::Sender<SessionCommand>,
    event_tx: broadcast::Sender<SessionEvent>,
    snapshot_rx: watch::Receiver<Conversation>,
    task: Option<JoinHandle<()>>,
}

impl SessionHandle {
    /// Seed a conversation and start its task on the current runtime.
    pub fn spawn(settings: ChatSettings) -> Self {
        let conversation = Conversation::new(settings, Utc::now());
        let (event_tx, _) = broadcast::channel(64);
        let (command_tx, command_rx) = mpsc::channel(32);
        let (snapshot_tx, snapshot_rx) = watch::channel(conversation.clone());

        let session = ChatSession {
            conversation,
            reply_at: None,
            event_tx: event_tx.clone(),
            snapshot_tx,
            command_rx,
        };
        let task = tokio::spawn(session.run());

        Self {
            command_tx,
            event_tx,
            snapshot_rx,
            task: Some(task),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.event_tx.subscribe()
    }

    /// Latest state of the conversation.
    pub fn snapshot(&self) -> Conversation {
        self.snapshot_rx.borrow().clone()
    }

    pub fn watch(&self) -> watch::Receiver<Conversation> {
        self.snapshot_rx.clone()
    }

    /// Ask the session to send `text`. Rejected submits are dropped silently
    /// by the session; only a closed session is an error.
    pub async fn submit(&self, text: impl Into<String>) -> Result<(), SessionError> {
        self.send(SessionCommand::Submit(text.into())).await
    }

    pub async fn set_input(&self, text: impl Into<String>) -> Result<(), SessionError> {
        self.send(SessionCommand::Input(text.into())).await
    }

    /// Request a stop without waiting for it.
    pub async fn stop(&self) -> Result<(), SessionError> {
        self.send(SessionCommand::Stop).await
    }

    /// Resolves once the session task has stopped receiving commands.
    pub async fn closed(&self) {
        self.command_tx.closed().await
    }

    /// Stop the session and wait for its task to finish.
    pub async fn shutdown(mut self) {
        let _ = self.command_tx.send(SessionCommand::Stop).await;
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    async fn send(&self, cmd: SessionCommand) -> Result<(), SessionError> {
        self.command_tx
            .send(cmd)
            .await
            .map_err(|_| SessionError::Closed)
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
