//! App state and input handling.

use std::time::Duration;

use tokio::sync::watch;
use tracing::warn;

use mu_chat_core::config::Config;
use mu_chat_core::conversation::Conversation;
use mu_chat_core::session::SessionHandle;
use mu_chat_core::site::SiteInfo;

/// Upper bound on waiting for the session to apply one of our commands.
const APPLY_TIMEOUT: Duration = Duration::from_secs(1);

/// The main application state.
pub struct App {
    pub session: SessionHandle,
    /// Latest snapshot rendered by the UI
    pub conversation: Conversation,
    pub site: SiteInfo,
    pub scroll_offset: usize,
    pub should_quit: bool,
    watch: watch::Receiver<Conversation>,
}

impl App {
    pub fn new(config: &Config, session: SessionHandle) -> Self {
        let watch = session.watch();
        let conversation = session.snapshot();
        App {
            session,
            conversation,
            site: SiteInfo::new(&config.university_name),
            scroll_offset: 0,
            should_quit: false,
            watch,
        }
    }

    /// Pull the latest conversation from the session.
    pub fn sync(&mut self) {
        let latest = self.watch.borrow_and_update().clone();
        if latest.messages().len() != self.conversation.messages().len() {
            // Auto-scroll to bottom
            self.scroll_offset = 0;
        }
        self.conversation = latest;
    }

    pub fn draft(&self) -> &str {
        self.conversation.draft()
    }

    /// Input is disabled while a reply is pending.
    pub async fn type_char(&mut self, c: char) {
        if self.conversation.is_busy() {
            return;
        }
        let mut draft = self.draft().to_string();
        draft.push(c);
        self.set_draft(draft).await;
    }

    pub async fn backspace(&mut self) {
        if self.conversation.is_busy() {
            return;
        }
        let mut draft = self.draft().to_string();
        if draft.pop().is_some() {
            self.set_draft(draft).await;
        }
    }

    /// Fill the input with quick question `n` (1-based).
    pub async fn pick_quick_question(&mut self, n: usize) {
        if !self.conversation.show_quick_questions() || self.conversation.is_busy() {
            return;
        }
        let question = n
            .checked_sub(1)
            .and_then(|i| self.conversation.settings().quick_questions.get(i))
            .cloned();
        if let Some(question) = question {
            self.set_draft(question).await;
        }
    }

    /// Send the draft. Blank drafts and drafts typed while busy stay put.
    pub async fn send_message(&mut self) {
        let text = self.draft().to_string();
        if !self.conversation.can_submit(&text) {
            return;
        }
        let sent = self.conversation.messages().len();
        if self.session.submit(text).await.is_err() {
            warn!("chat session closed; quitting");
            self.should_quit = true;
            return;
        }
        self.wait_until(|c| c.messages().len() > sent).await;
    }

    async fn set_draft(&mut self, draft: String) {
        if self.session.set_input(draft.clone()).await.is_err() {
            self.should_quit = true;
            return;
        }
        self.wait_until(move |c| c.draft() == draft).await;
    }

    async fn wait_until(&mut self, applied: impl FnMut(&Conversation) -> bool) {
        let _ = tokio::time::timeout(APPLY_TIMEOUT, self.watch.wait_for(applied)).await;
        self.sync();
    }

    /// At least the oldest message stays on screen.
    pub fn scroll_up(&mut self) {
        let max = self.conversation.messages().len().saturating_sub(1);
        self.scroll_offset = self.scroll_offset.saturating_add(3).min(max);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(3);
    }
}
