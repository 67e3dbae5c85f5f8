//! Conversation manager service

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use proposal_client::ProposalBackend;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::RwLock;
use tokio::time;
use tracing::{debug, error, warn};
use widget_core::protocol::{
    GENERATION_STAGE, GO_BACK_COMMAND, NEW_PROPOSAL_COMMAND, POST_ENGAGEMENT_STAGE,
    POST_PROPOSAL_OPTIONS, PROPOSAL_SENT_MESSAGE, PROPOSAL_TIMEOUT_MESSAGE,
    UPLOAD_FAILED_MESSAGE, uploaded_message, uploading_message,
};
use widget_core::{
    ChatMessage, ChatReply, ChatRequest, MessageKind, ProposalRequest, UiDirective, UserDetails,
    WidgetConfig,
};
use widget_state::{StateMachine, WidgetEvent, WidgetPhase};

use crate::session::Session;
use crate::update::WidgetUpdate;

/// The conversation client. One instance per widget mount; the embedding
/// host calls the operations below and renders from the update feed (or
/// from [`Self::snapshot`]).
///
/// All operations absorb network failures: they log, re-enable the input
/// and return. The user retries by sending another message.
pub struct ConversationManager<B: ProposalBackend> {
    backend: Arc<B>,
    config: WidgetConfig,
    session: Arc<RwLock<Session>>,
    machine: Arc<RwLock<StateMachine>>,
    /// Bumped on every open. Delayed applies capture it before sleeping
    /// and discard themselves if the widget was reopened meanwhile.
    epoch: Arc<AtomicU64>,
    updates: UnboundedSender<WidgetUpdate>,
}

impl<B: ProposalBackend> ConversationManager<B> {
    /// Create a manager and the receiving end of its update feed.
    pub fn new(backend: B, config: WidgetConfig) -> (Self, UnboundedReceiver<WidgetUpdate>) {
        let (updates, rx) = mpsc::unbounded_channel();
        let manager = Self {
            backend: Arc::new(backend),
            config,
            session: Arc::new(RwLock::new(Session::initial())),
            machine: Arc::new(RwLock::new(StateMachine::new())),
            epoch: Arc::new(AtomicU64::new(0)),
            updates,
        };
        (manager, rx)
    }

    /// Cloned view of the session for hosts that poll instead of
    /// subscribing.
    pub async fn snapshot(&self) -> Session {
        self.session.read().await.clone()
    }

    /// Current widget phase.
    pub async fn phase(&self) -> WidgetPhase {
        self.machine.read().await.phase().clone()
    }

    /// Open the widget window. The first open of a mount cycle issues the
    /// hidden kick-off command before any visible message; the welcome
    /// splash runs concurrently and finishes after its fixed delay.
    pub async fn open(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        self.machine.write().await.handle_event(WidgetEvent::Opened);
        self.emit(WidgetUpdate::OpenedChanged(true));

        self.start_welcome_timer();

        let first_open = {
            let mut session = self.session.write().await;
            !std::mem::replace(&mut session.has_started, true)
        };
        if first_open {
            self.send_message(NEW_PROPOSAL_COMMAND, MessageKind::Command, None, true)
                .await;
        }
    }

    /// Close the widget window. The session resets after the close-reset
    /// delay unless the widget was reopened in the meantime.
    pub async fn close(&self) {
        self.machine
            .write()
            .await
            .handle_event(WidgetEvent::ClosedByUser);
        self.emit(WidgetUpdate::OpenedChanged(false));

        let epoch = self.current_epoch();
        time::sleep(self.config.delays.close_reset).await;
        if self.current_epoch() != epoch {
            // Reopened mid-animation; keep the running conversation.
            return;
        }

        self.session.write().await.reset();
        self.machine.write().await.handle_event(WidgetEvent::ResetElapsed);
        self.emit(WidgetUpdate::SessionReset);
    }

    /// Send one user input through the conversation.
    ///
    /// `display_text` overrides what is echoed into the transcript;
    /// `silent` suppresses the echo entirely (hidden commands). The back
    /// command is never echoed regardless.
    pub async fn send_message(
        &self,
        text: &str,
        kind: MessageKind,
        display_text: Option<&str>,
        silent: bool,
    ) {
        if text.trim().is_empty() {
            return;
        }

        if !silent && text != GO_BACK_COMMAND {
            let shown = display_text.unwrap_or(text);
            self.append(ChatMessage::user(shown)).await;
        }

        let request = {
            let mut session = self.session.write().await;
            session.pending_directive = None;
            session.loading = true;
            ChatRequest {
                stage: session.stage.clone(),
                user_details: session.user_details.clone(),
                user_input: text.to_string(),
            }
        };
        self.emit(WidgetUpdate::DirectiveChanged(None));
        self.emit(WidgetUpdate::LoadingChanged(true));
        self.machine
            .write()
            .await
            .handle_event(WidgetEvent::MessageSubmitted);
        debug!(?kind, silent, stage = %request.stage, "sending user input");

        match self.backend.send_chat(&request).await {
            Ok(reply) => {
                let epoch = self.current_epoch();
                time::sleep(self.config.delays.reply_display).await;
                if self.is_stale(epoch).await {
                    self.clear_loading().await;
                    return;
                }
                self.apply_reply(reply).await;
            }
            Err(err) => {
                error!(error = %err, "chat exchange failed");
                self.clear_loading().await;
                self.machine
                    .write()
                    .await
                    .handle_event(WidgetEvent::ExchangeFailed);
            }
        }
    }

    /// Button or dropdown option click.
    pub async fn select_option(&self, option: &str) {
        self.send_message(option, MessageKind::Button, None, false).await;
    }

    /// Contact form submission. No-op without a phone number.
    pub async fn submit_contact_form(&self, country: &str, phone: &str) {
        if phone.trim().is_empty() {
            return;
        }
        let value = format!("{}:{}", country, phone);
        let display = format!("Selected {}", country);
        self.send_message(&value, MessageKind::Form, Some(&display), false)
            .await;
    }

    /// Ask the backend to pop its stage history. Never echoed.
    pub async fn go_back(&self) {
        self.send_message(GO_BACK_COMMAND, MessageKind::Command, None, false)
            .await;
    }

    /// Kick off proposal generation for the collected details.
    ///
    /// Success is synthesized locally: after the fixed delay the widget
    /// shows the sent confirmation and the fixed follow-up options and
    /// moves to the post-engagement stage, regardless of backend timing.
    /// A failed trigger shows the timeout warning instead; no retry.
    pub async fn trigger_proposal_generation(&self, details: UserDetails) {
        let request = ProposalRequest::from_details(&details);
        match self.backend.generate_proposal(&request).await {
            Ok(()) => {
                let epoch = self.current_epoch();
                time::sleep(self.config.delays.proposal_success).await;
                if self.is_stale(epoch).await {
                    return;
                }

                self.append(ChatMessage::assistant(PROPOSAL_SENT_MESSAGE)).await;
                let directive = UiDirective::Buttons {
                    options: POST_PROPOSAL_OPTIONS.iter().map(|s| s.to_string()).collect(),
                };
                {
                    let mut session = self.session.write().await;
                    session.pending_directive = Some(directive.clone());
                    session.stage = POST_ENGAGEMENT_STAGE.to_string();
                }
                self.emit(WidgetUpdate::DirectiveChanged(Some(directive)));
                self.emit(WidgetUpdate::StageChanged(POST_ENGAGEMENT_STAGE.to_string()));
            }
            Err(err) => {
                warn!(error = %err, "proposal generation request failed");
                self.append(ChatMessage::assistant(PROPOSAL_TIMEOUT_MESSAGE)).await;
            }
        }
        self.machine
            .write()
            .await
            .handle_event(WidgetEvent::GenerationSettled);
    }

    /// Upload a file against the pending file-upload directive.
    ///
    /// On success a follow-up message reporting the filename is sent
    /// through the conversation; on failure exactly one failure line is
    /// appended and the stage is left untouched.
    pub async fn upload_file(&self, file_name: &str, bytes: Vec<u8>) {
        let target = {
            let session = self.session.read().await;
            match &session.pending_directive {
                Some(UiDirective::FileUpload {
                    upload_to,
                    user_email,
                }) => Some((upload_to.clone(), user_email.clone())),
                _ => None,
            }
        };
        let Some((upload_to, email)) = target else {
            warn!("upload requested without a file_upload directive");
            return;
        };

        self.append(ChatMessage::assistant(uploading_message(file_name))).await;
        self.session.write().await.loading = true;
        self.emit(WidgetUpdate::LoadingChanged(true));
        self.machine
            .write()
            .await
            .handle_event(WidgetEvent::UploadStarted);

        match self
            .backend
            .upload_resume(&upload_to, &email, file_name, bytes)
            .await
        {
            Ok(()) => {
                let epoch = self.current_epoch();
                time::sleep(self.config.delays.upload_followup).await;
                if self.is_stale(epoch).await {
                    self.clear_loading().await;
                    return;
                }
                self.send_message(&uploaded_message(file_name), MessageKind::File, None, false)
                    .await;
            }
            Err(err) => {
                error!(error = %err, "resume upload failed");
                self.append(ChatMessage::assistant(UPLOAD_FAILED_MESSAGE)).await;
                self.clear_loading().await;
                self.machine
                    .write()
                    .await
                    .handle_event(WidgetEvent::ExchangeFailed);
            }
        }
    }

    /// Apply a `/chat` reply: store the server's stage and details
    /// verbatim, append the bot message, install the new directive, and
    /// trigger generation when the terminal stage was reached.
    async fn apply_reply(&self, reply: ChatReply) {
        let generation = reply.next_stage == GENERATION_STAGE;
        let ChatReply {
            next_stage,
            user_details,
            bot_message,
            ui_elements,
        } = reply;

        let details = {
            let mut session = self.session.write().await;
            session.stage = next_stage.clone();
            session.user_details = user_details;
            if let Some(text) = &bot_message {
                session.push(ChatMessage::assistant(text.clone()));
            }
            if let Some(directive) = &ui_elements {
                session.pending_directive = Some(directive.clone());
            }
            session.loading = false;
            session.user_details.clone()
        };

        self.emit(WidgetUpdate::StageChanged(next_stage));
        if let Some(text) = bot_message {
            self.emit(WidgetUpdate::MessageAppended(ChatMessage::assistant(text)));
        }
        if let Some(directive) = ui_elements {
            self.emit(WidgetUpdate::DirectiveChanged(Some(directive)));
        }
        self.emit(WidgetUpdate::LoadingChanged(false));

        let event = if generation {
            WidgetEvent::GenerationStarted
        } else {
            WidgetEvent::ReplyApplied
        };
        self.machine.write().await.handle_event(event);

        if generation {
            self.trigger_proposal_generation(details).await;
        }
    }

    /// Spawn the welcome splash timer for the current open cycle.
    fn start_welcome_timer(&self) {
        let machine = Arc::clone(&self.machine);
        let epoch_counter = Arc::clone(&self.epoch);
        let epoch = self.current_epoch();
        let updates = self.updates.clone();
        let delay = self.config.delays.welcome;

        tokio::spawn(async move {
            time::sleep(delay).await;
            if epoch_counter.load(Ordering::SeqCst) != epoch {
                return;
            }
            machine.write().await.handle_event(WidgetEvent::WelcomeElapsed);
            let _ = updates.send(WidgetUpdate::WelcomeFinished);
        });
    }

    async fn append(&self, message: ChatMessage) {
        self.session.write().await.push(message.clone());
        self.emit(WidgetUpdate::MessageAppended(message));
    }

    async fn clear_loading(&self) {
        self.session.write().await.loading = false;
        self.emit(WidgetUpdate::LoadingChanged(false));
    }

    /// Whether a delayed apply captured before `epoch` should be
    /// discarded: the widget was reopened (fresh cycle) or is closed.
    async fn is_stale(&self, epoch: u64) -> bool {
        if self.current_epoch() != epoch {
            return true;
        }
        !self.machine.read().await.phase().is_open()
    }

    fn current_epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    fn emit(&self, update: WidgetUpdate) {
        // The host may have dropped the receiver; snapshot() still works.
        let _ = self.updates.send(update);
    }
}
