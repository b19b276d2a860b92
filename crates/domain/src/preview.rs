use std::collections::BTreeMap;
use std::time::Duration;

use chatadmin_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{ContentConfig, WidgetConfig};

/// Simulated time before the canned assistant reply is delivered.
pub const ASSISTANT_REPLY_DELAY: Duration = Duration::from_millis(1000);

/// Simulated time the thank-you state stays visible before closing.
pub const THANK_YOU_DISPLAY: Duration = Duration::from_millis(2000);

const SIMULATED_REPLY: &str =
    "Thanks for your message! This is a preview reply so you can see how the conversation will look.";

/// Views of the simulated widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreviewView {
    /// Pre-chat form collecting visitor data.
    PreChat,
    /// Live chat transcript.
    Chat,
    /// Post-chat form shown after the chat ends.
    PostChat,
    /// Feedback prompt.
    Feedback,
    /// Transient thank-you confirmation after feedback submit.
    ThankYou,
    /// Widget closed.
    Closed,
}

/// Author of a simulated transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageAuthor {
    /// The site visitor.
    Visitor,
    /// The simulated assistant.
    Assistant,
}

/// One message of the simulated transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    author: MessageAuthor,
    body: String,
}

impl ChatMessage {
    /// Returns the message author.
    #[must_use]
    pub fn author(&self) -> MessageAuthor {
        self.author
    }

    /// Returns the message body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Simulated widget session driving the live preview.
///
/// The session observes a configuration but never mutates it. Message
/// exchange is fully simulated; time is explicit and advanced via
/// [`PreviewSession::advance`], so a reset inherently cancels pending
/// replies and countdowns.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewSession {
    content: ContentConfig,
    view: PreviewView,
    pre_chat_values: BTreeMap<String, Value>,
    transcript: Vec<ChatMessage>,
    pending_replies: Vec<Duration>,
    close_countdown: Option<Duration>,
}

impl PreviewSession {
    /// Creates a session at the initial view for the configuration.
    #[must_use]
    pub fn new(config: &WidgetConfig) -> Self {
        let content = config.normalized().content;
        let view = if content.enable_pre_chat_form {
            PreviewView::PreChat
        } else {
            PreviewView::Chat
        };

        let mut transcript = Vec::new();
        if view == PreviewView::Chat {
            transcript.push(ChatMessage {
                author: MessageAuthor::Assistant,
                body: content.welcome_message.clone(),
            });
        }

        Self {
            content,
            view,
            pre_chat_values: BTreeMap::new(),
            transcript,
            pending_replies: Vec::new(),
            close_countdown: None,
        }
    }

    /// Returns the current view.
    #[must_use]
    pub fn view(&self) -> PreviewView {
        self.view
    }

    /// Returns the simulated transcript.
    #[must_use]
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Returns the captured pre-chat values.
    #[must_use]
    pub fn pre_chat_values(&self) -> &BTreeMap<String, Value> {
        &self.pre_chat_values
    }

    /// Submits the pre-chat form, retaining the captured values for the
    /// session and entering the chat.
    pub fn submit_pre_chat(&mut self, values: BTreeMap<String, Value>) -> AppResult<()> {
        self.require_view(PreviewView::PreChat, "pre-chat form")?;

        self.pre_chat_values = values;
        self.view = PreviewView::Chat;
        self.transcript.push(ChatMessage {
            author: MessageAuthor::Assistant,
            body: self.content.welcome_message.clone(),
        });

        Ok(())
    }

    /// Sends a visitor message and schedules one canned assistant reply
    /// after [`ASSISTANT_REPLY_DELAY`] of simulated time.
    pub fn send_message(&mut self, body: impl Into<String>) -> AppResult<()> {
        self.require_view(PreviewView::Chat, "chat")?;

        self.transcript.push(ChatMessage {
            author: MessageAuthor::Visitor,
            body: body.into(),
        });
        self.pending_replies.push(ASSISTANT_REPLY_DELAY);

        Ok(())
    }

    /// Ends the chat, entering the post-chat form, the feedback prompt, or
    /// the closed state depending on the configuration.
    pub fn end_chat(&mut self) -> AppResult<()> {
        self.require_view(PreviewView::Chat, "chat")?;

        self.pending_replies.clear();
        self.view = if self.content.enable_post_chat_form {
            PreviewView::PostChat
        } else if self.content.enable_feedback {
            PreviewView::Feedback
        } else {
            PreviewView::Closed
        };

        Ok(())
    }

    /// Submits the post-chat form.
    pub fn submit_post_chat(&mut self, _values: BTreeMap<String, Value>) -> AppResult<()> {
        self.require_view(PreviewView::PostChat, "post-chat form")?;

        self.view = if self.content.enable_feedback {
            PreviewView::Feedback
        } else {
            PreviewView::Closed
        };

        Ok(())
    }

    /// Submits the feedback prompt, entering the thank-you state that
    /// auto-closes after [`THANK_YOU_DISPLAY`] of simulated time.
    pub fn submit_feedback(&mut self, _values: BTreeMap<String, Value>) -> AppResult<()> {
        self.require_view(PreviewView::Feedback, "feedback prompt")?;

        self.view = PreviewView::ThankYou;
        self.close_countdown = Some(THANK_YOU_DISPLAY);

        Ok(())
    }

    /// Closes the widget from any view.
    pub fn close(&mut self) {
        self.view = PreviewView::Closed;
        self.pending_replies.clear();
        self.close_countdown = None;
    }

    /// Advances simulated time, delivering due assistant replies and
    /// completing the thank-you auto-close.
    pub fn advance(&mut self, elapsed: Duration) {
        let mut due = 0;
        self.pending_replies.retain_mut(|remaining| {
            if *remaining <= elapsed {
                due += 1;
                false
            } else {
                *remaining -= elapsed;
                true
            }
        });

        for _ in 0..due {
            self.transcript.push(ChatMessage {
                author: MessageAuthor::Assistant,
                body: SIMULATED_REPLY.to_owned(),
            });
        }

        if let Some(countdown) = self.close_countdown {
            if countdown <= elapsed {
                self.close_countdown = None;
                if self.view == PreviewView::ThankYou {
                    self.view = PreviewView::Closed;
                }
            } else {
                self.close_countdown = Some(countdown - elapsed);
            }
        }
    }

    /// Adopts a new configuration.
    ///
    /// If the pre-chat form was enabled/disabled or its field list changed,
    /// the session fully resets: initial view, captured pre-chat data
    /// cleared, pending timers cancelled. Other content changes are adopted
    /// in place.
    pub fn apply_config(&mut self, config: &WidgetConfig) {
        let content = config.normalized().content;
        let pre_chat_changed = content.enable_pre_chat_form != self.content.enable_pre_chat_form
            || content.pre_chat_form_fields != self.content.pre_chat_form_fields;

        if pre_chat_changed {
            *self = Self::new(config);
        } else {
            self.content = content;
        }
    }

    fn require_view(&self, expected: PreviewView, label: &str) -> AppResult<()> {
        if self.view != expected {
            return Err(AppError::Validation(format!(
                "the {label} is not the active view"
            )));
        }

        Ok(())
    }
}
