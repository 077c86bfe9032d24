use std::path::PathBuf;

use portal_api::{
    ChatReply, ChatRequest, DocumentChatReply, DocumentChatRequest,
    DocumentHandle, DocumentStats, Error,
};
use portal_core::{Pending, Ticket};

/// Work the shell asks its host to do.
///
/// Effects carry the generation of the page that issued them. The host runs
/// them with a [`crate::Runner`] and feeds the resulting [`ShellEvent`] back
/// through [`crate::Shell::handle_event`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Effect {
    /// Page generation the effect belongs to.
    pub generation: u64,
    /// What to do.
    pub kind: EffectKind,
}

/// The kinds of [`Effect`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EffectKind {
    /// Probe the backend.
    CheckHealth,
    /// Send an assistant question.
    SendChat(Pending<ChatRequest>),
    /// Send a question about the uploaded document.
    SendDocumentChat(Pending<DocumentChatRequest>),
    /// Read and upload a file.
    Upload {
        /// Ticket of the upload.
        ticket: Ticket,
        /// File to read.
        path: PathBuf,
    },
    /// Fetch the indexed document statistics.
    FetchStats,
}

impl Effect {
    /// Returns what to show while the effect runs.
    pub fn label(&self) -> &'static str {
        match self.kind {
            EffectKind::CheckHealth => "🔌 Checking backend...",
            EffectKind::SendChat(_) | EffectKind::SendDocumentChat(_) => {
                "🤔 Thinking..."
            }
            EffectKind::Upload { .. } => "📤 Uploading...",
            EffectKind::FetchStats => "📊 Loading stats...",
        }
    }
}

/// A finished [`Effect`].
#[derive(Clone, Debug, PartialEq)]
pub struct ShellEvent {
    /// Copied from the effect.
    pub generation: u64,
    /// How it went.
    pub outcome: Outcome,
}

/// Result of each [`EffectKind`].
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Whether the backend is healthy.
    Health(bool),
    /// Answer to [`EffectKind::SendChat`].
    Chat(Ticket, Result<ChatReply, Error>),
    /// Answer to [`EffectKind::SendDocumentChat`].
    DocumentChat(Ticket, Result<DocumentChatReply, Error>),
    /// Result of [`EffectKind::Upload`].
    Upload(Ticket, Result<DocumentHandle, Error>),
    /// Result of [`EffectKind::FetchStats`].
    Stats(Result<DocumentStats, Error>),
}
