use async_trait::async_trait;

use crate::error::Error;
use crate::wire::{
    ChatReply, ChatRequest, DocumentChatReply, DocumentChatRequest,
    DocumentHandle, DocumentStats, DocumentUpload, HealthStatus,
};

/// The result of a backend call.
pub type BackendResult<T> = Result<T, Error>;

/// A type that can answer the portal's requests, usually by forwarding them
/// to the onboarding service.
///
/// Each method maps to exactly one request. Implementations must not retry,
/// and should not keep per-call state: the portal may issue calls for
/// unrelated pages at the same time, and nothing orders them.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Probes `GET /health`.
    async fn health(&self) -> BackendResult<HealthStatus>;

    /// Asks the assistant a question within a conversation.
    async fn chat(&self, req: &ChatRequest) -> BackendResult<ChatReply>;

    /// Uploads a document for analysis and returns its handle.
    async fn upload_document(
        &self,
        upload: DocumentUpload,
    ) -> BackendResult<DocumentHandle>;

    /// Asks a question scoped to a previously uploaded document.
    async fn document_chat(
        &self,
        req: &DocumentChatRequest,
    ) -> BackendResult<DocumentChatReply>;

    /// Fetches statistics about the indexed knowledge base.
    async fn document_stats(&self) -> BackendResult<DocumentStats>;
}
