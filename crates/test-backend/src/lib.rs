//! A local scripted backend for testing purpose.

mod preset;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use portal_api::{
    Backend, BackendResult, ChatReply, ChatRequest, DocumentChatReply,
    DocumentChatRequest, DocumentHandle, DocumentStats, DocumentUpload, Error,
    HealthStatus,
};
use tokio::time::sleep;

pub use preset::*;

/// A call the backend has received.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordedCall {
    /// `GET /health`.
    Health,
    /// `POST /api/chat`.
    Chat(ChatRequest),
    /// `POST /api/analyst/upload`.
    Upload {
        /// Name of the uploaded file.
        filename: String,
        /// Size of the uploaded content.
        len: usize,
    },
    /// `POST /api/analyst/chat`.
    DocumentChat(DocumentChatRequest),
    /// `GET /api/documents/stats`.
    Stats,
}

#[derive(Default)]
struct Script {
    health: VecDeque<Preset<HealthStatus>>,
    chat: VecDeque<Preset<ChatReply>>,
    upload: VecDeque<Preset<DocumentHandle>>,
    document_chat: VecDeque<Preset<DocumentChatReply>>,
    stats: VecDeque<Preset<DocumentStats>>,
    calls: Vec<RecordedCall>,
}

/// A local fake backend for testing purpose.
///
/// Before sending requests, push the replies each endpoint should give.
/// Every call pops the next preset for its endpoint; when none is left the
/// call fails with a status error. Clones share the same script, so a test
/// can keep one clone to inspect [`ScriptedBackend::calls`] after handing
/// the other to the code under test.
#[derive(Clone, Default)]
pub struct ScriptedBackend {
    script: Arc<Mutex<Script>>,
    delay: Option<Duration>,
}

impl ScriptedBackend {
    /// Queues a health probe result.
    #[inline]
    pub fn push_health(&self, preset: Preset<HealthStatus>) {
        self.lock().health.push_back(preset);
    }

    /// Queues a chat result.
    #[inline]
    pub fn push_chat(&self, preset: Preset<ChatReply>) {
        self.lock().chat.push_back(preset);
    }

    /// Queues an upload result.
    #[inline]
    pub fn push_upload(&self, preset: Preset<DocumentHandle>) {
        self.lock().upload.push_back(preset);
    }

    /// Queues a document chat result.
    #[inline]
    pub fn push_document_chat(&self, preset: Preset<DocumentChatReply>) {
        self.lock().document_chat.push_back(preset);
    }

    /// Queues a stats result.
    #[inline]
    pub fn push_stats(&self, preset: Preset<DocumentStats>) {
        self.lock().stats.push_back(preset);
    }

    /// Makes every call wait this long before answering.
    #[inline]
    pub fn set_delay(&mut self, duration: Duration) {
        self.delay = Some(duration);
    }

    /// Returns the calls received so far, in arrival order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn answer<T>(
        &self,
        call: RecordedCall,
        endpoint: &str,
        pick: impl FnOnce(&mut Script) -> Option<Preset<T>>,
    ) -> BackendResult<T> {
        let preset = {
            let mut script = self.lock();
            script.calls.push(call);
            pick(&mut script)
        };
        if let Some(delay) = self.delay {
            sleep(delay).await;
        }
        match preset {
            Some(preset) => preset.into_result(),
            None => Err(Error::status(format!(
                "no scripted reply for {endpoint}"
            ))),
        }
    }
}

#[async_trait]
impl Backend for ScriptedBackend {
    async fn health(&self) -> BackendResult<HealthStatus> {
        self.answer(RecordedCall::Health, "/health", |s| s.health.pop_front())
            .await
    }

    async fn chat(&self, req: &ChatRequest) -> BackendResult<ChatReply> {
        self.answer(RecordedCall::Chat(req.clone()), "/api/chat", |s| {
            s.chat.pop_front()
        })
        .await
    }

    async fn upload_document(
        &self,
        upload: DocumentUpload,
    ) -> BackendResult<DocumentHandle> {
        let call = RecordedCall::Upload {
            filename: upload.filename,
            len: upload.bytes.len(),
        };
        self.answer(call, "/api/analyst/upload", |s| s.upload.pop_front())
            .await
    }

    async fn document_chat(
        &self,
        req: &DocumentChatRequest,
    ) -> BackendResult<DocumentChatReply> {
        self.answer(
            RecordedCall::DocumentChat(req.clone()),
            "/api/analyst/chat",
            |s| s.document_chat.pop_front(),
        )
        .await
    }

    async fn document_stats(&self) -> BackendResult<DocumentStats> {
        self.answer(RecordedCall::Stats, "/api/documents/stats", |s| {
            s.stats.pop_front()
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use portal_api::ErrorKind;

    use super::*;

    fn chat_request(message: &str) -> ChatRequest {
        ChatRequest {
            message: message.to_owned(),
            conversation_id: "conv_1".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_replies_in_script_order() {
        let backend = ScriptedBackend::default();
        backend.push_chat(Preset::Reply(ChatReply {
            response: "First".to_owned(),
            sources: vec![],
            conversation_id: None,
        }));
        backend.push_chat(Preset::failure(FailureKind::Status, "503"));

        let reply = backend.chat(&chat_request("a")).await.unwrap();
        assert_eq!(reply.response, "First");

        let err = backend.chat(&chat_request("b")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Status);
        assert_eq!(err.message(), "503");

        assert_eq!(
            backend.calls(),
            vec![
                RecordedCall::Chat(chat_request("a")),
                RecordedCall::Chat(chat_request("b")),
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_script_fails() {
        let backend = ScriptedBackend::default();
        let err = backend.health().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Status);
        assert!(err.message().contains("/health"));
    }

    #[tokio::test]
    async fn test_clones_share_script() {
        let backend = ScriptedBackend::default();
        let observer = backend.clone();
        backend.push_upload(Preset::Reply(DocumentHandle {
            document_id: "doc-1".to_owned(),
            filename: "a.pdf".to_owned(),
        }));

        let handle = backend
            .upload_document(DocumentUpload::new("a.pdf", &b"%PDF-1.7"[..]))
            .await
            .unwrap();
        assert_eq!(handle.document_id, "doc-1");
        assert_eq!(
            observer.calls(),
            vec![RecordedCall::Upload {
                filename: "a.pdf".to_owned(),
                len: 8,
            }]
        );
    }
}
