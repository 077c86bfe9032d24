use std::sync::Arc;

use async_trait::async_trait;
use portal_api::{
    Backend, BackendResult, ChatReply, ChatRequest, DocumentChatReply,
    DocumentChatRequest, DocumentHandle, DocumentStats, DocumentUpload, Error,
    ErrorKind, HealthStatus,
};

struct EchoBackend;

#[async_trait]
impl Backend for EchoBackend {
    async fn health(&self) -> BackendResult<HealthStatus> {
        Ok(HealthStatus {
            status: "healthy".to_owned(),
            message: "echo".to_owned(),
        })
    }

    async fn chat(&self, req: &ChatRequest) -> BackendResult<ChatReply> {
        if req.message.is_empty() {
            return Err(Error::status("422 Unprocessable Entity"));
        }
        Ok(ChatReply {
            response: format!("You said {}", req.message),
            sources: vec![],
            conversation_id: Some(req.conversation_id.clone()),
        })
    }

    async fn upload_document(
        &self,
        upload: DocumentUpload,
    ) -> BackendResult<DocumentHandle> {
        Ok(DocumentHandle {
            document_id: format!("doc:{}", upload.bytes.len()),
            filename: upload.filename,
        })
    }

    async fn document_chat(
        &self,
        req: &DocumentChatRequest,
    ) -> BackendResult<DocumentChatReply> {
        Ok(DocumentChatReply {
            response: format!("{} asks {}", req.document_id, req.message),
        })
    }

    async fn document_stats(&self) -> BackendResult<DocumentStats> {
        Err(Error::decode("not supported"))
    }
}

#[tokio::test]
async fn test_backend_as_trait_object() {
    let backend: Arc<dyn Backend> = Arc::new(EchoBackend);

    let reply = backend
        .chat(&ChatRequest {
            message: "Good morning".to_owned(),
            conversation_id: "conv_1".to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(reply.response, "You said Good morning");
    assert_eq!(reply.conversation_id.as_deref(), Some("conv_1"));

    let handle = backend
        .upload_document(DocumentUpload::new("spec.json", &b"{}"[..]))
        .await
        .unwrap();
    assert_eq!(handle.document_id, "doc:2");

    let reply = backend
        .document_chat(&DocumentChatRequest {
            document_id: handle.document_id,
            message: "Summarize".to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(reply.response, "doc:2 asks Summarize");
}

#[tokio::test]
async fn test_error_kinds() {
    let backend: Arc<dyn Backend> = Arc::new(EchoBackend);
    let err = backend
        .chat(&ChatRequest {
            message: String::new(),
            conversation_id: "conv_1".to_owned(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Status);

    let err = backend.document_stats().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert_eq!(err.message(), "not supported");
}
