use std::path::Path;
use std::sync::Arc;

use portal_api::{
    Backend, BackendResult, ChatReply, ChatRequest, DocumentChatReply,
    DocumentChatRequest, DocumentHandle, DocumentStats, DocumentUpload, Error,
};
use tracing::Instrument;

/// A cheap handle over a backend that the pages share.
///
/// It hides the concrete backend type from the rest of the portal and adds
/// the logging around each call.
#[derive(Clone)]
pub struct PortalClient {
    backend: Arc<dyn Backend>,
}

impl PortalClient {
    /// Wraps `backend`.
    #[inline]
    pub fn new<B: Backend + 'static>(backend: B) -> Self {
        Self::from_arc(Arc::new(backend))
    }

    /// Wraps a backend that is already shared.
    #[inline]
    pub fn from_arc(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// Probes the health endpoint.
    ///
    /// Any successful reply counts as healthy. The status word the service
    /// reports is only logged.
    pub async fn check_health(&self) -> bool {
        match self.backend.health().await {
            Ok(status) => {
                info!(
                    "backend is up ({:?}): {}",
                    status.status, status.message
                );
                true
            }
            Err(err) => {
                error!("backend is not reachable: {err}");
                false
            }
        }
    }

    /// Asks the assistant a question.
    pub async fn chat(&self, req: ChatRequest) -> BackendResult<ChatReply> {
        let backend = Arc::clone(&self.backend);
        async move {
            trace!("sending {req:?}");
            let reply = backend.chat(&req).await;
            trace!("got {reply:?}");
            reply
        }
        .instrument(trace_span!("chat"))
        .await
    }

    /// Asks a question about an uploaded document.
    pub async fn document_chat(
        &self,
        req: DocumentChatRequest,
    ) -> BackendResult<DocumentChatReply> {
        let backend = Arc::clone(&self.backend);
        async move {
            trace!("sending {req:?}");
            let reply = backend.document_chat(&req).await;
            trace!("got {reply:?}");
            reply
        }
        .instrument(trace_span!("document chat"))
        .await
    }

    /// Reads the file at `path` and uploads it.
    ///
    /// A file that cannot be read fails the same way a broken connection
    /// does, so the page reports it inline like any other upload failure.
    pub async fn upload_file(
        &self,
        path: &Path,
    ) -> BackendResult<DocumentHandle> {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let bytes = tokio::fs::read(path).await.map_err(|err| {
            Error::transport(format!("cannot read {}: {err}", path.display()))
        })?;
        debug!("uploading {filename} ({} bytes)", bytes.len());
        self.upload(DocumentUpload::new(filename, bytes)).await
    }

    /// Uploads a document that is already in memory.
    pub async fn upload(
        &self,
        upload: DocumentUpload,
    ) -> BackendResult<DocumentHandle> {
        if !upload.has_suggested_extension() {
            debug!(
                "{} has an unusual extension, sending anyway",
                upload.filename
            );
        }
        self.backend
            .upload_document(upload)
            .instrument(trace_span!("upload"))
            .await
    }

    /// Fetches the indexed document statistics.
    pub async fn stats(&self) -> BackendResult<DocumentStats> {
        self.backend.document_stats().await
    }
}
