//! A [`Backend`] that talks to the onboarding service over HTTP.

#[macro_use]
extern crate tracing;

mod config;
mod decode;

use std::sync::Arc;

use async_trait::async_trait;
use portal_api::{
    Backend, BackendResult, ChatReply, ChatRequest, DocumentChatReply,
    DocumentChatRequest, DocumentHandle, DocumentStats, DocumentUpload, Error,
    HealthStatus,
};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, header};

pub use config::{
    BUILD_BASE_URL, FALLBACK_BASE_URL, PortalConfig, PortalConfigBuilder,
};
use decode::{Body, read_body};

const HEALTH_PATH: &str = "/health";
const CHAT_PATH: &str = "/api/chat";
const UPLOAD_PATH: &str = "/api/analyst/upload";
const DOCUMENT_CHAT_PATH: &str = "/api/analyst/chat";
const STATS_PATH: &str = "/api/documents/stats";

/// HTTP backend for the onboarding service.
///
/// Every call is a single request: there is no retry, no timeout and no way
/// to cancel a request other than dropping its future.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    config: Arc<PortalConfig>,
}

impl HttpBackend {
    /// Creates a new `HttpBackend` with the given configuration.
    #[inline]
    pub fn new(config: PortalConfig) -> Self {
        Self {
            client: Client::new(),
            config: Arc::new(config),
        }
    }

    /// Returns the configuration of this backend.
    #[inline]
    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    async fn fetch(
        &self,
        path: &'static str,
        req: RequestBuilder,
    ) -> BackendResult<Body> {
        debug!("sending request to {path}");
        let resp = req
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| Error::transport(format!("{err}")));
        let result = match resp {
            Ok(resp) => read_body(resp).await,
            Err(err) => Err(err),
        };
        if let Err(err) = &result {
            error!("request to {path} failed: {err}");
        }
        result
    }

    async fn send<T: serde::de::DeserializeOwned>(
        &self,
        path: &'static str,
        req: RequestBuilder,
    ) -> BackendResult<T> {
        let result = self.fetch(path, req).await?.json();
        if let Err(err) = &result {
            error!("malformed response from {path}: {err}");
        }
        result
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn health(&self) -> BackendResult<HealthStatus> {
        // Any success status means the service is up, whatever the body.
        let req = self.client.get(self.config.endpoint(HEALTH_PATH));
        let body = self.fetch(HEALTH_PATH, req).await?;
        Ok(body.json_or_default())
    }

    async fn chat(&self, req: &ChatRequest) -> BackendResult<ChatReply> {
        let req = self.client.post(self.config.endpoint(CHAT_PATH)).json(req);
        self.send(CHAT_PATH, req).await
    }

    async fn upload_document(
        &self,
        upload: DocumentUpload,
    ) -> BackendResult<DocumentHandle> {
        let DocumentUpload {
            filename,
            content_type,
            bytes,
        } = upload;
        let mut part = Part::bytes(bytes.to_vec()).file_name(filename);
        if let Some(content_type) = content_type {
            part = part
                .mime_str(content_type.as_ref())
                .map_err(|err| Error::transport(format!("{err}")))?;
        }
        let form = Form::new().part("file", part);
        let req = self
            .client
            .post(self.config.endpoint(UPLOAD_PATH))
            .multipart(form);
        self.send(UPLOAD_PATH, req).await
    }

    async fn document_chat(
        &self,
        req: &DocumentChatRequest,
    ) -> BackendResult<DocumentChatReply> {
        let req = self
            .client
            .post(self.config.endpoint(DOCUMENT_CHAT_PATH))
            .json(req);
        self.send(DOCUMENT_CHAT_PATH, req).await
    }

    async fn document_stats(&self) -> BackendResult<DocumentStats> {
        let req = self.client.get(self.config.endpoint(STATS_PATH));
        self.send(STATS_PATH, req).await
    }
}
