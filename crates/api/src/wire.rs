use std::path::Path;

use bytes::Bytes;
use mime::Mime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The question typed by the user.
    pub message: String,
    /// Identifier of the conversation this message belongs to.
    pub conversation_id: String,
}

/// Response of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatReply {
    /// The assistant's answer, usually markdown.
    pub response: String,
    /// Citations for the answer, e.g. `"Confluence: Engineering Handbook"`.
    #[serde(default)]
    pub sources: Vec<String>,
    /// The conversation the server filed this answer under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

/// Response of `POST /api/analyst/upload`.
///
/// The `document_id` scopes every later [`DocumentChatRequest`] to the
/// uploaded artifact.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentHandle {
    /// Server-assigned identifier of the uploaded document.
    pub document_id: String,
    /// The filename the server recorded.
    pub filename: String,
}

/// Body of `POST /api/analyst/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentChatRequest {
    /// The document the question is about.
    pub document_id: String,
    /// The question typed by the user.
    pub message: String,
}

/// Response of `POST /api/analyst/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentChatReply {
    /// The analyst's answer.
    pub response: String,
}

/// Response of `GET /health`.
///
/// Callers only look at whether the probe succeeded; the fields are kept
/// for logging.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Short status word, `"healthy"` when the service is up.
    #[serde(default)]
    pub status: String,
    /// Human-readable detail.
    #[serde(default)]
    pub message: String,
}

/// Response of `GET /api/documents/stats`.
///
/// The shape is owned by the server, so it is kept as an open JSON object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentStats(pub Map<String, Value>);

/// A file to be sent as the `file` part of a multipart upload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DocumentUpload {
    /// Name reported to the server.
    pub filename: String,
    /// Content type of the part. `None` lets the transport pick.
    pub content_type: Option<Mime>,
    /// Raw file content.
    pub bytes: Bytes,
}

/// File extensions offered by the upload picker.
///
/// This is a hint only, uploads with other extensions are sent as well.
pub const SUGGESTED_EXTENSIONS: &[&str] =
    &["pptx", "pdf", "json", "ts", "tsx", "jsx", "js", "py", "go"];

impl DocumentUpload {
    /// Creates an upload, guessing the content type from the extension.
    pub fn new<S: Into<String>, B: Into<Bytes>>(filename: S, bytes: B) -> Self {
        let filename = filename.into();
        let content_type = guess_mime(&filename);
        Self {
            filename,
            content_type,
            bytes: bytes.into(),
        }
    }

    /// Returns whether the extension is one of [`SUGGESTED_EXTENSIONS`].
    pub fn has_suggested_extension(&self) -> bool {
        extension(&self.filename)
            .map(|ext| SUGGESTED_EXTENSIONS.contains(&ext.as_str()))
            .unwrap_or(false)
    }
}

fn extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

fn guess_mime(filename: &str) -> Option<Mime> {
    let mime = match extension(filename)?.as_str() {
        "pdf" => mime::APPLICATION_PDF,
        "json" => mime::APPLICATION_JSON,
        "js" | "jsx" => mime::TEXT_JAVASCRIPT,
        "ts" | "tsx" | "py" | "go" | "md" | "txt" => mime::TEXT_PLAIN_UTF_8,
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            .parse()
            .ok()?,
        _ => return None,
    };
    Some(mime)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_chat_reply_without_sources() {
        let reply: ChatReply =
            serde_json::from_value(json!({ "response": "Hello" })).unwrap();
        assert_eq!(reply.response, "Hello");
        assert!(reply.sources.is_empty());
        assert_eq!(reply.conversation_id, None);
    }

    #[test]
    fn test_chat_reply_requires_response() {
        let result = serde_json::from_value::<ChatReply>(
            json!({ "sources": ["GitHub: project44"] }),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_chat_request_body() {
        let req = ChatRequest {
            message: "What is LTL?".to_owned(),
            conversation_id: "conv_1".to_owned(),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({ "message": "What is LTL?", "conversation_id": "conv_1" })
        );
    }

    #[test]
    fn test_stats_keeps_arbitrary_fields() {
        let stats: DocumentStats = serde_json::from_value(
            json!({ "total_documents": 42, "collection": "onboarding" }),
        )
        .unwrap();
        assert_eq!(stats.0["total_documents"], json!(42));
    }

    #[test]
    fn test_upload_guesses_mime() {
        let upload = DocumentUpload::new("Design.PDF", &b"%PDF"[..]);
        assert_eq!(upload.content_type, Some(mime::APPLICATION_PDF));
        assert!(upload.has_suggested_extension());

        let upload = DocumentUpload::new("notes", Vec::new());
        assert_eq!(upload.content_type, None);
        assert!(!upload.has_suggested_extension());

        let upload = DocumentUpload::new("deck.pptx", Vec::new());
        assert_eq!(
            upload.content_type.unwrap().subtype().as_str(),
            "vnd.openxmlformats-officedocument.presentationml.presentation"
        );
    }
}
