//! The document analyst page: upload one document, then ask about it.

use portal_api::{DocumentChatReply, DocumentChatRequest, DocumentHandle, Error};

use crate::exchange::{Exchange, Pending, Reply, SubmitError, Ticket};

/// Why an upload could not start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    /// Another upload has not finished yet.
    #[error("an upload is already in progress")]
    Busy,
}

/// Which document, if any, the page is about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocumentState {
    /// Nothing uploaded yet, or the last document was cleared.
    NoDocument,
    /// An upload is in flight.
    Uploading {
        /// Name of the file being uploaded.
        filename: String,
    },
    /// The server accepted a document; questions are scoped to it.
    Ready(DocumentHandle),
}

/// State of the analyst page.
#[derive(Clone, Debug)]
pub struct DocumentSession {
    state: DocumentState,
    upload: Option<Ticket>,
    upload_error: Option<String>,
    exchange: Exchange,
}

impl Default for DocumentSession {
    fn default() -> Self {
        Self {
            state: DocumentState::NoDocument,
            upload: None,
            upload_error: None,
            exchange: Exchange::default(),
        }
    }
}

impl DocumentSession {
    /// Returns the document state.
    #[inline]
    pub fn state(&self) -> &DocumentState {
        &self.state
    }

    /// Returns the handle of the current document.
    #[inline]
    pub fn document(&self) -> Option<&DocumentHandle> {
        match &self.state {
            DocumentState::Ready(handle) => Some(handle),
            _ => None,
        }
    }

    /// Returns whether an upload is in flight.
    ///
    /// While this is true the file input is disabled.
    #[inline]
    pub fn is_uploading(&self) -> bool {
        matches!(self.state, DocumentState::Uploading { .. })
    }

    /// Returns the error of the last failed upload.
    #[inline]
    pub fn upload_error(&self) -> Option<&str> {
        self.upload_error.as_deref()
    }

    /// Returns the question/answer transcript for the current document.
    #[inline]
    pub fn exchange(&self) -> &Exchange {
        &self.exchange
    }

    /// Starts uploading `filename`.
    pub fn begin_upload<S: Into<String>>(
        &mut self,
        filename: S,
    ) -> Result<Ticket, UploadError> {
        if self.is_uploading() {
            return Err(UploadError::Busy);
        }
        let ticket = Ticket::next();
        self.state = DocumentState::Uploading {
            filename: filename.into(),
        };
        self.upload = Some(ticket);
        self.upload_error = None;
        Ok(ticket)
    }

    /// Applies the outcome of an upload.
    ///
    /// A successful upload replaces the current document and starts a fresh
    /// transcript. A failed one leaves the page without a document and keeps
    /// the error for display.
    pub fn finish_upload(
        &mut self,
        ticket: Ticket,
        result: Result<DocumentHandle, Error>,
    ) -> bool {
        if self.upload != Some(ticket) {
            warn!("discarding stale upload result {ticket:?}");
            return false;
        }
        self.upload = None;

        match result {
            Ok(handle) => {
                debug!("document {} is ready", handle.document_id);
                // One transcript per document.
                self.exchange = Exchange::default();
                self.state = DocumentState::Ready(handle);
            }
            Err(err) => {
                error!("upload failed: {err}");
                self.state = DocumentState::NoDocument;
                self.upload_error = Some(format!("Upload failed: {err}"));
            }
        }
        true
    }

    /// Forgets the current document and its transcript.
    pub fn clear(&mut self) {
        self.state = DocumentState::NoDocument;
        self.upload = None;
        self.upload_error = None;
        self.exchange = Exchange::default();
    }

    /// Submits a question about the current document.
    pub fn submit(
        &mut self,
        input: &str,
    ) -> Result<Pending<DocumentChatRequest>, SubmitError> {
        let document_id = match &self.state {
            DocumentState::Ready(handle) => handle.document_id.clone(),
            _ => return Err(SubmitError::NoDocument),
        };
        let (ticket, message) = self.exchange.submit(input)?;
        Ok(Pending {
            ticket,
            request: DocumentChatRequest {
                document_id,
                message,
            },
        })
    }

    /// Applies the outcome of a question.
    pub fn resolve(
        &mut self,
        ticket: Ticket,
        result: Result<DocumentChatReply, Error>,
    ) -> bool {
        let reply = match result {
            Ok(reply) => Reply::Answer {
                content: reply.response,
                sources: Vec::new(),
            },
            Err(err) => {
                error!("document chat failed: {err}");
                let filename = self
                    .document()
                    .map(|d| d.filename.as_str())
                    .unwrap_or("the document");
                Reply::Failure(format!(
                    "Sorry, I couldn't answer that about {filename}. Error: {err}"
                ))
            }
        };
        self.exchange.resolve(ticket, reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::Role;

    fn handle(id: &str) -> DocumentHandle {
        DocumentHandle {
            document_id: id.to_owned(),
            filename: "architecture.pdf".to_owned(),
        }
    }

    fn ready_session() -> DocumentSession {
        let mut session = DocumentSession::default();
        let ticket = session.begin_upload("architecture.pdf").unwrap();
        assert!(session.finish_upload(ticket, Ok(handle("doc-1"))));
        session
    }

    #[test]
    fn test_no_second_upload_while_uploading() {
        let mut session = DocumentSession::default();
        let ticket = session.begin_upload("a.pdf").unwrap();
        assert!(session.is_uploading());
        assert_eq!(session.begin_upload("b.pdf"), Err(UploadError::Busy));
        assert_eq!(
            session.state(),
            &DocumentState::Uploading {
                filename: "a.pdf".to_owned()
            }
        );

        assert!(session.finish_upload(ticket, Ok(handle("doc-1"))));
        assert!(!session.is_uploading());
        assert!(session.begin_upload("b.pdf").is_ok());
    }

    #[test]
    fn test_failed_upload_keeps_no_document_view() {
        let mut session = DocumentSession::default();
        let ticket = session.begin_upload("a.pdf").unwrap();
        assert!(
            session.finish_upload(ticket, Err(Error::transport("refused")))
        );
        assert_eq!(session.state(), &DocumentState::NoDocument);
        assert!(session.upload_error().unwrap().contains("refused"));

        // The error is cleared as soon as the user tries again.
        session.begin_upload("a.pdf").unwrap();
        assert_eq!(session.upload_error(), None);
    }

    #[test]
    fn test_questions_need_a_document() {
        let mut session = DocumentSession::default();
        assert_eq!(
            session.submit("Summarize").unwrap_err(),
            SubmitError::NoDocument
        );
        assert!(session.exchange().transcript().is_empty());
    }

    #[test]
    fn test_questions_are_scoped_to_document() {
        let mut session = ready_session();
        let pending = session.submit("What are the action items?").unwrap();
        assert_eq!(pending.request.document_id, "doc-1");

        assert!(session.resolve(
            pending.ticket,
            Ok(DocumentChatReply {
                response: "Review the API design.".to_owned(),
            })
        ));
        let entries = session.exchange().transcript().entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].role(), Role::Assistant);
    }

    #[test]
    fn test_failed_question_names_document() {
        let mut session = ready_session();
        let pending = session.submit("Summarize").unwrap();
        assert!(
            session.resolve(pending.ticket, Err(Error::status("404 Not Found")))
        );
        let last = session.exchange().transcript().last().unwrap();
        assert!(last.is_failure());
        assert!(last.content().contains("architecture.pdf"));
        assert!(last.content().contains("404 Not Found"));
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut session = ready_session();
        let pending = session.submit("Summarize").unwrap();
        session.clear();
        assert_eq!(session.document(), None);
        assert!(session.exchange().transcript().is_empty());

        // The answer to a question asked before clearing is dropped.
        assert!(!session.resolve(
            pending.ticket,
            Ok(DocumentChatReply {
                response: "Late".to_owned(),
            })
        ));
    }

    #[test]
    fn test_upload_result_after_clear_is_ignored() {
        let mut session = DocumentSession::default();
        let ticket = session.begin_upload("a.pdf").unwrap();
        session.clear();
        assert!(!session.finish_upload(ticket, Ok(handle("doc-1"))));
        assert_eq!(session.state(), &DocumentState::NoDocument);
    }
}
