//! The request/response cycle shared by the chat pages.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::transcript::Transcript;

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// Identifies one outstanding request.
///
/// Tickets are unique for the whole process, so a reply can never be
/// mistaken for the answer to a request issued by another session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub(crate) fn next() -> Self {
        Ticket(NEXT_TICKET.fetch_add(1, Ordering::Relaxed))
    }
}

/// A request that has been accepted and must now be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pending<R> {
    /// Pass this back when resolving the request.
    pub ticket: Ticket,
    /// The body to send.
    pub request: R,
}

/// Why an input was not submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The input was empty or whitespace only.
    #[error("nothing to send")]
    Empty,
    /// A previous request has not been answered yet.
    #[error("still waiting for the previous answer")]
    Busy,
    /// The page needs a document before questions can be asked.
    #[error("upload a document first")]
    NoDocument,
}

/// How a request ended, as it should appear in the transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// The backend answered.
    Answer {
        /// The answer text.
        content: String,
        /// Citations for the answer.
        sources: Vec<String>,
    },
    /// The request failed; the text describes the failure to the user.
    Failure(String),
}

/// A transcript with at most one request in flight.
///
/// Submitting appends the user's entry right away and marks a request as
/// pending. Resolving the pending request appends exactly one assistant
/// entry, either the answer or a failure notice, and clears the pending
/// state. Nothing here can fail the page: a bad reply is just another entry.
#[derive(Clone, Debug, Default)]
pub struct Exchange {
    transcript: Transcript,
    pending: Option<Ticket>,
}

impl Exchange {
    /// Creates an exchange that starts from an existing transcript.
    #[inline]
    pub fn with_transcript(transcript: Transcript) -> Self {
        Self {
            transcript,
            pending: None,
        }
    }

    /// Returns the transcript.
    #[inline]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Returns whether a request is waiting for its answer.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Accepts a user input.
    ///
    /// On success the trimmed input is returned along with the ticket of the
    /// new pending request, and the input is already in the transcript.
    pub fn submit(
        &mut self,
        input: &str,
    ) -> Result<(Ticket, String), SubmitError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SubmitError::Empty);
        }
        if self.pending.is_some() {
            return Err(SubmitError::Busy);
        }

        self.transcript.push_user(input);
        let ticket = Ticket::next();
        self.pending = Some(ticket);
        trace!("submitted {ticket:?}");
        Ok((ticket, input.to_owned()))
    }

    /// Applies the outcome of the request identified by `ticket`.
    ///
    /// Returns `false` and leaves the transcript untouched when `ticket` is
    /// not the pending request.
    pub fn resolve(&mut self, ticket: Ticket, reply: Reply) -> bool {
        if self.pending != Some(ticket) {
            warn!("discarding reply for stale {ticket:?}");
            return false;
        }
        self.pending = None;

        match reply {
            Reply::Answer { content, sources } => {
                self.transcript.push_assistant(content, sources);
            }
            Reply::Failure(content) => {
                self.transcript.push_failure(content);
            }
        }
        true
    }
}
