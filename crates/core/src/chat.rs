//! The assistant page: a free-form conversation with the onboarding service.

use portal_api::{ChatReply, ChatRequest, Error};

use crate::exchange::{Exchange, Pending, Reply, SubmitError, Ticket};
use crate::transcript::Transcript;

/// Greeting shown when the assistant page opens.
pub const WELCOME_MESSAGE: &str = "Welcome to The Oracle, your AI-powered \
assistant for navigating project44. I can help you with onboarding \
questions, documentation, and more. What would you like to know?";

/// Citation attached to the greeting.
pub const WELCOME_SOURCE: &str = "Confluence: Engineering Handbook";

/// Canned questions offered before the conversation starts.
pub const QUICK_ACTIONS: &[&str] = &[
    "How to use Runway?",
    "What is LTL?",
    "Request JIRA access",
    "Docker setup guide",
    "SSH key configuration",
];

/// State of the assistant page.
///
/// A session lives as long as the page is shown. Leaving the page drops it,
/// and with it the transcript.
#[derive(Clone, Debug)]
pub struct ChatSession {
    exchange: Exchange,
    conversation_id: String,
    server: String,
}

impl ChatSession {
    /// Creates a session talking to the server at `server`.
    ///
    /// `server` only shows up in failure messages.
    pub fn new<S: Into<String>>(server: S) -> Self {
        let mut transcript = Transcript::default();
        transcript
            .push_assistant(WELCOME_MESSAGE, vec![WELCOME_SOURCE.to_owned()]);
        Self {
            exchange: Exchange::with_transcript(transcript),
            conversation_id: format!("conv_{}", uuid::Uuid::new_v4().simple()),
            server: server.into(),
        }
    }

    /// Returns the identifier sent with every question of this session.
    #[inline]
    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }

    /// Returns the transcript.
    #[inline]
    pub fn transcript(&self) -> &Transcript {
        self.exchange.transcript()
    }

    /// Returns whether a question is waiting for its answer.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.exchange.is_pending()
    }

    /// Quick actions are offered until the user asks something.
    #[inline]
    pub fn shows_quick_actions(&self) -> bool {
        self.transcript().len() <= 1
    }

    /// Submits a question.
    pub fn submit(
        &mut self,
        input: &str,
    ) -> Result<Pending<ChatRequest>, SubmitError> {
        let (ticket, message) = self.exchange.submit(input)?;
        Ok(Pending {
            ticket,
            request: ChatRequest {
                message,
                conversation_id: self.conversation_id.clone(),
            },
        })
    }

    /// Submits the quick action at `index`, if there is one.
    pub fn submit_quick_action(
        &mut self,
        index: usize,
    ) -> Option<Result<Pending<ChatRequest>, SubmitError>> {
        let action = QUICK_ACTIONS.get(index)?;
        Some(self.submit(action))
    }

    /// Applies the outcome of a question.
    pub fn resolve(
        &mut self,
        ticket: Ticket,
        result: Result<ChatReply, Error>,
    ) -> bool {
        let reply = match result {
            Ok(reply) => Reply::Answer {
                content: reply.response,
                sources: reply.sources,
            },
            Err(err) => {
                error!("chat request failed: {err}");
                Reply::Failure(format!(
                    "Sorry, I'm having trouble connecting to the server at {}. \
                     Please make sure the backend is running. Error: {err}",
                    self.server
                ))
            }
        };
        self.exchange.resolve(ticket, reply)
    }
}
