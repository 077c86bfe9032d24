use portal_core::PortalClient;

use crate::effect::{Effect, EffectKind, Outcome, ShellEvent};

/// Runs shell effects against a backend.
///
/// Cloning is cheap; each clone shares the same client, so effects can be
/// run on separate tasks.
#[derive(Clone)]
pub struct Runner {
    client: PortalClient,
}

impl Runner {
    /// Creates a runner that talks through `client`.
    #[inline]
    pub fn new(client: PortalClient) -> Self {
        Self { client }
    }

    /// Runs one effect to completion.
    ///
    /// Never fails: backend errors travel inside the returned event.
    pub async fn run(&self, effect: Effect) -> ShellEvent {
        let Effect { generation, kind } = effect;
        trace!("running {kind:?} for generation {generation}");

        let outcome = match kind {
            EffectKind::CheckHealth => {
                Outcome::Health(self.client.check_health().await)
            }
            EffectKind::SendChat(pending) => Outcome::Chat(
                pending.ticket,
                self.client.chat(pending.request).await,
            ),
            EffectKind::SendDocumentChat(pending) => Outcome::DocumentChat(
                pending.ticket,
                self.client.document_chat(pending.request).await,
            ),
            EffectKind::Upload { ticket, path } => {
                Outcome::Upload(ticket, self.client.upload_file(&path).await)
            }
            EffectKind::FetchStats => Outcome::Stats(self.client.stats().await),
        };
        ShellEvent {
            generation,
            outcome,
        }
    }
}
