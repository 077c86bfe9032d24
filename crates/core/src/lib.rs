//! Portal logic that does not depend on a terminal: conversations, document
//! sessions, the static catalogs and navigation.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

pub mod analyst;
pub mod catalog;
pub mod chat;
mod client;
pub mod exchange;
pub mod filter;
pub mod navigation;
pub mod transcript;

pub use analyst::{DocumentSession, DocumentState, UploadError};
pub use chat::ChatSession;
pub use client::PortalClient;
pub use exchange::{Pending, SubmitError, Ticket};
pub use navigation::{CommandPalette, Page};
pub use transcript::{Entry, EntryId, Role, Transcript};
