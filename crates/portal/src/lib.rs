//! A terminal front end for the onboarding portal.
//!
//! The crate includes the `portal` binary. The [`Shell`] it drives is a plain
//! state machine, so it can also be embedded or tested without a terminal.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod command;
mod effect;
pub mod markdown;
mod render;
mod runner;
mod shell;

pub use command::{Command, ParseError};
pub use effect::{Effect, EffectKind, Outcome, ShellEvent};
pub use runner::Runner;
pub use shell::Shell;

/// Re-exports of [`portal_core`] crate.
pub mod core {
    pub use portal_core::*;
}
