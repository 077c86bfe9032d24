//! Wire protocol of the onboarding backend.
//!
//! The portal talks to an external service that answers questions about the
//! company and about documents uploaded by the user. This crate describes
//! that service from the client's point of view: the request and response
//! bodies, the error classes a call can end in, and the [`Backend`] trait
//! that every transport implements.
//!
//! Types in this crate don't define any behavior. The HTTP transport lives
//! in `portal-http-backend`, and a scripted stand-in for tests lives in
//! `portal-test-backend`.

#![deny(missing_docs)]

mod backend;
mod error;
mod wire;

pub use backend::*;
pub use error::*;
pub use wire::*;
