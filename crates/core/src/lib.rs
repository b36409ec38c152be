//! Core domain logic for cardpass.
//!
//! Pure types and operations with no HTTP or runtime dependencies: the
//! contact card model, vCard 3.0 serialization, and wallet-pass archive
//! assembly. Everything here is a single-shot transformation; there is no
//! state shared between calls.

pub mod contact;
pub mod pass;
pub mod vcard;
