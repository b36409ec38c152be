//! Shared application state.
//!
//! Everything is built once at startup and never mutated: handlers only
//! read, so a plain `Arc` per field is enough and concurrent requests share
//! no mutable state.

use std::sync::Arc;

use cardpass_core::{
    contact::{ContactCard, ShareLinks},
    pass::PassDocument,
};

use crate::card_data;

/// Shared application state passed to all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub card: Arc<ContactCard>,
    pub links: Arc<ShareLinks>,
    pub pass: Arc<PassDocument>,
}

impl AppState {
    /// Creates state from an already-resolved card, links, and pass document.
    pub fn new(card: ContactCard, links: ShareLinks, pass: PassDocument) -> Self {
        Self {
            card: Arc::new(card),
            links: Arc::new(links),
            pass: Arc::new(pass),
        }
    }

    /// State with the compiled-in default card.
    pub fn with_default_card() -> Self {
        Self::new(
            card_data::contact_card(),
            card_data::share_links(),
            card_data::pass_document(),
        )
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_default_card()
    }
}
