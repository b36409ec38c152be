use cardpass_core::contact::{ContactCard, ShareLinks};
use serde::Serialize;

/// Response payload for `GET /api/contact`: everything a front end needs to
/// render the card.
#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub contact: ContactCard,
    pub links: ShareLinks,
}

impl ContactResponse {
    /// Builds the payload from the shared state's card and links.
    pub fn new(contact: ContactCard, links: ShareLinks) -> Self {
        Self { contact, links }
    }
}
