use std::env;

use cardpass_core::contact::ContactCard;

use crate::card_data;

/// Contact overrides loaded from environment variables.
///
/// Every field is optional; unset variables fall back to the compiled-in
/// default record. The wallet-pass document is not configurable: its
/// display strings are hand-authored, not derived from the contact card.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub name: Option<String>,
    pub title: Option<String>,
    pub organization: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CONTACT_NAME` - display name on the card
    /// - `CONTACT_TITLE` - job title
    /// - `CONTACT_ORGANIZATION` - organization name
    /// - `CONTACT_PHONE` - phone number in dialable form
    /// - `CONTACT_EMAIL` - email address
    /// - `CONTACT_WEBSITE` - website URL
    pub fn from_env() -> Self {
        Self {
            name: env::var("CONTACT_NAME").ok(),
            title: env::var("CONTACT_TITLE").ok(),
            organization: env::var("CONTACT_ORGANIZATION").ok(),
            phone: env::var("CONTACT_PHONE").ok(),
            email: env::var("CONTACT_EMAIL").ok(),
            website: env::var("CONTACT_WEBSITE").ok(),
        }
    }

    /// Resolves the contact card: overrides applied over the default record.
    pub fn contact_card(&self) -> ContactCard {
        let mut card = card_data::contact_card();

        if let Some(name) = &self.name {
            card.name = name.clone();
        }
        if let Some(title) = &self.title {
            card.title = title.clone();
        }
        if let Some(organization) = &self.organization {
            card.organization = organization.clone();
        }
        if let Some(phone) = &self.phone {
            card.phone = phone.clone();
        }
        if let Some(email) = &self.email {
            card.email = email.clone();
        }
        if let Some(website) = &self.website {
            card.website = website.clone();
        }

        card
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_yields_default_card() {
        let config = Config::default();
        assert_eq!(config.contact_card(), card_data::contact_card());
    }

    #[test]
    fn test_overrides_apply_over_default() {
        let config = Config {
            name: Some("Jane Doe".to_string()),
            phone: Some("+15550100".to_string()),
            ..Config::default()
        };
        let card = config.contact_card();

        assert_eq!(card.name, "Jane Doe");
        assert_eq!(card.phone, "+15550100");
        // Untouched fields keep the default record's values.
        assert_eq!(card.email, card_data::contact_card().email);
    }
}
