use serde::{Deserialize, Serialize};

/// A person's contact details for a single business card.
///
/// All fields are free text and may be empty; the formatters emit empty
/// values rather than rejecting them. Nothing here is validated: `phone` is
/// expected in dialable form and `website` should be a URL, but both pass
/// through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCard {
    pub name: String,
    pub title: String,
    pub organization: String,
    pub phone: String,
    pub email: String,
    pub website: String,
}

impl ContactCard {
    /// Creates a card with the given display name and empty remaining fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: String::new(),
            organization: String::new(),
            phone: String::new(),
            email: String::new(),
            website: String::new(),
        }
    }

    /// Sets the job title shown under the name.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the organization name.
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = organization.into();
        self
    }

    /// Sets the phone number (dialable form, e.g. `+972...`).
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the website URL.
    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = website.into();
        self
    }
}

/// External profiles and blurb shown alongside the card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareLinks {
    /// Direct chat link, e.g. `https://wa.me/<digits>`.
    pub whatsapp_url: String,
    pub instagram_url: String,
    /// Short description of offered services, shown on the card back.
    pub services: String,
}

impl ShareLinks {
    /// Creates the link set for a card.
    pub fn new(
        whatsapp_url: impl Into<String>,
        instagram_url: impl Into<String>,
        services: impl Into<String>,
    ) -> Self {
        Self {
            whatsapp_url: whatsapp_url.into(),
            instagram_url: instagram_url.into(),
            services: services.into(),
        }
    }
}
