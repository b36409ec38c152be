//! The compiled-in card: default contact record, share links, and the
//! wallet-pass document.
//!
//! The pass document is hand-authored rather than derived from the contact
//! record: its display strings differ on purpose (local phone formatting,
//! the Instagram handle instead of the profile URL), and its bytes feed the
//! manifest digest, so they are kept exactly as published.

use cardpass_core::{
    contact::{ContactCard, ShareLinks},
    pass::{GenericFields, PassDocument, PassField},
};

/// The default contact record served when no `CONTACT_*` overrides are set.
pub fn contact_card() -> ContactCard {
    ContactCard::new("Alon Gonda")
        .with_title("Professional Saxophonist")
        .with_organization("Professional Saxophone Performances")
        .with_phone("+972522586385")
        .with_email("alongonda@gmail.com")
        .with_website("https://www.instagram.com/alon.saxophone")
}

/// External profile links and the services blurb shown on the card back.
pub fn share_links() -> ShareLinks {
    ShareLinks::new(
        "https://wa.me/972522586385",
        "https://www.instagram.com/alon.saxophone?igsh=MWtwdm5ieWpuOHRpcA%3D%3D&utm_source=qr",
        "Professional saxophone performances for events, weddings, corporate functions, \
         and private occasions. Each performance is crafted with attention to detail \
         and musical excellence.",
    )
}

/// The fixed wallet-pass document.
pub fn pass_document() -> PassDocument {
    PassDocument {
        format_version: 1,
        pass_type_identifier: "pass.com.digitalbusinesscard.alon".to_string(),
        serial_number: "1".to_string(),
        team_identifier: "TEAM123456".to_string(),
        organization_name: "Alon Gonda".to_string(),
        description: "Digital Business Card".to_string(),
        logo_text: "Alon Gonda".to_string(),
        foreground_color: "rgb(255, 255, 255)".to_string(),
        background_color: "rgb(0, 0, 0)".to_string(),
        label_color: "rgb(20, 184, 166)".to_string(),
        generic: GenericFields {
            primary_fields: vec![PassField::new("name", "Name", "Alon Gonda")],
            secondary_fields: vec![PassField::new("title", "Title", "Professional Saxophonist")],
            auxiliary_fields: vec![PassField::new("phone", "Phone", "052-2586385")],
            back_fields: vec![
                PassField::new("email", "Email", "alongonda@gmail.com"),
                PassField::new("website", "Instagram", "@alon.saxophone"),
                PassField::new(
                    "services",
                    "Services",
                    "Professional saxophone performances for events, weddings, \
                     corporate functions, and private occasions.",
                ),
            ],
        },
        associated_store_identifiers: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_card_values() {
        let card = contact_card();

        assert_eq!(card.name, "Alon Gonda");
        assert_eq!(card.phone, "+972522586385");
        assert_eq!(card.email, "alongonda@gmail.com");
    }

    #[test]
    fn test_pass_field_keys_unique_per_group() {
        let pass = pass_document();
        let groups = [
            &pass.generic.primary_fields,
            &pass.generic.secondary_fields,
            &pass.generic.auxiliary_fields,
            &pass.generic.back_fields,
        ];

        for group in groups {
            let mut keys: Vec<&str> = group.iter().map(|f| f.key.as_str()).collect();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), group.len());
        }
    }
}
