pub mod contact;
pub mod health;
pub mod pass;
pub mod vcard;
