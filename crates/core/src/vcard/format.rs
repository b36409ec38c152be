//! vCard 3.0 serialization of a contact card.

use crate::contact::ContactCard;

use super::escape::escape_text;

/// Splits a display name into given and family parts.
///
/// The first whitespace-separated token is the given name; the remaining
/// tokens, joined by single spaces, form the family name. A single-token
/// name has an empty family name.
fn split_name(name: &str) -> (String, String) {
    let mut tokens = name.split_whitespace();
    let given = tokens.next().unwrap_or_default().to_string();
    let family = tokens.collect::<Vec<_>>().join(" ");

    (given, family)
}

/// Serializes a contact card as a vCard 3.0 record.
///
/// Ten CRLF-separated lines with no trailing terminator. Name, title, and
/// organization are escaped; phone, email, and website are emitted raw so
/// the bytes stay identical to what existing QR scanners and contact
/// importers were tested against. Total for any input, including empty
/// fields.
pub fn generate(card: &ContactCard) -> String {
    let (given, family) = split_name(&card.name);

    [
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("FN:{}", escape_text(&card.name)),
        format!("N:{};{};;;", escape_text(&family), escape_text(&given)),
        format!("TITLE:{}", escape_text(&card.title)),
        format!("ORG:{}", escape_text(&card.organization)),
        format!("TEL;TYPE=CELL,VOICE:{}", card.phone),
        format!("EMAIL;TYPE=INTERNET,HOME:{}", card.email),
        format!("URL;TYPE=WORK:{}", card.website),
        "END:VCARD".to_string(),
    ]
    .join("\r\n")
}

/// Suggests a download filename for the card's vCard.
///
/// Whitespace runs in the name become `_`; an all-whitespace name falls
/// back to `contact.vcf`.
pub fn vcf_file_name(card: &ContactCard) -> String {
    let stem = card.name.split_whitespace().collect::<Vec<_>>().join("_");

    if stem.is_empty() {
        "contact.vcf".to_string()
    } else {
        format!("{stem}.vcf")
    }
}
