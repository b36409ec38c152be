use serde::{Deserialize, Serialize};

/// A single key/label/value display field on the pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassField {
    /// Unique within its field group; uniqueness is the caller's
    /// responsibility, not enforced here.
    pub key: String,
    pub label: String,
    pub value: String,
}

impl PassField {
    /// Creates a display field.
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Field groups for a generic-style pass, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericFields {
    pub primary_fields: Vec<PassField>,
    pub secondary_fields: Vec<PassField>,
    pub auxiliary_fields: Vec<PassField>,
    pub back_fields: Vec<PassField>,
}

/// The `pass.json` document of a wallet pass.
///
/// Declaration order is the wire order. The manifest embeds a digest of the
/// serialized bytes, and any downstream signature verification depends on
/// byte-exact serialization, so field order and formatting must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassDocument {
    pub format_version: u32,
    pub pass_type_identifier: String,
    pub serial_number: String,
    pub team_identifier: String,
    pub organization_name: String,
    pub description: String,
    pub logo_text: String,
    /// CSS-style color, e.g. `rgb(255, 255, 255)`.
    pub foreground_color: String,
    pub background_color: String,
    pub label_color: String,
    pub generic: GenericFields,
    pub associated_store_identifiers: Vec<i64>,
}
