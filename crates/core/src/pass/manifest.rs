//! The pass manifest: file names mapped to content digests.

use std::collections::BTreeMap;

use sha1::{Digest, Sha1};

/// Computes the lowercase hex SHA-1 digest of a byte buffer.
///
/// The pkpass manifest format is defined over SHA-1; this is an integrity
/// check, not a security boundary.
pub fn sha1_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Mapping from archive file name to the SHA-1 digest of its content.
///
/// Apple Wallet verifies a signed manifest against the archived files. This
/// service never signs, but the digests are still emitted in the shape a
/// signing step would consume. Computed fresh for every archive, never
/// cached.
#[derive(Debug, Default)]
pub struct Manifest(BTreeMap<String, String>);

impl Manifest {
    /// Records the digest of `content` under `name`.
    pub fn insert(&mut self, name: impl Into<String>, content: &[u8]) {
        self.0.insert(name.into(), sha1_hex(content));
    }

    /// Returns the recorded digest for `name`, if any.
    pub fn digest(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Serializes the manifest as a single-line JSON object.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha1_hex_known_vector() {
        // SHA-1("abc"), the FIPS 180 example vector.
        assert_eq!(sha1_hex(b"abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn test_sha1_hex_is_lowercase() {
        let digest = sha1_hex(b"pass content");
        assert_eq!(digest.len(), 40);
        assert_eq!(digest, digest.to_lowercase());
    }

    #[test]
    fn test_manifest_json_shape() {
        let mut manifest = Manifest::default();
        manifest.insert("pass.json", b"{}");

        assert_eq!(
            manifest.to_json().unwrap(),
            format!("{{\"pass.json\":\"{}\"}}", sha1_hex(b"{}"))
        );
    }

    #[test]
    fn test_manifest_digest_lookup() {
        let mut manifest = Manifest::default();
        manifest.insert("pass.json", b"content");

        assert_eq!(manifest.digest("pass.json"), Some(sha1_hex(b"content").as_str()));
        assert_eq!(manifest.digest("signature"), None);
    }
}
