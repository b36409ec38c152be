//! In-memory assembly of the `.pkpass` archive.

use std::io::{Cursor, Write};

use zip::{write::FileOptions, CompressionMethod, ZipWriter};

use super::error::PassError;
use super::manifest::Manifest;
use super::types::PassDocument;

/// Archive entry names, fixed by the pkpass layout.
pub const PASS_ENTRY: &str = "pass.json";
pub const MANIFEST_ENTRY: &str = "manifest.json";
pub const SIGNATURE_ENTRY: &str = "signature";

/// Assembles the `.pkpass` ZIP for a pass document.
///
/// The archive holds exactly three entries: the serialized document as
/// `pass.json`, a `manifest.json` mapping it to its SHA-1 digest, and a
/// zero-length `signature`. The archive is explicitly unsigned: a pass
/// accepted by Apple Wallet needs the manifest signed with a Pass Type ID
/// certificate, which this service does not hold. The empty placeholder
/// keeps the layout complete and the limitation visible.
///
/// Entries are DEFLATE-compressed at maximum level. Output is
/// deterministic for a fixed document.
pub fn build_archive(document: &PassDocument) -> Result<Vec<u8>, PassError> {
    let pass_json = serde_json::to_string(document)?;

    let mut manifest = Manifest::default();
    manifest.insert(PASS_ENTRY, pass_json.as_bytes());
    let manifest_json = manifest.to_json()?;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options: FileOptions<'_, ()> = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(9));

    zip.start_file(PASS_ENTRY, options)?;
    zip.write_all(pass_json.as_bytes())?;

    zip.start_file(MANIFEST_ENTRY, options)?;
    zip.write_all(manifest_json.as_bytes())?;

    // Zero-length placeholder where the detached signature of
    // manifest.json would go.
    zip.start_file(SIGNATURE_ENTRY, options)?;

    Ok(zip.finish()?.into_inner())
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use zip::ZipArchive;

    use super::*;
    use crate::pass::{sha1_hex, GenericFields, PassField};

    fn sample_document() -> PassDocument {
        PassDocument {
            format_version: 1,
            pass_type_identifier: "pass.com.example.card".to_string(),
            serial_number: "1".to_string(),
            team_identifier: "TEAM123456".to_string(),
            organization_name: "Jane Doe".to_string(),
            description: "Digital Business Card".to_string(),
            logo_text: "Jane Doe".to_string(),
            foreground_color: "rgb(255, 255, 255)".to_string(),
            background_color: "rgb(0, 0, 0)".to_string(),
            label_color: "rgb(20, 184, 166)".to_string(),
            generic: GenericFields {
                primary_fields: vec![PassField::new("name", "Name", "Jane Doe")],
                secondary_fields: vec![PassField::new("title", "Title", "Engineer")],
                auxiliary_fields: Vec::new(),
                back_fields: vec![PassField::new("email", "Email", "jane@example.com")],
            },
            associated_store_identifiers: Vec::new(),
        }
    }

    fn read_entry(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> Vec<u8> {
        let mut entry = archive.by_name(name).unwrap();
        let mut content = Vec::new();
        entry.read_to_end(&mut content).unwrap();
        content
    }

    #[test]
    fn archive_has_exactly_three_entries() {
        let bytes = build_archive(&sample_document()).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        let mut names: Vec<&str> = archive.file_names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["manifest.json", "pass.json", "signature"]);
    }

    #[test]
    fn signature_entry_is_empty() {
        let bytes = build_archive(&sample_document()).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        assert!(read_entry(&mut archive, SIGNATURE_ENTRY).is_empty());
    }

    #[test]
    fn manifest_digest_matches_archived_pass_bytes() {
        // Unzip and recompute: the digest stored in manifest.json must equal
        // the SHA-1 of the exact bytes stored as pass.json.
        let bytes = build_archive(&sample_document()).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        let pass_bytes = read_entry(&mut archive, PASS_ENTRY);
        let manifest_bytes = read_entry(&mut archive, MANIFEST_ENTRY);
        let manifest: serde_json::Value = serde_json::from_slice(&manifest_bytes).unwrap();

        assert_eq!(
            manifest[PASS_ENTRY].as_str().unwrap(),
            sha1_hex(&pass_bytes)
        );
    }

    #[test]
    fn archived_pass_round_trips_to_document() {
        let document = sample_document();
        let bytes = build_archive(&document).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        let pass_bytes = read_entry(&mut archive, PASS_ENTRY);
        let restored: PassDocument = serde_json::from_slice(&pass_bytes).unwrap();
        assert_eq!(restored, document);
    }

    #[test]
    fn archived_pass_is_single_line_json() {
        let bytes = build_archive(&sample_document()).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        let pass_bytes = read_entry(&mut archive, PASS_ENTRY);
        assert!(!pass_bytes.contains(&b'\n'));
    }

    #[test]
    fn build_is_deterministic() {
        let document = sample_document();
        assert_eq!(
            build_archive(&document).unwrap(),
            build_archive(&document).unwrap()
        );
    }
}
