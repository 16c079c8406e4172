//! vCard 3.0 (`text/vcard`) serialization of the profile record.
//!
//! The payload is rebuilt from the profile on every export; nothing is
//! cached. Empty fields serialize as empty values rather than erroring.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::ProfileRecord;

/// Render the profile as a vCard 3.0 text payload.
///
/// Field order is fixed: BEGIN, VERSION, FN, N, ORG, TITLE, EMAIL, TEL,
/// ADR, END. Lines are CRLF-terminated per the format.
pub fn render_vcard(profile: &ProfileRecord) -> String {
    let (given, family) = profile.name_parts();

    let mut lines = String::new();
    let mut push = |line: String| {
        lines.push_str(&line);
        lines.push_str("\r\n");
    };

    push("BEGIN:VCARD".to_string());
    push("VERSION:3.0".to_string());
    push(format!("FN:{}", profile.person_name));
    push(format!("N:{};{};;;", family, given));
    push(format!("ORG:{}", profile.company_name));
    push(format!("TITLE:{}", profile.title));
    push(format!("EMAIL;TYPE=INTERNET:{}", profile.contacts.email.text));
    push(format!("TEL;TYPE=CELL,VOICE:{}", profile.contacts.phone.text));
    push(format!("ADR;TYPE=WORK:;;{};;;;", profile.contacts.address.text));
    push("END:VCARD".to_string());

    lines
}

/// File name for the exported card: spaces become underscores, `.vcf`
/// extension
pub fn vcard_file_name(person_name: &str) -> String {
    format!("{}.vcf", person_name.replace(' ', "_"))
}

/// Export the profile's vCard into the `exports/` directory.
///
/// Creates the directory if it doesn't exist. Returns the path to the
/// saved file.
pub fn save_vcard(profile: &ProfileRecord) -> Result<PathBuf> {
    save_vcard_to(profile, "exports")
}

/// Export the profile's vCard into a specific directory
pub fn save_vcard_to<P: AsRef<Path>>(profile: &ProfileRecord, dir: P) -> Result<PathBuf> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;

    let path = dir.join(vcard_file_name(&profile.person_name));
    std::fs::write(&path, render_vcard(profile))?;

    log::info!("Contact card exported: {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framing() {
        let vcard = render_vcard(&ProfileRecord::default());
        let lines: Vec<&str> = vcard.lines().collect();
        assert_eq!(lines.first(), Some(&"BEGIN:VCARD"));
        assert_eq!(lines.get(1), Some(&"VERSION:3.0"));
        assert_eq!(lines.last(), Some(&"END:VCARD"));
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn test_crlf_line_endings() {
        let vcard = render_vcard(&ProfileRecord::default());
        assert!(vcard.ends_with("END:VCARD\r\n"));
        assert_eq!(vcard.matches("\r\n").count(), 10);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(vcard_file_name("VIKAS AGARWAL"), "VIKAS_AGARWAL.vcf");
        assert_eq!(vcard_file_name("Prince"), "Prince.vcf");
    }
}
