//! Behavior tests for the contact card serializer.

use cardscape::config::{ContactDetails, ContactItem, ProfileRecord};
use cardscape::export::{render_vcard, save_vcard_to, vcard_file_name};

fn item(text: &str) -> ContactItem {
    ContactItem {
        text: text.to_string(),
        link: None,
    }
}

fn reference_profile() -> ProfileRecord {
    ProfileRecord {
        company_name: "S.K ENTERPRISES".to_string(),
        person_name: "VIKAS AGARWAL".to_string(),
        title: "Proprietor".to_string(),
        bio: String::new(),
        monogram: "SKE".to_string(),
        contacts: ContactDetails {
            email: item("a@b.com"),
            phone: item("+91 1"),
            address: item("X St"),
        },
    }
}

#[test]
fn test_reference_profile_lines() {
    let vcard = render_vcard(&reference_profile());
    let lines: Vec<&str> = vcard.lines().collect();

    assert!(lines.contains(&"FN:VIKAS AGARWAL"));
    assert!(lines.contains(&"N:AGARWAL;VIKAS;;;"));
    assert!(lines.contains(&"ORG:S.K ENTERPRISES"));
    assert!(lines.contains(&"TITLE:Proprietor"));
    assert!(lines.contains(&"EMAIL;TYPE=INTERNET:a@b.com"));
    assert!(lines.contains(&"TEL;TYPE=CELL,VOICE:+91 1"));
    assert!(lines.contains(&"ADR;TYPE=WORK:;;X St;;;;"));
}

#[test]
fn test_field_order() {
    let vcard = render_vcard(&reference_profile());
    let prefixes: Vec<&str> = vcard
        .lines()
        .map(|l| l.split(&[':', ';'][..]).next().unwrap())
        .collect();

    assert_eq!(
        prefixes,
        vec![
            "BEGIN", "VERSION", "FN", "N", "ORG", "TITLE", "EMAIL", "TEL", "ADR", "END"
        ]
    );
}

#[test]
fn test_single_token_name_has_empty_family() {
    let profile = ProfileRecord {
        person_name: "Prince".to_string(),
        ..reference_profile()
    };
    let vcard = render_vcard(&profile);

    assert!(vcard.lines().any(|l| l == "N:;Prince;;;"));
    assert!(vcard.lines().any(|l| l == "FN:Prince"));
}

#[test]
fn test_empty_record_degrades_gracefully() {
    let profile = ProfileRecord {
        company_name: String::new(),
        person_name: String::new(),
        title: String::new(),
        bio: String::new(),
        monogram: String::new(),
        contacts: ContactDetails {
            email: item(""),
            phone: item(""),
            address: item(""),
        },
    };
    let vcard = render_vcard(&profile);
    let lines: Vec<&str> = vcard.lines().collect();

    assert_eq!(lines.first(), Some(&"BEGIN:VCARD"));
    assert_eq!(lines.last(), Some(&"END:VCARD"));
    assert!(lines.contains(&"FN:"));
    assert!(lines.contains(&"N:;;;;"));
    assert!(lines.contains(&"ORG:"));
    assert!(lines.contains(&"ADR;TYPE=WORK:;;;;;;"));
}

#[test]
fn test_file_name_replaces_spaces() {
    assert_eq!(vcard_file_name("VIKAS AGARWAL"), "VIKAS_AGARWAL.vcf");
    assert_eq!(vcard_file_name("Prince"), "Prince.vcf");
    assert_eq!(
        vcard_file_name("VIKAS KUMAR AGARWAL"),
        "VIKAS_KUMAR_AGARWAL.vcf"
    );
}

#[test]
fn test_save_writes_expected_file() {
    let dir = std::env::temp_dir().join(format!("cardscape_vcard_{}", std::process::id()));
    let profile = reference_profile();

    let path = save_vcard_to(&profile, &dir).expect("export should succeed");

    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("VIKAS_AGARWAL.vcf")
    );
    let written = std::fs::read_to_string(&path).expect("exported file should be readable");
    assert_eq!(written, render_vcard(&profile));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_payload_rebuilt_per_export() {
    let mut profile = reference_profile();
    let first = render_vcard(&profile);
    profile.title = "Director".to_string();
    let second = render_vcard(&profile);

    assert!(first.contains("TITLE:Proprietor"));
    assert!(second.contains("TITLE:Director"));
}
