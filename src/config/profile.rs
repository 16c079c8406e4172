//! The business-card profile record.
//!
//! One immutable record per session, loaded at startup from
//! `data/profile.json` with a built-in default. Contacts are a named
//! structure rather than an ordered list, so nothing downstream depends on
//! array positions.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Static business-card data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Company or organization name
    pub company_name: String,
    /// Person's full display name
    pub person_name: String,
    /// Role or job title
    pub title: String,
    /// Short biography line
    pub bio: String,
    /// Initials rendered inside the badge circle
    pub monogram: String,
    /// Contact entries
    pub contacts: ContactDetails,
}

/// Named contact entries for the card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDetails {
    pub email: ContactItem,
    pub phone: ContactItem,
    pub address: ContactItem,
}

/// One contact row: display text plus an optional link target.
/// Rows without a link render as plain text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactItem {
    pub text: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl ProfileRecord {
    /// Load the profile from a JSON file or return the built-in default
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(profile) => {
                    log::info!("Loaded profile from {:?}", path.as_ref());
                    profile
                }
                Err(e) => {
                    log::warn!("Failed to parse profile: {}, using default", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Profile file not found, using default");
                Self::default()
            }
        }
    }

    /// Split the person name into (given, family) on the first whitespace
    /// run. A single-token name yields an empty family component.
    pub fn name_parts(&self) -> (&str, &str) {
        match self.person_name.split_once(char::is_whitespace) {
            Some((given, family)) => (given, family.trim_start()),
            None => (self.person_name.as_str(), ""),
        }
    }
}

impl Default for ProfileRecord {
    fn default() -> Self {
        Self {
            company_name: "S.K ENTERPRISES".to_string(),
            person_name: "VIKAS AGARWAL".to_string(),
            title: "Proprietor".to_string(),
            bio: "Dedicated business owner committed to excellence and strategic growth. \
                  Let's connect and build something great."
                .to_string(),
            monogram: "SKE".to_string(),
            contacts: ContactDetails {
                email: ContactItem {
                    text: "Vikasagarwal183@gmail.com".to_string(),
                    link: Some("mailto:Vikasagarwal183@gmail.com".to_string()),
                },
                phone: ContactItem {
                    text: "+91 9811107598".to_string(),
                    link: Some("https://wa.me/919811107598".to_string()),
                },
                address: ContactItem {
                    text: "B-2/50, D.S.I.D.C. Industrial Compound, Jhilmil Industrial Area, \
                           Delhi - 110095"
                        .to_string(),
                    link: None,
                },
            },
        }
    }
}
