//! Export functionality for the card.
//!
//! Provides vCard contact export and backdrop screenshot capture.

mod screenshot;
mod vcard;

pub use screenshot::save_screenshot;
pub use vcard::{render_vcard, save_vcard, save_vcard_to, vcard_file_name};
