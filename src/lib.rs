//! Cardscape - interactive digital business card.
//!
//! A profile card and contact list rendered above an ambient generative
//! backdrop (the blob field), with vCard export of the contact details.

pub mod config;
pub mod export;
pub mod render;
pub mod sim;
pub mod state;

pub use config::{FieldParameters, Parameters, ProfileRecord};
pub use export::{render_vcard, save_vcard, vcard_file_name};
pub use render::{HudOverlay, RenderState};
pub use sim::BlobField;
pub use state::{Blob, FrameMetrics};
