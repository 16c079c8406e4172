//! Configuration loading for the card and the blob field.

mod parameters;
mod profile;

pub use parameters::{FieldParameters, Parameters};
pub use profile::{ContactDetails, ContactItem, ProfileRecord};
