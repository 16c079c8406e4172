//! State data structures for the blob field and the overlay.

mod blob;
mod metrics;

pub use blob::Blob;
pub use metrics::FrameMetrics;
