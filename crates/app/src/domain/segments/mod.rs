//! Segments
//!
//! Concrete sources for the user to segment lookup the engine depends on.

mod errors;
pub mod file;
pub mod http;
mod source;

pub use errors::*;
pub use file::load_segments_file;
pub use http::{HttpSegmentResolver, SegmentServiceConfig};
pub use source::{SegmentSource, SegmentSourceConfig};
