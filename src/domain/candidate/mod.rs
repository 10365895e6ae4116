pub mod entity;
pub mod invariants;

pub use entity::{CandidateFile, CodecKind, MEDIA_EXTENSIONS};
pub use invariants::validate_candidate;
