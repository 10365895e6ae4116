pub mod entity;
pub mod invariants;

pub use entity::{ExportSettings, VersionMode};
pub use invariants::validate_settings;
