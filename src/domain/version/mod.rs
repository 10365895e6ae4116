pub mod invariants;
pub mod value_objects;

pub use invariants::{validate_resolution, validate_version_marker};
pub use value_objects::{
    GradingState, MarkerScheme, VersionMarker, VersionResolution, VersionStyle,
};
