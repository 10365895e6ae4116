// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod archive;
pub mod candidate;
pub mod settings;
pub mod version;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Candidate Domain
pub use candidate::{validate_candidate, CandidateFile, CodecKind, MEDIA_EXTENSIONS};

// Version Domain
pub use version::{
    validate_resolution, validate_version_marker, GradingState, MarkerScheme, VersionMarker,
    VersionResolution, VersionStyle,
};

// Archive Domain
pub use archive::{ArchiveDate, ArchivePlan};

// Settings Domain
pub use settings::{validate_settings, ExportSettings, VersionMode};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Unknown codec preset: {0}")]
    UnknownCodecPreset(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
