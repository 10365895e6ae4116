// src/lib.rs
// ExportPilot - Export filename versioning and archive-path engine
//
// Architecture:
// - Domain-centric: value objects and invariants live in domains
// - Pure core: no I/O, no host session state, no global settings
// - Explicit: configuration is passed per call, never ambient
// - Deterministic: same input → same output, always
//
// The host panel owns storage enumeration, folder creation, encoder
// invocation, and settings persistence; this crate owns the string logic.

// ============================================================================
// MODULES
// ============================================================================

pub mod domain;
pub mod error;
pub mod services;

// ============================================================================
// PUBLIC API - Domain Value Objects
// ============================================================================

pub use domain::{
    validate_candidate,
    validate_resolution,
    validate_settings,
    validate_version_marker,
    // Archive
    ArchiveDate,
    ArchivePlan,
    // Candidate
    CandidateFile,
    CodecKind,
    // Settings
    ExportSettings,
    // Version
    GradingState,
    MarkerScheme,
    VersionMarker,
    VersionMode,
    VersionResolution,
    VersionStyle,
    MEDIA_EXTENSIONS,
};

// ============================================================================
// PUBLIC API - Errors
// ============================================================================

pub use domain::{DomainError, DomainResult};
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    ArchiveTemplateResolver,
    NameSanitizer,
    ResolveVersionRequest,
    VersionResolver,
    VersionRules,
};
