// src/domain/version/value_objects.rs
//
// Version Value Objects
//
// Pure, immutable data structures representing version detection and
// resolution outcomes.
//
// CRITICAL INVARIANTS:
// - All fields are immutable (no &mut self methods)
// - No side effects
// - No I/O operations
// - Deterministic construction
// - Clone + Debug + Serialize for traceability

use serde::{Deserialize, Serialize};

// ============================================================================
// MARKER SCHEME
// ============================================================================

/// The notation a version marker was written in.
/// Numeric markers ("V3") and ordinal markers ("第三版") are mutually
/// exclusive; numeric detection always runs first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerScheme {
    /// Latin prefix followed by digits: V1, v2, V13
    Numeric,

    /// CJK ordinal bounded by fixed glyphs: 第一版 .. 第二十版
    Ordinal,
}

impl std::fmt::Display for MarkerScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkerScheme::Numeric => write!(f, "numeric"),
            MarkerScheme::Ordinal => write!(f, "ordinal"),
        }
    }
}

// ============================================================================
// VERSION MARKER
// ============================================================================

/// A version tag detected inside a filename.
/// At most one marker exists per filename; absence is `Option::None` at the
/// detection site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionMarker {
    /// The decoded revision number
    pub number: u32,

    /// Which notation the marker was written in
    pub scheme: MarkerScheme,

    /// The exact substring that was consumed.
    /// Required so the sanitizer can remove precisely what was matched.
    pub matched_text: String,
}

impl VersionMarker {
    /// Creates a new marker from a detection hit
    pub fn new(number: u32, scheme: MarkerScheme, matched_text: impl Into<String>) -> Self {
        Self {
            number,
            scheme,
            matched_text: matched_text.into(),
        }
    }
}

// ============================================================================
// GRADING STATE
// ============================================================================

/// Whether the latest filename carries a color-grading annotation.
/// Informational only; grading never influences version numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradingState {
    /// A graded marker was found (已调色, graded, ...)
    Graded,

    /// An ungraded marker was found (未调色, raw, ...)
    Ungraded,

    /// No grading marker present
    Absent,
}

impl std::fmt::Display for GradingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradingState::Graded => write!(f, "graded"),
            GradingState::Ungraded => write!(f, "ungraded"),
            GradingState::Absent => write!(f, "absent"),
        }
    }
}

// ============================================================================
// VERSION STYLE (PER-CALL CONFIGURATION)
// ============================================================================

/// How new version strings are rendered.
/// This is configuration handed in per call; the engine holds no global
/// settings state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum VersionStyle {
    /// Configurable Latin prefix followed by the number: V1, Ver2, ...
    Numeric { prefix: String },

    /// CJK ordinal form: 第一版 .. 第二十版, 第21版 above the glyph table
    Chinese,
}

impl VersionStyle {
    /// Numeric style with the given prefix
    pub fn numeric(prefix: impl Into<String>) -> Self {
        VersionStyle::Numeric {
            prefix: prefix.into(),
        }
    }

    /// CJK ordinal style
    pub fn chinese() -> Self {
        VersionStyle::Chinese
    }
}

impl Default for VersionStyle {
    fn default() -> Self {
        VersionStyle::Numeric {
            prefix: "V".to_string(),
        }
    }
}

// ============================================================================
// VERSION RESOLUTION (TOP-LEVEL OUTCOME)
// ============================================================================

/// The outcome of resolving the next export version against a set of
/// candidate filenames. Constructed fresh per call; nothing is retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionResolution {
    /// True when at least one candidate carried a version marker
    pub has_existing_version: bool,

    /// The filename holding the highest version, when one exists
    pub latest_filename: Option<String>,

    /// The version number decoded from the latest filename (0 when none)
    pub detected_version: u32,

    /// The version number the next export will carry
    pub new_version: u32,

    /// The decoration-free stem the new filename is built from
    pub base_filename: String,

    /// Grading annotation found on the latest filename
    pub grading: GradingState,

    /// The fully composed filename for the next export
    pub new_filename: String,
}

impl VersionResolution {
    /// Outcome for a location with no versioned files: the next export is
    /// version 1 built from the fallback base name.
    pub fn first_version(base_filename: String, new_filename: String) -> Self {
        Self {
            has_existing_version: false,
            latest_filename: None,
            detected_version: 0,
            new_version: 1,
            base_filename,
            grading: GradingState::Absent,
            new_filename,
        }
    }

    /// Outcome for a location where a versioned file was found
    pub fn next_version(
        latest_filename: String,
        detected_version: u32,
        base_filename: String,
        grading: GradingState,
        new_filename: String,
    ) -> Self {
        Self {
            has_existing_version: true,
            latest_filename: Some(latest_filename),
            detected_version,
            new_version: detected_version.saturating_add(1),
            base_filename,
            grading,
            new_filename,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
