// src/domain/archive/value_objects.rs
//
// Archive Value Objects
//
// Immutable results of archive path template resolution. The archival
// executor consumes these; this crate never touches the filesystem.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// ============================================================================
// ARCHIVE DATE
// ============================================================================

/// Calendar date substituted into archive path templates.
/// Month and day render without zero padding (2, not 02).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl ArchiveDate {
    /// Creates a date from its components
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

impl From<NaiveDate> for ArchiveDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl std::fmt::Display for ArchiveDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

// ============================================================================
// ARCHIVE PLAN
// ============================================================================

/// An ordered sequence of folder-segment names describing the nested
/// archive hierarchy. Segments are non-empty by construction; empty template
/// pieces are dropped during resolution, never preserved as empty path
/// components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivePlan {
    /// Folder names from outermost to innermost
    pub segments: Vec<String>,
}

impl ArchivePlan {
    /// Creates a plan from already-resolved segments
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// A plan with no segments (empty or all-separator template)
    pub fn empty() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Display-only join of the plan under a base folder path.
    /// The separator follows the base path's own convention; trailing
    /// separators on the base are stripped first. Returns an empty string
    /// for an empty base. No folder is created here.
    pub fn preview_under(&self, base_path: &str) -> String {
        if base_path.is_empty() {
            return String::new();
        }

        let separator = if base_path.contains('\\') { "\\" } else { "/" };
        let clean_base = base_path.trim_end_matches(['/', '\\']);

        format!(
            "{}{}{}",
            clean_base,
            separator,
            self.segments.join(separator)
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
