// src/services/version_service.rs
//
// Version Service - Latest-Version Detection and Next-Filename Synthesis
//
// Transforms a flat list of candidate filenames into the next export
// filename without touching any state.
//
// CRITICAL RULES:
// - Consumes already-enumerated filenames (storage is an external collaborator)
// - Produces resolution results as value objects
// - Never fails: ill-formed input degrades to the "no existing version" branch
// - Deterministic: same input → same output
// - Candidates without a version marker are invisible to the latest-version
//   computation, whatever else makes them look recent
//
// DETECTION RULES (ORDERED, FIRST MATCH WINS):
// - Numeric markers (V<digits>) are tried before ordinal markers (第<n>版)
// - Graded vocabulary is scanned before ungraded vocabulary
// - These orders are behavioral contracts, not optimization choices

use log::debug;
use regex::Regex;

use crate::domain::candidate::{CandidateFile, CodecKind};
use crate::domain::version::{
    validate_resolution, GradingState, MarkerScheme, VersionMarker, VersionResolution,
    VersionStyle,
};
use crate::services::name_sanitizer::NameSanitizer;

// ============================================================================
// VERSION RULES (DETERMINISTIC, LAYERED)
// ============================================================================

/// Ordinal numeral glyphs for versions 1 through 20.
/// Detection recognizes exactly this table; rendering falls back to Arabic
/// digits above it.
const ORDINAL_GLYPHS: [&str; 20] = [
    "一", "二", "三", "四", "五", "六", "七", "八", "九", "十", "十一", "十二", "十三", "十四",
    "十五", "十六", "十七", "十八", "十九", "二十",
];

/// Graded vocabulary, scanned first, in declared order
const GRADED_MARKERS: [&str; 4] = ["已调色", "graded", "color graded", "cc"];

/// Ungraded vocabulary, scanned second, in declared order
const UNGRADED_MARKERS: [&str; 4] = ["未调色", "未调", "ungraded", "raw"];

/// Deterministic rules for detecting version markers and grading tags and
/// for rendering version labels. All rules are explicit and ordered.
pub struct VersionRules {
    /// V1, v2, V13
    numeric_pattern: Regex,

    /// 第一版 .. 第二十版
    ordinal_pattern: Regex,
}

impl Default for VersionRules {
    fn default() -> Self {
        Self {
            numeric_pattern: Regex::new(r"[Vv](\d+)").unwrap(),
            ordinal_pattern: Regex::new(r"第([一二三四五六七八九十]+)版").unwrap(),
        }
    }
}

impl VersionRules {
    /// Detect the version marker in a filename stem.
    /// The numeric pattern is tried first and wins on conflict; absence of
    /// both patterns yields None.
    pub fn detect_marker(&self, name: &str) -> Option<VersionMarker> {
        // Digit runs that decode to zero or overflow are decoration, not
        // version markers.
        for captures in self.numeric_pattern.captures_iter(name) {
            if let Ok(number) = captures[1].parse::<u32>() {
                if number >= 1 {
                    return Some(VersionMarker::new(
                        number,
                        MarkerScheme::Numeric,
                        captures.get(0).unwrap().as_str(),
                    ));
                }
            }
        }

        if let Some(captures) = self.ordinal_pattern.captures(name) {
            let glyphs = captures.get(1).unwrap().as_str();
            // Composite glyph runs outside the table collapse to 1
            // (historical behavior, kept on purpose).
            let number = ORDINAL_GLYPHS
                .iter()
                .position(|g| *g == glyphs)
                .map(|idx| idx as u32 + 1)
                .unwrap_or(1);

            return Some(VersionMarker::new(
                number,
                MarkerScheme::Ordinal,
                captures.get(0).unwrap().as_str(),
            ));
        }

        None
    }

    /// Detect the color-grading annotation in a filename.
    /// Substring membership, case-insensitive, graded vocabulary first,
    /// first hit wins.
    pub fn detect_grading(&self, filename: &str) -> GradingState {
        let lowered = filename.to_lowercase();

        for marker in GRADED_MARKERS {
            if lowered.contains(marker) {
                return GradingState::Graded;
            }
        }

        for marker in UNGRADED_MARKERS {
            if lowered.contains(marker) {
                return GradingState::Ungraded;
            }
        }

        GradingState::Absent
    }

    /// Render a version label under the configured style.
    /// The ordinal form uses the glyph table through 20 and bare Arabic
    /// digits above it; detection cannot parse the latter back, which is a
    /// known asymmetry of the scheme.
    pub fn render_version(&self, number: u32, style: &VersionStyle) -> String {
        match style {
            VersionStyle::Numeric { prefix } => format!("{}{}", prefix, number),
            VersionStyle::Chinese => {
                if (1..=20).contains(&number) {
                    format!("第{}版", ORDINAL_GLYPHS[(number - 1) as usize])
                } else {
                    format!("第{}版", number)
                }
            }
        }
    }
}

// ============================================================================
// VERSION RESOLVER
// ============================================================================

/// Everything one resolution call needs, passed explicitly.
/// No global settings state exists in the engine.
#[derive(Debug, Clone)]
pub struct ResolveVersionRequest {
    /// Filenames found in the export location, already filtered to media
    /// extensions by the storage enumerator
    pub candidates: Vec<CandidateFile>,

    /// Base name used when no versioned file exists or sanitization empties
    /// the name (typically the cleaned project title)
    pub fallback_base_name: String,

    /// User-supplied base name; wins unconditionally over the sanitized one
    pub override_base_name: Option<String>,

    /// Encoder preset deciding the codec tag and container extension
    pub codec: CodecKind,

    /// Grading marker appended verbatim after the codec tag ("_已调色" or "")
    pub grading_marker: String,

    /// Version label rendering configuration
    pub style: VersionStyle,
}

pub struct VersionResolver {
    rules: VersionRules,
    sanitizer: NameSanitizer,
}

impl Default for VersionResolver {
    fn default() -> Self {
        Self {
            rules: VersionRules::default(),
            sanitizer: NameSanitizer::new(),
        }
    }
}

impl VersionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// The detection rules, for callers that only need marker or grading
    /// detection
    pub fn rules(&self) -> &VersionRules {
        &self.rules
    }

    /// Determine the latest version among the candidates and synthesize the
    /// next filename. Total: an empty candidate list, or a list where no
    /// name carries a marker, resolves to version 1 on the fallback name.
    pub fn resolve(&self, request: &ResolveVersionRequest) -> VersionResolution {
        // Steps 1-2: detect markers; unmarked candidates are excluded from
        // the version comparison entirely.
        let mut marked: Vec<(&CandidateFile, VersionMarker)> = request
            .candidates
            .iter()
            .filter_map(|candidate| {
                self.rules
                    .detect_marker(candidate.stem())
                    .map(|marker| (candidate, marker))
            })
            .collect();

        debug!(
            "[version_service] {} candidates, {} with markers",
            request.candidates.len(),
            marked.len()
        );

        // Step 3: nothing versioned yet
        if marked.is_empty() {
            return self.first_version(request);
        }

        // Step 4: stable descending sort on the number; original relative
        // order breaks ties.
        marked.sort_by(|a, b| b.1.number.cmp(&a.1.number));
        let (latest, marker) = &marked[0];

        debug!(
            "[version_service] latest {:?} via {} marker {:?}",
            latest.name, marker.scheme, marker.matched_text
        );

        // Step 5: derive the base name; an explicit override always wins.
        let sanitized = self
            .sanitizer
            .sanitize_with_marker(latest.stem(), Some(&marker.matched_text));
        let base_filename = match &request.override_base_name {
            Some(name) => name.clone(),
            None if sanitized.is_empty() => request.fallback_base_name.clone(),
            None => sanitized,
        };

        // Step 6: grading is informational only
        let grading = self.rules.detect_grading(&latest.name);

        // Step 7: compose the successor filename
        let new_version = marker.number.saturating_add(1);
        let new_filename = self.compose(&base_filename, request, new_version);

        let resolution = VersionResolution::next_version(
            latest.name.clone(),
            marker.number,
            base_filename,
            grading,
            new_filename,
        );
        debug_assert!(validate_resolution(&resolution).is_ok());
        resolution
    }

    fn first_version(&self, request: &ResolveVersionRequest) -> VersionResolution {
        let base_filename = request
            .override_base_name
            .clone()
            .unwrap_or_else(|| request.fallback_base_name.clone());
        let new_filename = self.compose(&base_filename, request, 1);

        let resolution = VersionResolution::first_version(base_filename, new_filename);
        debug_assert!(validate_resolution(&resolution).is_ok());
        resolution
    }

    /// Filename format: base_codecTag[gradingMarker]_versionLabel.ext
    fn compose(&self, base_filename: &str, request: &ResolveVersionRequest, version: u32) -> String {
        format!(
            "{}_{}{}_{}{}",
            base_filename,
            request.codec.tag(),
            request.grading_marker,
            self.rules.render_version(version, &request.style),
            request.codec.extension()
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
