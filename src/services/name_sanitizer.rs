// src/services/name_sanitizer.rs
//
// Name Sanitizer - Decoration Stripping Pipeline
//
// Recovers a stable base name from a versioned export filename by stripping
// ancillary decorations: the detected version marker, bitrate tags, codec
// tags, grading tags, date markers, and boundary punctuation.
//
// CRITICAL RULES:
// - Total function: every input maps to a string, nothing ever fails
// - Stage order is a documented contract; reordering changes results on
//   inputs with overlapping patterns
// - Idempotent: sanitize(sanitize(x)) == sanitize(x)
// - Returns "" rather than guessing a fallback; fallback policy belongs to
//   the version resolver

use log::debug;
use regex::Regex;

/// Separator and bracket characters trimmed from both ends of the result
const BOUNDARY_CHARS: [char; 14] = [
    '-', '_', '.', ',', '/', '\\', '(', ')', '（', '）', '【', '】', '[', ']',
];

pub struct NameSanitizer {
    /// Bitrate tags: _10mbps, _48mbps
    bitrate_pattern: Regex,

    /// Codec tags, optionally underscore-prefixed
    codec_patterns: Vec<Regex>,

    /// Grading tags, graded and ungraded forms
    grading_patterns: Vec<Regex>,

    /// Date markers, applied in declaration order
    date_patterns: Vec<Regex>,
}

impl Default for NameSanitizer {
    fn default() -> Self {
        Self {
            bitrate_pattern: Regex::new(r"(?i)_\d+mbps").unwrap(),
            codec_patterns: vec![
                Regex::new(r"(?i)_?prores422").unwrap(),
                Regex::new(r"(?i)_?prores444").unwrap(),
            ],
            grading_patterns: vec![
                Regex::new(r"(?i)_已调色").unwrap(),
                Regex::new(r"(?i)_未调色").unwrap(),
                Regex::new(r"(?i)_调色").unwrap(),
                Regex::new(r"(?i)_graded").unwrap(),
                Regex::new(r"(?i)_ungraded").unwrap(),
                Regex::new(r"(?i)_cc").unwrap(),
            ],
            date_patterns: vec![
                // 1_11, 2_3, 12_25
                Regex::new(r"\b\d{1,2}_\d{1,2}\b").unwrap(),
                // 2025-2-3, 2025.2.3, 2025_2_3
                Regex::new(r"\b\d{4}[-_.]\d{1,2}[-_.]\d{1,2}\b").unwrap(),
                // 2025-9, 2025.9, 2025_9
                Regex::new(r"\b\d{4}[-_.]\d{1,2}\b").unwrap(),
                // 2025年8月19日, 2025年8月
                Regex::new(r"\b\d{1,4}年\d{1,2}月(?:\d{1,2}日)?\b").unwrap(),
                // 8月19日
                Regex::new(r"\b\d{1,2}月\d{1,2}日\b").unwrap(),
                // 2025年
                Regex::new(r"\b\d{4}年\b").unwrap(),
            ],
        }
    }
}

impl NameSanitizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strips decorations from a name that carries no known version marker
    pub fn sanitize(&self, raw: &str) -> String {
        self.sanitize_with_marker(raw, None)
    }

    /// Strips decorations from a name, removing the caller-supplied version
    /// marker text first. The resolver passes in the exact matched substring
    /// instead of having the sanitizer re-detect it.
    pub fn sanitize_with_marker(&self, raw: &str, marker_text: Option<&str>) -> String {
        if raw.is_empty() {
            return String::new();
        }

        let mut name = raw.to_string();

        // Stage 1: remove the detected version marker
        if let Some(marker) = marker_text {
            if !marker.is_empty() {
                name = name.replacen(marker, "", 1);
            }
        }

        // Stages 2-5 repeat until the string stops changing: removing a tag
        // can splice together a tag an earlier stage already scanned past
        // ("clip_10_gradedmbps" becomes "clip_10mbps" after stage 4). Each
        // pass keeps the documented stage order; every changing pass shrinks
        // the string, so the loop terminates.
        loop {
            let before = name.clone();

            // Stage 2: bitrate tags
            name = self.bitrate_pattern.replace_all(&name, "").into_owned();

            // Stage 3: codec tags
            for pattern in &self.codec_patterns {
                name = pattern.replace_all(&name, "").into_owned();
            }

            // Stage 4: grading tags, anywhere in the remaining string
            for pattern in &self.grading_patterns {
                name = pattern.replace_all(&name, "").into_owned();
            }

            // Stage 5: date markers, in fixed order
            for pattern in &self.date_patterns {
                name = pattern.replace_all(&name, "").into_owned();
            }

            if name == before {
                break;
            }
        }

        // Stage 6: trim boundary punctuation and whitespace to a fixed point
        let cleaned = name
            .trim_matches(|c: char| c.is_whitespace() || BOUNDARY_CHARS.contains(&c))
            .to_string();

        debug!("[name_sanitizer] {:?} -> {:?}", raw, cleaned);

        cleaned
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_text_removed_first() {
        let sanitizer = NameSanitizer::new();
        assert_eq!(
            sanitizer.sanitize_with_marker("宣传片_10mbps_V3", Some("V3")),
            "宣传片"
        );
        assert_eq!(
            sanitizer.sanitize_with_marker("宣传片_第三版", Some("第三版")),
            "宣传片"
        );
    }

    #[test]
    fn test_bitrate_tag_stripped() {
        let sanitizer = NameSanitizer::new();
        assert_eq!(sanitizer.sanitize("clip_10mbps"), "clip");
        assert_eq!(sanitizer.sanitize("clip_48MBPS"), "clip");
    }

    #[test]
    fn test_codec_tags_stripped() {
        let sanitizer = NameSanitizer::new();
        assert_eq!(sanitizer.sanitize("master_prores422"), "master");
        assert_eq!(sanitizer.sanitize("master_ProRes444"), "master");
        assert_eq!(sanitizer.sanitize("master prores422"), "master");
    }

    #[test]
    fn test_grading_tags_stripped_everywhere() {
        let sanitizer = NameSanitizer::new();
        assert_eq!(sanitizer.sanitize("clip_已调色"), "clip");
        assert_eq!(sanitizer.sanitize("clip_未调色_graded还有_graded"), "clip还有");
        assert_eq!(sanitizer.sanitize("clip_CC"), "clip");
    }

    #[test]
    fn test_date_markers_stripped() {
        let sanitizer = NameSanitizer::new();
        assert_eq!(sanitizer.sanitize("clip 2025-2-3"), "clip");
        assert_eq!(sanitizer.sanitize("clip 2025.9"), "clip");
        assert_eq!(sanitizer.sanitize("宣传片 2025年8月19日"), "宣传片");
        assert_eq!(sanitizer.sanitize("宣传片 8月19日"), "宣传片");
        // Interior removal leaves the surrounding whitespace alone
        assert_eq!(sanitizer.sanitize("clip 12_25 final"), "clip  final");
    }

    #[test]
    fn test_boundary_punctuation_trimmed_to_fixed_point() {
        let sanitizer = NameSanitizer::new();
        assert_eq!(sanitizer.sanitize("__[clip]--"), "clip");
        assert_eq!(sanitizer.sanitize("_ - clip"), "clip");
        assert_eq!(sanitizer.sanitize("【宣传片】"), "宣传片");
        // Interior punctuation survives
        assert_eq!(sanitizer.sanitize("a-b_c"), "a-b_c");
    }

    #[test]
    fn test_empty_input_stays_empty() {
        let sanitizer = NameSanitizer::new();
        assert_eq!(sanitizer.sanitize(""), "");
        assert_eq!(sanitizer.sanitize("___"), "");
    }
}
