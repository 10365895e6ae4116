// src/services/archive_template_service.rs
//
// Archive Template Service - Path Template Resolution
//
// Resolves a user-supplied folder-hierarchy template into an ordered list of
// folder-segment names. The archival executor creates the folders; this
// service only computes their names.
//
// Supported variables:
//   YYYY     → four-digit year
//   MM       → month, no zero padding
//   DD       → day, no zero padding
//   项目名称  → project name
//
// The level separator | marks the next nested subfolder.
//
// Example:
//   template "YYYY年|MM月结案项目|MM_DD项目名称", project "宣传片", 2026-02-28
//   → ["2026年", "2月结案项目", "2_28宣传片"]
//
// No escaping mechanism exists: the project-name token is substituted first,
// so a project name that itself contains YYYY/MM/DD gets date-substituted
// too. That is a documented limitation, not a defect.

use log::debug;

use crate::domain::archive::{ArchiveDate, ArchivePlan};

const PROJECT_NAME_TOKEN: &str = "项目名称";
const YEAR_TOKEN: &str = "YYYY";
const MONTH_TOKEN: &str = "MM";
const DAY_TOKEN: &str = "DD";
const LEVEL_SEPARATOR: char = '|';

#[derive(Default)]
pub struct ArchiveTemplateResolver;

impl ArchiveTemplateResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a template into folder segments.
    /// Substitution is plain text replacement of every token occurrence;
    /// segments are trimmed and empty ones dropped, so a leading, trailing,
    /// or doubled separator never yields an empty path component. An empty
    /// template resolves to an empty plan.
    pub fn resolve(&self, template: &str, project_name: &str, date: ArchiveDate) -> ArchivePlan {
        if template.is_empty() {
            return ArchivePlan::empty();
        }

        let substituted = template
            .replace(PROJECT_NAME_TOKEN, project_name)
            .replace(YEAR_TOKEN, &date.year.to_string())
            .replace(MONTH_TOKEN, &date.month.to_string())
            .replace(DAY_TOKEN, &date.day.to_string());

        let segments: Vec<String> = substituted
            .split(LEVEL_SEPARATOR)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(String::from)
            .collect();

        debug!(
            "[archive_template_service] {:?} -> {:?}",
            template, segments
        );

        ArchivePlan::new(segments)
    }

    /// Display-only preview of the full archive path under a base folder.
    /// Returns an empty string when either the base path or the template is
    /// empty; no folder is created.
    pub fn preview(
        &self,
        base_path: &str,
        template: &str,
        project_name: &str,
        date: ArchiveDate,
    ) -> String {
        if base_path.is_empty() || template.is_empty() {
            return String::new();
        }

        self.resolve(template, project_name, date)
            .preview_under(base_path)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_documented_example() {
        let resolver = ArchiveTemplateResolver::new();
        let plan = resolver.resolve(
            "YYYY年|MM月结案项目|MM_DD项目名称",
            "宣传片",
            ArchiveDate::new(2026, 2, 28),
        );

        assert_eq!(plan.segments, vec!["2026年", "2月结案项目", "2_28宣传片"]);
    }

    #[test]
    fn test_no_zero_padding() {
        let resolver = ArchiveTemplateResolver::new();
        let plan = resolver.resolve("YYYY|MM|DD", "p", ArchiveDate::new(2026, 2, 3));

        assert_eq!(plan.segments, vec!["2026", "2", "3"]);
    }

    #[test]
    fn test_empty_segments_dropped() {
        let resolver = ArchiveTemplateResolver::new();
        let date = ArchiveDate::new(2026, 2, 28);

        let plan = resolver.resolve("|YYYY||项目名称|", "宣传片", date);
        assert_eq!(plan.segments, vec!["2026", "宣传片"]);

        let plan = resolver.resolve("  |  ", "宣传片", date);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_empty_template_resolves_to_empty_plan() {
        let resolver = ArchiveTemplateResolver::new();
        let plan = resolver.resolve("", "宣传片", ArchiveDate::new(2026, 2, 28));
        assert!(plan.is_empty());
    }

    #[test]
    fn test_project_name_containing_token_is_substituted() {
        let resolver = ArchiveTemplateResolver::new();
        let plan = resolver.resolve("项目名称", "MM月刊", ArchiveDate::new(2026, 2, 28));

        // Documented limitation: no escaping exists
        assert_eq!(plan.segments, vec!["2月刊"]);
    }

    #[test]
    fn test_preview_joins_under_base() {
        let resolver = ArchiveTemplateResolver::new();
        let date = ArchiveDate::new(2026, 2, 28);

        assert_eq!(
            resolver.preview("/Volumes/archive", "YYYY|项目名称", "宣传片", date),
            "/Volumes/archive/2026/宣传片"
        );
        assert_eq!(resolver.preview("", "YYYY", "宣传片", date), "");
        assert_eq!(resolver.preview("/Volumes/archive", "", "宣传片", date), "");
    }
}
