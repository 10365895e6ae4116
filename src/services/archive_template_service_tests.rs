// src/services/archive_template_service_tests.rs
//
// UNIT TESTS: Archive Template Resolution Properties
//
// PURPOSE:
// - Prove that template resolution is deterministic
// - Prove that no empty segment ever reaches the archival executor
// - Exercise the chrono date bridge and both path separator conventions

#[cfg(test)]
mod template_property_tests {
    use crate::domain::archive::ArchiveDate;
    use crate::services::archive_template_service::ArchiveTemplateResolver;
    use chrono::NaiveDate;

    #[test]
    fn test_resolution_is_deterministic() {
        let resolver = ArchiveTemplateResolver::new();
        let date = ArchiveDate::new(2026, 8, 24);

        let first = resolver.resolve("YYYY年|MM月结案项目|MM_DD项目名称", "宣传片", date);
        for _ in 0..100 {
            let again = resolver.resolve("YYYY年|MM月结案项目|MM_DD项目名称", "宣传片", date);
            assert_eq!(again, first);
        }
    }

    #[test]
    fn test_no_empty_segment_survives() {
        let resolver = ArchiveTemplateResolver::new();
        let date = ArchiveDate::new(2026, 2, 28);

        let templates: Vec<&str> = vec![
            "|YYYY",
            "YYYY|",
            "YYYY||MM",
            "||",
            " | YYYY | ",
            "项目名称||项目名称",
        ];

        for template in templates {
            let plan = resolver.resolve(template, "宣传片", date);
            assert!(
                plan.segments.iter().all(|s| !s.trim().is_empty()),
                "empty segment from template {:?}: {:?}",
                template,
                plan.segments
            );
        }
    }

    #[test]
    fn test_segments_preserve_template_order() {
        let resolver = ArchiveTemplateResolver::new();
        let plan = resolver.resolve(
            "DD|MM|YYYY",
            "unused",
            ArchiveDate::new(2026, 2, 28),
        );

        assert_eq!(plan.segments, vec!["28", "2", "2026"]);
    }

    #[test]
    fn test_every_token_occurrence_is_substituted() {
        let resolver = ArchiveTemplateResolver::new();
        let plan = resolver.resolve(
            "MM_MM|项目名称_项目名称",
            "宣传片",
            ArchiveDate::new(2026, 11, 5),
        );

        assert_eq!(plan.segments, vec!["11_11", "宣传片_宣传片"]);
    }

    #[test]
    fn test_chrono_date_bridge() {
        let resolver = ArchiveTemplateResolver::new();
        let date: ArchiveDate = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap().into();

        let plan = resolver.resolve("YYYY年|MM月结案项目|MM_DD项目名称", "宣传片", date);
        assert_eq!(plan.segments, vec!["2026年", "2月结案项目", "2_28宣传片"]);
    }

    #[test]
    fn test_preview_follows_base_separator_convention() {
        let resolver = ArchiveTemplateResolver::new();
        let date = ArchiveDate::new(2026, 2, 28);

        assert_eq!(
            resolver.preview("/Volumes/archive//", "YYYY|MM", "p", date),
            "/Volumes/archive/2026/2"
        );
        assert_eq!(
            resolver.preview("D:\\归档\\", "YYYY|MM", "p", date),
            "D:\\归档\\2026\\2"
        );
    }
}
