use super::entity::{ExportSettings, VersionMode};
use crate::domain::{DomainError, DomainResult};

/// Validates all ExportSettings invariants
pub fn validate_settings(settings: &ExportSettings) -> DomainResult<()> {
    if settings.export_folder_name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Export folder name cannot be empty".to_string(),
        ));
    }

    if settings.version_mode == VersionMode::Numeric && settings.version_prefix.is_empty() {
        return Err(DomainError::InvariantViolation(
            "Numeric version mode requires a prefix".to_string(),
        ));
    }

    if settings.archive_folder_template.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Archive folder template cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(validate_settings(&ExportSettings::default()).is_ok());
    }

    #[test]
    fn test_empty_prefix_fails_for_numeric_mode() {
        let mut settings = ExportSettings::default();
        settings.version_prefix = String::new();

        let result = validate_settings(&settings);
        assert!(result.is_err());

        if let Err(DomainError::InvariantViolation(msg)) = result {
            assert!(msg.contains("prefix"));
        } else {
            panic!("Expected InvariantViolation error");
        }
    }

    #[test]
    fn test_empty_prefix_allowed_for_chinese_mode() {
        let mut settings = ExportSettings::default();
        settings.version_mode = VersionMode::Chinese;
        settings.version_prefix = String::new();
        assert!(validate_settings(&settings).is_ok());
    }
}
