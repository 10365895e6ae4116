use super::value_objects::{VersionMarker, VersionResolution};
use crate::domain::{DomainError, DomainResult};

/// Validates all VersionMarker invariants
pub fn validate_version_marker(marker: &VersionMarker) -> DomainResult<()> {
    if marker.number == 0 {
        return Err(DomainError::InvariantViolation(
            "Version marker number must be at least 1".to_string(),
        ));
    }

    if marker.matched_text.is_empty() {
        return Err(DomainError::InvariantViolation(
            "Version marker must record the matched substring".to_string(),
        ));
    }

    Ok(())
}

/// Validates the internal consistency of a resolution outcome
pub fn validate_resolution(resolution: &VersionResolution) -> DomainResult<()> {
    if resolution.new_version == 0 {
        return Err(DomainError::InvariantViolation(
            "New version must be at least 1".to_string(),
        ));
    }

    if resolution.has_existing_version {
        if resolution.latest_filename.is_none() {
            return Err(DomainError::InvariantViolation(
                "Existing version requires a latest filename".to_string(),
            ));
        }
        if resolution.new_version != resolution.detected_version.saturating_add(1) {
            return Err(DomainError::InvariantViolation(format!(
                "New version {} must succeed detected version {}",
                resolution.new_version, resolution.detected_version
            )));
        }
    } else {
        if resolution.latest_filename.is_some() {
            return Err(DomainError::InvariantViolation(
                "No existing version but a latest filename is set".to_string(),
            ));
        }
        if resolution.detected_version != 0 || resolution.new_version != 1 {
            return Err(DomainError::InvariantViolation(
                "No existing version must resolve to version 1".to_string(),
            ));
        }
    }

    if resolution.base_filename.is_empty() {
        return Err(DomainError::InvariantViolation(
            "Base filename cannot be empty".to_string(),
        ));
    }

    Ok(())
}
