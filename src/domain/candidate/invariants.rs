use super::entity::CandidateFile;
use crate::domain::{DomainError, DomainResult};

/// Validates all CandidateFile invariants
pub fn validate_candidate(candidate: &CandidateFile) -> DomainResult<()> {
    validate_name(candidate)?;
    Ok(())
}

/// Name must be non-empty and a bare filename, not a path
fn validate_name(candidate: &CandidateFile) -> DomainResult<()> {
    if candidate.name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Candidate name cannot be empty".to_string(),
        ));
    }

    if candidate.name.contains('/') || candidate.name.contains('\\') {
        return Err(DomainError::InvariantViolation(format!(
            "Candidate name must not contain path separators: {:?}",
            candidate.name
        )));
    }

    Ok(())
}
