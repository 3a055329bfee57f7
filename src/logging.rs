use tracing::{debug, warn};

/// Logs a rejected field value with consistent format
pub fn log_validation_failure(field: &str, value: &str, reason: &str) {
    warn!(
        "VALIDATION_ERROR: field '{}' rejected: {} - value '{}'",
        field, reason, value
    );
}

/// Logs the outcome of a draft validation pass with consistent format
pub fn log_draft_validation(issue_count: usize) {
    match issue_count {
        0 => debug!("DRAFT_CHECK: draft accepted"),
        n => debug!("DRAFT_CHECK: draft rejected with {} issue(s)", n),
    }
}
