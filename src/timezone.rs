use anyhow::{anyhow, Result};
use chrono::Utc;
use chrono_tz::Tz;
use tracing::debug;

/// Zone used whenever the host zone cannot be detected.
pub const FALLBACK_TIMEZONE: &str = "UTC";

/// Returns true if the candidate names a known IANA timezone.
///
/// A missing, empty, or whitespace-only candidate is invalid without a
/// database lookup. Surrounding whitespace is ignored. Never panics; an
/// unrecognized identifier yields `false`, not an error.
pub fn is_valid_timezone(candidate: Option<&str>) -> bool {
    let normalized = candidate.unwrap_or_default().trim();
    if normalized.is_empty() {
        return false;
    }
    match normalized.parse::<Tz>() {
        Ok(_) => true,
        Err(_) => {
            debug!("TZ_CHECK: rejected identifier '{}'", normalized);
            false
        }
    }
}

/// Returns the host system's IANA timezone, or [`FALLBACK_TIMEZONE`] when
/// detection fails.
pub fn default_timezone() -> String {
    iana_time_zone::get_timezone().unwrap_or_else(|_| FALLBACK_TIMEZONE.to_string())
}

/// Trims a timezone candidate, substituting the detected default for a
/// missing or blank value.
pub fn normalize_timezone(candidate: Option<&str>) -> String {
    let trimmed = candidate.unwrap_or_default().trim();
    if trimmed.is_empty() {
        default_timezone()
    } else {
        trimmed.to_string()
    }
}

/// Returns the current wall-clock time (`HH:MM:SS`) in the given timezone.
pub fn current_time_in(timezone: &str) -> Result<String> {
    let tz: Tz = timezone
        .trim()
        .parse()
        .map_err(|_| anyhow!("Unknown timezone '{}'", timezone.trim()))?;
    Ok(Utc::now().with_timezone(&tz).format("%H:%M:%S").to_string())
}
