use anyhow::{anyhow, Result};

use crate::timezone::is_valid_timezone;

pub const MIN_FONT_SCALE: f64 = 85.0;
pub const MAX_FONT_SCALE: f64 = 120.0;

pub fn validate_backend_url(url: &str) -> Result<()> {
    let url = url.trim();

    if url.is_empty() {
        return Err(anyhow!("Backend URL cannot be empty"));
    }

    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .ok_or_else(|| anyhow!("Backend URL must start with http:// or https://"))?;

    if rest.is_empty() {
        return Err(anyhow!("Backend URL is missing a host"));
    }

    // Check for embedded whitespace
    if rest.chars().any(char::is_whitespace) {
        return Err(anyhow!("Backend URL cannot contain spaces"));
    }

    Ok(())
}

pub fn validate_font_scale(scale: f64) -> Result<()> {
    if !scale.is_finite() {
        return Err(anyhow!("Font scale must be a number"));
    }

    if !(MIN_FONT_SCALE..=MAX_FONT_SCALE).contains(&scale) {
        return Err(anyhow!(
            "Font scale must be between {} and {}",
            MIN_FONT_SCALE,
            MAX_FONT_SCALE
        ));
    }

    Ok(())
}

pub fn validate_timezone(timezone: &str) -> Result<()> {
    if is_valid_timezone(Some(timezone)) {
        return Ok(());
    }

    let trimmed = timezone.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("Timezone cannot be empty"));
    }

    Err(anyhow!(
        "Unknown timezone '{}'. Use the Region/City format, e.g. Europe/Berlin",
        trimmed
    ))
}
