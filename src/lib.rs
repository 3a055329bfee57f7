//! # Form Validation
//!
//! Field validation helpers for the settings and onboarding forms: clearing
//! and applying the invalid-state markers on form fields, checking
//! user-supplied values before they are persisted, and reporting per-field
//! issues for a whole settings draft.
//!
//! ## Features
//! - Idempotent clearing and marking of the invalid visual/accessibility markers
//! - IANA timezone validation backed by the bundled timezone database
//! - Backend URL and font-scale input validators
//! - Draft-level validation producing per-field issues

/// Field handle abstraction and invalid-state marker operations
pub mod field;
/// Structured logging helpers for validation events
pub mod logging;
/// Settings draft model and per-field issue reporting
pub mod settings;
/// Timezone identifier validation and host-zone defaults
pub mod timezone;
/// Validators for individual form inputs
pub mod validation;
