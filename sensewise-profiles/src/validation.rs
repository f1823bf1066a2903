//! Profile Validation
//!
//! Two levels of checking:
//!
//! 1. [`validate_profile`] rejects profiles the estimators cannot run with
//!    (negative thresholds, inverted ranges, history larger than the buffer).
//!    These map straight to the core [`ConfigError`](sensewise_core::ConfigError).
//! 2. [`review_profile`] reports settings that are legal but probably not
//!    what the author meant, e.g. a motion hold shorter than a typical
//!    report interval. The registry logs these and registers the profile
//!    anyway.

use sensewise_core::{
    constants::{
        physics::{TEMPERATURE_MAX_C, TEMPERATURE_MIN_C},
        time::MS_PER_SECOND,
    },
    InferenceProfile,
};

use crate::{ProfileError, ProfileResult};

/// Longest accepted profile name
pub const MAX_NAME_LEN: usize = 32;

/// Motion hold below this is shorter than most lux report intervals
const MIN_SENSIBLE_HOLD_MS: u64 = 5 * MS_PER_SECOND;

/// Check a profile name: 1-32 chars of `[a-z0-9_-]`
pub fn validate_name(name: &str) -> ProfileResult<()> {
    let valid = !name.is_empty()
        && name.len() <= MAX_NAME_LEN
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_' || b == b'-');

    if valid {
        Ok(())
    } else {
        Err(ProfileError::InvalidName(name.to_string()))
    }
}

/// Reject profiles the estimators cannot run with
pub fn validate_profile(name: &str, profile: &InferenceProfile) -> ProfileResult<()> {
    validate_name(name)?;
    profile.validate().map_err(|source| ProfileError::Invalid {
        name: name.to_string(),
        source,
    })
}

/// Review findings for a valid profile
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Settings that are legal but suspicious
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Create new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if nothing was flagged
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Add a warning
    pub fn add_warning(&mut self, section: &'static str, issue_type: IssueType, message: String) {
        self.warnings.push(ValidationIssue { section, issue_type, message });
    }

    /// Check if any warning has the given type
    pub fn has(&self, issue_type: IssueType) -> bool {
        self.warnings.iter().any(|w| w.issue_type == issue_type)
    }
}

/// Individual review finding
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Profile section (`motion`, `climate`, ...)
    pub section: &'static str,

    /// Type of issue
    pub issue_type: IssueType,

    /// Human-readable message
    pub message: String,
}

/// Types of review findings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueType {
    /// Motion clears before the next report could confirm it
    ShortHold,

    /// A limit lies outside what the physical sensor can report
    BeyondPhysicalRange,

    /// Watering thresholds that can never produce a given advice
    UnreachableAdvice,

    /// A penalty or boost that saturates confidence in one step
    SaturatingStep,
}

/// Flag legal but suspicious settings
pub fn review_profile(profile: &InferenceProfile) -> ValidationReport {
    let mut report = ValidationReport::new();

    if profile.motion.hold_time_ms < MIN_SENSIBLE_HOLD_MS {
        report.add_warning(
            "motion",
            IssueType::ShortHold,
            format!(
                "hold time {} ms is shorter than typical lux report intervals",
                profile.motion.hold_time_ms
            ),
        );
    }

    let temperature = profile.climate.temperature;
    if temperature.min < TEMPERATURE_MIN_C || temperature.max > TEMPERATURE_MAX_C {
        report.add_warning(
            "climate",
            IssueType::BeyondPhysicalRange,
            format!(
                "temperature range [{}, {}] exceeds what consumer sensors report",
                temperature.min, temperature.max
            ),
        );
    }

    let soil = profile.soil;
    if soil.drying_threshold_pct <= soil.dry_threshold_pct {
        report.add_warning(
            "soil",
            IssueType::UnreachableAdvice,
            format!(
                "drying threshold {}% at or below dry threshold {}%: medium urgency never applies",
                soil.drying_threshold_pct, soil.dry_threshold_pct
            ),
        );
    }

    let steps = [
        ("motion", profile.motion.trigger_boost),
        ("climate", profile.climate.jump_penalty),
        ("soil", profile.soil.jump_penalty),
        ("air_quality", profile.air_quality.mismatch_penalty),
    ];
    for (section, step) in steps {
        if step >= 50.0 {
            report.add_warning(
                section,
                IssueType::SaturatingStep,
                format!("confidence step {} moves the score across half its range at once", step),
            );
        }
    }

    report
}
