//! Built-in profiles embedded at compile time
//!
//! The JSON sources live in `profiles/` at the crate root so they can be
//! read, diffed and copied as starting points for custom profiles.

use sensewise_core::InferenceProfile;

use crate::{validation::validate_profile, ProfileError, ProfileResult};

/// Name of the profile matching the core defaults
pub const DEFAULT_PROFILE: &str = "default";

/// Names and JSON sources of all built-in profiles
pub const BUILTIN_PROFILES: &[(&str, &str)] = &[
    (DEFAULT_PROFILE, include_str!("../profiles/default.json")),
    ("indoor", include_str!("../profiles/indoor.json")),
    ("outdoor", include_str!("../profiles/outdoor.json")),
    ("greenhouse", include_str!("../profiles/greenhouse.json")),
];

/// Parse and validate a profile document
pub fn parse(name: &str, json: &str) -> ProfileResult<InferenceProfile> {
    let profile: InferenceProfile = serde_json::from_str(json)?;
    validate_profile(name, &profile)?;
    Ok(profile)
}

/// Parse a built-in profile by name
pub fn builtin(name: &str) -> ProfileResult<InferenceProfile> {
    let (_, json) = BUILTIN_PROFILES
        .iter()
        .find(|(builtin, _)| *builtin == name)
        .ok_or_else(|| ProfileError::NotFound(name.to_string()))?;

    parse(name, json)
}

/// Names of the built-in profiles
pub fn names() -> impl Iterator<Item = &'static str> {
    BUILTIN_PROFILES.iter().map(|(name, _)| *name)
}
