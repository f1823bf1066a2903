//! Profile Registry
//!
//! Thread-safe store of validated profiles, keyed by name. The device layer
//! looks a profile up once per device when it creates the estimators; the
//! registry itself never touches a running estimator.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

use sensewise_core::InferenceProfile;

use crate::{
    builtin::{self, BUILTIN_PROFILES},
    validation::{review_profile, validate_profile},
    ProfileError, ProfileResult,
};

/// Thread-safe registry of named profiles
pub struct ProfileRegistry {
    profiles: RwLock<HashMap<String, Arc<InferenceProfile>>>,
}

impl ProfileRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            profiles: RwLock::new(HashMap::new()),
        }
    }

    /// Create a registry holding the built-in profiles
    pub fn with_builtins() -> ProfileResult<Self> {
        let registry = Self::new();
        registry.load_builtins()?;
        Ok(registry)
    }

    /// Register every built-in profile, replacing same-named entries
    pub fn load_builtins(&self) -> ProfileResult<()> {
        for (name, json) in BUILTIN_PROFILES {
            self.load_str(name, json)?;
        }
        Ok(())
    }

    /// Register a profile after validation
    ///
    /// Replaces an existing profile of the same name. Estimators built from
    /// the old profile keep their configuration.
    pub fn register(&self, name: &str, profile: InferenceProfile) -> ProfileResult<()> {
        validate_profile(name, &profile)?;

        for issue in review_profile(&profile).warnings {
            log::warn!("[PROFILE] {}.{}: {}", name, issue.section, issue.message);
        }

        let replaced = self
            .profiles
            .write()
            .map_err(|_| ProfileError::LockPoisoned)?
            .insert(name.to_string(), Arc::new(profile))
            .is_some();

        if replaced {
            log::info!("[PROFILE] replaced profile {}", name);
        } else {
            log::debug!("[PROFILE] registered profile {}", name);
        }

        Ok(())
    }

    /// Parse and register a JSON profile document
    pub fn load_str(&self, name: &str, json: &str) -> ProfileResult<()> {
        let profile = builtin::parse(name, json)?;
        self.register(name, profile)
    }

    /// Load a JSON profile file, named after the file stem
    ///
    /// Returns the registered name.
    pub fn load_file(&self, path: impl AsRef<Path>) -> ProfileResult<String> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| ProfileError::InvalidName(path.display().to_string()))?
            .to_string();

        let json = std::fs::read_to_string(path)?;
        self.load_str(&name, &json)?;
        Ok(name)
    }

    /// Load every `*.json` file in a directory
    ///
    /// Returns the registered names, sorted.
    pub fn load_dir(&self, dir: impl AsRef<Path>) -> ProfileResult<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                names.push(self.load_file(&path)?);
            }
        }
        names.sort();
        Ok(names)
    }

    /// Get a profile by name
    pub fn get(&self, name: &str) -> ProfileResult<Arc<InferenceProfile>> {
        self.profiles
            .read()
            .map_err(|_| ProfileError::LockPoisoned)?
            .get(name)
            .cloned()
            .ok_or_else(|| ProfileError::NotFound(name.to_string()))
    }

    /// Get a profile, falling back to the core defaults
    pub fn get_or_default(&self, name: &str) -> Arc<InferenceProfile> {
        self.get(name).unwrap_or_else(|e| {
            log::debug!("[PROFILE] {} - using defaults", e);
            Arc::new(InferenceProfile::default())
        })
    }

    /// Remove a profile
    pub fn remove(&self, name: &str) -> ProfileResult<Arc<InferenceProfile>> {
        self.profiles
            .write()
            .map_err(|_| ProfileError::LockPoisoned)?
            .remove(name)
            .ok_or_else(|| ProfileError::NotFound(name.to_string()))
    }

    /// Registered names, sorted
    pub fn names(&self) -> ProfileResult<Vec<String>> {
        let profiles = self.profiles.read().map_err(|_| ProfileError::LockPoisoned)?;
        let mut names: Vec<String> = profiles.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    /// Check if a profile is registered
    pub fn contains(&self, name: &str) -> bool {
        self.profiles
            .read()
            .map(|profiles| profiles.contains_key(name))
            .unwrap_or(false)
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static::lazy_static! {
    /// Global profile registry with the built-in profiles loaded
    pub static ref GLOBAL_REGISTRY: ProfileRegistry = {
        let registry = ProfileRegistry::new();
        if let Err(e) = registry.load_builtins() {
            log::error!("[PROFILE] built-in profiles failed to load: {}", e);
        }
        registry
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::MAX_NAME_LEN;

    #[test]
    fn builtins_are_registered() {
        let registry = ProfileRegistry::with_builtins().unwrap();
        assert_eq!(
            registry.names().unwrap(),
            vec!["default", "greenhouse", "indoor", "outdoor"]
        );
    }

    #[test]
    fn register_and_retrieve() {
        let registry = ProfileRegistry::new();
        let mut profile = InferenceProfile::default();
        profile.battery = profile.battery.with_thresholds(30.0, 15.0);

        registry.register("coin_cell", profile).unwrap();

        let retrieved = registry.get("coin_cell").unwrap();
        assert_eq!(retrieved.battery.low_threshold, 30.0);
        assert!(registry.contains("coin_cell"));
    }

    #[test]
    fn invalid_profile_is_not_registered() {
        let registry = ProfileRegistry::new();
        let mut profile = InferenceProfile::default();
        profile.battery = profile.battery.with_thresholds(10.0, 20.0);

        assert!(matches!(
            registry.register("inverted", profile),
            Err(ProfileError::Invalid { .. })
        ));
        assert!(!registry.contains("inverted"));

        let long = "p".repeat(MAX_NAME_LEN + 1);
        assert!(matches!(
            registry.register(&long, InferenceProfile::default()),
            Err(ProfileError::InvalidName(_))
        ));
    }

    #[test]
    fn calibration_floor_above_ceiling_rejected() {
        let registry = ProfileRegistry::new();
        let result = registry.load_str("overtrusting", r#"{ "motion": { "calibration_floor": 150.0 } }"#);

        assert!(matches!(result, Err(ProfileError::Invalid { .. })));
        assert!(!registry.contains("overtrusting"));
    }

    #[test]
    fn replace_keeps_previous_handles() {
        let registry = ProfileRegistry::new();
        registry.load_str("site", r#"{ "motion": { "hold_time_ms": 10000 } }"#).unwrap();
        let before = registry.get("site").unwrap();

        registry.load_str("site", r#"{ "motion": { "hold_time_ms": 90000 } }"#).unwrap();

        assert_eq!(before.motion.hold_time_ms, 10_000);
        assert_eq!(registry.get("site").unwrap().motion.hold_time_ms, 90_000);
    }

    #[test]
    fn missing_profile() {
        let registry = ProfileRegistry::new();
        assert!(matches!(registry.get("attic"), Err(ProfileError::NotFound(_))));
        assert_eq!(*registry.get_or_default("attic"), InferenceProfile::default());
        assert!(registry.remove("attic").is_err());
    }

    #[test]
    fn global_registry_has_builtins() {
        assert!(GLOBAL_REGISTRY.contains("greenhouse"));
        assert!(GLOBAL_REGISTRY.get("outdoor").is_ok());
    }

    #[test]
    fn concurrent_readers() {
        let registry = Arc::new(ProfileRegistry::with_builtins().unwrap());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        assert!(registry.get("indoor").is_ok());
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
