//! Calibration Profile Registry
//!
//! Named calibration tables. Profiles are validated when they are
//! registered, so anything handed out by [`ProfileRegistry::get`] is ready to
//! drop into a [`MonitorConfig`](packsense_core::MonitorConfig).

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use packsense_core::{CalibrationEntry, CalibrationTable};

use crate::LoadError;

/// Name of the built-in profile holding the deployed pack set
pub const DEFAULT_PROFILE: &str = "default";

/// A named, validated calibration table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalibrationProfile {
    /// Registry key
    pub name: String,
    /// Free-form note for operators
    pub description: String,
    /// Validated table
    pub table: CalibrationTable,
}

impl CalibrationProfile {
    /// The deployed six-pack table
    pub fn standard() -> Self {
        Self {
            name: DEFAULT_PROFILE.to_string(),
            description: "Deployed pack set, six packs".to_string(),
            table: CalibrationTable::standard(),
        }
    }
}

/// Profile as written in a profiles file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileDocument {
    /// Registry key
    pub name: String,
    /// Free-form note
    #[serde(default)]
    pub description: String,
    /// Matching tolerance in raw signal units
    pub tolerance: u8,
    /// Entries in ascending identity order
    pub entries: Vec<CalibrationEntry>,
}

impl ProfileDocument {
    /// Validate into a profile
    pub fn into_profile(self) -> Result<CalibrationProfile, LoadError> {
        let table = CalibrationTable::new(&self.entries, self.tolerance)?;
        Ok(CalibrationProfile {
            name: self.name,
            description: self.description,
            table,
        })
    }
}

impl From<&CalibrationProfile> for ProfileDocument {
    fn from(profile: &CalibrationProfile) -> Self {
        Self {
            name: profile.name.clone(),
            description: profile.description.clone(),
            tolerance: profile.table.tolerance(),
            entries: profile.table.entries().to_vec(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfilesFile {
    profiles: Vec<ProfileDocument>,
}

/// Registry of calibration profiles by name
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: BTreeMap<String, CalibrationProfile>,
}

impl ProfileRegistry {
    /// Registry holding only the built-in `default` profile
    pub fn new() -> Self {
        let mut profiles = BTreeMap::new();
        let standard = CalibrationProfile::standard();
        profiles.insert(standard.name.clone(), standard);
        Self { profiles }
    }

    /// Register a profile, rejecting duplicate names
    pub fn register(&mut self, profile: CalibrationProfile) -> Result<(), LoadError> {
        if self.profiles.contains_key(&profile.name) {
            return Err(LoadError::DuplicateProfile(profile.name));
        }
        if !profile.table.is_well_separated() {
            log::warn!(
                "profile {} has overlapping calibration windows, lowest identity wins",
                profile.name
            );
        }
        log::debug!("registered calibration profile {} ({} packs)", profile.name, profile.table.len());
        self.profiles.insert(profile.name.clone(), profile);
        Ok(())
    }

    /// Look up a profile
    pub fn get(&self, name: &str) -> Result<&CalibrationProfile, LoadError> {
        self.profiles
            .get(name)
            .ok_or_else(|| LoadError::UnknownProfile(name.to_string()))
    }

    /// Whether a profile is registered
    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// Number of registered profiles
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Always false, `default` is built in
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Register every profile in a JSON profiles document
    ///
    /// All profiles are validated before any is registered, so a bad
    /// document leaves the registry unchanged.
    pub fn extend_from_json_str(&mut self, json: &str) -> Result<usize, LoadError> {
        let file: ProfilesFile = serde_json::from_str(json)?;

        let mut parsed = Vec::with_capacity(file.profiles.len());
        for document in file.profiles {
            let profile = document.into_profile()?;
            let clash = self.contains(&profile.name)
                || parsed.iter().any(|p: &CalibrationProfile| p.name == profile.name);
            if clash {
                return Err(LoadError::DuplicateProfile(profile.name));
            }
            parsed.push(profile);
        }

        let count = parsed.len();
        for profile in parsed {
            self.register(profile)?;
        }
        Ok(count)
    }

    /// Register every profile in a JSON profiles file
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let count = self.extend_from_json_str(&json)?;
        log::info!("loaded {} calibration profiles from {}", count, path.display());
        Ok(count)
    }

    /// Serialize every registered profile as a profiles document
    pub fn to_json_string(&self) -> Result<String, LoadError> {
        let file = ProfilesFile {
            profiles: self.profiles.values().map(ProfileDocument::from).collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}
