use crate::constants::CAMPUS_MAPPING;
use crate::error::Result;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::path::PathBuf;

// ============================================================================
// Campus Mapping
// ============================================================================

/// Translation table from campus directory names to target folder slugs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampusMapping {
    entries: Vec<(String, String)>,
}

impl CampusMapping {
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Target slug for a campus, `None` if the campus is not staged
    pub fn slug_for(&self, campus: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == campus)
            .map(|(_, slug)| slug.as_str())
    }
}

impl Default for CampusMapping {
    fn default() -> Self {
        Self::new(CAMPUS_MAPPING.iter().copied())
    }
}

// ============================================================================
// Building Mapping
// ============================================================================

/// Campus name → building names, in directory enumeration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildingMapping {
    campuses: Vec<(String, Vec<String>)>,
}

impl BuildingMapping {
    pub fn insert(&mut self, campus: String, buildings: Vec<String>) {
        match self.campuses.iter_mut().find(|(name, _)| *name == campus) {
            Some((_, existing)) => *existing = buildings,
            None => self.campuses.push((campus, buildings)),
        }
    }

    pub fn get(&self, campus: &str) -> Option<&[String]> {
        self.campuses
            .iter()
            .find(|(name, _)| name == campus)
            .map(|(_, buildings)| buildings.as_slice())
    }

    pub fn campus_names(&self) -> impl Iterator<Item = &str> {
        self.campuses.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.campuses.len()
    }

    /// Pretty JSON: two-space indent, non-ASCII kept literal
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for BuildingMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.campuses.len()))?;
        for (campus, buildings) in &self.campuses {
            map.serialize_entry(campus, buildings)?;
        }
        map.end()
    }
}

// ============================================================================
// Run Summary
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    pub copied_files: usize,
    pub campuses_processed: usize,
    pub target_root: PathBuf,
    pub mapping_file: PathBuf,
    pub building_mapping: BuildingMapping,
}
