/// Default source tree: campus directories for one semester
pub const DEFAULT_SOURCE_ROOT: &str = "../kjscx/2025春季";

/// Default target: the app's rawfile csv directory
pub const DEFAULT_TARGET_ROOT: &str = "entry/src/main/resources/rawfile/csv";

/// Campus mapping from Chinese directory names to target folder slugs
pub const CAMPUS_MAPPING: &[(&str, &str)] = &[("一校区", "campus1"), ("二校区", "campus2")];

// ============================================================================
// File Selection Rules
// ============================================================================

/// Substring marking a free-classroom export
pub const FREE_CLASSROOM_MARKER: &str = "空闲教室";

/// Only files with this extension are staged
pub const CSV_EXTENSION: &str = ".csv";

/// Name of the campus → buildings summary written at the target root
pub const BUILDING_MAPPING_FILE: &str = "building_mapping.json";

/// Check if a file name is a free-classroom CSV export
pub fn is_free_classroom_csv(filename: &str, marker: &str) -> bool {
    filename.ends_with(CSV_EXTENSION) && filename.contains(marker)
}
