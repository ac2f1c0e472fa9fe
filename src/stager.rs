use crate::config::StagerConfig;
use crate::constants::is_free_classroom_csv;
use crate::error::{IoContext, Result};
use crate::models::{BuildingMapping, StageReport};
use crate::walker::{files, subdirectories};
use std::fs::{self, File, FileTimes};
use std::io;
use std::path::Path;

// ============================================================================
// File Copy
// ============================================================================

/// Copy a file, overwriting `dst`, and carry over its timestamps and permissions
fn copy_with_metadata(src: &Path, dst: &Path) -> Result<()> {
    let metadata = fs::metadata(src).at(src)?;

    let mut reader = File::open(src).at(src)?;
    let mut writer = File::create(dst).at(dst)?;
    io::copy(&mut reader, &mut writer).at(dst)?;

    let times = FileTimes::new()
        .set_accessed(metadata.accessed().at(src)?)
        .set_modified(metadata.modified().at(src)?);
    writer.set_times(times).at(dst)?;
    drop(writer);

    // permissions last, the source may be read-only
    fs::set_permissions(dst, metadata.permissions()).at(dst)?;
    Ok(())
}

/// Copy the free-classroom exports of one building, returns how many were copied
fn stage_building(source_dir: &Path, target_dir: &Path, marker: &str) -> Result<usize> {
    fs::create_dir_all(target_dir).at(target_dir)?;

    let mut copied = 0;
    for (name, path) in files(source_dir)? {
        if !is_free_classroom_csv(&name, marker) {
            continue;
        }
        copy_with_metadata(&path, &target_dir.join(&name))?;
        copied += 1;
        println!("  Copied: {}", name);
    }

    Ok(copied)
}

// ============================================================================
// Staging Run
// ============================================================================

/// Stage the source tree into the target root and write the building mapping.
///
/// Every campus directory ends up in the building mapping; only campuses
/// present in the campus mapping have their CSV files copied. Any filesystem
/// error aborts the run, leaving whatever was already written in place.
pub fn stage(config: &StagerConfig) -> Result<StageReport> {
    fs::create_dir_all(&config.target_root).at(&config.target_root)?;

    let mut building_mapping = BuildingMapping::default();
    let mut copied_files = 0;
    let mut campuses_processed = 0;

    for (campus_name, campus_dir) in subdirectories(&config.source_root)? {
        let buildings = subdirectories(&campus_dir)?;

        if let Some(slug) = config.campus_mapping.slug_for(&campus_name) {
            let target_campus_dir = config.target_root.join(slug);
            fs::create_dir_all(&target_campus_dir).at(&target_campus_dir)?;
            println!("Processing {}...", campus_name);
            campuses_processed += 1;

            for (building_name, building_dir) in &buildings {
                copied_files += stage_building(
                    building_dir,
                    &target_campus_dir.join(building_name),
                    &config.marker,
                )?;
            }
        }

        building_mapping.insert(
            campus_name,
            buildings.into_iter().map(|(name, _)| name).collect(),
        );
    }

    let mapping_file = config.mapping_file();
    fs::write(&mapping_file, building_mapping.to_json()?).at(&mapping_file)?;
    println!("Created mapping file: {}", mapping_file.display());

    Ok(StageReport {
        copied_files,
        campuses_processed,
        target_root: config.target_root.clone(),
        mapping_file,
        building_mapping,
    })
}
