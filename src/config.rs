use crate::constants::{
    BUILDING_MAPPING_FILE, DEFAULT_SOURCE_ROOT, DEFAULT_TARGET_ROOT, FREE_CLASSROOM_MARKER,
};
use crate::error::{Error, IoContext, Result};
use crate::models::CampusMapping;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Everything one staging run needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagerConfig {
    pub source_root: PathBuf,
    pub target_root: PathBuf,
    pub campus_mapping: CampusMapping,
    pub marker: String,
}

impl Default for StagerConfig {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from(DEFAULT_SOURCE_ROOT),
            target_root: PathBuf::from(DEFAULT_TARGET_ROOT),
            campus_mapping: CampusMapping::default(),
            marker: FREE_CLASSROOM_MARKER.to_string(),
        }
    }
}

/// Optional overrides read from a TOML file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    source_root: Option<PathBuf>,
    target_root: Option<PathBuf>,
    marker: Option<String>,
    campus_mapping: Option<BTreeMap<String, String>>,
}

/// Command-line overrides
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub source: Option<PathBuf>,
    pub target: Option<PathBuf>,
    pub help: bool,
}

pub const USAGE: &str = "Usage: kjs-stager [--config <file>] [--source <dir>] [--target <dir>]";

impl CliArgs {
    /// Parse arguments (without the program name)
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            let slot = match arg.as_str() {
                "--config" => &mut parsed.config,
                "--source" => &mut parsed.source,
                "--target" => &mut parsed.target,
                "-h" | "--help" => {
                    parsed.help = true;
                    continue;
                }
                other => return Err(Error::Usage(format!("unknown argument '{}'", other))),
            };
            let value = args
                .next()
                .ok_or_else(|| Error::Usage(format!("missing value for '{}'", arg)))?;
            *slot = Some(PathBuf::from(value));
        }

        Ok(parsed)
    }
}

impl StagerConfig {
    /// Defaults, then the config file (if any), then path flags
    pub fn load(cli: &CliArgs) -> Result<Self> {
        let mut config = StagerConfig::default();

        if let Some(ref path) = cli.config {
            config.apply_file(path)?;
        }
        if let Some(ref source) = cli.source {
            config.source_root = source.clone();
        }
        if let Some(ref target) = cli.target {
            config.target_root = target.clone();
        }

        Ok(config)
    }

    fn apply_file(&mut self, path: &Path) -> Result<()> {
        let content = fs::read_to_string(path).at(path)?;
        let file: ConfigFile = toml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(source_root) = file.source_root {
            self.source_root = source_root;
        }
        if let Some(target_root) = file.target_root {
            self.target_root = target_root;
        }
        if let Some(marker) = file.marker {
            self.marker = marker;
        }
        if let Some(campus_mapping) = file.campus_mapping {
            self.campus_mapping = CampusMapping::new(campus_mapping);
        }

        Ok(())
    }

    pub fn mapping_file(&self) -> PathBuf {
        self.target_root.join(BUILDING_MAPPING_FILE)
    }
}
