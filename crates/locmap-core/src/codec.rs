use crate::error::{LocmapError, Result};
use crate::models::LocationMap;
use std::path::Path;

/// Renders locations as pretty JSON with 2-space indentation
pub fn to_json_pretty(locations: &LocationMap) -> serde_json::Result<String> {
    serde_json::to_string_pretty(locations)
}

/// Parses a locations JSON document
pub fn from_json_str(content: &str) -> serde_json::Result<LocationMap> {
    serde_json::from_str(content)
}

/// Loads a locations JSON file written by the extractor
pub fn read_locations(path: &Path) -> Result<LocationMap> {
    let content = std::fs::read_to_string(path).map_err(|source| LocmapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_json_str(&content).map_err(|source| LocmapError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `content` to `path`, creating parent directories and replacing any previous file
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    let io_err = |source| LocmapError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, content).map_err(io_err)
}
