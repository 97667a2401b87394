//! JSON fixture persistence for descriptor mappings.
//!
//! Fixtures are pretty-printed JSON objects keyed by method name. The format is shared
//! test data: the benchmark regenerates it before measuring, and the CLI can generate,
//! list and verify the same files.

use std::{fs, path::Path};

use crate::{descriptor::DescriptorMap, Result};

/// Default file name for descriptor fixtures
pub const DEFAULT_FIXTURE: &str = "test_data.json";

/// Serialize a descriptor mapping as pretty-printed JSON at `path`.
///
/// An existing file at `path` is overwritten.
///
/// # Errors
/// Returns [`crate::Error::ParseError`] if serialization fails and
/// [`crate::Error::FileError`] if the file can not be written.
pub fn save_descriptors(descriptors: &DescriptorMap, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(descriptors)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a descriptor mapping from the JSON fixture at `path`.
///
/// # Errors
/// Returns [`crate::Error::FileError`] if the file can not be read and
/// [`crate::Error::ParseError`] if the content is not a valid fixture document.
pub fn load_descriptors(path: &Path) -> Result<DescriptorMap> {
    let json = fs::read_to_string(path)?;
    let descriptors = serde_json::from_str(&json)?;
    Ok(descriptors)
}
