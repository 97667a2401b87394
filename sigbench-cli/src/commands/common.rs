use std::path::Path;

use anyhow::Context;
use sigbench::descriptor::{load_descriptors, DescriptorMap};

/// Load a descriptor fixture from disk, attaching the path to any failure.
pub fn load_fixture(path: &Path) -> anyhow::Result<DescriptorMap> {
    load_descriptors(path).with_context(|| format!("failed to load fixture: {}", path.display()))
}
