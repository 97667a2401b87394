//! # Descriptor Module
//!
//! This module provides everything that happens before a callable exists: the serde model
//! for method descriptors, the randomized generator that fabricates them, and the JSON
//! fixture store that persists them between runs.
//!
//! The module follows a generate-then-persist pattern:
//! - [`DescriptorGenerator`] fabricates [`MethodDescriptor`] values from an RNG
//! - [`save_descriptors`] / [`load_descriptors`] move a [`DescriptorMap`] to and from disk
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sigbench::descriptor::{DescriptorGenerator, load_descriptors, DEFAULT_FIXTURE};
//!
//! let mut generator = DescriptorGenerator::new();
//! generator.generate_and_save(1, 15, DEFAULT_FIXTURE.as_ref())?;
//!
//! let descriptors = load_descriptors(DEFAULT_FIXTURE.as_ref())?;
//! assert_eq!(descriptors.len(), 15);
//! # Ok::<(), sigbench::Error>(())
//! ```
use std::collections::BTreeMap;

mod generator;
mod model;
mod store;

pub use generator::*;
pub use model::*;
pub use store::*;

/// A map that holds the mapping of method name to [`MethodDescriptor`]
///
/// `BTreeMap` keeps the fixture key order deterministic, so regenerating with the same
/// seed yields a byte-identical file.
pub type DescriptorMap = BTreeMap<String, MethodDescriptor>;
