//! # Rebuild Module
//!
//! This module turns persisted descriptors back into introspectable callables. It is
//! the read side of the fixture pipeline and the home of the factory seam:
//!
//! - [`CallableHandle`] / [`CallableParam`]: the reconstructed callable and its metadata
//! - [`CallableFactory`]: the seam over the host's runtime code definition capability
//! - [`SyntheticFactory`]: the default metadata-only implementation
//! - [`CallableBuilder`]: fluent construction against any factory
//! - [`rebuild_from_json`] / [`rebuild_with_factory`] / [`rebuild_descriptor`]: the
//!   reconstruction entry points
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sigbench::rebuild::rebuild_from_json;
//! use std::path::Path;
//!
//! let handle = rebuild_from_json(Path::new("test_data.json"), "RandomMethod_3")?;
//! assert_eq!(handle.param_count(), 3);
//! # Ok::<(), sigbench::Error>(())
//! ```
mod factory;
mod handle;
mod rebuilder;

pub use factory::*;
pub use handle::*;
pub use rebuilder::*;
