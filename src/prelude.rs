//! # sigbench Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and
//! functions from the sigbench library. Import this module to get quick access to the
//! essential pieces of the fixture pipeline.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all sigbench operations
pub use crate::Error;

/// The result type used throughout sigbench
pub use crate::Result;

// ================================================================================================
// Descriptor Generation and Persistence
// ================================================================================================

/// Randomized fabrication of method descriptors
pub use crate::descriptor::DescriptorGenerator;

/// The descriptor model and the name-keyed fixture mapping
pub use crate::descriptor::{DescriptorMap, MethodDescriptor, ParameterDescriptor};

/// Fixture I/O and the deterministic method naming helper
pub use crate::descriptor::{load_descriptors, method_name, save_descriptors};

/// Generation constants: name prefixes, name length bounds, fixture parameter counts
pub use crate::descriptor::{
    ARG_LEN_MAX, ARG_LEN_MIN, ARG_PREFIX, DEFAULT_FIXTURE, METHOD_PREFIX, PARAM_COUNT_END,
    PARAM_COUNT_START,
};

// ================================================================================================
// Callable Reconstruction
// ================================================================================================

/// The reconstructed callable and its parameter metadata
pub use crate::rebuild::{CallableHandle, CallableParam};

/// The factory seam, its default implementation, and the fluent builder
pub use crate::rebuild::{CallableBuilder, CallableFactory, SyntheticFactory};

/// Reconstruction entry points
pub use crate::rebuild::{rebuild_descriptor, rebuild_from_json, rebuild_with_factory};

// ================================================================================================
// Signature Rendering
// ================================================================================================

/// The three rendering strategies
pub use crate::render::{render_buffered_char, render_buffered_str, render_concat};

/// The strategy table and the strategy function type
pub use crate::render::{RenderFn, STRATEGIES};

// ================================================================================================
// Type System
// ================================================================================================

/// The closed set of parameter primitive kinds
pub use crate::typesystem::PrimitiveKind;
