//! Reconstruction of callables from persisted descriptors.
//!
//! This is where the pipeline closes the loop: load the fixture, look up the requested
//! method, resolve every parameter type tag, and ask a factory to define the callable.
//! Tag resolution happens before the factory is consulted, so a descriptor with an
//! unsupported tag never produces a partially defined callable.

use std::path::Path;

use crate::{
    descriptor::{load_descriptors, MethodDescriptor},
    rebuild::{CallableBuilder, CallableFactory, CallableHandle, SyntheticFactory},
    Error, Result,
};

/// Rebuild a callable from the fixture at `path`, using the default [`SyntheticFactory`].
///
/// ## Arguments
/// * `path` - The fixture file to load
/// * `method_name` - The method to look up in the fixture
///
/// # Errors
/// Returns [`Error::FileError`] or [`Error::ParseError`] if the fixture can not be
/// loaded, [`Error::MethodNotFound`] if `method_name` has no descriptor, and
/// [`Error::UnknownTypeTag`] if any parameter carries an unsupported type tag.
pub fn rebuild_from_json(path: &Path, method_name: &str) -> Result<CallableHandle> {
    rebuild_with_factory(path, method_name, &SyntheticFactory)
}

/// Rebuild a callable from the fixture at `path` against a caller-supplied factory.
///
/// # Errors
/// Same as [`rebuild_from_json`], plus whatever the factory returns from its
/// definition step.
pub fn rebuild_with_factory(
    path: &Path,
    method_name: &str,
    factory: &dyn CallableFactory,
) -> Result<CallableHandle> {
    let descriptors = load_descriptors(path)?;
    let descriptor = descriptors
        .get(method_name)
        .ok_or_else(|| Error::MethodNotFound(method_name.to_string()))?;

    rebuild_descriptor(descriptor, factory)
}

/// Reconstruct a single in-memory descriptor into a callable.
///
/// Parameters are resolved and handed to the factory in declaration order.
///
/// # Errors
/// Returns [`Error::UnknownTypeTag`] if any parameter carries an unsupported type tag,
/// and propagates factory failures.
pub fn rebuild_descriptor(
    descriptor: &MethodDescriptor,
    factory: &dyn CallableFactory,
) -> Result<CallableHandle> {
    let mut builder = CallableBuilder::new(descriptor.method_name.as_str());
    for parameter in &descriptor.parameters {
        builder = builder.parameter(parameter.parameter_name.as_str(), parameter.kind()?);
    }

    builder.define(factory)
}
