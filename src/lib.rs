// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # sigbench
//!
//! [![Crates.io](https://img.shields.io/crates/v/sigbench.svg)](https://crates.io/crates/sigbench)
//! [![Documentation](https://docs.rs/sigbench/badge.svg)](https://docs.rs/sigbench)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/sigbench/blob/main/LICENSE-APACHE)
//!
//! A micro-benchmark harness for comparing string building strategies when rendering .NET style
//! method signatures. `sigbench` generates randomized method descriptors, persists them as a JSON
//! fixture, reconstructs no-op callables from that fixture through a pluggable factory seam, and
//! renders their signatures (`Name(arg_a,arg_b)`) with three observably equivalent strategies so
//! that only the string building mechanism differs between measurements.
//!
//! ## Features
//!
//! - **🎲 Reproducible fixtures** - Seedable descriptor generation with randomized names, types and arity
//! - **💾 Portable fixture format** - Pretty-printed JSON mapping method names to descriptors
//! - **🔁 Faithful reconstruction** - Rebuild callable handles from persisted descriptors through a factory seam
//! - **⚡ Three rendering strategies** - Plain concatenation and two buffered variants, byte-identical output
//! - **🔧 Cross-platform** - Works on Windows, Linux, macOS, and any Rust-supported platform
//! - **🛡️ Memory safe** - Built in Rust with comprehensive error handling
//! - **🧩 Extensible architecture** - Implement [`rebuild::CallableFactory`] to swap in your own callable backend
//!
//! ## Quick Start
//!
//! Add `sigbench` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! sigbench = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! For convenient access to the most commonly used types, import the prelude:
//!
//! ```rust
//! use sigbench::prelude::*;
//!
//! // Generate a descriptor with three randomly named parameters
//! let mut generator = DescriptorGenerator::with_seed(42);
//! let descriptor = generator.generate(3);
//!
//! assert_eq!(descriptor.method_name, "RandomMethod_3");
//! assert_eq!(descriptor.parameters.len(), 3);
//! ```
//!
//! ### Basic Usage
//!
//! ```rust,no_run
//! use sigbench::prelude::*;
//! use std::path::Path;
//!
//! // Generate descriptors with 1 to 15 parameters and persist them
//! let path = Path::new("test_data.json");
//! let mut generator = DescriptorGenerator::new();
//! generator.generate_and_save(1, 15, path)?;
//!
//! // Rebuild a callable from the fixture and render its signature
//! let handle = rebuild_from_json(path, "RandomMethod_5")?;
//! println!("{}", render_concat(&handle));
//! # Ok::<(), sigbench::Error>(())
//! ```
//!
//! ### Rendering Strategies
//!
//! All three strategies produce byte-identical output for the same handle; they differ only in
//! how the string is assembled. The benchmark sweeps all of them, and the [`render::STRATEGIES`]
//! table drives both the benchmark and the CLI `verify` command:
//!
//! ```rust
//! use sigbench::prelude::*;
//!
//! let factory = SyntheticFactory;
//! let handle = CallableBuilder::new("Sum")
//!     .parameter("lhs", PrimitiveKind::I4)
//!     .parameter("rhs", PrimitiveKind::I4)
//!     .define(&factory)?;
//!
//! assert_eq!(render_concat(&handle), "Sum(lhs,rhs)");
//! assert_eq!(render_buffered_char(&handle), render_concat(&handle));
//! assert_eq!(render_buffered_str(&handle), render_concat(&handle));
//! # Ok::<(), sigbench::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `sigbench` is organized into several key modules:
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and functions
//! - [`descriptor`] - Descriptor model, randomized generation, and the JSON fixture store
//! - [`rebuild`] - Callable handles, the factory seam, and fixture-to-callable reconstruction
//! - [`render`] - The three signature rendering strategies
//! - [`typesystem`] - The closed set of parameter type tags and their CLR primitives
//! - [`Error`] and [`Result`] - Comprehensive error handling
//!
//! ### Fixture Pipeline
//!
//! The full pipeline mirrors how reflective benchmark harnesses operate:
//!
//! 1. **Generate**: [`descriptor::DescriptorGenerator`] produces [`descriptor::MethodDescriptor`]
//!    values with randomized parameter names (`arg_` followed by 2 to 20 ASCII letters) and types
//!    drawn from the closed tag set.
//! 2. **Persist**: [`descriptor::save_descriptors`] writes the mapping as pretty-printed JSON,
//!    keyed by method name.
//! 3. **Reconstruct**: [`rebuild::rebuild_from_json`] loads the fixture, resolves every type tag
//!    to a [`typesystem::PrimitiveKind`], and asks a [`rebuild::CallableFactory`] to define a
//!    metadata-only [`rebuild::CallableHandle`] with a no-op body.
//! 4. **Render**: the [`render`] strategies turn a handle into `Name(p1,p2,...)`, or the bare
//!    name when the handle has no parameters.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`](Result) with comprehensive error information:
//!
//! ```rust,no_run
//! use sigbench::{rebuild::rebuild_from_json, Error};
//!
//! match rebuild_from_json(std::path::Path::new("test_data.json"), "RandomMethod_3") {
//!     Ok(handle) => println!("Rebuilt {}", handle.name()),
//!     Err(Error::MethodNotFound(name)) => println!("No descriptor for '{}'", name),
//!     Err(Error::UnknownTypeTag(tag)) => println!("Unsupported type tag '{}'", tag),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```
//!
//! ## Benchmarking
//!
//! The criterion benchmark regenerates a fixture, rebuilds one handle per parameter count from
//! 1 to 15, and measures every rendering strategy against every handle:
//!
//! ```bash
//! cargo bench
//! ```
//!
//! ## Testing
//!
//! The test suite covers the generator invariants, the fixture schema, and the full
//! generate, persist, rebuild, render pipeline:
//!
//! ```bash
//! cargo test
//! cargo test --release  # For performance tests
//! ```
pub(crate) mod error;

/// Shared functionality which is used in unit- and integration-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// This module provides a curated selection of the most frequently used types
/// from across the sigbench library, allowing for convenient glob imports.
///
/// # Example
///
/// ```rust
/// use sigbench::prelude::*;
///
/// // Now you have access to the most common types
/// let mut generator = DescriptorGenerator::with_seed(7);
/// let descriptors = generator.generate_range(1, 3);
/// assert_eq!(descriptors.len(), 3);
/// ```
pub mod prelude;

/// Method descriptor model, randomized generation, and the JSON fixture store.
///
/// This module owns everything that happens before a callable exists: the serde data model for
/// descriptors, the seedable random generator that fabricates them, and the load/save functions
/// for the on-disk fixture.
///
/// # Key Types
///
/// - [`descriptor::MethodDescriptor`] - A method name plus its ordered parameter list
/// - [`descriptor::ParameterDescriptor`] - A single parameter name and type tag
/// - [`descriptor::DescriptorGenerator`] - Randomized descriptor fabrication over any RNG
/// - [`descriptor::DescriptorMap`] - The name-keyed mapping persisted to disk
///
/// # Main Functions
///
/// - [`descriptor::save_descriptors`] - Serialize a mapping as pretty-printed JSON
/// - [`descriptor::load_descriptors`] - Parse a fixture back into a mapping
///
/// # Examples
///
/// ```rust
/// use sigbench::descriptor::DescriptorGenerator;
///
/// let mut generator = DescriptorGenerator::with_seed(1234);
/// let descriptors = generator.generate_range(1, 15);
///
/// assert_eq!(descriptors.len(), 15);
/// assert!(descriptors.contains_key("RandomMethod_15"));
/// ```
pub mod descriptor;

/// Callable handles, the factory seam, and descriptor-to-callable reconstruction.
///
/// Reconstruction turns persisted descriptors back into introspectable callables. The
/// [`rebuild::CallableFactory`] trait is the seam over the host's code generation capability;
/// the bundled [`rebuild::SyntheticFactory`] assembles metadata-only handles whose bodies are
/// no-ops, which is all the rendering benchmark requires.
///
/// # Key Types
///
/// - [`rebuild::CallableHandle`] - Reconstructed callable exposing name and parameters
/// - [`rebuild::CallableParam`] - A resolved parameter (name plus primitive kind)
/// - [`rebuild::CallableBuilder`] - Fluent construction of callables against any factory
/// - [`rebuild::SyntheticFactory`] - The default metadata-only factory
///
/// # Main Functions
///
/// - [`rebuild::rebuild_from_json`] - Fixture path and method name to handle, default factory
/// - [`rebuild::rebuild_with_factory`] - Same, against a caller-supplied factory
/// - [`rebuild::rebuild_descriptor`] - Reconstruct a single in-memory descriptor
///
/// # Examples
///
/// ```rust
/// use sigbench::rebuild::{CallableBuilder, SyntheticFactory};
/// use sigbench::typesystem::PrimitiveKind;
///
/// let handle = CallableBuilder::new("Parse")
///     .parameter("input", PrimitiveKind::String)
///     .define(&SyntheticFactory)?;
///
/// assert_eq!(handle.name(), "Parse");
/// assert_eq!(handle.param_count(), 1);
/// # Ok::<(), sigbench::Error>(())
/// ```
pub mod rebuild;

/// The three signature rendering strategies measured by the benchmark.
///
/// Every strategy formats a callable as `Name(p1,p2,...)`, or the bare name when the parameter
/// list is empty. The strategies are deliberately kept as distinct code paths:
///
/// - [`render::render_concat`] - Plain string concatenation
/// - [`render::render_buffered_char`] - Mutable buffer with `char` delimiters
/// - [`render::render_buffered_str`] - Mutable buffer with one-character `&str` delimiters
///
/// The [`render::STRATEGIES`] table pairs each function with its benchmark label.
///
/// # Examples
///
/// ```rust
/// use sigbench::prelude::*;
///
/// let handle = CallableBuilder::new("Main").define(&SyntheticFactory)?;
///
/// // Zero parameters renders without parentheses
/// assert_eq!(render_buffered_str(&handle), "Main");
/// # Ok::<(), sigbench::Error>(())
/// ```
pub mod render;

/// The closed set of parameter type tags and the CLR primitives behind them.
///
/// Descriptors carry parameter types as the textual tags `string`, `int`, `double` and
/// `object`. [`typesystem::PrimitiveKind`] resolves those tags into typed values and maps them
/// back to both their tag form and their CLR type names.
///
/// # Examples
///
/// ```rust
/// use sigbench::typesystem::PrimitiveKind;
///
/// let kind = PrimitiveKind::from_tag("double")?;
/// assert_eq!(kind, PrimitiveKind::R8);
/// assert_eq!(kind.clr_name(), "System.Double");
/// # Ok::<(), sigbench::Error>(())
/// ```
pub mod typesystem;

/// `sigbench` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
///
/// # Examples
///
/// ```rust,no_run
/// use sigbench::{rebuild::CallableHandle, Result};
/// use std::path::Path;
///
/// fn rebuild(path: &Path) -> Result<CallableHandle> {
///     sigbench::rebuild::rebuild_from_json(path, "RandomMethod_1")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `sigbench` Error type
///
/// The main error type for all operations in this crate. Provides detailed error information
/// for fixture I/O, descriptor parsing, and callable reconstruction.
///
/// # Examples
///
/// ```rust,no_run
/// use sigbench::{rebuild::rebuild_from_json, Error};
///
/// match rebuild_from_json(std::path::Path::new("test_data.json"), "NoSuchMethod") {
///     Ok(_) => println!("Rebuilt successfully"),
///     Err(Error::MethodNotFound(name)) => println!("Missing: {}", name),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub use error::Error;

/// Main entry point for fabricating descriptor fixtures.
///
/// See [`descriptor::DescriptorGenerator`] for seeding and generation details.
///
/// # Example
///
/// ```rust
/// use sigbench::DescriptorGenerator;
///
/// let mut generator = DescriptorGenerator::with_seed(99);
/// let descriptor = generator.generate(4);
/// assert_eq!(descriptor.parameters.len(), 4);
/// ```
pub use descriptor::DescriptorGenerator;

/// Reconstructed callable exposing the metadata the rendering strategies consume.
///
/// See [`rebuild::CallableHandle`] for introspection and invocation details.
///
/// # Example
///
/// ```rust
/// use sigbench::{rebuild::CallableBuilder, rebuild::SyntheticFactory, CallableHandle};
///
/// let handle: CallableHandle = CallableBuilder::new("Run").define(&SyntheticFactory)?;
/// handle.invoke();
/// # Ok::<(), sigbench::Error>(())
/// ```
pub use rebuild::CallableHandle;
