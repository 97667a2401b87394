use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers all possible error conditions that can occur while generating descriptor
/// fixtures, reconstructing callables from them, and rendering signatures. Each variant provides
/// specific context about the failure mode to enable appropriate error handling.
///
/// # Error Categories
///
/// ## Reconstruction Errors
/// - [`Error::MethodNotFound`] - Requested method name absent from the loaded fixture
/// - [`Error::UnknownTypeTag`] - Parameter type tag outside the supported set
///
/// ## I/O and External Errors
/// - [`Error::FileError`] - Filesystem I/O errors
/// - [`Error::ParseError`] - JSON (de)serialization errors from `serde_json`
///
/// # Examples
///
/// ```rust,no_run
/// use sigbench::{rebuild::rebuild_from_json, Error};
/// use std::path::Path;
///
/// match rebuild_from_json(Path::new("test_data.json"), "RandomMethod_3") {
///     Ok(handle) => {
///         println!("Rebuilt {} with {} parameters", handle.name(), handle.param_count());
///     }
///     Err(Error::MethodNotFound(name)) => {
///         eprintln!("No descriptor for '{}'", name);
///     }
///     Err(Error::FileError(io_err)) => {
///         eprintln!("I/O error: {}", io_err);
///     }
///     Err(e) => {
///         eprintln!("Other error: {}", e);
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    // Reconstruction Errors
    /// The requested method was not found in the descriptor fixture.
    ///
    /// This error occurs when looking up a method by name in a loaded
    /// descriptor mapping and no entry with that key exists. The associated
    /// value is the name that was requested.
    #[error("Method '{0}' was not found in the descriptor data")]
    MethodNotFound(String),

    /// A parameter type tag is not part of the supported set.
    ///
    /// Descriptors carry their parameter types as textual tags. Only the
    /// tags `string`, `int`, `double` and `object` can be resolved to a
    /// [`crate::typesystem::PrimitiveKind`]; anything else fails callable
    /// reconstruction with this error. The associated value is the
    /// offending tag.
    #[error("Unknown parameter type tag '{0}'")]
    UnknownTypeTag(String),

    /// JSON (de)serialization error.
    ///
    /// Wraps `serde_json` failures that occur while reading or writing
    /// descriptor fixtures, such as malformed documents or schema
    /// mismatches.
    #[error("{0}")]
    ParseError(#[from] serde_json::Error),

    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur during fixture file
    /// operations such as reading from disk, permission issues, or
    /// filesystem errors.
    #[error("{0}")]
    FileError(#[from] std::io::Error),
}
