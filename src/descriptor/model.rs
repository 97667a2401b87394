//! Owned descriptor model, as persisted to and loaded from fixture files.

use serde::{Deserialize, Serialize};

use crate::{typesystem::PrimitiveKind, Result};

/// A single method parameter as stored in a descriptor fixture.
///
/// The type is kept in its textual tag form (`string`, `int`, `double` or `object`) so
/// that fixtures containing unsupported tags still parse and can be listed; tag
/// resolution is deferred to callable reconstruction via [`ParameterDescriptor::kind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDescriptor {
    /// The parameter name, unique within its method
    pub parameter_name: String,
    /// The parameter type tag
    pub parameter_type: String,
}

impl ParameterDescriptor {
    /// Create a new parameter descriptor from a name and a resolved primitive kind.
    pub fn new(name: impl Into<String>, kind: PrimitiveKind) -> Self {
        ParameterDescriptor {
            parameter_name: name.into(),
            parameter_type: kind.tag().to_string(),
        }
    }

    /// Resolve the stored type tag to its [`PrimitiveKind`].
    ///
    /// # Errors
    /// Returns [`crate::Error::UnknownTypeTag`] if the stored tag is outside the
    /// supported set.
    pub fn kind(&self) -> Result<PrimitiveKind> {
        PrimitiveKind::from_tag(&self.parameter_type)
    }
}

/// A method descriptor: the method name plus its ordered parameter list.
///
/// Descriptors are the unit of persistence. A fixture file maps method names to the
/// descriptors that carry enough metadata to reconstruct an invocable stand-in for
/// the method, and parameter order in `parameters` is declaration order.
///
/// # Examples
///
/// ```rust
/// use sigbench::descriptor::{MethodDescriptor, ParameterDescriptor};
/// use sigbench::typesystem::PrimitiveKind;
///
/// let descriptor = MethodDescriptor {
///     method_name: "Lookup".to_string(),
///     parameters: vec![ParameterDescriptor::new("key", PrimitiveKind::String)],
/// };
/// assert_eq!(descriptor.parameters[0].parameter_type, "string");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDescriptor {
    /// The method name, also the key under which the descriptor is stored
    pub method_name: String,
    /// The parameters in declaration order
    pub parameters: Vec<ParameterDescriptor>,
}
