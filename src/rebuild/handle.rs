//! Callable handles and the parameter metadata they expose.

use crate::typesystem::PrimitiveKind;

fn noop_body() {}

/// A resolved parameter carried by a [`CallableHandle`].
///
/// Unlike [`crate::descriptor::ParameterDescriptor`], the type here is already resolved
/// to a [`PrimitiveKind`]; handles never carry raw tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallableParam {
    /// The parameter name
    pub name: String,
    /// The resolved primitive kind of the parameter
    pub kind: PrimitiveKind,
}

impl CallableParam {
    /// Create a parameter from a name and a resolved kind.
    pub fn new(name: impl Into<String>, kind: PrimitiveKind) -> Self {
        CallableParam {
            name: name.into(),
            kind,
        }
    }
}

/// A reconstructed callable.
///
/// Handles expose exactly the metadata the rendering strategies consume: the callable
/// name and the ordered parameter list. Every handle carries a no-op body so that it is
/// genuinely invocable, but nothing in the pipeline depends on the body doing anything.
///
/// # Examples
///
/// ```rust
/// use sigbench::rebuild::{CallableHandle, CallableParam};
/// use sigbench::typesystem::PrimitiveKind;
///
/// let handle = CallableHandle::new(
///     "Scale",
///     vec![CallableParam::new("factor", PrimitiveKind::R8)],
/// );
///
/// assert_eq!(handle.name(), "Scale");
/// assert_eq!(handle.param_count(), 1);
/// handle.invoke();
/// ```
#[derive(Debug, Clone)]
pub struct CallableHandle {
    name: String,
    params: Vec<CallableParam>,
    body: fn(),
}

impl CallableHandle {
    /// Create a handle from a name and a resolved parameter list.
    ///
    /// This is what [`crate::rebuild::CallableFactory`] implementations return from
    /// their definition step. The body is always the no-op.
    #[must_use]
    pub fn new(name: impl Into<String>, params: Vec<CallableParam>) -> Self {
        CallableHandle {
            name: name.into(),
            params,
            body: noop_body,
        }
    }

    /// The callable name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parameters in declaration order
    #[must_use]
    pub fn params(&self) -> &[CallableParam] {
        &self.params
    }

    /// Number of parameters
    #[must_use]
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Invoke the attached no-op body.
    pub fn invoke(&self) {
        (self.body)();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_metadata() {
        let handle = CallableHandle::new(
            "Move",
            vec![
                CallableParam::new("dx", PrimitiveKind::I4),
                CallableParam::new("dy", PrimitiveKind::I4),
            ],
        );

        assert_eq!(handle.name(), "Move");
        assert_eq!(handle.param_count(), 2);
        assert_eq!(handle.params()[0].name, "dx");
        assert_eq!(handle.params()[1].kind, PrimitiveKind::I4);
    }

    #[test]
    fn invoke_is_a_no_op() {
        let handle = CallableHandle::new("Nothing", Vec::new());
        handle.invoke();
        handle.invoke();
        assert_eq!(handle.param_count(), 0);
    }
}
