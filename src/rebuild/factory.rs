//! The factory seam and the fluent callable builder.

use crate::{
    rebuild::{CallableHandle, CallableParam},
    typesystem::PrimitiveKind,
    Result,
};

/// Seam over the host's ability to define new callables at runtime.
///
/// The reconstruction pipeline never creates handles directly; it hands the fully
/// resolved name and parameter list to a factory. The bundled [`SyntheticFactory`]
/// assembles metadata-only handles, which is everything the rendering benchmark needs.
/// Embedders and tests can supply their own implementation to observe, veto, or back
/// definitions with a real code generation facility.
pub trait CallableFactory {
    /// Define a callable with the given name and ordered parameter list.
    ///
    /// # Errors
    /// Implementations may fail for backend-specific reasons; [`SyntheticFactory`]
    /// never does.
    fn define_callable(&self, name: &str, params: &[CallableParam]) -> Result<CallableHandle>;
}

/// The default factory: assembles metadata-only handles without code generation.
#[derive(Debug, Default, Clone, Copy)]
pub struct SyntheticFactory;

impl CallableFactory for SyntheticFactory {
    fn define_callable(&self, name: &str, params: &[CallableParam]) -> Result<CallableHandle> {
        Ok(CallableHandle::new(name, params.to_vec()))
    }
}

/// Fluent construction of callables against any [`CallableFactory`].
///
/// # Examples
///
/// ```rust
/// use sigbench::rebuild::{CallableBuilder, SyntheticFactory};
/// use sigbench::typesystem::PrimitiveKind;
///
/// let handle = CallableBuilder::new("Blend")
///     .parameter("base", PrimitiveKind::Object)
///     .parameter("alpha", PrimitiveKind::R8)
///     .define(&SyntheticFactory)?;
///
/// assert_eq!(handle.param_count(), 2);
/// # Ok::<(), sigbench::Error>(())
/// ```
pub struct CallableBuilder {
    name: String,
    params: Vec<CallableParam>,
}

impl CallableBuilder {
    /// Start building a callable with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        CallableBuilder {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Append a parameter; call order is declaration order.
    #[must_use]
    pub fn parameter(mut self, name: impl Into<String>, kind: PrimitiveKind) -> Self {
        self.params.push(CallableParam::new(name, kind));
        self
    }

    /// Ask `factory` to define the accumulated callable.
    ///
    /// # Errors
    /// Propagates whatever the factory returns.
    pub fn define(self, factory: &dyn CallableFactory) -> Result<CallableHandle> {
        factory.define_callable(&self.name, &self.params)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::Error;

    struct RecordingFactory {
        seen: RefCell<Vec<(String, usize)>>,
    }

    impl CallableFactory for RecordingFactory {
        fn define_callable(&self, name: &str, params: &[CallableParam]) -> Result<CallableHandle> {
            self.seen.borrow_mut().push((name.to_string(), params.len()));
            Ok(CallableHandle::new(name, params.to_vec()))
        }
    }

    struct RefusingFactory;

    impl CallableFactory for RefusingFactory {
        fn define_callable(&self, name: &str, _params: &[CallableParam]) -> Result<CallableHandle> {
            Err(Error::MethodNotFound(name.to_string()))
        }
    }

    #[test]
    fn builder_preserves_parameter_order() {
        let handle = CallableBuilder::new("Clamp")
            .parameter("value", PrimitiveKind::R8)
            .parameter("min", PrimitiveKind::R8)
            .parameter("max", PrimitiveKind::R8)
            .define(&SyntheticFactory)
            .unwrap();

        let names: Vec<&str> = handle.params().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["value", "min", "max"]);
    }

    #[test]
    fn builder_without_parameters() {
        let handle = CallableBuilder::new("Main").define(&SyntheticFactory).unwrap();
        assert_eq!(handle.name(), "Main");
        assert_eq!(handle.param_count(), 0);
    }

    #[test]
    fn custom_factory_sees_resolved_metadata() {
        let factory = RecordingFactory {
            seen: RefCell::new(Vec::new()),
        };

        CallableBuilder::new("First")
            .parameter("a", PrimitiveKind::I4)
            .define(&factory)
            .unwrap();
        CallableBuilder::new("Second").define(&factory).unwrap();

        let seen = factory.seen.borrow();
        assert_eq!(*seen, vec![("First".to_string(), 1), ("Second".to_string(), 0)]);
    }

    #[test]
    fn factory_failure_propagates() {
        let result = CallableBuilder::new("Denied").define(&RefusingFactory);
        assert!(matches!(result, Err(Error::MethodNotFound(name)) if name == "Denied"));
    }
}
