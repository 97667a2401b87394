//! The closed set of parameter type tags and the CLR primitives behind them.
//!
//! Every parameter in a descriptor fixture carries its type as one of four textual tags:
//! `string`, `int`, `double` or `object`. [`PrimitiveKind`] is the typed form of that set.
//! Tags are resolved during callable reconstruction, so a fixture containing an unsupported
//! tag parses fine but fails with [`Error::UnknownTypeTag`] the moment a callable is rebuilt
//! from it.

use std::fmt;

use strum::{EnumCount, EnumIter};

use crate::{Error, Result};

/// The CLR primitive behind a descriptor parameter type tag.
///
/// The set is closed: descriptor generation only ever emits these four kinds, and
/// reconstruction rejects everything else. Variant names follow the CLI element type
/// mnemonics (`I4` for `System.Int32`, `R8` for `System.Double`).
///
/// # Examples
///
/// ```rust
/// use sigbench::typesystem::PrimitiveKind;
/// use strum::IntoEnumIterator;
///
/// for kind in PrimitiveKind::iter() {
///     assert_eq!(PrimitiveKind::from_tag(kind.tag())?, kind);
/// }
/// # Ok::<(), sigbench::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter)]
pub enum PrimitiveKind {
    /// System.String - immutable sequence of Unicode characters
    String,
    /// System.Int32 - signed 32-bit integer
    I4,
    /// System.Double - 64-bit floating point
    R8,
    /// System.Object - root of the reference type hierarchy
    Object,
}

impl PrimitiveKind {
    /// Resolve a textual descriptor tag to its primitive kind.
    ///
    /// ## Arguments
    /// * `tag` - The tag as stored in a descriptor fixture
    ///
    /// # Errors
    /// Returns [`Error::UnknownTypeTag`] if the tag is not one of `string`, `int`,
    /// `double` or `object`.
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "string" => Ok(PrimitiveKind::String),
            "int" => Ok(PrimitiveKind::I4),
            "double" => Ok(PrimitiveKind::R8),
            "object" => Ok(PrimitiveKind::Object),
            _ => Err(Error::UnknownTypeTag(tag.to_string())),
        }
    }

    /// Get the textual tag used in descriptor fixtures
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::I4 => "int",
            PrimitiveKind::R8 => "double",
            PrimitiveKind::Object => "object",
        }
    }

    /// Get the fully qualified CLR type name
    #[must_use]
    pub fn clr_name(&self) -> &'static str {
        match self {
            PrimitiveKind::String => "System.String",
            PrimitiveKind::I4 => "System.Int32",
            PrimitiveKind::R8 => "System.Double",
            PrimitiveKind::Object => "System.Object",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn from_tag_resolves_supported_set() {
        assert_eq!(
            PrimitiveKind::from_tag("string").unwrap(),
            PrimitiveKind::String
        );
        assert_eq!(PrimitiveKind::from_tag("int").unwrap(), PrimitiveKind::I4);
        assert_eq!(
            PrimitiveKind::from_tag("double").unwrap(),
            PrimitiveKind::R8
        );
        assert_eq!(
            PrimitiveKind::from_tag("object").unwrap(),
            PrimitiveKind::Object
        );
    }

    #[test]
    fn from_tag_rejects_unknown() {
        let result = PrimitiveKind::from_tag("decimal");
        assert!(matches!(result, Err(Error::UnknownTypeTag(tag)) if tag == "decimal"));
    }

    #[test]
    fn from_tag_is_case_sensitive() {
        assert!(PrimitiveKind::from_tag("String").is_err());
        assert!(PrimitiveKind::from_tag("INT").is_err());
    }

    #[test]
    fn tag_round_trips_every_kind() {
        for kind in PrimitiveKind::iter() {
            assert_eq!(PrimitiveKind::from_tag(kind.tag()).unwrap(), kind);
        }
    }

    #[test]
    fn clr_names() {
        assert_eq!(PrimitiveKind::String.clr_name(), "System.String");
        assert_eq!(PrimitiveKind::I4.clr_name(), "System.Int32");
        assert_eq!(PrimitiveKind::R8.clr_name(), "System.Double");
        assert_eq!(PrimitiveKind::Object.clr_name(), "System.Object");
    }

    #[test]
    fn display_matches_tag() {
        assert_eq!(PrimitiveKind::I4.to_string(), "int");
        assert_eq!(format!("{}", PrimitiveKind::Object), "object");
    }

    #[test]
    fn kind_count_covers_tag_set() {
        assert_eq!(PrimitiveKind::COUNT, 4);
    }
}
