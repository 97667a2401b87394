//! The three signature rendering strategies measured by the benchmark.
//!
//! Each strategy formats a callable as `Name(p1,p2,...)`, or the bare name when the
//! parameter list is empty. Outputs are byte-identical across strategies; only the
//! string building mechanism differs. The paths are deliberately kept separate so that
//! the benchmark measures the mechanism instead of shared plumbing.

use crate::rebuild::CallableHandle;

/// A rendering strategy: callable metadata in, formatted signature out.
pub type RenderFn = fn(&CallableHandle) -> String;

/// All rendering strategies paired with their benchmark labels.
///
/// The benchmark sweeps this table, and the CLI `verify` command uses it to check that
/// every strategy produces identical output for every fixture entry.
pub const STRATEGIES: &[(&str, RenderFn)] = &[
    ("concat", render_concat),
    ("buffered_char", render_buffered_char),
    ("buffered_str", render_buffered_str),
];

/// Render by plain string concatenation.
///
/// Every append goes through `String` addition, growing the message piece by piece.
/// This is the baseline the buffered variants are measured against.
#[must_use]
#[allow(clippy::assign_op_pattern)]
pub fn render_concat(handle: &CallableHandle) -> String {
    let params = handle.params();

    let mut message = handle.name().to_string();
    if !params.is_empty() {
        message = message + "(";
        for param in params {
            message = message + &param.name + ",";
        }
        message.pop();
        message = message + ")";
    }

    message
}

/// Render into a mutable buffer, appending delimiters as single `char`s.
#[must_use]
pub fn render_buffered_char(handle: &CallableHandle) -> String {
    let params = handle.params();

    let mut builder = String::from(handle.name());
    if !params.is_empty() {
        builder.push('(');
        for param in params {
            builder.push_str(&param.name);
            builder.push(',');
        }
        builder.pop();
        builder.push(')');
    }

    builder
}

/// Render into a mutable buffer, appending delimiters as one-character `&str`s.
#[must_use]
#[allow(clippy::single_char_add_str)]
pub fn render_buffered_str(handle: &CallableHandle) -> String {
    let params = handle.params();

    let mut builder = String::from(handle.name());
    if !params.is_empty() {
        builder.push_str("(");
        for param in params {
            builder.push_str(&param.name);
            builder.push_str(",");
        }
        builder.pop();
        builder.push_str(")");
    }

    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        descriptor::DescriptorGenerator,
        rebuild::{rebuild_descriptor, SyntheticFactory},
        test,
        typesystem::PrimitiveKind,
    };

    #[test]
    fn formats_parameter_list() {
        let callable = test::handle(
            "Combine",
            &[("left", PrimitiveKind::String), ("right", PrimitiveKind::String)],
        );

        assert_eq!(render_concat(&callable), "Combine(left,right)");
        assert_eq!(render_buffered_char(&callable), "Combine(left,right)");
        assert_eq!(render_buffered_str(&callable), "Combine(left,right)");
    }

    #[test]
    fn single_parameter_has_no_trailing_comma() {
        let callable = test::handle("Square", &[("value", PrimitiveKind::I4)]);

        assert_eq!(render_concat(&callable), "Square(value)");
        assert_eq!(render_buffered_char(&callable), "Square(value)");
        assert_eq!(render_buffered_str(&callable), "Square(value)");
    }

    #[test]
    fn zero_parameters_render_bare_name() {
        let callable = test::handle("Main", &[]);

        assert_eq!(render_concat(&callable), "Main");
        assert_eq!(render_buffered_char(&callable), "Main");
        assert_eq!(render_buffered_str(&callable), "Main");
    }

    #[test]
    fn delimiter_count_matches_arity() {
        let callable = test::handle(
            "Four",
            &[
                ("a", PrimitiveKind::I4),
                ("b", PrimitiveKind::I4),
                ("c", PrimitiveKind::I4),
                ("d", PrimitiveKind::I4),
            ],
        );

        let rendered = render_buffered_char(&callable);
        assert_eq!(rendered.matches(',').count(), 3);
        assert!(rendered.starts_with("Four("));
        assert!(rendered.ends_with(')'));
    }

    #[test]
    fn strategies_agree_for_all_counts() {
        let mut generator = DescriptorGenerator::with_seed(2024);
        for count in 0..=15 {
            let descriptor = generator.generate(count);
            let callable = rebuild_descriptor(&descriptor, &SyntheticFactory).unwrap();

            let expected = render_concat(&callable);
            for (name, render) in STRATEGIES {
                assert_eq!(render(&callable), expected, "strategy {name} diverged");
            }
        }
    }

    #[test]
    fn strategy_table_is_complete() {
        let labels: Vec<&str> = STRATEGIES.iter().map(|(name, _)| *name).collect();
        assert_eq!(labels, vec!["concat", "buffered_char", "buffered_str"]);
    }
}
