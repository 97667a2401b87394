//! Randomized method descriptor generation.
//!
//! The generator fabricates descriptors whose shape mirrors what a reflective benchmark
//! would encounter in the wild: parameter names of uneven length, types drawn from the
//! closed tag set, and one method per parameter count. All randomness flows through a
//! caller-visible RNG so that fixtures are reproducible from a seed.

use std::path::Path;

use rand::{rngs::StdRng, Rng, SeedableRng};
use strum::EnumCount;

use crate::{
    descriptor::{save_descriptors, DescriptorMap, MethodDescriptor, ParameterDescriptor},
    typesystem::PrimitiveKind,
    Result,
};

/// Alphabet from which random parameter name characters are drawn (52 ASCII letters)
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Prefix of every generated method name; the parameter count follows after an underscore
pub const METHOD_PREFIX: &str = "RandomMethod";
/// Prefix of every generated parameter name
pub const ARG_PREFIX: &str = "arg_";
/// Minimum number of random characters appended to [`ARG_PREFIX`] (inclusive)
pub const ARG_LEN_MIN: usize = 2;
/// Maximum number of random characters appended to [`ARG_PREFIX`] (inclusive)
pub const ARG_LEN_MAX: usize = 20;
/// First parameter count covered by a full fixture (inclusive)
pub const PARAM_COUNT_START: usize = 1;
/// Last parameter count covered by a full fixture (inclusive)
pub const PARAM_COUNT_END: usize = 15;

/// The deterministic method name for a given parameter count.
///
/// Generated methods are named `RandomMethod_<count>`, which is also the key under
/// which their descriptor is stored in the fixture.
#[must_use]
pub fn method_name(parameter_count: usize) -> String {
    format!("{METHOD_PREFIX}_{parameter_count}")
}

/// Randomized fabrication of [`MethodDescriptor`] values.
///
/// The generator owns its RNG. [`DescriptorGenerator::new`] seeds from OS entropy for
/// one-off fixtures, [`DescriptorGenerator::with_seed`] produces reproducible fixtures,
/// and [`DescriptorGenerator::from_rng`] accepts any [`Rng`] for callers that manage
/// their own randomness.
///
/// # Examples
///
/// ```rust
/// use sigbench::descriptor::DescriptorGenerator;
///
/// let mut generator = DescriptorGenerator::with_seed(42);
/// let descriptor = generator.generate(5);
///
/// assert_eq!(descriptor.method_name, "RandomMethod_5");
/// for parameter in &descriptor.parameters {
///     assert!(parameter.parameter_name.starts_with("arg_"));
/// }
/// ```
#[derive(Debug)]
pub struct DescriptorGenerator<R: Rng = StdRng> {
    rng: R,
}

impl DescriptorGenerator<StdRng> {
    /// Create a generator seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        DescriptorGenerator {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed, for reproducible fixtures.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        DescriptorGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for DescriptorGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> DescriptorGenerator<R> {
    /// Create a generator over a caller-supplied RNG.
    pub fn from_rng(rng: R) -> Self {
        DescriptorGenerator { rng }
    }

    /// Generate a descriptor with exactly `parameter_count` parameters.
    ///
    /// Each parameter gets a fresh random name (`arg_` plus 2 to 20 ASCII letters) and
    /// a type tag drawn uniformly from the closed set. A count of zero yields an empty
    /// parameter list, which the rendering strategies format as the bare method name.
    pub fn generate(&mut self, parameter_count: usize) -> MethodDescriptor {
        let mut parameters = Vec::with_capacity(parameter_count);
        for _ in 0..parameter_count {
            let name_len = self.rng.gen_range(ARG_LEN_MIN..=ARG_LEN_MAX);
            parameters.push(ParameterDescriptor::new(
                self.random_parameter_name(name_len),
                self.random_kind(),
            ));
        }

        MethodDescriptor {
            method_name: method_name(parameter_count),
            parameters,
        }
    }

    /// Generate one descriptor per parameter count in `start..=end`, keyed by name.
    ///
    /// Both bounds are inclusive; when `start > end` the result is empty.
    pub fn generate_range(&mut self, start: usize, end: usize) -> DescriptorMap {
        let mut descriptors = DescriptorMap::new();
        for count in start..=end {
            let descriptor = self.generate(count);
            descriptors.insert(descriptor.method_name.clone(), descriptor);
        }
        descriptors
    }

    /// Generate descriptors for `start..=end` and persist them as a JSON fixture.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the fixture can not be written.
    pub fn generate_and_save(&mut self, start: usize, end: usize, path: &Path) -> Result<()> {
        let descriptors = self.generate_range(start, end);
        save_descriptors(&descriptors, path)
    }

    fn random_parameter_name(&mut self, random_len: usize) -> String {
        let mut name = String::with_capacity(ARG_PREFIX.len() + random_len);
        name.push_str(ARG_PREFIX);
        for _ in 0..random_len {
            let index = self.rng.gen_range(0..ALPHABET.len());
            name.push(ALPHABET[index] as char);
        }
        name
    }

    fn random_kind(&mut self) -> PrimitiveKind {
        match self.rng.gen_range(0..PrimitiveKind::COUNT) {
            0 => PrimitiveKind::String,
            1 => PrimitiveKind::I4,
            2 => PrimitiveKind::R8,
            _ => PrimitiveKind::Object,
        }
    }
}
