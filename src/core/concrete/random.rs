/*!

Random concrete values, for property tests and counterexample search.

| kind              | distribution                                                        |
|:------------------|:--------------------------------------------------------------------|
| `Bool`            | `0` or `1`                                                          |
| `BitVector`       | uniform over exactly the representable range of the width/sign      |
| `Integer`         | uniform over the 64-bit signed range                                |
| `Real`            | a random exact rational with a 64-bit numerator                     |
| `Float`/`Double`  | uniform in `[0, 1)`                                                 |
| `Char`            | a random byte, read as a character in `0..=255`                     |
| `String`          | up to `max_sequence_length` random characters                       |
| `List(e)`         | up to `max_sequence_length` random elements of kind `e`             |
| `UserSort`        | none: an error, also for lists of user sorts at any depth          |

Characters deliberately cover only `0..=255`, not all of Unicode.

## Concurrency

Generation takes its random source as an argument. [`random_cw`] uses the thread-local generator, so it is safe to call
from many threads at once. Callers that need reproducibility pass a seeded generator to [`random_cw_with`].

*/

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::One;
use rand::Rng;

use crate::{
  core::{
    concrete::{AlgReal, CWVal, CW},
    kind::{Kind, KindError}
  },
  log::trace
};

/// Parameters of the random generator.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct RandomConfig {
  /// Strings and lists get a length drawn uniformly from `0..=max_sequence_length`.
  pub max_sequence_length: usize,
}

impl Default for RandomConfig {
  fn default() -> Self {
    RandomConfig {
      max_sequence_length: 100,
    }
  }
}

/// A random concrete word of the given kind, from the thread-local generator and the default configuration.
pub fn random_cw(kind: &Kind) -> Result<CW, KindError> {
  random_cw_with(&mut rand::rng(), &RandomConfig::default(), kind)
}

/// A random concrete word of the given kind. The value is not normalized; bit-vectors are drawn from their exact
/// range, so they need no normalization.
pub fn random_cw_with<R: Rng>(rng: &mut R, config: &RandomConfig, kind: &Kind) -> Result<CW, KindError> {
  let value = random_cw_val(rng, config, kind)?;
  Ok(CW::from_parts(kind.clone(), value))
}

/// A random concrete value of the given kind.
pub fn random_cw_val<R: Rng>(rng: &mut R, config: &RandomConfig, kind: &Kind) -> Result<CWVal, KindError> {
  let value = match kind {

    Kind::Bool => CWVal::Integer(BigInt::from(rng.random_range(0u8..=1))),

    Kind::BitVector { signed, width } => CWVal::Integer(random_bit_vector(rng, *signed, *width)),

    Kind::Integer => CWVal::Integer(BigInt::from(rng.random::<i64>())),

    Kind::Real => {
      let numerator   = BigInt::from(rng.random::<i64>());
      let denominator = BigInt::from(rng.random::<u32>()) + BigInt::one();
      CWVal::AlgReal(AlgReal::Exact(BigRational::new(numerator, denominator)))
    }

    Kind::Float => CWVal::Float(rng.random::<f32>()),

    Kind::Double => CWVal::Double(rng.random::<f64>()),

    Kind::Char => CWVal::Char(random_char(rng)),

    Kind::String => {
      let length = rng.random_range(0..=config.max_sequence_length);
      trace!(4, "sampling a string of length {}", length);
      CWVal::String((0..length).map(|_| random_char(rng)).collect())
    }

    Kind::List(element_kind) => {
      // Checked before sampling the length, which may be zero.
      if !has_distribution(element_kind) {
        return Err(KindError::UnsupportedRandomGeneration(kind.clone()));
      }
      let length = rng.random_range(0..=config.max_sequence_length);
      trace!(4, "sampling a list of {} elements of kind {}", length, element_kind);
      let elements = (0..length)
          .map(|_| random_cw_val(rng, config, element_kind))
          .collect::<Result<Vec<_>, _>>()?;
      CWVal::List(elements)
    }

    Kind::UserSort(_) => return Err(KindError::UnsupportedRandomGeneration(kind.clone())),

  };

  Ok(value)
}

/// Lists have a distribution only if their elements do.
fn has_distribution(kind: &Kind) -> bool {
  match kind {
    Kind::UserSort(_)   => false,
    Kind::List(element) => has_distribution(element),
    _                   => true,
  }
}

fn random_char<R: Rng>(rng: &mut R) -> char {
  char::from(rng.random::<u8>())
}

/// Uniform over `[0, 2^w - 1]` when unsigned and `[-2^(w-1), 2^(w-1) - 1]` when signed.
fn random_bit_vector<R: Rng>(rng: &mut R, signed: bool, width: usize) -> BigInt {
  if width == 0 {
    return BigInt::from(0);
  }

  // Uniform random bits, with the excess bits of the top byte cleared.
  let mut bytes = vec![0u8; width.div_ceil(8)];
  rng.fill(bytes.as_mut_slice());
  let excess = bytes.len() * 8 - width;
  if let Some(top) = bytes.last_mut() {
    *top &= 0xFFu8 >> excess;
  }
  let unsigned = BigInt::from(BigUint::from_bytes_le(&bytes));

  if signed {
    unsigned - (BigInt::one() << (width - 1))
  } else {
    unsigned
  }
}
