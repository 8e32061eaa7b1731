/*!

Algebraic reals, the payload of `Real`-kinded concrete values.

A solver reports a real either exactly, as a rational approximation of an irrational value, or as a specific root of
an integer polynomial. All three are kept as reported. Equality, ordering and hashing are *structural*: two reals
are equal when they were reported the same way with the same data, never by comparing floating approximations.

*/

use std::fmt::{Display, Formatter};

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use crate::abstractions::join_iter;

/// A real number as reported by a solver.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum AlgReal {
  /// An exact rational.
  Exact(BigRational),
  /// A rational approximation of a value the solver could not report exactly.
  Approximate(BigRational),
  /// The `index`-th root of the polynomial whose terms are `(coefficient, exponent)` pairs.
  PolyRoot {
    index        : BigInt,
    polynomial   : Vec<(BigInt, u32)>,
    /// The solver's decimal approximation, if it gave one.
    approximation: Option<String>,
  },
}

impl AlgReal {
  pub fn from_integer(value: BigInt) -> AlgReal {
    AlgReal::Exact(BigRational::from_integer(value))
  }

  /// The exact rational value, if there is one.
  pub fn as_exact(&self) -> Option<&BigRational> {
    match self {
      AlgReal::Exact(value) => Some(value),
      _                     => None,
    }
  }

  pub fn is_exact(&self) -> bool {
    matches!(self, AlgReal::Exact(_))
  }
}

impl From<BigRational> for AlgReal {
  fn from(value: BigRational) -> Self {
    AlgReal::Exact(value)
  }
}

impl Display for AlgReal {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {

      AlgReal::Exact(value) => write!(f, "{}", show_rational(value)),

      AlgReal::Approximate(value) => write!(f, "{}...", show_rational(value)),

      AlgReal::PolyRoot { index, polynomial, approximation } => {
        let terms = polynomial
            .iter()
            .filter(|(coefficient, _)| !coefficient.is_zero())
            .map(|(coefficient, exponent)| show_term(coefficient, *exponent));
        let mut rendered = join_iter(terms, |_| " + ".to_string()).collect::<String>();
        if rendered.is_empty() {
          rendered.push('0');
        }
        write!(f, "root({}, {} = 0)", index, rendered)?;
        if let Some(approximation) = approximation {
          write!(f, " = {}...", approximation)?;
        }
        Ok(())
      }

    }
  }
}

fn show_term(coefficient: &BigInt, exponent: u32) -> String {
  match exponent {
    0 => coefficient.to_string(),
    1 if coefficient.is_one() => "x".to_string(),
    1 => format!("{}x", coefficient),
    _ if coefficient.is_one() => format!("x^{}", exponent),
    _ => format!("{}x^{}", coefficient, exponent),
  }
}

/// Renders a rational as a terminating decimal when it has one (`3.0`, `-0.125`) and as `n/d` otherwise.
pub(crate) fn show_rational(value: &BigRational) -> String {
  let numerator   = value.numer();
  let denominator = value.denom();

  // A reduced fraction terminates iff its denominator is 2^a * 5^b; it then needs max(a, b) decimal places.
  let two  = BigInt::from(2);
  let five = BigInt::from(5);
  let mut rest   = denominator.clone();
  let mut twos   = 0usize;
  let mut fives  = 0usize;
  while rest.is_even() {
    rest /= &two;
    twos += 1;
  }
  while (&rest % &five).is_zero() {
    rest /= &five;
    fives += 1;
  }

  if !rest.is_one() {
    return format!("{}/{}", numerator, denominator);
  }

  let places = twos.max(fives);
  let scaled = (numerator.abs() * BigInt::from(10).pow(places as u32)) / denominator;
  let digits = format!("{:0>width$}", scaled.to_string(), width = places + 1);
  let (whole, fraction) = digits.split_at(digits.len() - places);
  let fraction = if fraction.is_empty() { "0" } else { fraction };
  let sign     = if numerator.is_negative() { "-" } else { "" };

  format!("{}{}.{}", sign, whole, fraction)
}
