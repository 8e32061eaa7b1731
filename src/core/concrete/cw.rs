/*!

A concrete word (`CW`) is a [`Kind`] paired with a [`CWVal`] of the matching family:

| kind                              | value            |
|:----------------------------------|:-----------------|
| `Bool`, `BitVector`, `Integer`    | `Integer`        |
| `Real`                            | `AlgReal`        |
| `Float`                           | `Float`          |
| `Double`                          | `Double`         |
| `Char`                            | `Char`           |
| `String`                          | `String`         |
| `List(e)`                         | `List` of `e`s   |
| `UserSort`                        | `UserSort`       |

Constructing a `CW` whose value does not match its kind is a logic error in the caller. Nothing here checks it.

## Normalization

Fixed-width integers are kept in a canonical representative of their residue class. An unsigned `w`-bit word holds
`v mod 2^w`; a signed one holds the two's-complement reading of the same bits, in `[-2^(w-1), 2^(w-1) - 1]`; a `Bool`
holds its low bit. Every other kind is left alone. [`CW::new`] normalizes, and so does every map in
[`lift`](crate::core::concrete::lift).

*/

use std::{
  cmp::Ordering,
  fmt::{Display, Formatter}
};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::{
  abstractions::join_string,
  core::{
    concrete::{AlgReal, CWVal},
    format::{FormatStyle, Formattable},
    kind::{
      has_kind::HasKind,
      Kind,
      KindError
    }
  }
};

/// A constant of a given kind.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct CW {
  pub kind : Kind,
  pub value: CWVal,
}

impl CW {
  /// Creates a normalized concrete word.
  pub fn new(kind: Kind, value: CWVal) -> CW {
    CW { kind, value }.normalized()
  }

  /// Creates a concrete word exactly as given, without normalizing.
  pub fn from_parts(kind: Kind, value: CWVal) -> CW {
    CW { kind, value }
  }

  /// Creates a concrete word of `kind` from an integral literal. Only numeric kinds have integral literals.
  pub fn constant_of(kind: Kind, value: impl Into<BigInt>) -> Result<CW, KindError> {
    let value: BigInt = value.into();
    let cw_val = match &kind {

      Kind::Bool
      | Kind::BitVector { .. }
      | Kind::Integer => CWVal::Integer(value),

      Kind::Real => CWVal::AlgReal(AlgReal::from_integer(value)),

      Kind::Float => {
        let overflow = if value.is_negative() { f32::NEG_INFINITY } else { f32::INFINITY };
        CWVal::Float(value.to_f32().unwrap_or(overflow))
      }

      Kind::Double => {
        let overflow = if value.is_negative() { f64::NEG_INFINITY } else { f64::INFINITY };
        CWVal::Double(value.to_f64().unwrap_or(overflow))
      }

      Kind::Char
      | Kind::String
      | Kind::List(_)
      | Kind::UserSort(_) => {
        return Err(
          KindError::ConstructionError(
            format!("kind {} cannot be constructed from an integral literal", kind)
          )
        );
      }

    };

    Ok(CW::new(kind, cw_val))
  }

  /// Reduces an integer payload into the canonical range of its kind. Idempotent.
  pub fn normalized(self) -> CW {
    let CW { kind, value } = self;
    let value = match (&kind, value) {

      (Kind::BitVector { signed, width }, CWVal::Integer(v)) => CWVal::Integer(normalize_bit_vector(v, *signed, *width)),

      (Kind::Bool, CWVal::Integer(v)) => CWVal::Integer(v.mod_floor(&BigInt::from(2))),

      (_, value) => value,

    };
    CW { kind, value }
  }

  /// Is the payload already in canonical form?
  pub fn is_normalized(&self) -> bool {
    self.clone().normalized() == *self
  }

  /// Do the two words have structurally equal kinds?
  pub fn same_kind(&self, other: &CW) -> bool {
    self.kind == other.kind
  }

  /// Interprets an integer payload as a truth value: anything nonzero is true.
  pub fn to_bool(&self) -> Result<bool, KindError> {
    match &self.value {
      CWVal::Integer(v) => Ok(!v.is_zero()),
      _ => Err(
        KindError::UnsupportedOperation {
          operation: "conversion to bool",
          kind     : self.kind.clone(),
        }
      )
    }
  }
}

/// The `Bool` word `1`.
pub fn cw_true() -> CW {
  CW::from_parts(Kind::Bool, CWVal::Integer(BigInt::one()))
}

/// The `Bool` word `0`.
pub fn cw_false() -> CW {
  CW::from_parts(Kind::Bool, CWVal::Integer(BigInt::zero()))
}

/// Two's-complement style reduction of `value` to `width` bits.
pub(crate) fn normalize_bit_vector(value: BigInt, signed: bool, width: usize) -> BigInt {
  if width == 0 {
    return BigInt::zero();
  }

  if !signed {
    return value.mod_floor(&(BigInt::one() << width));
  }

  // Halves of the ring alternate between the non-negative and negative representatives, so the parity of the
  // quotient by 2^(w-1) selects which one `value` lands on.
  let half     = BigInt::one() << (width - 1);
  let (quotient, remainder) = value.div_mod_floor(&half);
  if quotient.is_even() {
    remainder
  } else {
    remainder - half
  }
}

impl HasKind for CW {
  fn kind(&self) -> Kind {
    self.kind.clone()
  }
}

/// Orders by value first; the kind only breaks ties between equal values of different kinds, which keeps `Ord`
/// consistent with `Eq`.
impl Ord for CW {
  fn cmp(&self, other: &Self) -> Ordering {
    self.value.cmp(&other.value).then_with(|| self.kind.cmp(&other.kind))
  }
}

impl PartialOrd for CW {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

/// Renders `value` as a literal of `kind`.
pub(crate) fn show_value(kind: &Kind, value: &CWVal) -> String {
  match value {

    CWVal::Integer(v) if matches!(kind, Kind::Bool) => {
      if v.is_zero() { "False".to_string() } else { "True".to_string() }
    }

    CWVal::Integer(v) => v.to_string(),

    CWVal::AlgReal(v) => v.to_string(),

    CWVal::Float(v)  => show_float(v.is_nan(), v.is_infinite(), v.is_sign_negative(), format!("{:?}", v)),
    CWVal::Double(v) => show_float(v.is_nan(), v.is_infinite(), v.is_sign_negative(), format!("{:?}", v)),

    CWVal::Char(c)   => format!("{:?}", c),

    CWVal::String(s) => format!("{:?}", s),

    CWVal::List(elements) => {
      let element_kind = match kind {
        Kind::List(element_kind) => element_kind.as_ref(),
        other                    => other,
      };
      let rendered = elements.iter().map(|element| show_value(element_kind, element));
      format!("[{}]", join_string(rendered, ", "))
    }

    CWVal::UserSort(_, name) => name.clone(),

  }
}

fn show_float(is_nan: bool, is_infinite: bool, is_negative: bool, finite: String) -> String {
  match (is_nan, is_infinite, is_negative) {
    (true, _, _)        => "NaN".to_string(),
    (false, true, true) => "-Infinity".to_string(),
    (false, true, _)    => "Infinity".to_string(),
    _                   => finite,
  }
}

impl Formattable for CW {
  fn repr(&self, style: FormatStyle) -> String {
    let value = show_value(&self.kind, &self.value);
    match style {
      FormatStyle::Default => value,
      FormatStyle::Typed   => format!("{} :: {}", value, self.kind.base_name()),
    }
  }
}

impl Display for CW {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.repr(FormatStyle::Default))
  }
}

/// Renders a concrete word, optionally suffixed with ` :: <kind>`.
pub fn show_cw(show_kind: bool, cw: &CW) -> String {
  cw.repr(FormatStyle::from_show_kind(show_kind))
}


#[cfg(test)]
mod tests {
  use num_rational::BigRational;
  use super::*;

  fn int(kind: Kind, v: i64) -> CW {
    CW::new(kind, CWVal::Integer(BigInt::from(v)))
  }

  fn payload(cw: &CW) -> BigInt {
    match &cw.value {
      CWVal::Integer(v) => v.clone(),
      other             => panic!("expected an integer payload, got {:?}", other),
    }
  }

  #[test]
  fn signed_normalization() {
    assert_eq!(payload(&int(Kind::int(8), 200)), BigInt::from(-56));
    assert_eq!(payload(&int(Kind::int(8), 127)), BigInt::from(127));
    assert_eq!(payload(&int(Kind::int(8), 128)), BigInt::from(-128));
    assert_eq!(payload(&int(Kind::int(8), -129)), BigInt::from(127));
    assert_eq!(payload(&int(Kind::int(8), -1)), BigInt::from(-1));
    assert_eq!(payload(&int(Kind::int(1), 1)), BigInt::from(-1));
  }

  #[test]
  fn unsigned_normalization() {
    assert_eq!(payload(&int(Kind::word(8), 256)), BigInt::from(0));
    assert_eq!(payload(&int(Kind::word(8), -1)), BigInt::from(255));
    assert_eq!(payload(&int(Kind::word(16), 70_000)), BigInt::from(70_000 - 65_536));
    assert_eq!(payload(&int(Kind::word(0), 5)), BigInt::from(0));
  }

  #[test]
  fn bool_normalization_keeps_the_low_bit() {
    assert_eq!(payload(&int(Kind::Bool, 2)), BigInt::from(0));
    assert_eq!(payload(&int(Kind::Bool, 3)), BigInt::from(1));
    assert_eq!(payload(&int(Kind::Bool, -1)), BigInt::from(1));
  }

  #[test]
  fn other_kinds_are_untouched() {
    let big = CW::from_parts(Kind::Integer, CWVal::Integer(BigInt::from(1) << 200));
    assert_eq!(big.clone().normalized(), big);
    let text = CW::from_parts(Kind::String, CWVal::String("abc".to_string()));
    assert!(text.is_normalized());
    assert!(!CW::from_parts(Kind::word(4), CWVal::Integer(BigInt::from(16))).is_normalized());
  }

  #[test]
  fn constants_of_numeric_kinds() {
    assert_eq!(CW::constant_of(Kind::word(8), 300).unwrap(), int(Kind::word(8), 44));
    assert_eq!(CW::constant_of(Kind::Bool, 1).unwrap(), cw_true());
    assert_eq!(
      CW::constant_of(Kind::Real, 3).unwrap().value,
      CWVal::AlgReal(AlgReal::Exact(BigRational::from_integer(BigInt::from(3))))
    );
    assert_eq!(CW::constant_of(Kind::Float, -2).unwrap().value, CWVal::Float(-2.0));
    assert_eq!(CW::constant_of(Kind::Double, 7).unwrap().value, CWVal::Double(7.0));
  }

  #[test]
  fn constants_of_non_numeric_kinds_fail() {
    for kind in [Kind::Char, Kind::String, Kind::list(Kind::word(8))] {
      assert!(matches!(CW::constant_of(kind, 0), Err(KindError::ConstructionError(_))));
    }
  }

  #[test]
  fn equality_requires_equal_kinds() {
    assert_ne!(int(Kind::word(8), 1), int(Kind::word(16), 1));
    assert_ne!(int(Kind::word(8), 1), int(Kind::int(8), 1));
    assert!(int(Kind::word(8), 1).same_kind(&int(Kind::word(8), 2)));
    assert!(int(Kind::word(8), 1) < int(Kind::word(8), 2));
  }

  #[test]
  fn truth_values() {
    assert!(cw_true().to_bool().unwrap());
    assert!(!cw_false().to_bool().unwrap());
    assert!(int(Kind::word(8), 4).to_bool().unwrap());
    assert!(CW::from_parts(Kind::Double, CWVal::Double(1.0)).to_bool().is_err());
  }

  #[test]
  fn display() {
    assert_eq!(show_cw(true, &int(Kind::word(16), 10)), "10 :: Word16");
    assert_eq!(show_cw(false, &int(Kind::int(8), -3)), "-3");
    assert_eq!(show_cw(true, &cw_true()), "True :: Bool");
    assert_eq!(cw_false().to_string(), "False");
    assert_eq!(show_cw(true, &CW::constant_of(Kind::Integer, 42).unwrap()), "42 :: Integer");
    assert_eq!(show_cw(true, &CW::constant_of(Kind::Real, 2).unwrap()), "2.0 :: Real");
    assert_eq!(CW::from_parts(Kind::Double, CWVal::Double(f64::NAN)).to_string(), "NaN");
    assert_eq!(CW::from_parts(Kind::Float, CWVal::Float(f32::NEG_INFINITY)).to_string(), "-Infinity");
    assert_eq!(CW::from_parts(Kind::Float, CWVal::Float(1.5)).to_string(), "1.5");
    assert_eq!(CW::from_parts(Kind::Float, CWVal::Float(0.1)).to_string(), "0.1");
    assert_eq!(CW::from_parts(Kind::Double, CWVal::Double(-0.0)).to_string(), "-0.0");
    assert_eq!(CW::from_parts(Kind::Char, CWVal::Char('a')).to_string(), "'a'");
    assert_eq!(show_cw(true, &CW::from_parts(Kind::String, CWVal::String("hi".to_string()))), "\"hi\" :: String");
  }

  #[test]
  fn lists_render_elements_at_their_kind() {
    let bools = CW::from_parts(
      Kind::list(Kind::Bool),
      CWVal::List(vec![CWVal::Integer(BigInt::from(1)), CWVal::Integer(BigInt::from(0))])
    );
    assert_eq!(show_cw(true, &bools), "[True, False] :: [Bool]");

    let empty = CW::from_parts(Kind::list(Kind::word(8)), CWVal::List(vec![]));
    assert_eq!(show_cw(true, &empty), "[] :: [Word8]");
  }
}
