/*!

The payload of a concrete word: one constant per family of kinds.

## Equality and Ordering

`CWVal`s are used as canonical lookup keys (model values, memo tables), so their `Eq` must be an equivalence relation
and their `Ord` a total order. Plain IEEE comparison gives neither, so floats are compared as *objects*:

 - every NaN equals every other NaN, and sorts below all non-NaN values;
 - `-0.0` and `+0.0` are different, with `-0.0 < +0.0`;
 - everything else compares numerically.

Reals compare structurally (see [`AlgReal`]). Values of different variants, which well-typed code never compares,
fall back to the fixed variant rank of [`CWVal::rank`].

*/

use std::{
  cmp::Ordering,
  hash::{Hash, Hasher}
};

use num_bigint::BigInt;

use crate::core::concrete::AlgReal;

/// A constant.
#[derive(Clone, Debug)]
pub enum CWVal {
  AlgReal(AlgReal),
  /// The payload of `Bool`, bit-vector, and unbounded-integer kinds.
  Integer(BigInt),
  Float(f32),
  Double(f64),
  Char(char),
  String(String),
  List(Vec<CWVal>),
  /// A value of a user sort: its constructor index for enumerations, and its printed form.
  UserSort(Option<usize>, String),
}

impl CWVal {
  /// The position of the variant in the cross-variant fallback order.
  pub fn rank(&self) -> u8 {
    match self {
      CWVal::AlgReal(_)     => 0,
      CWVal::Integer(_)     => 1,
      CWVal::Float(_)       => 2,
      CWVal::Double(_)      => 3,
      CWVal::Char(_)        => 4,
      CWVal::String(_)      => 5,
      CWVal::List(_)        => 6,
      CWVal::UserSort(_, _) => 7,
    }
  }

  /// Human-readable variant name, for error messages.
  pub(crate) fn variant_name(&self) -> &'static str {
    match self {
      CWVal::AlgReal(_)     => "real",
      CWVal::Integer(_)     => "integer",
      CWVal::Float(_)       => "float",
      CWVal::Double(_)      => "double",
      CWVal::Char(_)        => "char",
      CWVal::String(_)      => "string",
      CWVal::List(_)        => "list",
      CWVal::UserSort(_, _) => "user sort",
    }
  }
}

/// Object comparison of two floats: all NaNs are equal and least, and signed zeros are distinct.
macro_rules! object_compare {
  ($name:ident, $float:ty) => {
    pub(crate) fn $name(a: $float, b: $float) -> Ordering {
      match (a.is_nan(), b.is_nan()) {
        (true, true)   => Ordering::Equal,
        (true, false)  => Ordering::Less,
        (false, true)  => Ordering::Greater,
        // For non-NaN values `total_cmp` is numeric order with `-0.0 < +0.0`.
        (false, false) => a.total_cmp(&b),
      }
    }
  };
}

object_compare!(compare_f32_object, f32);
object_compare!(compare_f64_object, f64);

impl Ord for CWVal {
  fn cmp(&self, other: &Self) -> Ordering {
    match (self, other) {
      (CWVal::AlgReal(a),        CWVal::AlgReal(b))        => a.cmp(b),
      (CWVal::Integer(a),        CWVal::Integer(b))        => a.cmp(b),
      (CWVal::Float(a),          CWVal::Float(b))          => compare_f32_object(*a, *b),
      (CWVal::Double(a),         CWVal::Double(b))         => compare_f64_object(*a, *b),
      (CWVal::Char(a),           CWVal::Char(b))           => a.cmp(b),
      (CWVal::String(a),         CWVal::String(b))         => a.cmp(b),
      (CWVal::List(a),           CWVal::List(b))           => a.cmp(b),
      (CWVal::UserSort(ai, an),  CWVal::UserSort(bi, bn))  => (ai, an).cmp(&(bi, bn)),
      (a, b)                                               => a.rank().cmp(&b.rank()),
    }
  }
}

impl PartialOrd for CWVal {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl PartialEq for CWVal {
  fn eq(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Equal
  }
}

impl Eq for CWVal {}

impl Hash for CWVal {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.rank().hash(state);
    match self {
      CWVal::AlgReal(value)        => value.hash(state),
      CWVal::Integer(value)        => value.hash(state),
      // Equal floats have equal bits except for NaN, which has many encodings.
      CWVal::Float(value)          => if value.is_nan() { u32::MAX.hash(state) } else { value.to_bits().hash(state) },
      CWVal::Double(value)         => if value.is_nan() { u64::MAX.hash(state) } else { value.to_bits().hash(state) },
      CWVal::Char(value)           => value.hash(state),
      CWVal::String(value)         => value.hash(state),
      CWVal::List(values)          => values.hash(state),
      CWVal::UserSort(index, name) => {
        index.hash(state);
        name.hash(state);
      }
    }
  }
}


#[cfg(test)]
mod tests {
  use std::collections::HashSet;
  use super::*;

  #[test]
  fn nan_equals_nan() {
    assert_eq!(CWVal::Double(f64::NAN), CWVal::Double(f64::NAN));
    assert_eq!(CWVal::Double(f64::NAN), CWVal::Double(-f64::NAN));
    assert_eq!(CWVal::Float(f32::NAN), CWVal::Float(f32::from_bits(0x7fc0_0001)));
  }

  #[test]
  fn signed_zeros_differ() {
    assert_ne!(CWVal::Double(0.0), CWVal::Double(-0.0));
    assert_ne!(CWVal::Float(0.0), CWVal::Float(-0.0));
    assert!(CWVal::Double(-0.0) < CWVal::Double(0.0));
  }

  #[test]
  fn float_order() {
    let mut values = vec![
      CWVal::Double(1.0),
      CWVal::Double(f64::INFINITY),
      CWVal::Double(f64::NAN),
      CWVal::Double(-1.0),
      CWVal::Double(0.0),
      CWVal::Double(-0.0),
    ];
    values.sort();
    let expected = [f64::NAN, -1.0, -0.0, 0.0, 1.0, f64::INFINITY];
    for (value, expected) in values.iter().zip(expected) {
      assert_eq!(*value, CWVal::Double(expected));
    }
  }

  #[test]
  fn cross_variant_order_uses_rank() {
    assert!(CWVal::AlgReal(AlgReal::from_integer(BigInt::from(100))) < CWVal::Integer(BigInt::from(-100)));
    assert!(CWVal::Integer(BigInt::from(100)) < CWVal::Float(-1.0));
    assert!(CWVal::List(vec![]) < CWVal::UserSort(None, String::new()));
    assert_ne!(CWVal::Char('a'), CWVal::String("a".to_string()));
  }

  #[test]
  fn hashing_agrees_with_equality() {
    let mut set = HashSet::new();
    set.insert(CWVal::Double(f64::NAN));
    set.insert(CWVal::Double(-f64::NAN));
    set.insert(CWVal::Double(0.0));
    set.insert(CWVal::Double(-0.0));
    set.insert(CWVal::List(vec![CWVal::Integer(BigInt::from(1))]));
    set.insert(CWVal::List(vec![CWVal::Integer(BigInt::from(1))]));
    assert_eq!(set.len(), 4);
  }
}
